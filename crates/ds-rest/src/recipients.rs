//! Recipient types.
//!
//! Every recipient kind shares the fields of [`Recipient`]; the kinds that are
//! reached by email add [`EmailRecipient::email`], and the signing kinds add
//! [`SignerBase`] with their tabs.

use std::collections::BTreeMap;

use docusign_client::types::optional_time;
use docusign_client::{DsBool, DsTime, NameValue, ResponseError};
use serde::{Deserialize, Serialize};

use crate::tabs::Tabs;

/// Recipients of an envelope, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientList {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub agents: Vec<Agent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub carbon_copies: Vec<CarbonCopy>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub certified_deliveries: Vec<CertifiedDelivery>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub editors: Vec<Editor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub in_person_signers: Vec<InPersonSigner>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub intermediaries: Vec<Intermediary>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub signers: Vec<Signer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_count: Option<String>,
}

impl RecipientList {
    /// `(tabLabel, value)` for every value-bearing tab of every signer and
    /// in-person signer.
    pub fn values(&self) -> Vec<NameValue> {
        let in_person = self.in_person_signers.iter().map(|s| &s.signer.tabs);
        let signers = self.signers.iter().map(|s| &s.signer.tabs);
        in_person
            .chain(signers)
            .flatten()
            .flat_map(Tabs::values)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
            && self.carbon_copies.is_empty()
            && self.certified_deliveries.is_empty()
            && self.editors.is_empty()
            && self.in_person_signers.is_empty()
            && self.intermediaries.is_empty()
            && self.signers.is_empty()
    }
}

/// Fields common to all recipient kinds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_code: Option<String>,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub add_access_code_to_email: DsBool,
    /// Set to make the recipient an embedded (captive) signer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_user_id: Option<String>,
    #[serde(
        rename = "embeddedRecipientStartURL",
        skip_serializing_if = "Option::is_none"
    )]
    pub embedded_recipient_start_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_fields: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_notification: Option<EmailNotification>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_documents: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_check_configuration_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_check_information_input: Option<IdCheckInformationInput>,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub inherit_email_notification_configuration: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_authentication: Option<PhoneAuthentication>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recipient_attachments: Vec<RecipientAttachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_captive_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<String>,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub require_id_lookup: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saml_authentication: Option<SamlAuthentication>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_authentication: Option<SmsAuthentication>,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub social_authentications: DsBool,
    /// Recipient status, on responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub template_access_code_required: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub template_locked: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub template_required: DsBool,
    /// Set on a response item when the operation failed for this recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_details: Option<ResponseError>,
}

impl Recipient {
    pub fn new(recipient_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            recipient_id: Some(recipient_id.into()),
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// A recipient reached by email.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmailRecipient {
    #[serde(flatten)]
    pub recipient: Recipient,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl EmailRecipient {
    pub fn new(
        recipient_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            recipient: Recipient::new(recipient_id, name),
            email: Some(email.into()),
        }
    }
}

/// Email subject and body overriding the envelope's for one recipient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailNotification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_language: Option<String>,
}

/// ID check by address, date of birth or SSN.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdCheckInformationInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_information_input: Option<AddressInformationInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob_information_input: Option<DobInformationInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssn4_information_input: Option<Ssn4InformationInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssn9_information_input: Option<Ssn9InformationInput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InformationInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_level_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receive_in_response: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInformationInput {
    #[serde(flatten)]
    pub input: InformationInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_information: Option<AddressInformation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_plus4: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DobInformationInput {
    #[serde(flatten)]
    pub input: InformationInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ssn4InformationInput {
    #[serde(flatten)]
    pub input: InformationInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssn4: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ssn9InformationInput {
    #[serde(flatten)]
    pub input: InformationInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssn9: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneAuthentication {
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub recip_may_provide_number: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub validate_recip_provided_number: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub record_voice_print: DsBool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sender_provided_numbers: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamlAuthentication {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub saml_assertion_attributes: Vec<NameValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsAuthentication {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sender_provided_numbers: Vec<String>,
}

/// A file the sender attaches for one recipient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientAttachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_type: Option<String>,
    /// Base64 content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// Can fill in name and email for later recipients in the routing order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    #[serde(flatten)]
    pub recipient: EmailRecipient,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub can_edit_recipient_emails: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub can_edit_recipient_names: DsBool,
}

/// Receives a copy when the envelope reaches it and when it completes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CarbonCopy {
    #[serde(flatten)]
    pub recipient: EmailRecipient,
}

/// Receives the completed documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertifiedDelivery {
    #[serde(flatten)]
    pub recipient: EmailRecipient,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub can_edit_recipient_emails: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub can_edit_recipient_names: DsBool,
}

/// Can change routing, names, emails and authentication of later recipients.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Editor {
    #[serde(flatten)]
    pub recipient: EmailRecipient,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub can_edit_recipient_emails: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub can_edit_recipient_names: DsBool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intermediary {
    #[serde(flatten)]
    pub recipient: EmailRecipient,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub can_edit_recipient_emails: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub can_edit_recipient_names: DsBool,
}

/// Fields shared by the signing recipient kinds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignerBase {
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub auto_navigation: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub default_recipient: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub sign_in_each_location: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tabs: Option<Tabs>,
}

/// Signs in person in front of a host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InPersonSigner {
    #[serde(flatten)]
    pub recipient: Recipient,
    #[serde(flatten)]
    pub signer: SignerBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,
}

/// Must sign, initial, date or fill in fields on the documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signer {
    #[serde(flatten)]
    pub recipient: EmailRecipient,
    #[serde(flatten)]
    pub signer: SignerBase,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub is_bulk_recipient: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bulk_recipients_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_method: Option<String>,
    #[serde(default, with = "optional_time", skip_serializing_if = "Option::is_none")]
    pub delivered_date_time: Option<DsTime>,
    #[serde(default, with = "optional_time", skip_serializing_if = "Option::is_none")]
    pub signed_date_time: Option<DsTime>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub offline_attributes: BTreeMap<String, String>,
}

impl Signer {
    pub fn new(
        recipient_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            recipient: EmailRecipient::new(recipient_id, name, email),
            ..Self::default()
        }
    }

    pub fn with_tabs(mut self, tabs: Tabs) -> Self {
        self.signer.tabs = Some(tabs);
        self
    }
}

/// Per-recipient outcome of [`recipients_modify`](crate::DocuSignRestClient::recipients_modify).
///
/// An item without `error_details` was updated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientUpdateResult {
    #[serde(default)]
    pub recipient_update_results: Vec<Recipient>,
}

impl RecipientUpdateResult {
    /// Items that carry an error.
    pub fn failures(&self) -> impl Iterator<Item = &Recipient> {
        self.recipient_update_results
            .iter()
            .filter(|r| r.error_details.is_some())
    }
}

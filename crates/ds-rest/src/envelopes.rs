//! Envelope definitions and status.
//!
//! [`Envelope`] is the payload of `envelope_create`. Its `status` decides the
//! outcome: `"sent"` sends immediately, `"created"` saves a draft.

use docusign_client::types::optional_time;
use docusign_client::{DsBool, DsTime, NameValue};
use serde::{Deserialize, Serialize};

use crate::custom_fields::CustomFieldList;
use crate::documents::Document;
use crate::recipients::{EmailNotification, RecipientList};
use crate::tabs::Tabs;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<String>,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub allow_markup: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub allow_reassign: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub allow_recipient_recursion: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub asynchronous: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub authoritative_copy: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub auto_navigation: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_blurb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_subject: Option<String>,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub enable_wet_sign: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub enforce_signer_visibility: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub envelope_id_stamping: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub message_lock: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub recipients_lock: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub use_disclosure: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<CustomFieldList>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<Document>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipients: Option<RecipientList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_notification: Option<EventNotification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_settings: Option<EmailSetting>,
    /// Server template to build the envelope from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub template_roles: Vec<TemplateRole>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub composite_templates: Vec<CompositeTemplate>,
}

/// Reminder and expiration settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub use_account_defaults: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminders: Option<Reminder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expirations: Option<Expiration>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub reminder_enabled: DsBool,
    /// Days before the first reminder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_delay: Option<String>,
    /// Days between reminders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_frequency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expiration {
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub expire_enabled: DsBool,
    /// Days until the envelope expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_after: Option<String>,
    /// Days before expiry to warn the signers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_warn: Option<String>,
}

/// Connect webhook registration for a single envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventNotification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub logging_enabled: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub require_acknowledgment: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub use_soap_interface: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soap_name_space: Option<String>,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub include_certificate_with_soap: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub sign_message_with_x509_cert: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub include_documents: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub include_envelope_void_reason: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub include_time_zone: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub include_sender_account_as_custom_field: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub include_document_fields: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub include_certificate_of_completion: DsBool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub envelope_events: Vec<EnvelopeEvent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recipient_events: Vec<RecipientEvent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeEvent {
    /// `sent`, `delivered`, `completed`, `declined` or `voided`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub envelope_event_status_code: Option<String>,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub include_documents: DsBool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_event_status_code: Option<String>,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub include_documents: DsBool,
}

/// Reply-to and BCC overrides for the envelope email.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailSetting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_email_address_override: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_email_name_override: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bcc_email_addresses: Vec<BccEmail>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BccEmail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc_email_address_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Fills a role of a server template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRole {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_user_id: Option<String>,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub default_recipient: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_person_signer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_notification: Option<EmailNotification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tabs: Option<Tabs>,
}

impl TemplateRole {
    pub fn new(
        role_name: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            role_name: Some(role_name.into()),
            name: Some(name.into()),
            email: Some(email.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<Document>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipients: Option<RecipientList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<CustomFieldList>,
}

/// Server and inline templates overlaid in sequence order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composite_template_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub server_templates: Vec<ServerTemplate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inline_templates: Vec<InlineTemplate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_meta_data_template_sequence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,
}

/// Result of `envelope_create`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeResponse {
    #[serde(default)]
    pub envelope_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, with = "optional_time", skip_serializing_if = "Option::is_none")]
    pub status_date_time: Option<DsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeList {
    #[serde(default)]
    pub envelopes: Vec<EnvelopeUris>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_set_size: Option<String>,
}

/// Status of one envelope with the URIs of its sub-resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeUris {
    #[serde(default)]
    pub envelope_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub allow_reassign: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_uri: Option<String>,
    #[serde(default, with = "optional_time", skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<DsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents_combined_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_blurb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_subject: Option<String>,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub enable_wet_sign: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub envelope_uri: Option<String>,
    #[serde(default, with = "optional_time", skip_serializing_if = "Option::is_none")]
    pub last_modified_date_time: Option<DsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purge_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipients_uri: Option<String>,
    #[serde(default, with = "optional_time", skip_serializing_if = "Option::is_none")]
    pub status_changed_date_time: Option<DsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates_uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEventList {
    #[serde(default)]
    pub audit_events: Vec<AuditEvent>,
}

/// One audit log entry, as name/value fields such as `logTime` and `Action`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEvent {
    #[serde(default)]
    pub event_fields: Vec<NameValue>,
}

impl AuditEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.event_fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}

//! Connect notification document.
//!
//! Element names follow the XML DocuSign posts to a Connect listener. List
//! elements (`RecipientStatuses`, `CustomFields`, ...) are flattened into
//! `Vec`s; a missing or empty list decodes as empty.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use docusign_client::types::optional_time;
use docusign_client::{DsBool, DsTime};
use serde::{Deserialize, Deserializer};

use crate::error::Result;

/// Root element of a Connect notification.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename = "DocuSignEnvelopeInformation")]
pub struct DocuSignEnvelopeInformation {
    #[serde(rename = "EnvelopeStatus", default)]
    pub envelope_status: EnvelopeStatus,
    /// Present only when the Connect configuration includes documents.
    #[serde(rename = "DocumentPDFs", default, deserialize_with = "document_pdfs")]
    pub document_pdfs: Vec<DocumentPdf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EnvelopeStatus {
    #[serde(rename = "TimeGenerated", default, with = "optional_time")]
    pub time_generated: Option<DsTime>,
    #[serde(rename = "EnvelopeID", default)]
    pub envelope_id: String,
    #[serde(rename = "Subject", default)]
    pub subject: String,
    #[serde(rename = "UserName", default)]
    pub user_name: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "Status", default)]
    pub status: String,
    #[serde(rename = "Created", default, with = "optional_time")]
    pub created: Option<DsTime>,
    #[serde(rename = "Sent", default, with = "optional_time")]
    pub sent: Option<DsTime>,
    #[serde(rename = "Delivered", default, with = "optional_time")]
    pub delivered: Option<DsTime>,
    #[serde(rename = "Signed", default, with = "optional_time")]
    pub signed: Option<DsTime>,
    #[serde(rename = "Completed", default, with = "optional_time")]
    pub completed: Option<DsTime>,
    #[serde(rename = "ACStatus", default)]
    pub ac_status: String,
    #[serde(rename = "ACStatusDate", default)]
    pub ac_status_date: String,
    #[serde(rename = "ACHolder", default)]
    pub ac_holder: String,
    #[serde(rename = "ACHolderEmail", default)]
    pub ac_holder_email: String,
    #[serde(rename = "ACHolderLocation", default)]
    pub ac_holder_location: String,
    #[serde(rename = "SigningLocation", default)]
    pub signing_location: String,
    #[serde(rename = "SenderIPAddress", default)]
    pub sender_ip_address: String,
    #[serde(rename = "EnvelopePDFHash", default)]
    pub envelope_pdf_hash: String,
    #[serde(rename = "AutoNavigation", default, deserialize_with = "flag")]
    pub auto_navigation: DsBool,
    #[serde(rename = "EnvelopeIdStamping", default, deserialize_with = "flag")]
    pub envelope_id_stamping: DsBool,
    #[serde(rename = "AuthoritativeCopy", default, deserialize_with = "flag")]
    pub authoritative_copy: DsBool,
    #[serde(rename = "RecipientStatuses", default, deserialize_with = "recipient_statuses")]
    pub recipient_statuses: Vec<RecipientStatus>,
    #[serde(rename = "CustomFields", default, deserialize_with = "custom_fields")]
    pub custom_fields: Vec<CustomField>,
    #[serde(rename = "DocumentStatuses", default, deserialize_with = "document_statuses")]
    pub document_statuses: Vec<DocumentStatus>,
}

impl EnvelopeStatus {
    /// Value of the envelope custom field named `name`.
    pub fn custom_field(&self, name: &str) -> Option<&str> {
        self.custom_fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}

/// A signed document attached to the notification.
#[derive(Clone, Default, PartialEq, Deserialize)]
pub struct DocumentPdf {
    #[serde(rename = "Name", default)]
    pub name: String,
    /// Base64 document content, see [`decode`](Self::decode).
    #[serde(rename = "PDFBytes", default)]
    pub pdf_bytes: String,
}

impl DocumentPdf {
    /// Decoded document bytes.
    pub fn decode(&self) -> Result<Vec<u8>> {
        Ok(STANDARD.decode(strip_whitespace(&self.pdf_bytes))?)
    }
}

impl std::fmt::Debug for DocumentPdf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentPdf")
            .field("name", &self.name)
            .field("pdf_bytes", &format_args!("<{} base64 chars>", self.pdf_bytes.len()))
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RecipientStatus {
    #[serde(rename = "Type", default)]
    pub recipient_type: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "UserName", default)]
    pub user_name: String,
    #[serde(rename = "RoutingOrder", default)]
    pub routing_order: String,
    #[serde(rename = "Sent", default, with = "optional_time")]
    pub sent: Option<DsTime>,
    #[serde(rename = "Delivered", default, with = "optional_time")]
    pub delivered: Option<DsTime>,
    #[serde(rename = "Signed", default, with = "optional_time")]
    pub signed: Option<DsTime>,
    #[serde(rename = "DeclineReason", default)]
    pub decline_reason: String,
    #[serde(rename = "Status", default)]
    pub status: String,
    #[serde(rename = "RecipientIPAddress", default)]
    pub recipient_ip_address: String,
    #[serde(rename = "CustomFields", default, deserialize_with = "custom_fields")]
    pub custom_fields: Vec<CustomField>,
    #[serde(rename = "AccountStatus", default)]
    pub account_status: String,
    #[serde(rename = "RecipientId", default)]
    pub recipient_id: String,
    #[serde(rename = "TabStatuses", default, deserialize_with = "tab_statuses")]
    pub tab_statuses: Vec<TabStatus>,
    /// Submitted form values, from `FormData>xfdf>fields>field`.
    #[serde(rename = "FormData", default, deserialize_with = "form_data")]
    pub form_data: Vec<FormField>,
    #[serde(rename = "RecipientAttachment", default, deserialize_with = "attachments")]
    pub attachments: Vec<Attachment>,
}

impl RecipientStatus {
    /// `(TabLabel, TabValue)` for every tab the recipient filled in.
    pub fn tab_values(&self) -> Vec<(&str, &str)> {
        self.tab_statuses
            .iter()
            .map(|t| (t.tab_label.as_str(), t.tab_value.as_str()))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DocumentStatus {
    #[serde(rename = "ID", default)]
    pub id: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "TemplateName", default)]
    pub template_name: String,
    #[serde(rename = "Sequence", default)]
    pub sequence: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CustomField {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Value", default)]
    pub value: String,
    #[serde(rename = "Show", default, deserialize_with = "flag")]
    pub show: DsBool,
    #[serde(rename = "Required", default, deserialize_with = "flag")]
    pub required: DsBool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TabStatus {
    #[serde(rename = "TabType", default)]
    pub tab_type: String,
    #[serde(rename = "Status", default)]
    pub status: String,
    #[serde(rename = "XPosition", default)]
    pub x_position: String,
    #[serde(rename = "YPosition", default)]
    pub y_position: String,
    #[serde(rename = "TabLabel", default)]
    pub tab_label: String,
    #[serde(rename = "TabName", default)]
    pub tab_name: String,
    #[serde(rename = "TabValue", default)]
    pub tab_value: String,
    #[serde(rename = "DocumentID", default)]
    pub document_id: String,
    #[serde(rename = "PageNumber", default)]
    pub page_number: String,
    #[serde(rename = "OriginalValue", default)]
    pub original_value: String,
    #[serde(rename = "ValidationPattern", default)]
    pub validation_pattern: String,
    #[serde(rename = "ListValues", default)]
    pub list_values: String,
    #[serde(rename = "ListSelectedValue", default)]
    pub list_selected_value: String,
    #[serde(rename = "CustomTabType", default)]
    pub custom_tab_type: String,
}

/// `<field name="..."><value>...</value></field>`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FormField {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Clone, Default, PartialEq, Deserialize)]
pub struct Attachment {
    /// Base64 content.
    #[serde(rename = "Data", default)]
    pub data: String,
    #[serde(rename = "Label", default)]
    pub label: String,
}

impl Attachment {
    pub fn decode(&self) -> Result<Vec<u8>> {
        Ok(STANDARD.decode(strip_whitespace(&self.data))?)
    }
}

impl std::fmt::Debug for Attachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attachment")
            .field("label", &self.label)
            .field("data", &format_args!("<{} base64 chars>", self.data.len()))
            .finish()
    }
}

// Connect wraps base64 payloads across lines.
fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_ascii_whitespace()).collect()
}

/// `true` in any case; everything else, including an empty element, is false.
fn flag<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<DsBool, D::Error> {
    let raw = Option::<String>::deserialize(d)?;
    Ok(DsBool(
        raw.is_some_and(|s| s.trim().eq_ignore_ascii_case("true")),
    ))
}

/// Generates a decoder for `<Outer><Tag/>...</Outer>` into `Vec<Item>`.
macro_rules! xml_list {
    ($name:ident, $tag:literal, $item:ty) => {
        fn $name<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Vec<$item>, D::Error> {
            #[derive(Deserialize)]
            struct Wrapper {
                #[serde(rename = $tag, default)]
                items: Vec<$item>,
            }
            Ok(Option::<Wrapper>::deserialize(d)?
                .map(|w| w.items)
                .unwrap_or_default())
        }
    };
}

xml_list!(document_pdfs, "DocumentPDF", DocumentPdf);
xml_list!(recipient_statuses, "RecipientStatus", RecipientStatus);
xml_list!(custom_fields, "CustomField", CustomField);
xml_list!(document_statuses, "DocumentStatus", DocumentStatus);
xml_list!(tab_statuses, "TabStatus", TabStatus);
xml_list!(attachments, "Attachment", Attachment);
xml_list!(xfdf_fields, "field", FormField);

fn form_data<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Vec<FormField>, D::Error> {
    #[derive(Deserialize)]
    struct FormData {
        #[serde(default)]
        xfdf: Option<Xfdf>,
    }

    #[derive(Deserialize)]
    struct Xfdf {
        #[serde(default, deserialize_with = "xfdf_fields")]
        fields: Vec<FormField>,
    }

    Ok(Option::<FormData>::deserialize(d)?
        .and_then(|f| f.xfdf)
        .map(|x| x.fields)
        .unwrap_or_default())
}

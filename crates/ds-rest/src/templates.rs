//! Server templates.

use docusign_client::types::optional_time;
use docusign_client::{DsBool, DsTime};
use serde::{Deserialize, Serialize};

use crate::custom_fields::CustomFieldList;
use crate::documents::Document;
use crate::envelopes::{EventNotification, Notification};
use crate::recipients::RecipientList;

/// Templates applied to an envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateList {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub templates: Vec<TemplateItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, with = "optional_time", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_name: Option<String>,
}

/// A full template, as returned by `get_template`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(default)]
    pub envelope_template_definition: TemplateDefinition,
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
    pub custom_fields: Option<CustomFieldList>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<Document>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipients: Option<RecipientList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_notification: Option<EventNotification>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub shared: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, with = "optional_time", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<TemplateModifiedBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<TemplateOwner>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateModifiedBy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateOwner {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_status: Option<String>,
}

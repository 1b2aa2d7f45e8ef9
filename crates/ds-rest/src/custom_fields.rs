//! Envelope and account custom fields.

use docusign_client::{DsBool, ResponseError};
use serde::{Deserialize, Serialize};

/// Text and list custom fields.
///
/// Returned items carry `error_details` when the operation failed for that
/// field, for example on a duplicate add.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldList {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub list_custom_fields: Vec<ListCustomField>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub text_custom_fields: Vec<CustomField>,
}

impl CustomFieldList {
    /// Value of the text or list field called `name`.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.text_custom_fields
            .iter()
            .chain(self.list_custom_fields.iter().map(|l| &l.field))
            .find(|f| f.name.as_deref() == Some(name))
            .and_then(|f| f.value.as_deref())
    }

    /// Fields whose operation failed.
    pub fn failures(&self) -> impl Iterator<Item = &CustomField> {
        self.text_custom_fields
            .iter()
            .chain(self.list_custom_fields.iter().map(|l| &l.field))
            .filter(|f| f.error_details.is_some())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomField {
    /// Required to modify or remove a field.
    #[serde(rename = "fieldId", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub required: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub show: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_details: Option<ResponseError>,
}

impl CustomField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
            ..Self::default()
        }
    }
}

/// A custom field restricted to a list of values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCustomField {
    #[serde(flatten)]
    pub field: CustomField,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub list_items: Vec<String>,
}

//! Envelope documents and document fields.

use docusign_client::{DsBool, NameValue, ResponseError};
use serde::{Deserialize, Serialize};

/// A document of an envelope or template.
///
/// The content is either inline (`document_base64`), remote (`remote_url`)
/// or uploaded as a multipart file whose document id matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub transform_pdf_fields: DsBool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub document_fields: Vec<NameValue>,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub encrypted_with_key_manager: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_extension: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_base64: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matchboxes: Vec<Matchbox>,
}

impl Document {
    pub fn new(document_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            document_id: Some(document_id.into()),
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Area used for template matching.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matchbox {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
}

/// Payload for replacing or removing envelope documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentList {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<Document>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFieldList {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub document_fields: Vec<CustomDocumentField>,
}

/// A name/value field stored on a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomDocumentField {
    #[serde(flatten)]
    pub field: NameValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_details: Option<ResponseError>,
}

impl CustomDocumentField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: NameValue::new(name, value),
            error_details: None,
        }
    }
}

/// A document as listed on an envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAsset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `content`, `summary` and similar.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_details: Option<ResponseError>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAssetList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub envelope_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub envelope_documents: Vec<DocumentAsset>,
}

//! Folder listings.

use std::collections::BTreeMap;

use docusign_client::types::optional_time;
use docusign_client::DsTime;
use serde::{Deserialize, Serialize};

use crate::recipients::RecipientList;
use crate::templates::TemplateItem;

/// Folders of the account, with their hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FolderList {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub folders: Vec<Folder>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub folder_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_folder_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_folder_uri: Option<String>,
    /// Child folders.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub folders: Vec<Folder>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub filter: BTreeMap<String, String>,
}

impl Folder {
    /// Depth-first search of this folder and its children by name.
    pub fn find(&self, name: &str) -> Option<&Folder> {
        if self.name.as_deref() == Some(name) {
            return Some(self);
        }
        self.folders.iter().find_map(|f| f.find(name))
    }
}

impl FolderList {
    pub fn find(&self, name: &str) -> Option<&Folder> {
        self.folders.iter().find_map(|f| f.find(name))
    }
}

/// A page of envelopes from a folder or search folder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderEnvList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_set_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_set_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_rows: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub folder_items: Vec<FolderItem>,
}

/// An envelope in a [`FolderEnvList`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, with = "optional_time", skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<DsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub envelope_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub envelope_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    #[serde(default, with = "optional_time", skip_serializing_if = "Option::is_none")]
    pub sent_date_time: Option<DsTime>,
    #[serde(default, with = "optional_time", skip_serializing_if = "Option::is_none")]
    pub completed_date_time: Option<DsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Present when the search asked for recipients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipients: Option<RecipientList>,
}

/// Result of a template search: paging fields plus the templates found.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderTemplateList {
    #[serde(flatten)]
    pub page: FolderEnvList,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub envelope_templates: Vec<TemplateItem>,
}

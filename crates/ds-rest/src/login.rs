//! Login information: the accounts a credential can act on.

use docusign_client::{DsBool, NameValue};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginInfo {
    /// Only present when requested with `LoginInfoParam::INCLUDE_API_PASSWORD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_password: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub login_accounts: Vec<LoginAccount>,
}

impl LoginInfo {
    /// The account flagged as default, or the first one.
    pub fn default_account(&self) -> Option<&LoginAccount> {
        self.login_accounts
            .iter()
            .find(|a| a.is_default.get())
            .or_else(|| self.login_accounts.first())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginAccount {
    #[serde(default)]
    pub account_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id_guid: Option<String>,
    /// Account-scoped base URL, e.g. `https://na2.docusign.net/restapi/v2/accounts/1001`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub is_default: DsBool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub login_account_settings: Vec<NameValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub login_user_settings: Vec<NameValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl LoginAccount {
    /// Host of `base_url`, for binding a credential to the account's site.
    pub fn host(&self) -> Option<&str> {
        let rest = self.base_url.as_deref()?.split_once("://")?.1;
        rest.split('/').next().filter(|h| !h.is_empty())
    }
}

//! Username/password credential using the legacy `X-DocuSign-Authentication` header.

use docusign_client::{Credential, RequestBuilder, ServiceContext};
use quick_xml::escape::escape;
use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind, Result};
use crate::oauth::{OAuthClient, OAuthCredential};

/// Environment variable read by [`PasswordCredential::from_env`].
pub const CONFIG_ENV_VAR: &str = "DOCUSIGN_CONFIG";

/// Integrator key, username and password.
///
/// Each call carries the credentials in an XML header; the on-behalf-of user,
/// when present, is embedded as `<SendOnBehalfOf>`. Can also be exchanged for
/// an [`OAuthCredential`] with [`oauth_credential`](Self::oauth_credential).
///
/// Serializes with the short names used by the `DOCUSIGN_CONFIG` document:
///
/// ```json
/// {"key": "...", "user": "...", "pwd": "...", "behalfOf": "...", "acctId": "...", "host": "..."}
/// ```
#[derive(Clone, Deserialize, Serialize)]
pub struct PasswordCredential {
    #[serde(rename = "key")]
    pub integrator_key: String,
    #[serde(rename = "user")]
    pub user_name: String,
    #[serde(rename = "pwd")]
    password: String,
    #[serde(rename = "behalfOf", default, skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<String>,
    #[serde(rename = "acctId", default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

impl std::fmt::Debug for PasswordCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordCredential")
            .field("integrator_key", &self.integrator_key)
            .field("user_name", &self.user_name)
            .field("password", &"[REDACTED]")
            .field("on_behalf_of", &self.on_behalf_of)
            .field("account_id", &self.account_id)
            .field("host", &self.host)
            .finish()
    }
}

impl PasswordCredential {
    pub fn new(
        integrator_key: impl Into<String>,
        user_name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            integrator_key: integrator_key.into(),
            user_name: user_name.into(),
            password: password.into(),
            on_behalf_of: None,
            account_id: None,
            host: None,
        }
    }

    /// Load from the JSON document in `DOCUSIGN_CONFIG`.
    pub fn from_env() -> Result<Self> {
        Self::from_env_var(CONFIG_ENV_VAR)
    }

    /// Load from the JSON document in the named environment variable.
    pub fn from_env_var(name: &str) -> Result<Self> {
        let raw =
            std::env::var(name).map_err(|_| Error::new(ErrorKind::EnvVar(name.to_string())))?;
        Self::from_json(&raw)
    }

    /// Parse a JSON credential document.
    pub fn from_json(raw: &str) -> Result<Self> {
        let cred: Self = serde_json::from_str(raw)?;
        if cred.integrator_key.is_empty() || cred.user_name.is_empty() {
            return Err(Error::new(ErrorKind::InvalidCredentials(
                "integrator key and user name are required".to_string(),
            )));
        }
        Ok(cred)
    }

    pub fn with_account(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Send every call on behalf of `user` unless the client scope names another.
    pub fn with_on_behalf_of(mut self, user: impl Into<String>) -> Self {
        self.on_behalf_of = Some(user.into());
        self
    }

    /// Exchange the username and password for a bearer token bound to this
    /// credential's account and host.
    pub async fn oauth_credential(&self, ctx: &ServiceContext) -> Result<OAuthCredential> {
        let token = OAuthClient::new(ctx.clone())
            .password_grant(&self.integrator_key, &self.user_name, &self.password)
            .await?;
        Ok(token.into_credential(self.account_id.clone(), self.host.clone()))
    }

    fn header_value(&self, on_behalf_of: Option<&str>) -> String {
        let mut value = String::from("<DocuSignCredentials>");
        if let Some(user) = on_behalf_of {
            value.push_str("<SendOnBehalfOf>");
            value.push_str(&escape(user));
            value.push_str("</SendOnBehalfOf>");
        }
        value.push_str("<Username>");
        value.push_str(&escape(self.user_name.as_str()));
        value.push_str("</Username><Password>");
        value.push_str(&escape(self.password.as_str()));
        value.push_str("</Password><IntegratorKey>");
        value.push_str(&escape(self.integrator_key.as_str()));
        value.push_str("</IntegratorKey></DocuSignCredentials>");
        value
    }
}

impl Credential for PasswordCredential {
    fn authorize(
        &self,
        req: &mut RequestBuilder,
        on_behalf_of: Option<&str>,
    ) -> docusign_client::Result<()> {
        let actor = on_behalf_of
            .or(self.on_behalf_of.as_deref())
            .filter(|u| !u.is_empty());
        req.set_header("X-DocuSign-Authentication", self.header_value(actor));
        req.resolve(self.account_id.as_deref(), self.host.as_deref())?;
        Ok(())
    }
}

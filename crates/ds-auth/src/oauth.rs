//! OAuth bearer tokens: acquisition, revocation and request authorization.

use docusign_client::{
    CancellationToken, Credential, RequestBuilder, ResponseError, ServiceContext,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::error::{Error, ErrorKind, Result};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Form fields and response members that never reach the call logger.
const SECRETS: &[&str] = &["password", "token", "access_token", "refresh_token"];

const REDACTED: &str = "[REDACTED]";

/// Client for DocuSign's `oauth2` endpoints.
///
/// Uses the transport, endpoint and call logger of the given
/// [`ServiceContext`]; the token endpoints live at `{endpoint}oauth2/...`.
#[derive(Debug, Clone)]
pub struct OAuthClient {
    ctx: ServiceContext,
    cancel: Option<CancellationToken>,
}

impl OAuthClient {
    /// Create a new OAuth client.
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx, cancel: None }
    }

    /// Fail calls with [`ErrorKind::Cancelled`] once `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Exchange a username and password for a bearer token.
    ///
    /// Credential parameters are not logged.
    #[instrument(skip(self, password))]
    pub async fn password_grant(
        &self,
        integrator_key: &str,
        username: &str,
        password: &str,
    ) -> Result<TokenResponse> {
        let params = [
            ("grant_type", "password"),
            ("client_id", integrator_key),
            ("username", username),
            ("password", password),
            ("scope", "api"),
        ];

        let body = self.post_form("oauth2/token", &params).await?;
        let token: TokenResponse = serde_json::from_slice(&body)?;
        debug!(token_type = ?token.token_type, "Token acquired");
        Ok(token)
    }

    /// Revoke a bearer token. Later calls with it will fail.
    #[instrument(skip(self, token))]
    pub async fn revoke_token(&self, token: &str) -> Result<()> {
        self.post_form("oauth2/revoke", &[("token", token)]).await?;
        debug!("Token revoked");
        Ok(())
    }

    async fn post_form(&self, path: &str, params: &[(&str, &str)]) -> Result<Vec<u8>> {
        let call = self.send_form(path, params);
        match &self.cancel {
            Some(token) => token.run_until_cancelled(call).await.unwrap_or_else(|| {
                warn!("Token call cancelled");
                Err(Error::new(ErrorKind::Cancelled))
            }),
            None => call.await,
        }
    }

    async fn send_form(&self, path: &str, params: &[(&str, &str)]) -> Result<Vec<u8>> {
        let url = self.ctx.endpoint().join(path).map_err(|e| {
            Error::with_source(ErrorKind::Client(format!("Invalid URL: {e}")), e)
        })?;
        let body = serde_urlencoded::to_string(params)?;

        let logger = self.ctx.logger();
        if let Some(logger) = logger {
            let redacted = serde_urlencoded::to_string(redact_form(params))?;
            logger.log_request(&reqwest::Method::POST, &url, Some(redacted.as_bytes()));
        }

        let mut request = self
            .ctx
            .http_client()
            .post(url.clone())
            .header("Accept", "application/json")
            .header("Content-Type", FORM_CONTENT_TYPE)
            .header("User-Agent", self.ctx.user_agent())
            .body(body);
        if let Some(timeout) = self.ctx.timeout() {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = match response.bytes().await {
            Ok(body) => body.to_vec(),
            Err(e) if status == 200 || status == 201 => return Err(e.into()),
            Err(e) => return Err(ResponseError::unreadable(status, e).into()),
        };
        if let Some(logger) = logger {
            logger.log_response(status, &url, &redact_json(&body));
        }

        if status == 200 || status == 201 {
            return Ok(body);
        }
        Err(ResponseError::from_body(status, &body).into())
    }
}

fn redact_form<'a>(params: &[(&'a str, &'a str)]) -> Vec<(&'a str, &'a str)> {
    params
        .iter()
        .map(|&(name, value)| {
            if SECRETS.contains(&name) {
                (name, REDACTED)
            } else {
                (name, value)
            }
        })
        .collect()
}

/// Mask token members of a JSON response body. Bodies that are not a JSON
/// object are logged as they are.
fn redact_json(body: &[u8]) -> Vec<u8> {
    let Ok(serde_json::Value::Object(mut members)) = serde_json::from_slice(body) else {
        return body.to_vec();
    };
    for name in SECRETS {
        if let Some(value) = members.get_mut(*name) {
            *value = serde_json::Value::String(REDACTED.to_string());
        }
    }
    serde_json::to_vec(&members).unwrap_or_default()
}

/// Token response from the `oauth2/token` endpoint.
///
/// `access_token` is redacted in Debug output.
#[derive(Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("scope", &self.scope)
            .finish()
    }
}

impl TokenResponse {
    /// Bind the token to an account, and optionally a host, so it can
    /// authorize calls.
    pub fn into_credential(self, account_id: Option<String>, host: Option<String>) -> OAuthCredential {
        OAuthCredential {
            access_token: self.access_token,
            token_type: self.token_type,
            scope: self.scope,
            account_id,
            host,
            on_behalf_of: None,
        }
    }
}

/// Bearer token credential.
///
/// Sends `Authorization: <token_type> <token>` (`bearer` when the type is
/// unknown) and, when acting for another user, `X-DocuSign-Act-As-User`.
/// Account-scoped calls go to `accounts/{account_id}/...`, on `host` when
/// one is set.
#[derive(Clone, Deserialize, Serialize)]
pub struct OAuthCredential {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// User every call acts as unless the client scope names another.
    #[serde(default, rename = "onBehalf", skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<String>,
}

impl std::fmt::Debug for OAuthCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthCredential")
            .field("access_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("account_id", &self.account_id)
            .field("host", &self.host)
            .field("on_behalf_of", &self.on_behalf_of)
            .finish_non_exhaustive()
    }
}

impl OAuthCredential {
    /// Credential for an existing access token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: None,
            scope: None,
            account_id: None,
            host: None,
            on_behalf_of: None,
        }
    }

    /// Load from `DOCUSIGN_TOKEN`, `DOCUSIGN_ACCOUNT_ID` and optionally
    /// `DOCUSIGN_HOST`.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("DOCUSIGN_TOKEN")
            .map_err(|_| Error::new(ErrorKind::EnvVar("DOCUSIGN_TOKEN".to_string())))?;
        let account_id = std::env::var("DOCUSIGN_ACCOUNT_ID")
            .map_err(|_| Error::new(ErrorKind::EnvVar("DOCUSIGN_ACCOUNT_ID".to_string())))?;
        let host = std::env::var("DOCUSIGN_HOST").ok();

        Ok(Self::new(token).with_account(account_id, host))
    }

    /// Bind to an account and optional host.
    pub fn with_account(mut self, account_id: impl Into<String>, host: Option<String>) -> Self {
        self.set_account(account_id, host);
        self
    }

    /// Rebind to an account and optional host.
    pub fn set_account(&mut self, account_id: impl Into<String>, host: Option<String>) {
        self.account_id = Some(account_id.into());
        self.host = host.filter(|h| !h.is_empty());
    }

    /// Act as `user` on every call.
    pub fn with_on_behalf_of(mut self, user: impl Into<String>) -> Self {
        self.on_behalf_of = Some(user.into());
        self
    }

    /// Revoke this token. The credential is unusable afterwards.
    pub async fn revoke(&self, ctx: &ServiceContext) -> Result<()> {
        OAuthClient::new(ctx.clone())
            .revoke_token(&self.access_token)
            .await
    }
}

impl Credential for OAuthCredential {
    fn authorize(
        &self,
        req: &mut RequestBuilder,
        on_behalf_of: Option<&str>,
    ) -> docusign_client::Result<()> {
        let token_type = self
            .token_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or("bearer");
        req.set_header("Authorization", format!("{token_type} {}", self.access_token));

        if let Some(user) = on_behalf_of
            .or(self.on_behalf_of.as_deref())
            .filter(|u| !u.is_empty())
        {
            req.set_header("X-DocuSign-Act-As-User", user);
        }

        req.resolve(self.account_id.as_deref(), self.host.as_deref())?;
        Ok(())
    }
}

//! # ds-auth
//!
//! DocuSign authentication for the eSignature v2 REST API.
//!
//! ## Security
//!
//! - Tokens and passwords are redacted in Debug output
//! - Tracing skips credential parameters
//! - HTTP error messages that could echo a form body are replaced
//! - Token calls reach the call logger with passwords and tokens masked
//!
//! ## Supported Authentication Methods
//!
//! - **OAuth bearer token** ([`OAuthCredential`]): `Authorization` header,
//!   `X-DocuSign-Act-As-User` when acting for another user
//! - **Legacy username/password** ([`PasswordCredential`]):
//!   `X-DocuSign-Authentication` XML header with an embedded
//!   `<SendOnBehalfOf>` element
//! - **Password grant**: exchange a [`PasswordCredential`] for a bearer token,
//!   and revoke it when done
//!
//! ## Example
//!
//! ```rust,ignore
//! use docusign_auth::PasswordCredential;
//! use docusign_client::ServiceContext;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), docusign_auth::Error> {
//!     let ctx = ServiceContext::demo()?;
//!
//!     // {"key": "...", "user": "...", "pwd": "...", "acctId": "..."}
//!     let password = PasswordCredential::from_env()?;
//!
//!     let token = password.oauth_credential(&ctx).await?;
//!     // ... use `token` with a DocuSignRestClient ...
//!     token.revoke(&ctx).await?;
//!
//!     Ok(())
//! }
//! ```

mod error;
mod oauth;
mod password;

pub use error::{Error, ErrorKind, Result};
pub use oauth::{OAuthClient, OAuthCredential, TokenResponse};
pub use password::{PasswordCredential, CONFIG_ENV_VAR};

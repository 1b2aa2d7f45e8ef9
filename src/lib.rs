//! # docusign-api
//!
//! A typed client for the DocuSign eSignature v2 REST API.
//!
//! ## Security
//!
//! - Tokens and passwords are redacted in Debug output
//! - Tracing skips credential parameters
//! - The legacy XML authentication header never reaches the logs
//!
//! ## Crates
//!
//! - **docusign-client** - Call executor, multipart uploads, cancellation, vendor decoders
//! - **docusign-auth** - Bearer tokens, legacy password header, token grant and revoke
//! - **docusign-rest** - One method per eSignature operation, typed request and response models
//! - **docusign-connect** - Decoder for Connect XML envelope notifications
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use docusign_api::{DocuSignRestClient, PasswordCredential, ServiceContext};
//! use docusign_api::rest::params::SearchFolder;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ctx = ServiceContext::demo()?;
//!
//!     // {"key": "...", "user": "...", "pwd": "...", "acctId": "..."}
//!     let password = PasswordCredential::from_env()?;
//!     let client = DocuSignRestClient::new(password, ctx);
//!
//!     let completed = client
//!         .envelope_search(SearchFolder::Completed, &[])
//!         .await?;
//!
//!     for item in &completed.folder_items {
//!         println!("{:?} {:?}", item.envelope_id, item.subject);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "auth")]
pub use docusign_auth as auth;
#[cfg(feature = "client")]
pub use docusign_client as client;
#[cfg(feature = "connect")]
pub use docusign_connect as connect;
#[cfg(feature = "rest")]
pub use docusign_rest as rest;

// Re-export commonly used types at the top level
#[cfg(feature = "auth")]
pub use docusign_auth::{OAuthCredential, PasswordCredential};
#[cfg(feature = "client")]
pub use docusign_client::{
    CancellationToken, Credential, DocuSignClient, ServiceContext, UploadFile,
};
#[cfg(feature = "connect")]
pub use docusign_connect::DocuSignEnvelopeInformation;
#[cfg(feature = "rest")]
pub use docusign_rest::DocuSignRestClient;

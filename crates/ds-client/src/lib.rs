//! # ds-client
//!
//! Core call executor for the DocuSign eSignature v2 REST API.
//!
//! This crate provides:
//! - A [`ServiceContext`] holding the HTTP transport, endpoint and logger
//! - The [`Credential`] trait implemented by the auth crate
//! - [`Call`] values and the [`DocuSignClient`] executor
//! - Streaming multipart uploads ([`UploadFile`])
//! - Cancellation and deadlines per client scope
//! - Tolerant decoders for DocuSign booleans and timestamps
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (ds-rest endpoint wrappers)                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  Call
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    DocuSignClient                           │
//! │  - Body selection: none / JSON / multipart                  │
//! │  - Credential::authorize resolves headers and URL           │
//! │  - Races dispatch against cancellation and deadline         │
//! │  - 200/201 decode, anything else -> ResponseError           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    ServiceContext                           │
//! │  - reqwest::Client, endpoint, user agent, CallLogger        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use docusign_client::{Call, DocuSignClient, ServiceContext};
//! use docusign_auth::OAuthCredential;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), docusign_client::Error> {
//!     let cred = OAuthCredential::new("token").with_account("1234", None);
//!     let client = DocuSignClient::new(cred, ServiceContext::demo()?);
//!
//!     let folders: serde_json::Value = client
//!         .execute_json(Call::get("folders"))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod call;
mod client;
mod config;
mod credential;
mod error;
mod logger;
mod multipart;
mod request;
mod response;
pub mod types;

pub use call::Call;
pub use client::DocuSignClient;
pub use config::{ServiceContext, ServiceContextBuilder};
pub use credential::Credential;
pub use error::{Error, ErrorKind, Result};
pub use logger::{CallLogger, TracingLogger};
pub use multipart::UploadFile;
pub use request::{RequestBuilder, RequestMethod};
pub use response::{Response, ResponseError};
pub use types::{DsBool, DsTime, NameValue};

pub use tokio_util::sync::CancellationToken;

/// Production endpoint.
pub const LIVE_ENDPOINT: &str = "https://www.docusign.net/restapi/v2/";

/// Demo (sandbox) endpoint.
pub const DEMO_ENDPOINT: &str = "https://demo.docusign.net/restapi/v2/";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("docusign-api/", env!("CARGO_PKG_VERSION"));

//! DocuSign REST API client.
//!
//! This client wraps `DocuSignClient` from `ds-client` and provides one typed
//! method per eSignature v2 operation.

use std::borrow::Cow;
use std::time::Instant;

use docusign_client::{Call, CancellationToken, Credential, DocuSignClient, ServiceContext};

use crate::params::QueryParam;

mod custom_fields;
mod documents;
mod envelopes;
mod folders;
mod login;
mod recipients;
mod templates;
mod views;

/// DocuSign eSignature REST API client.
///
/// Provides typed methods for:
/// - Folders and envelope searches
/// - Envelope creation, status and audit events
/// - Documents, document fields and PDF downloads
/// - Envelope and account custom fields
/// - Recipients and their tabs
/// - Templates
/// - Embedded signing, sending, editing and correction views
/// - Login information
///
/// # Example
///
/// ```rust,ignore
/// use docusign_auth::OAuthCredential;
/// use docusign_client::ServiceContext;
/// use docusign_rest::DocuSignRestClient;
///
/// let cred = OAuthCredential::new("access_token").with_account("1001", None);
/// let client = DocuSignRestClient::new(cred, ServiceContext::demo()?);
///
/// let folders = client.folder_list(&[]).await?;
/// let status = client.envelope_status("a0b1c2d3").await?;
/// ```
#[derive(Debug, Clone)]
pub struct DocuSignRestClient {
    client: DocuSignClient,
}

impl DocuSignRestClient {
    /// Create a new REST client.
    pub fn new(credential: impl Credential + 'static, ctx: ServiceContext) -> Self {
        Self {
            client: DocuSignClient::new(credential, ctx),
        }
    }

    /// Create a REST client from an existing DocuSignClient.
    pub fn from_client(client: DocuSignClient) -> Self {
        Self { client }
    }

    /// Get the underlying DocuSignClient.
    pub fn inner(&self) -> &DocuSignClient {
        &self.client
    }

    /// A copy whose calls act as `user`.
    pub fn on_behalf_of(&self, user: impl Into<String>) -> Self {
        Self::from_client(self.client.on_behalf_of(user))
    }

    /// A copy whose calls stop when `token` is cancelled.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self::from_client(self.client.with_cancellation(token))
    }

    /// A copy whose calls fail once `deadline` passes.
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        Self::from_client(self.client.with_deadline(deadline))
    }
}

/// Add typed query options to a call.
fn with_params<P: QueryParam>(call: Call, params: &[P]) -> Call {
    call.query_pairs(params.iter().map(|p| (p.name(), p.value())))
}

/// Percent-encode a path segment such as an envelope id.
fn seg(s: &str) -> Cow<'_, str> {
    urlencoding::encode(s)
}

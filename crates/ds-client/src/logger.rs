//! Request/response logging hook.

use std::fmt::Debug;

use tracing::debug;
use url::Url;

/// Receives the raw bytes of every call for diagnostics.
///
/// Installed on a [`ServiceContext`](crate::ServiceContext). `payload` is the
/// JSON request body (pretty-printed when the context asks for it); multipart
/// uploads are logged without a payload. `body` is the raw response body of
/// decoded calls and of vendor errors; raw downloads are not logged.
pub trait CallLogger: Send + Sync + Debug {
    fn log_request(&self, method: &reqwest::Method, url: &Url, payload: Option<&[u8]>);

    fn log_response(&self, status: u16, url: &Url, body: &[u8]);
}

/// Forwards call traffic to `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl CallLogger for TracingLogger {
    fn log_request(&self, method: &reqwest::Method, url: &Url, payload: Option<&[u8]>) {
        let payload = payload.map(String::from_utf8_lossy).unwrap_or_default();
        debug!(target: "docusign::wire", %method, %url, %payload, "request");
    }

    fn log_response(&self, status: u16, url: &Url, body: &[u8]) {
        let body = String::from_utf8_lossy(body);
        debug!(target: "docusign::wire", status, %url, %body, "response");
    }
}

//! Service context: transport, endpoint and logging shared by every call.

use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::error::{Error, ErrorKind, Result};
use crate::logger::CallLogger;

/// Configuration threaded through every call.
///
/// Immutable once built. Share it between clients by cloning; the
/// underlying `reqwest::Client` and logger are reference counted.
#[derive(Debug, Clone)]
pub struct ServiceContext {
    http: reqwest::Client,
    endpoint: Url,
    user_agent: String,
    timeout: Option<Duration>,
    logger: Option<Arc<dyn CallLogger>>,
    pretty_json: bool,
}

impl ServiceContext {
    /// Create a new context builder.
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::default()
    }

    /// Context against the production endpoint with default settings.
    pub fn live() -> Result<Self> {
        Self::builder().build()
    }

    /// Context against the demo (sandbox) endpoint with default settings.
    pub fn demo() -> Result<Self> {
        Self::builder().demo().build()
    }

    /// The HTTP transport.
    pub fn http_client(&self) -> &reqwest::Client {
        &self.http
    }

    /// Base endpoint, always ending in `/`.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Per-call deadline applied when the caller sets none.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn logger(&self) -> Option<&dyn CallLogger> {
        self.logger.as_deref()
    }

    /// Whether logged request payloads are pretty-printed.
    pub fn pretty_json(&self) -> bool {
        self.pretty_json
    }
}

/// Builder for ServiceContext.
#[derive(Debug)]
pub struct ServiceContextBuilder {
    http: Option<reqwest::Client>,
    endpoint: String,
    user_agent: String,
    timeout: Option<Duration>,
    logger: Option<Arc<dyn CallLogger>>,
    pretty_json: bool,
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self {
            http: None,
            endpoint: crate::LIVE_ENDPOINT.to_string(),
            user_agent: crate::USER_AGENT.to_string(),
            timeout: Some(Duration::from_secs(30)),
            logger: None,
            pretty_json: false,
        }
    }
}

impl ServiceContextBuilder {
    /// Use a caller-supplied HTTP client instead of building one.
    ///
    /// The user agent set on this builder is still sent on every call.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http = Some(client);
        self
    }

    /// Target the production endpoint.
    pub fn live(mut self) -> Self {
        self.endpoint = crate::LIVE_ENDPOINT.to_string();
        self
    }

    /// Target the demo endpoint.
    pub fn demo(mut self) -> Self {
        self.endpoint = crate::DEMO_ENDPOINT.to_string();
        self
    }

    /// Target an arbitrary endpoint, e.g. a mock server.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set custom User-Agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the default per-call deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Calls run until the transport or the caller gives up.
    pub fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    /// Install a request/response logger.
    pub fn with_logger(mut self, logger: Arc<dyn CallLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Pretty-print JSON payloads handed to the logger.
    pub fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty_json = pretty;
        self
    }

    /// Build the service context.
    pub fn build(self) -> Result<ServiceContext> {
        let mut endpoint = Url::parse(&self.endpoint)?;
        if endpoint.cannot_be_a_base() {
            return Err(Error::new(ErrorKind::InvalidUrl(format!(
                "endpoint cannot be a base URL: {}",
                self.endpoint
            ))));
        }
        if !endpoint.path().ends_with('/') {
            let path = format!("{}/", endpoint.path());
            endpoint.set_path(&path);
        }

        let http = match self.http {
            Some(http) => http,
            None => reqwest::Client::builder()
                .user_agent(&self.user_agent)
                .gzip(true)
                .deflate(true)
                .build()
                .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?,
        };

        Ok(ServiceContext {
            http,
            endpoint,
            user_agent: self.user_agent,
            timeout: self.timeout,
            logger: self.logger,
            pretty_json: self.pretty_json,
        })
    }
}

//! Call executor.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::call::Call;
use crate::config::ServiceContext;
use crate::credential::Credential;
use crate::error::{Error, ErrorKind, Result};
use crate::multipart::{BodyFailure, Multipart};
use crate::request::RequestBuilder;
use crate::response::{is_success, Response, ResponseError};

/// Executes [`Call`]s against DocuSign.
///
/// Holds the service context, the credential and the call scope: an optional
/// on-behalf-of user, cancellation token and deadline. Scoping methods return
/// a new client and leave the original untouched; clones are cheap.
#[derive(Debug, Clone)]
pub struct DocuSignClient {
    ctx: Arc<ServiceContext>,
    credential: Arc<dyn Credential>,
    on_behalf_of: Option<String>,
    cancel: Option<CancellationToken>,
    deadline: Option<Instant>,
}

impl DocuSignClient {
    /// Create a new client.
    pub fn new(credential: impl Credential + 'static, ctx: ServiceContext) -> Self {
        Self::from_parts(Arc::new(credential), Arc::new(ctx))
    }

    /// Create a client from shared parts.
    pub fn from_parts(credential: Arc<dyn Credential>, ctx: Arc<ServiceContext>) -> Self {
        Self {
            ctx,
            credential,
            on_behalf_of: None,
            cancel: None,
            deadline: None,
        }
    }

    pub fn context(&self) -> &ServiceContext {
        &self.ctx
    }

    pub fn credential(&self) -> &Arc<dyn Credential> {
        &self.credential
    }

    /// The user calls act as, if any.
    pub fn acting_as(&self) -> Option<&str> {
        self.on_behalf_of.as_deref()
    }

    /// A client whose calls act as `user`.
    pub fn on_behalf_of(&self, user: impl Into<String>) -> Self {
        Self {
            on_behalf_of: Some(user.into()).filter(|u| !u.is_empty()),
            ..self.clone()
        }
    }

    /// A client whose calls fail with [`ErrorKind::Cancelled`] once `token`
    /// is cancelled.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            cancel: Some(token),
            ..self.clone()
        }
    }

    /// A client whose calls fail with [`ErrorKind::DeadlineExceeded`] after
    /// `deadline`.
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            ..self.clone()
        }
    }

    /// Shorthand for a deadline `timeout` from now.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Execute a call and decode its JSON result.
    #[instrument(skip(self, call), fields(method = ?call.method, path = %call.path))]
    pub async fn execute_json<T: DeserializeOwned>(&self, call: Call) -> Result<T> {
        self.run(async {
            let (request, url, upload) = self.prepare(call, false)?;
            let response = self.dispatch(request, &url, upload).await?;
            let status = response.status().as_u16();
            let body = response.bytes().await?;
            if let Some(logger) = self.ctx.logger() {
                logger.log_response(status, &url, &body);
            }
            serde_json::from_slice(&body).map_err(Into::into)
        })
        .await
    }

    /// Execute a call whose result is not needed.
    #[instrument(skip(self, call), fields(method = ?call.method, path = %call.path))]
    pub async fn execute_empty(&self, call: Call) -> Result<()> {
        self.run(async {
            let (request, url, upload) = self.prepare(call, false)?;
            self.dispatch(request, &url, upload).await?;
            Ok(())
        })
        .await
    }

    /// Execute a call and hand back the unread response.
    ///
    /// No `Accept` header is implied; set one on the call when needed.
    /// Cancellation and the deadline cover the call until the response
    /// headers arrive. Reading the body is up to the caller.
    #[instrument(skip(self, call), fields(method = ?call.method, path = %call.path))]
    pub async fn execute_raw(&self, call: Call) -> Result<Response> {
        self.run(async {
            let (request, url, upload) = self.prepare(call, true)?;
            self.dispatch(request, &url, upload)
                .await
                .map(Response::new)
        })
        .await
    }

    /// Race `fut` against the cancellation token and the deadline.
    ///
    /// Losing futures are dropped, which aborts the in-flight request and
    /// stops any multipart writer.
    async fn run<T>(&self, fut: impl Future<Output = Result<T>>) -> Result<T> {
        let deadline = self.effective_deadline();

        let cancelled = async {
            match &self.cancel {
                Some(token) => token.cancelled().await,
                None => std::future::pending().await,
            }
        };
        let expired = async {
            match deadline {
                Some(at) => tokio::time::sleep_until(tokio::time::Instant::from_std(at)).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            biased;
            _ = cancelled => {
                warn!("Call cancelled");
                Err(Error::new(ErrorKind::Cancelled))
            }
            _ = expired => {
                warn!("Call deadline exceeded");
                Err(Error::new(ErrorKind::DeadlineExceeded))
            }
            result = fut => result,
        }
    }

    fn effective_deadline(&self) -> Option<Instant> {
        let from_timeout = self.ctx.timeout().map(|t| Instant::now() + t);
        match (self.deadline, from_timeout) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Build the HTTP request: headers, authorization, URL and body.
    ///
    /// Multipart calls also return the slot their writer reports a read
    /// failure in.
    fn prepare(
        &self,
        call: Call,
        raw: bool,
    ) -> Result<(reqwest::RequestBuilder, Url, Option<BodyFailure>)> {
        let Call {
            method,
            path,
            query,
            payload,
            files,
            accept,
        } = call;
        let multipart = !files.is_empty();

        let mut req = RequestBuilder::new(method, self.ctx.endpoint().clone(), path);
        req.query_params = query;
        req.set_header("User-Agent", self.ctx.user_agent());
        match accept {
            Some(accept) => {
                req.set_header("Accept", accept);
            }
            None if !raw && !multipart => {
                req.set_header("Accept", "application/json");
            }
            None => {}
        }

        self.credential
            .authorize(&mut req, self.on_behalf_of.as_deref())?;
        let url = match req.url.take() {
            Some(url) => url,
            None => req.resolve(None, None)?.clone(),
        };

        let encoded = payload.as_ref().map(serde_json::to_vec).transpose()?;

        if let Some(logger) = self.ctx.logger() {
            let logged = match (&payload, self.ctx.pretty_json()) {
                (Some(value), true) => Some(serde_json::to_vec_pretty(value)?),
                _ => encoded.clone(),
            };
            logger.log_request(&method.to_reqwest(), &url, logged.as_deref());
        }

        let mut request = self
            .ctx
            .http_client()
            .request(method.to_reqwest(), url.clone());
        for (name, value) in &req.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let mut upload = None;
        if multipart {
            let body = Multipart::spawn(encoded, files);
            upload = Some(body.failure());
            request = request
                .header(CONTENT_TYPE, body.content_type())
                .body(body.into_body());
        } else if let Some(json) = encoded {
            request = request.header(CONTENT_TYPE, "application/json").body(json);
        }

        debug!(url = %url, multipart, "Sending request");
        Ok((request, url, upload))
    }

    /// Send the request and classify the status.
    ///
    /// A transport failure on an upload whose writer recorded a read error
    /// is reported as that error.
    async fn dispatch(
        &self,
        request: reqwest::RequestBuilder,
        url: &Url,
        upload: Option<BodyFailure>,
    ) -> Result<reqwest::Response> {
        let response = request.send().await.map_err(|e| {
            match upload.as_ref().and_then(BodyFailure::take) {
                Some(read) => {
                    warn!(error = %read, "Upload body failed");
                    Error::with_source(ErrorKind::Multipart(read.to_string()), read)
                }
                None => Error::from(e),
            }
        })?;

        let status = response.status().as_u16();
        let content_length = response.content_length();
        if is_success(status) {
            debug!(status, content_length, "Response received");
            return Ok(response);
        }

        info!(status, content_length, "Non-success response");
        let err = match response.bytes().await {
            Ok(body) => {
                if let Some(logger) = self.ctx.logger() {
                    logger.log_response(status, url, &body);
                }
                ResponseError::from_body(status, &body)
            }
            Err(e) => ResponseError::unreadable(status, e),
        };
        Err(err.into())
    }
}

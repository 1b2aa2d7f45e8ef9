//! Description of a single API invocation.

use serde::Serialize;

use crate::error::Result;
use crate::multipart::UploadFile;
use crate::request::RequestMethod;

/// One API call: method, path, query, optional JSON payload and optional
/// file uploads.
///
/// The path is relative to the account (`envelopes/{id}`) unless it starts
/// with `/`, in which case it is relative to the endpoint root
/// (`/login_information`). Whether the result is decoded or handed back raw
/// is chosen by the executor method the call is passed to.
#[derive(Debug)]
pub struct Call {
    pub(crate) method: RequestMethod,
    pub(crate) path: String,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) payload: Option<serde_json::Value>,
    pub(crate) files: Vec<UploadFile>,
    pub(crate) accept: Option<String>,
}

impl Call {
    pub fn new(method: RequestMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            payload: None,
            files: Vec::new(),
            accept: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(RequestMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(RequestMethod::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(RequestMethod::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(RequestMethod::Delete, path)
    }

    /// Add a query parameter. Repeated names are all sent.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Add several query parameters.
    pub fn query_pairs<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Set the JSON payload.
    pub fn json<T: Serialize + ?Sized>(mut self, payload: &T) -> Result<Self> {
        self.payload = Some(serde_json::to_value(payload)?);
        Ok(self)
    }

    /// Attach a file. Any file makes the call a multipart upload.
    pub fn file(mut self, file: UploadFile) -> Self {
        self.files.push(file);
        self
    }

    /// Attach several files, sent in iteration order.
    pub fn files(mut self, files: impl IntoIterator<Item = UploadFile>) -> Self {
        self.files.extend(files);
        self
    }

    /// Send an explicit `Accept` header, e.g. `application/pdf`.
    pub fn accept(mut self, media_type: impl Into<String>) -> Self {
        self.accept = Some(media_type.into());
        self
    }

    pub fn method(&self) -> RequestMethod {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters in the order they were added.
    pub fn query_params(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn is_multipart(&self) -> bool {
        !self.files.is_empty()
    }
}

//! Response classification and the vendor error shape.

use std::fmt;

use bytes::Bytes;
use futures::{Stream, TryStreamExt};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::{Error, Result};

/// Error returned by DocuSign for a non-success status.
///
/// DocuSign reports failures in two shapes: `{"errorCode", "message"}` from
/// the REST endpoints and `{"error", "error_description"}` from the OAuth
/// endpoints. Both decode into the same value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResponseError {
    /// HTTP status code.
    #[serde(skip)]
    pub status: u16,
    /// Vendor error code, e.g. `INVALID_REQUEST_PARAMETER`.
    #[serde(rename = "errorCode", skip_serializing_if = "String::is_empty")]
    pub code: String,
    /// Human readable description.
    #[serde(rename = "message", skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl ResponseError {
    /// Build the error for `status` from a raw response body.
    ///
    /// An empty body yields the status alone. A body that is not a valid
    /// error document keeps the status and carries the decode failure as
    /// the description.
    pub fn from_body(status: u16, body: &[u8]) -> Self {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Self {
                status,
                ..Self::default()
            };
        }

        match serde_json::from_slice::<ResponseError>(body) {
            Ok(err) => Self { status, ..err },
            Err(e) => Self {
                status,
                code: String::new(),
                description: e.to_string(),
            },
        }
    }

    /// The error for `status` when its body could not be read.
    pub fn unreadable(status: u16, err: impl fmt::Display) -> Self {
        Self {
            status,
            code: String::new(),
            description: err.to_string(),
        }
    }
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Status: {}  {}: {}",
            self.status, self.code, self.description
        )
    }
}

impl std::error::Error for ResponseError {}

impl<'de> Deserialize<'de> for ResponseError {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(ResponseErrorVisitor)
    }
}

struct ResponseErrorVisitor;

impl<'de> Visitor<'de> for ResponseErrorVisitor {
    type Value = ResponseError;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a DocuSign error object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<ResponseError, A::Error> {
        let mut err = ResponseError::default();
        while let Some(key) = map.next_key::<String>()? {
            let value = map.next_value::<serde_json::Value>()?;
            let serde_json::Value::String(value) = value else {
                continue;
            };
            match key.as_str() {
                "errorCode" | "error" => err.code = value,
                "message" | "error_description" => err.description = value,
                _ => {}
            }
        }
        Ok(err)
    }
}

/// Returns true for the statuses DocuSign uses to signal success.
pub(crate) fn is_success(status: u16) -> bool {
    status == 200 || status == 201
}

/// A successful, unread response.
///
/// Returned by raw calls such as document downloads. The body has not been
/// consumed; the connection is released when the value is dropped.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name)?.to_str().ok()
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Declared body length, if any.
    pub fn content_length(&self) -> Option<u64> {
        self.inner.content_length()
    }

    /// Read the whole body.
    pub async fn bytes(self) -> Result<Bytes> {
        self.inner.bytes().await.map_err(Into::into)
    }

    /// The body as a stream of chunks.
    pub fn bytes_stream(self) -> impl Stream<Item = Result<Bytes>> {
        self.inner.bytes_stream().map_err(Error::from)
    }

    /// Stream the body into `writer`, returning the number of bytes copied.
    pub async fn copy_to<W>(mut self, writer: &mut W) -> Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let mut written = 0u64;
        while let Some(chunk) = self.inner.chunk().await? {
            writer.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        writer.flush().await?;
        Ok(written)
    }

    /// Unwrap the underlying reqwest response.
    pub fn into_inner(self) -> reqwest::Response {
        self.inner
    }
}

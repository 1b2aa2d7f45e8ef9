//! Streaming `multipart/form-data` bodies for document uploads.
//!
//! The body is produced by a writer task that feeds a bounded channel; the
//! HTTP client pulls from the other end. The writer only gets ahead of the
//! transport by one chunk, so a large file is never held in memory whole.
//!
//! Part layout, in order:
//!
//! ```text
//! --<boundary>
//! Content-Disposition: form-data
//! Content-Type: application/json
//!
//! <payload>
//! --<boundary>
//! Content-Disposition: file; filename="<name>";documentid=<id>
//! Content-Type: <content type>
//!
//! <file bytes>
//! --<boundary>--
//! ```

use std::fmt;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};

use bytes::Bytes;
use futures::{Stream, StreamExt};
use tokio::io::AsyncRead;
use tokio::sync::mpsc;
use tokio_util::io::ReaderStream;
use tracing::{debug, warn};

use crate::error::Result;

const CHUNK_SIZE: usize = 32 * 1024;

/// A document to upload alongside a JSON payload.
///
/// The reader is consumed once and dropped by the upload, whether the call
/// succeeds or fails.
pub struct UploadFile {
    /// MIME type of the content.
    pub content_type: String,
    /// Name displayed in the envelope.
    pub file_name: String,
    /// The `documentId` this file fills.
    pub id: String,
    data: Box<dyn AsyncRead + Send + Unpin>,
}

impl UploadFile {
    pub fn new(
        content_type: impl Into<String>,
        file_name: impl Into<String>,
        id: impl Into<String>,
        data: impl AsyncRead + Send + Unpin + 'static,
    ) -> Self {
        Self {
            content_type: content_type.into(),
            file_name: file_name.into(),
            id: id.into(),
            data: Box::new(data),
        }
    }

    /// Upload from memory.
    pub fn from_bytes(
        content_type: impl Into<String>,
        file_name: impl Into<String>,
        id: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self::new(content_type, file_name, id, io::Cursor::new(data.into()))
    }

    /// Upload a file from disk, displayed under its own file name.
    pub async fn open(
        path: impl AsRef<Path>,
        content_type: impl Into<String>,
        id: impl Into<String>,
    ) -> Result<Self> {
        let path = path.as_ref();
        let file = tokio::fs::File::open(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(content_type, file_name, id, file))
    }
}

impl fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadFile")
            .field("content_type", &self.content_type)
            .field("file_name", &self.file_name)
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// A multipart body being written by a background task.
pub(crate) struct Multipart {
    boundary: String,
    rx: mpsc::Receiver<io::Result<Bytes>>,
    failure: BodyFailure,
}

/// The read error that ended a multipart body, if any.
///
/// Recorded by the writer before the failing chunk reaches the transport.
#[derive(Debug, Clone, Default)]
pub(crate) struct BodyFailure(Arc<Mutex<Option<io::Error>>>);

impl BodyFailure {
    fn record(&self, err: io::Error) {
        if let Ok(mut slot) = self.0.lock() {
            *slot = Some(err);
        }
    }

    pub(crate) fn take(&self) -> Option<io::Error> {
        self.0.lock().ok().and_then(|mut slot| slot.take())
    }
}

impl Multipart {
    /// Start writing `payload` followed by `files`.
    ///
    /// Must be called within a tokio runtime.
    pub(crate) fn spawn(payload: Option<Vec<u8>>, files: Vec<UploadFile>) -> Self {
        let boundary = uuid::Uuid::new_v4().simple().to_string();
        let (tx, rx) = mpsc::channel(1);
        let failure = BodyFailure::default();
        tokio::spawn(write_body(
            tx,
            failure.clone(),
            boundary.clone(),
            payload,
            files,
        ));
        Self {
            boundary,
            rx,
            failure,
        }
    }

    pub(crate) fn failure(&self) -> BodyFailure {
        self.failure.clone()
    }

    pub(crate) fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub(crate) fn into_stream(self) -> impl Stream<Item = io::Result<Bytes>> + Send + 'static {
        futures::stream::unfold(self.rx, |mut rx| async move {
            rx.recv().await.map(|item| (item, rx))
        })
    }

    pub(crate) fn into_body(self) -> reqwest::Body {
        reqwest::Body::wrap_stream(self.into_stream())
    }
}

enum WriteError {
    /// The reader went away, usually because the call was cancelled.
    Closed,
    Io(io::Error),
}

async fn write_body(
    tx: mpsc::Sender<io::Result<Bytes>>,
    failure: BodyFailure,
    boundary: String,
    payload: Option<Vec<u8>>,
    files: Vec<UploadFile>,
) {
    // `files` is consumed by `write_parts`, so every reader has been
    // dropped by the time the error or end of stream reaches the reader.
    match write_parts(&tx, &boundary, payload, files).await {
        Ok(()) => debug!("multipart body complete"),
        Err(WriteError::Closed) => debug!("multipart reader closed early"),
        Err(WriteError::Io(e)) => {
            warn!(error = %e, "multipart body failed");
            let err = io::Error::new(e.kind(), format!("multipart: {e}"));
            failure.record(e);
            let _ = tx.send(Err(err)).await;
        }
    }
}

async fn write_parts(
    tx: &mpsc::Sender<io::Result<Bytes>>,
    boundary: &str,
    payload: Option<Vec<u8>>,
    files: Vec<UploadFile>,
) -> std::result::Result<(), WriteError> {
    let mut first = true;

    if let Some(json) = payload {
        send(tx, part_head(boundary, first, "form-data", "application/json")).await?;
        send(tx, Bytes::from(json)).await?;
        first = false;
    }

    for file in files {
        let UploadFile {
            content_type,
            file_name,
            id,
            data,
        } = file;

        let disposition = format!("file; filename=\"{file_name}\";documentid={id}");
        send(tx, part_head(boundary, first, &disposition, &content_type)).await?;
        first = false;

        let mut chunks = ReaderStream::with_capacity(data, CHUNK_SIZE);
        while let Some(chunk) = chunks.next().await {
            send(tx, chunk.map_err(WriteError::Io)?).await?;
        }
    }

    let lead = if first { "" } else { "\r\n" };
    send(tx, Bytes::from(format!("{lead}--{boundary}--\r\n"))).await
}

fn part_head(boundary: &str, first: bool, disposition: &str, content_type: &str) -> Bytes {
    let lead = if first { "" } else { "\r\n" };
    Bytes::from(format!(
        "{lead}--{boundary}\r\nContent-Disposition: {disposition}\r\nContent-Type: {content_type}\r\n\r\n"
    ))
}

async fn send(
    tx: &mpsc::Sender<io::Result<Bytes>>,
    chunk: Bytes,
) -> std::result::Result<(), WriteError> {
    tx.send(Ok(chunk)).await.map_err(|_| WriteError::Closed)
}

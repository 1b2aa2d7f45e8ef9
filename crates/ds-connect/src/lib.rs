//! # ds-connect
//!
//! Decoder for the XML document DocuSign Connect posts to a listener when an
//! envelope changes state.
//!
//! ```rust,ignore
//! let info = docusign_connect::from_str(&body)?;
//! for doc in &info.document_pdfs {
//!     std::fs::write(&doc.name, doc.decode()?)?;
//! }
//! ```

mod envelope;
mod error;

pub use envelope::{
    Attachment, CustomField, DocuSignEnvelopeInformation, DocumentPdf, DocumentStatus,
    EnvelopeStatus, FormField, RecipientStatus, TabStatus,
};
pub use error::{Error, ErrorKind, Result};

use tracing::debug;

/// Decode a notification from a string.
pub fn from_str(xml: &str) -> Result<DocuSignEnvelopeInformation> {
    let info: DocuSignEnvelopeInformation = quick_xml::de::from_str(xml)?;
    debug!(
        envelope_id = %info.envelope_status.envelope_id,
        status = %info.envelope_status.status,
        "decoded connect notification"
    );
    Ok(info)
}

/// Decode a notification from a buffered reader, such as a request body.
pub fn from_reader<R: std::io::BufRead>(reader: R) -> Result<DocuSignEnvelopeInformation> {
    let info: DocuSignEnvelopeInformation = quick_xml::de::from_reader(reader)?;
    debug!(
        envelope_id = %info.envelope_status.envelope_id,
        status = %info.envelope_status.status,
        "decoded connect notification"
    );
    Ok(info)
}

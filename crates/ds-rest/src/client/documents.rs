use tokio::io::AsyncWrite;
use tracing::{debug, instrument};

use docusign_client::{Call, RequestMethod, Response, Result, UploadFile};

use super::{seg, with_params};
use crate::documents::{DocumentAssetList, DocumentFieldList, DocumentList};
use crate::params::{DocumentsCombinedParam, EnvelopeDocumentParam};

const PDF: &str = "application/pdf";

impl super::DocuSignRestClient {
    /// List the documents of an envelope.
    #[instrument(skip(self))]
    pub async fn envelope_documents(&self, envelope_id: &str) -> Result<DocumentAssetList> {
        let call = Call::get(format!("envelopes/{}/documents", seg(envelope_id)));
        self.client.execute_json(call).await
    }

    /// Fetch one document as PDF. The body is left unread.
    #[instrument(skip(self))]
    pub async fn envelope_document(
        &self,
        envelope_id: &str,
        document_id: &str,
        params: &[EnvelopeDocumentParam],
    ) -> Result<Response> {
        let path = format!(
            "envelopes/{}/documents/{}",
            seg(envelope_id),
            seg(document_id)
        );
        let call = with_params(Call::get(path), params).accept(PDF);
        self.client.execute_raw(call).await
    }

    /// Fetch all documents, and optionally the certificate, as one PDF.
    /// The body is left unread.
    #[instrument(skip(self))]
    pub async fn envelope_documents_combined(
        &self,
        envelope_id: &str,
        params: &[DocumentsCombinedParam],
    ) -> Result<Response> {
        let path = format!("envelopes/{}/documents/combined", seg(envelope_id));
        let call = with_params(Call::get(path), params).accept(PDF);
        self.client.execute_raw(call).await
    }

    /// Stream one document into `out`, returning the bytes written.
    #[instrument(skip(self, out))]
    pub async fn download_envelope_document<W>(
        &self,
        out: &mut W,
        envelope_id: &str,
        document_id: &str,
        params: &[EnvelopeDocumentParam],
    ) -> Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let response = self
            .envelope_document(envelope_id, document_id, params)
            .await?;
        let written = response.copy_to(out).await?;
        debug!(written, "Document downloaded");
        Ok(written)
    }

    /// Stream the combined PDF into `out`, returning the bytes written.
    #[instrument(skip(self, out))]
    pub async fn download_documents_combined<W>(
        &self,
        out: &mut W,
        envelope_id: &str,
        params: &[DocumentsCombinedParam],
    ) -> Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let response = self
            .envelope_documents_combined(envelope_id, params)
            .await?;
        let written = response.copy_to(out).await?;
        debug!(written, "Combined documents downloaded");
        Ok(written)
    }

    /// Add or replace documents of a draft envelope.
    #[instrument(skip(self, documents, files))]
    pub async fn envelope_set_documents(
        &self,
        envelope_id: &str,
        documents: &DocumentList,
        files: Vec<UploadFile>,
    ) -> Result<DocumentAssetList> {
        let path = format!("envelopes/{}/documents", seg(envelope_id));
        let call = Call::put(path).json(documents)?.files(files);
        self.client.execute_json(call).await
    }

    /// Remove documents from a draft envelope, matched by document id.
    #[instrument(skip(self, documents))]
    pub async fn envelope_remove_documents(
        &self,
        envelope_id: &str,
        documents: &DocumentList,
    ) -> Result<DocumentAssetList> {
        let path = format!("envelopes/{}/documents", seg(envelope_id));
        let call = Call::delete(path).json(documents)?;
        self.client.execute_json(call).await
    }

    /// Add name/value fields to a document.
    #[instrument(skip(self, fields))]
    pub async fn document_add_custom_fields(
        &self,
        envelope_id: &str,
        document_id: &str,
        fields: &DocumentFieldList,
    ) -> Result<DocumentFieldList> {
        self.document_fields_call(RequestMethod::Post, envelope_id, document_id, fields)
            .await
    }

    #[instrument(skip(self, fields))]
    pub async fn document_modify_custom_fields(
        &self,
        envelope_id: &str,
        document_id: &str,
        fields: &DocumentFieldList,
    ) -> Result<DocumentFieldList> {
        self.document_fields_call(RequestMethod::Put, envelope_id, document_id, fields)
            .await
    }

    #[instrument(skip(self, fields))]
    pub async fn document_remove_custom_fields(
        &self,
        envelope_id: &str,
        document_id: &str,
        fields: &DocumentFieldList,
    ) -> Result<DocumentFieldList> {
        self.document_fields_call(RequestMethod::Delete, envelope_id, document_id, fields)
            .await
    }

    async fn document_fields_call(
        &self,
        method: RequestMethod,
        envelope_id: &str,
        document_id: &str,
        fields: &DocumentFieldList,
    ) -> Result<DocumentFieldList> {
        let path = format!(
            "envelopes/{}/documents/{}/fields",
            seg(envelope_id),
            seg(document_id)
        );
        let call = Call::new(method, path).json(fields)?;
        self.client.execute_json(call).await
    }
}

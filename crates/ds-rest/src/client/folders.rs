use serde_json::json;
use tracing::instrument;

use docusign_client::{Call, Result};

use super::{seg, with_params};
use crate::folders::{FolderEnvList, FolderList};
use crate::params::{EnvelopeSearchParam, FolderEnvelopesParam, FolderTemplateParam, SearchFolder};

impl super::DocuSignRestClient {
    /// List the account's folders with their hierarchy.
    #[instrument(skip(self))]
    pub async fn folder_list(&self, params: &[FolderTemplateParam]) -> Result<FolderList> {
        let call = with_params(Call::get("folders"), params);
        self.client.execute_json(call).await
    }

    /// List the envelopes in a folder.
    #[instrument(skip(self))]
    pub async fn folder_envelopes(
        &self,
        folder_id: &str,
        params: &[FolderEnvelopesParam],
    ) -> Result<FolderEnvList> {
        let call = with_params(Call::get(format!("folders/{}", seg(folder_id))), params);
        self.client.execute_json(call).await
    }

    /// List the envelopes in one of the built-in search folders.
    #[instrument(skip(self))]
    pub async fn envelope_search(
        &self,
        folder: SearchFolder,
        params: &[EnvelopeSearchParam],
    ) -> Result<FolderEnvList> {
        let call = with_params(Call::get(format!("search_folders/{folder}")), params);
        self.client.execute_json(call).await
    }

    /// Move envelopes into a folder.
    #[instrument(skip(self))]
    pub async fn envelope_move(&self, to_folder_id: &str, envelope_ids: &[&str]) -> Result<()> {
        let call = Call::put(format!("folders/{}", seg(to_folder_id)))
            .json(&json!({ "envelopeIds": envelope_ids }))?;
        self.client.execute_empty(call).await
    }
}

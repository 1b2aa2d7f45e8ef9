use tracing::instrument;

use docusign_client::{Call, Result};

use super::{seg, with_params};
use crate::folders::FolderTemplateList;
use crate::params::TemplateSearchParam;
use crate::templates::{Template, TemplateList};

impl super::DocuSignRestClient {
    /// Search the account's templates.
    #[instrument(skip(self))]
    pub async fn template_search(
        &self,
        params: &[TemplateSearchParam],
    ) -> Result<FolderTemplateList> {
        let call = with_params(Call::get("templates"), params);
        self.client.execute_json(call).await
    }

    /// Get a template with its documents, recipients and settings.
    #[instrument(skip(self))]
    pub async fn get_template(&self, template_id: &str) -> Result<Template> {
        let call = Call::get(format!("templates/{}", seg(template_id)));
        self.client.execute_json(call).await
    }

    /// Templates that were applied to an envelope.
    #[instrument(skip(self))]
    pub async fn envelope_templates(&self, envelope_id: &str) -> Result<TemplateList> {
        let call = Call::get(format!("envelopes/{}/templates", seg(envelope_id)));
        self.client.execute_json(call).await
    }
}

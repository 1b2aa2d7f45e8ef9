use tracing::instrument;

use docusign_client::{Call, Result};

use super::with_params;
use crate::login::LoginInfo;
use crate::params::LoginInfoParam;

impl super::DocuSignRestClient {
    /// Accounts the credential can use.
    ///
    /// This call is not account-scoped, so it works before an account id is
    /// known.
    #[instrument(skip(self))]
    pub async fn login_information(&self, params: &[LoginInfoParam]) -> Result<LoginInfo> {
        let call = with_params(Call::get("/login_information"), params);
        self.client.execute_json(call).await
    }
}

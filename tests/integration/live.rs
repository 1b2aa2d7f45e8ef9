//! Smoke tests against the DocuSign demo environment.
//!
//! Ignored by default; they need `DOCUSIGN_CONFIG` (see `PasswordCredential`).

use docusign_api::auth::CONFIG_ENV_VAR;
use docusign_api::rest::params::{FolderTemplateParam, LoginInfoParam};
use docusign_api::{DocuSignRestClient, PasswordCredential, ServiceContext};

use super::common::init_tracing;

fn credential() -> PasswordCredential {
    match PasswordCredential::from_env() {
        Ok(cred) => cred,
        Err(e) => panic!(
            "{CONFIG_ENV_VAR} must hold a JSON credential \
             {{\"key\",\"user\",\"pwd\",\"acctId\"?}}: {e}"
        ),
    }
}

#[tokio::test]
#[ignore]
async fn test_live_login_and_folders() {
    init_tracing();
    let ctx = ServiceContext::demo().unwrap();
    let mut cred = credential();

    let login = DocuSignRestClient::new(cred.clone(), ctx.clone())
        .login_information(&[LoginInfoParam::SETTINGS_NONE])
        .await
        .expect("login_information should succeed");
    let account = login.default_account().expect("user has an account");
    println!("account {} at {:?}", account.account_id, account.host());

    if cred.account_id.is_none() {
        cred = cred.with_account(account.account_id.clone());
        if let Some(host) = account.host() {
            cred = cred.with_host(host);
        }
    }

    let client = DocuSignRestClient::new(cred, ctx);
    let folders = client
        .folder_list(&[FolderTemplateParam::INCLUDE])
        .await
        .expect("folder_list should succeed");
    assert!(!folders.folders.is_empty(), "every account has system folders");
}

#[tokio::test]
#[ignore]
async fn test_live_token_round_trip() {
    init_tracing();
    let ctx = ServiceContext::demo().unwrap();
    let token = credential()
        .oauth_credential(&ctx)
        .await
        .expect("password grant should succeed");
    token.revoke(&ctx).await.expect("revoke should succeed");
}

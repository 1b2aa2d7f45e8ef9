//! Both credential eras against a stub: legacy XML header and bearer tokens.

use docusign_api::auth::{ErrorKind, OAuthClient};
use docusign_api::rest::params::LoginInfoParam;
use docusign_api::{DocuSignRestClient, PasswordCredential};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::{account_path, context, init_tracing, ACCOUNT};

const LEGACY_HEADER: &str = "<DocuSignCredentials><SendOnBehalfOf>ops@example.com</SendOnBehalfOf>\
<Username>api@example.com</Username><Password>s3cret</Password>\
<IntegratorKey>KEY-1</IntegratorKey></DocuSignCredentials>";

#[tokio::test]
async fn test_password_credential_acts_for_user() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(account_path("custom_fields")))
        .and(header("X-DocuSign-Authentication", LEGACY_HEADER))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "textCustomFields": [{"name": "region", "value": "EMEA"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let cred = PasswordCredential::new("KEY-1", "api@example.com", "s3cret").with_account(ACCOUNT);
    let client = DocuSignRestClient::new(cred, context(&server)).on_behalf_of("ops@example.com");

    let fields = client.account_custom_fields().await.unwrap();
    assert_eq!(fields.value("region"), Some("EMEA"));
}

#[tokio::test]
async fn test_login_then_token_grant_and_revoke() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/restapi/v2/login_information"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "loginAccounts": [
                {"accountId": "2002", "isDefault": "false"},
                {"accountId": ACCOUNT, "isDefault": "True", "name": "Main"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/restapi/v2/oauth2/token"))
        .and(body_string_contains("grant_type=password"))
        .and(body_string_contains("client_id=KEY-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "granted-token",
            "token_type": "bearer",
            "scope": "api"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(account_path("folders")))
        .and(header("Authorization", "bearer granted-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"folders": []})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/restapi/v2/oauth2/revoke"))
        .and(body_string_contains("token=granted-token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = context(&server);
    let password = PasswordCredential::new("KEY-1", "api@example.com", "s3cret");

    // No account yet: only endpoint-relative calls work.
    let login = DocuSignRestClient::new(password.clone(), ctx.clone())
        .login_information(&[LoginInfoParam::SETTINGS_NONE])
        .await
        .unwrap();
    let account = login.default_account().unwrap();
    assert_eq!(account.account_id, ACCOUNT);

    let token = password
        .with_account(account.account_id.clone())
        .oauth_credential(&ctx)
        .await
        .unwrap();
    let client = DocuSignRestClient::new(token.clone(), ctx.clone());
    let folders = client.folder_list(&[]).await.unwrap();
    assert!(folders.folders.is_empty());

    token.revoke(&ctx).await.unwrap();
}

#[tokio::test]
async fn test_rejected_grant_is_an_auth_error() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/restapi/v2/oauth2/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid username or password"
        })))
        .mount(&server)
        .await;

    let err = OAuthClient::new(context(&server))
        .password_grant("KEY-1", "api@example.com", "wrong")
        .await
        .unwrap_err();

    match err.kind {
        ErrorKind::OAuth {
            status,
            ref error,
            ref description,
        } => {
            assert_eq!(status, 400);
            assert_eq!(error, "invalid_grant");
            assert_eq!(description, "Invalid username or password");
        }
        other => panic!("unexpected kind: {other:?}"),
    }
    assert!(!err.to_string().contains("wrong"));
}

//! Call executor scenarios: decoding, vendor errors, multipart bodies, cancellation.

use std::time::Duration;

use docusign_api::client::{Call, ErrorKind};
use docusign_api::{CancellationToken, DocuSignClient, OAuthCredential, UploadFile};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::{account_path, context, init_tracing, parse_multipart, ACCOUNT};

fn client(server: &MockServer) -> DocuSignClient {
    init_tracing();
    let cred = OAuthCredential::new("it-token").with_account(ACCOUNT, None);
    DocuSignClient::new(cred, context(server))
}

#[tokio::test]
async fn test_get_decodes_folder_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(account_path("folders")))
        .and(header("Accept", "application/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"folders": [{"folderId": "1", "name": "Draft"}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let list: docusign_api::rest::FolderList =
        client(&server).execute_json(Call::get("folders")).await.unwrap();

    assert_eq!(list.folders.len(), 1);
    assert_eq!(list.folders[0].name.as_deref(), Some("Draft"));
}

#[tokio::test]
async fn test_vendor_error_is_normalized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(account_path("envelopes/bad")))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"errorCode": "INVALID_REQUEST", "message": "bad field"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(account_path("envelopes/legacy")))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"error": "INVALID_REQUEST", "error_description": "bad field"})),
        )
        .mount(&server)
        .await;

    let client = client(&server);
    for id in ["bad", "legacy"] {
        let err = client
            .execute_json::<serde_json::Value>(Call::get(format!("envelopes/{id}")))
            .await
            .unwrap_err();
        let api = err.api_error().expect("vendor error");
        assert_eq!(api.status, 400);
        assert_eq!(api.code, "INVALID_REQUEST");
        assert_eq!(api.description, "bad field");
    }
}

#[tokio::test]
async fn test_undecodable_error_body_keeps_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(account_path("folders")))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>down</html>"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(account_path("custom_fields")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client(&server);
    let err = client
        .execute_json::<serde_json::Value>(Call::get("folders"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert!(!err.api_error().unwrap().description.is_empty());

    let err = client
        .execute_json::<serde_json::Value>(Call::get("custom_fields"))
        .await
        .unwrap_err();
    let api = err.api_error().unwrap();
    assert_eq!(api.status, 404);
    assert!(api.code.is_empty());
    assert!(api.description.is_empty());
}

#[tokio::test]
async fn test_multipart_body_parts_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(account_path("envelopes")))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"envelopeId": "e1"})))
        .expect(1)
        .mount(&server)
        .await;

    let payload = json!({"a": "A", "b": 999});
    let files = [
        ("one.txt", "1", "first file\n"),
        ("two.txt", "2", "second\r\nfile"),
        ("three.txt", "3", "third"),
    ];
    let call = Call::post("envelopes")
        .json(&payload)
        .unwrap()
        .files(files.iter().map(|(name, id, body)| {
            UploadFile::from_bytes("text/plain", *name, *id, body.as_bytes().to_vec())
        }));

    let created: serde_json::Value = client(&server).execute_json(call).await.unwrap();
    assert_eq!(created["envelopeId"], "e1");

    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];
    let content_type = request
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(content_type.starts_with("multipart/form-data; boundary="));

    let parts = parse_multipart(content_type, &request.body);
    assert_eq!(parts.len(), files.len() + 1);

    assert_eq!(parts[0].content_type, "application/json");
    let decoded: serde_json::Value = serde_json::from_slice(&parts[0].body).unwrap();
    assert_eq!(decoded, payload);

    for (part, (name, id, body)) in parts[1..].iter().zip(files) {
        assert_eq!(
            part.disposition,
            format!("file; filename=\"{name}\";documentid={id}")
        );
        assert_eq!(part.content_type, "text/plain");
        assert_eq!(part.body, body.as_bytes());
    }
}

#[tokio::test]
async fn test_cancel_wins_over_late_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(account_path("folders")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"folders": []}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let token = CancellationToken::new();
    let scoped = client(&server).with_cancellation(token.clone());
    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        token.cancel();
    });

    let err = scoped
        .execute_json::<serde_json::Value>(Call::get("folders"))
        .await
        .unwrap_err();
    canceller.await.unwrap();

    assert!(matches!(err.kind, ErrorKind::Cancelled));
    assert!(err.is_cancelled());
}

#[tokio::test]
async fn test_timeout_reports_deadline() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(account_path("folders")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"folders": []}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let err = client(&server)
        .with_timeout(Duration::from_millis(100))
        .execute_json::<serde_json::Value>(Call::get("folders"))
        .await
        .unwrap_err();

    assert!(matches!(err.kind, ErrorKind::DeadlineExceeded));
    assert!(err.is_cancelled());
}

//! A send-and-sign round through the typed client against a stub.

use chrono::{TimeZone, Utc};
use docusign_api::rest::params::{
    DocumentsCombinedParam, EnvelopeSearchParam, RecipientsParam, SearchFolder,
};
use docusign_api::rest::{
    Document, EnvRecipientView, Envelope, RecipientList, ReturnUrlType, SignHereTab, Signer,
    TabBase, TabPosition, Tabs, TextTab,
};
use docusign_api::UploadFile;
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::{account_path, rest_client};

const PDF: &[u8] = b"%PDF-1.4\n1 0 obj\n<<>>\nendobj\n%%EOF\n";

fn captive_signer() -> Signer {
    let mut signer = Signer::new("1", "Sam Signer", "sam@example.com");
    signer.recipient.recipient.client_user_id = Some("cap-1".to_string());
    signer.signer.tabs = Some(Tabs {
        sign_here_tabs: vec![SignHereTab {
            base: TabBase::labelled("1", "signature"),
            position: TabPosition::anchored("/sig/"),
            ..SignHereTab::default()
        }],
        text_tabs: vec![TextTab {
            base: TabBase::labelled("1", "employeeId"),
            position: TabPosition::at(1, 72, 144),
            value: Some("E-1138".to_string()),
            ..TextTab::default()
        }],
        ..Tabs::default()
    });
    signer
}

#[tokio::test]
async fn test_send_sign_and_download() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(account_path("envelopes")))
        .and(body_string_contains("\"emailSubject\":\"Offer letter\""))
        .and(body_string_contains("\"anchorString\":\"/sig/\""))
        .and(body_string_contains("filename=\"offer.pdf\";documentid=1"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "envelopeId": "e-42",
            "status": "sent",
            "statusDateTime": "2016-04-12T09:41:22.287Z",
            "uri": "/envelopes/e-42"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(account_path("envelopes/e-42/views/recipient")))
        .and(body_json(json!({
            "clientUserId": "cap-1",
            "authenticationMethod": "none",
            "email": "sam@example.com",
            "userName": "Sam Signer",
            "returnUrl": "https://app.example.com/signed"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "url": "https://demo.docusign.net/Signing/StartInSession.aspx?t=abc"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(account_path("envelopes/e-42/recipients")))
        .and(query_param("include_tabs", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "signers": [{
                "recipientId": "1",
                "email": "sam@example.com",
                "status": "completed",
                "tabs": {
                    "textTabs": [{"tabLabel": "employeeId", "value": "E-1138"}],
                    "checkboxTabs": [{"tabLabel": "agree", "selected": "True"}]
                }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(account_path("envelopes/e-42/documents/combined")))
        .and(query_param("certificate", "true"))
        .and(header("Accept", "application/pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PDF.to_vec(), "application/pdf"))
        .expect(1)
        .mount(&server)
        .await;

    let client = rest_client(&server);

    let envelope = Envelope {
        email_subject: Some("Offer letter".to_string()),
        status: Some("sent".to_string()),
        documents: vec![Document::new("1", "offer.pdf")],
        recipients: Some(RecipientList {
            signers: vec![captive_signer()],
            ..RecipientList::default()
        }),
        ..Envelope::default()
    };
    let file = UploadFile::from_bytes("application/pdf", "offer.pdf", "1", PDF);
    let sent = client.envelope_create(&envelope, vec![file]).await.unwrap();
    assert_eq!(sent.envelope_id, "e-42");
    assert!(sent.status_date_time.is_some());

    let view = EnvRecipientView {
        client_user_id: Some("cap-1".to_string()),
        authentication_method: Some("none".to_string()),
        email: Some("sam@example.com".to_string()),
        user_name: Some("Sam Signer".to_string()),
        return_url: Some("https://app.example.com/signed".to_string()),
        ..EnvRecipientView::default()
    };
    let signing = client.recipient_view(&sent.envelope_id, &view).await.unwrap();
    assert!(signing.url.contains("StartInSession"));

    let recipients = client
        .recipients(&sent.envelope_id, &[RecipientsParam::INCLUDE_TABS])
        .await
        .unwrap();
    let values: Vec<(String, String)> = recipients
        .values()
        .into_iter()
        .map(|nv| (nv.name, nv.value))
        .collect();
    assert_eq!(
        values,
        [
            ("agree".to_string(), "true".to_string()),
            ("employeeId".to_string(), "E-1138".to_string())
        ]
    );

    let mut pdf = Vec::new();
    let written = client
        .download_documents_combined(
            &mut pdf,
            &sent.envelope_id,
            &[DocumentsCombinedParam::CERTIFICATE],
        )
        .await
        .unwrap();
    assert_eq!(written, PDF.len() as u64);
    assert_eq!(pdf, PDF);
}

#[tokio::test]
async fn test_search_then_move_and_correct() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(account_path("search_folders/out_for_signature")))
        .and(query_param("from_date", "01/02/2016 03:04"))
        .and(query_param("include_recipients", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resultSetSize": "2",
            "folderItems": [
                {"envelopeId": "e-1", "subject": "Lease", "status": "sent"},
                {"envelopeId": "e-2", "subject": "NDA", "status": "delivered"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(account_path("folders/archive-1")))
        .and(body_json(json!({"envelopeIds": ["e-1", "e-2"]})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(account_path("envelopes/e-1/views/correct")))
        .and(body_json(json!({"returnUrl": "send"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "url": "https://demo.docusign.net/correct/e-1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = rest_client(&server);
    let since = Utc.with_ymd_and_hms(2016, 1, 2, 3, 4, 0).unwrap();
    let found = client
        .envelope_search(
            SearchFolder::OutForSignature,
            &[
                EnvelopeSearchParam::from_date(&since),
                EnvelopeSearchParam::INCLUDE_RECIPIENTS,
            ],
        )
        .await
        .unwrap();

    let ids: Vec<&str> = found
        .folder_items
        .iter()
        .filter_map(|item| item.envelope_id.as_deref())
        .collect();
    assert_eq!(ids, ["e-1", "e-2"]);

    client.envelope_move("archive-1", &ids).await.unwrap();

    let correction = client
        .envelope_correction("e-1", ReturnUrlType::Send, false)
        .await
        .unwrap();
    assert!(correction.url.ends_with("/e-1"));
}

use tracing::instrument;

use docusign_client::{Call, Result};

use super::seg;
use crate::views::{EnvRecipientView, EnvUrl, ReturnUrlRequest, ReturnUrlType};

impl super::DocuSignRestClient {
    /// URL of the correction view of a sent envelope.
    #[instrument(skip(self))]
    pub async fn envelope_correction(
        &self,
        envelope_id: &str,
        return_url: ReturnUrlType,
        suppress_navigation: bool,
    ) -> Result<EnvUrl> {
        let body = ReturnUrlRequest {
            return_url,
            suppress_navigation: suppress_navigation.then_some("true"),
        };
        self.view("correct", envelope_id, &body).await
    }

    /// Embedded signing URL for a captive recipient.
    #[instrument(skip(self, view))]
    pub async fn recipient_view(&self, envelope_id: &str, view: &EnvRecipientView) -> Result<EnvUrl> {
        self.view("recipient", envelope_id, view).await
    }

    /// URL of the sender view of a draft envelope.
    #[instrument(skip(self))]
    pub async fn sender_view(&self, envelope_id: &str, return_url: ReturnUrlType) -> Result<EnvUrl> {
        let body = ReturnUrlRequest {
            return_url,
            suppress_navigation: None,
        };
        self.view("sender", envelope_id, &body).await
    }

    /// URL of the edit view of an envelope.
    #[instrument(skip(self))]
    pub async fn edit_view(&self, envelope_id: &str, return_url: ReturnUrlType) -> Result<EnvUrl> {
        let body = ReturnUrlRequest {
            return_url,
            suppress_navigation: None,
        };
        self.view("edit", envelope_id, &body).await
    }

    async fn view<T: serde::Serialize + ?Sized>(
        &self,
        kind: &str,
        envelope_id: &str,
        body: &T,
    ) -> Result<EnvUrl> {
        let path = format!("envelopes/{}/views/{kind}", seg(envelope_id));
        let call = Call::post(path).json(body)?;
        self.client.execute_json(call).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{account_path, client_for};
    use crate::views::{EnvRecipientView, ReturnUrlType};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn url_response(url: &str) -> ResponseTemplate {
        ResponseTemplate::new(201).set_body_json(serde_json::json!({ "url": url }))
    }

    #[tokio::test]
    async fn test_recipient_view_wiremock() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(account_path("envelopes/e1/views/recipient")))
            .and(body_json(serde_json::json!({
                "clientUserId": "cap-1",
                "authenticationMethod": "email",
                "email": "sam@example.com",
                "userName": "Sam Signer",
                "returnUrl": "https://app.example.com/done"
            })))
            .respond_with(url_response("https://demo.docusign.net/Signing/?ti=abc"))
            .expect(1)
            .mount(&server)
            .await;

        let view = EnvRecipientView {
            client_user_id: Some("cap-1".to_string()),
            authentication_method: Some("email".to_string()),
            email: Some("sam@example.com".to_string()),
            user_name: Some("Sam Signer".to_string()),
            return_url: Some("https://app.example.com/done".to_string()),
            ..EnvRecipientView::default()
        };
        let client = client_for(&server);
        let url = client.recipient_view("e1", &view).await.unwrap();
        assert!(url.url.starts_with("https://demo.docusign.net/Signing/"));
    }

    #[tokio::test]
    async fn test_sender_edit_and_correct_views() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(account_path("envelopes/e1/views/sender")))
            .and(body_json(serde_json::json!({"returnUrl": "send"})))
            .respond_with(url_response("https://demo.docusign.net/Member/StartInSession.aspx?s=1"))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path(account_path("envelopes/e1/views/edit")))
            .and(body_json(serde_json::json!({"returnUrl": "save"})))
            .respond_with(url_response("https://demo.docusign.net/edit"))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path(account_path("envelopes/e1/views/correct")))
            .and(body_json(serde_json::json!({
                "returnUrl": "view_complete",
                "suppressNavigation": "true"
            })))
            .respond_with(url_response("https://demo.docusign.net/correct"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let sender = client.sender_view("e1", ReturnUrlType::Send).await.unwrap();
        assert!(sender.url.contains("StartInSession"));
        let edit = client.edit_view("e1", ReturnUrlType::Save).await.unwrap();
        assert_eq!(edit.url, "https://demo.docusign.net/edit");
        let correct = client
            .envelope_correction("e1", ReturnUrlType::ViewComplete, true)
            .await
            .unwrap();
        assert_eq!(correct.url, "https://demo.docusign.net/correct");
    }
}

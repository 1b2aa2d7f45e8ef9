use tracing::instrument;

use docusign_client::{Call, RequestMethod, Result};

use super::{seg, with_params};
use crate::params::RecipientsParam;
use crate::recipients::{RecipientList, RecipientUpdateResult};
use crate::tabs::Tabs;

impl super::DocuSignRestClient {
    /// Recipients of an envelope, optionally with their tabs.
    #[instrument(skip(self))]
    pub async fn recipients(
        &self,
        envelope_id: &str,
        params: &[RecipientsParam],
    ) -> Result<RecipientList> {
        let path = format!("envelopes/{}/recipients", seg(envelope_id));
        self.client
            .execute_json(with_params(Call::get(path), params))
            .await
    }

    /// Add recipients to an envelope.
    #[instrument(skip(self, recipients))]
    pub async fn recipients_add(
        &self,
        envelope_id: &str,
        recipients: &RecipientList,
        params: &[RecipientsParam],
    ) -> Result<RecipientList> {
        let path = format!("envelopes/{}/recipients", seg(envelope_id));
        let call = with_params(Call::post(path), params).json(recipients)?;
        self.client.execute_json(call).await
    }

    /// Update recipients of an envelope, matched by recipient id.
    ///
    /// Check [`RecipientUpdateResult::failures`] for per-recipient errors.
    #[instrument(skip(self, recipients))]
    pub async fn recipients_modify(
        &self,
        envelope_id: &str,
        recipients: &RecipientList,
        params: &[RecipientsParam],
    ) -> Result<RecipientUpdateResult> {
        let path = format!("envelopes/{}/recipients", seg(envelope_id));
        let call = with_params(Call::put(path), params).json(recipients)?;
        self.client.execute_json(call).await
    }

    /// Remove recipients from an envelope, matched by recipient id.
    #[instrument(skip(self, recipients))]
    pub async fn recipients_remove(
        &self,
        envelope_id: &str,
        recipients: &RecipientList,
    ) -> Result<RecipientList> {
        let path = format!("envelopes/{}/recipients", seg(envelope_id));
        let call = Call::delete(path).json(recipients)?;
        self.client.execute_json(call).await
    }

    /// Tabs of one recipient.
    #[instrument(skip(self))]
    pub async fn recipient_tabs(&self, envelope_id: &str, recipient_id: &str) -> Result<Tabs> {
        let call = Call::get(tabs_path(envelope_id, recipient_id));
        self.client.execute_json(call).await
    }

    #[instrument(skip(self, tabs))]
    pub async fn recipient_tabs_add(
        &self,
        envelope_id: &str,
        recipient_id: &str,
        tabs: &Tabs,
    ) -> Result<Tabs> {
        self.tabs_call(RequestMethod::Post, envelope_id, recipient_id, tabs)
            .await
    }

    /// Modify tabs, matched by tab id.
    #[instrument(skip(self, tabs))]
    pub async fn recipient_tabs_modify(
        &self,
        envelope_id: &str,
        recipient_id: &str,
        tabs: &Tabs,
    ) -> Result<Tabs> {
        self.tabs_call(RequestMethod::Put, envelope_id, recipient_id, tabs)
            .await
    }

    /// Remove tabs, matched by tab id.
    #[instrument(skip(self, tabs))]
    pub async fn recipient_tabs_remove(
        &self,
        envelope_id: &str,
        recipient_id: &str,
        tabs: &Tabs,
    ) -> Result<Tabs> {
        self.tabs_call(RequestMethod::Delete, envelope_id, recipient_id, tabs)
            .await
    }

    async fn tabs_call(
        &self,
        method: RequestMethod,
        envelope_id: &str,
        recipient_id: &str,
        tabs: &Tabs,
    ) -> Result<Tabs> {
        let call = Call::new(method, tabs_path(envelope_id, recipient_id)).json(tabs)?;
        self.client.execute_json(call).await
    }
}

fn tabs_path(envelope_id: &str, recipient_id: &str) -> String {
    format!(
        "envelopes/{}/recipients/{}/tabs",
        seg(envelope_id),
        seg(recipient_id)
    )
}

#[cfg(test)]
mod tests {
    use super::super::testing::{account_path, client_for};
    use crate::params::RecipientsParam;
    use crate::recipients::{CarbonCopy, EmailRecipient, RecipientList, Signer};
    use crate::tabs::{TabBase, TabPosition, Tabs, TextTab};
    use docusign_client::NameValue;
    use wiremock::matchers::{body_json, body_string_contains, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_recipients_with_tabs() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(account_path("envelopes/e1/recipients")))
            .and(query_param("include_tabs", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "recipientCount": "2",
                "signers": [{
                    "recipientId": "1",
                    "name": "Sam Signer",
                    "email": "sam@example.com",
                    "status": "completed",
                    "signedDateTime": "2016-04-12T09:43:09.35Z",
                    "tabs": {"textTabs": [{"tabLabel": "employeeId", "value": "E-1138"}]}
                }],
                "carbonCopies": [{"recipientId": "2", "name": "Cy", "email": "cy@example.com"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let list = client
            .recipients("e1", &[RecipientsParam::INCLUDE_TABS])
            .await
            .unwrap();
        assert_eq!(list.signers[0].recipient.recipient.status.as_deref(), Some("completed"));
        assert!(list.signers[0].signed_date_time.is_some());
        assert_eq!(list.carbon_copies.len(), 1);
        assert_eq!(list.values(), vec![NameValue::new("employeeId", "E-1138")]);
    }

    #[tokio::test]
    async fn test_recipients_add_and_modify() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(account_path("envelopes/e1/recipients")))
            .and(query_param("resend_envelope", "true"))
            .and(body_string_contains("\"carbonCopies\""))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "carbonCopies": [{"recipientId": "3", "email": "cc@example.com"}]
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path(account_path("envelopes/e1/recipients")))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "recipientUpdateResults": [
                    {"recipientId": "1"},
                    {
                        "recipientId": "9",
                        "errorDetails": {"errorCode": "INVALID_RECIPIENT_ID", "message": "no such recipient"}
                    }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let add = RecipientList {
            carbon_copies: vec![CarbonCopy {
                recipient: EmailRecipient::new("3", "Cc", "cc@example.com"),
            }],
            ..RecipientList::default()
        };
        let added = client
            .recipients_add("e1", &add, &[RecipientsParam::RESEND])
            .await
            .unwrap();
        assert_eq!(added.carbon_copies[0].recipient.email.as_deref(), Some("cc@example.com"));

        let modify = RecipientList {
            signers: vec![Signer::new("1", "Sam Signer", "sam@example.org")],
            ..RecipientList::default()
        };
        let result = client.recipients_modify("e1", &modify, &[]).await.unwrap();
        let failed: Vec<_> = result.failures().collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].recipient_id.as_deref(), Some("9"));
    }

    #[tokio::test]
    async fn test_recipients_remove() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path(account_path("envelopes/e1/recipients")))
            .and(body_json(serde_json::json!({"signers": [{"recipientId": "2"}]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "signers": [{"recipientId": "2"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut signer = Signer::default();
        signer.recipient.recipient.recipient_id = Some("2".to_string());
        let list = RecipientList {
            signers: vec![signer],
            ..RecipientList::default()
        };
        let client = client_for(&server);
        let removed = client.recipients_remove("e1", &list).await.unwrap();
        assert_eq!(removed.signers.len(), 1);
    }

    #[tokio::test]
    async fn test_recipient_tabs_crud() {
        let server = MockServer::start().await;
        let tabs_json = serde_json::json!({
            "textTabs": [{"tabLabel": "note", "documentId": "1", "tabId": "t-1", "value": "hi"}]
        });
        Mock::given(method("GET"))
            .and(path(account_path("envelopes/e1/recipients/1/tabs")))
            .respond_with(ResponseTemplate::new(200).set_body_json(&tabs_json))
            .expect(1)
            .mount(&server)
            .await;
        for verb in ["POST", "PUT", "DELETE"] {
            Mock::given(method(verb))
                .and(path(account_path("envelopes/e1/recipients/1/tabs")))
                .and(body_string_contains("\"tabLabel\":\"note\""))
                .respond_with(ResponseTemplate::new(200).set_body_json(&tabs_json))
                .expect(1)
                .mount(&server)
                .await;
        }

        let client = client_for(&server);
        let current = client.recipient_tabs("e1", "1").await.unwrap();
        assert_eq!(current.text_tabs[0].position.tab_id.as_deref(), Some("t-1"));

        let tabs = Tabs {
            text_tabs: vec![TextTab {
                base: TabBase::labelled("1", "note"),
                position: TabPosition {
                    tab_id: Some("t-1".to_string()),
                    ..TabPosition::at(1, 10, 20)
                },
                value: Some("hi".to_string()),
                ..TextTab::default()
            }],
            ..Tabs::default()
        };
        client.recipient_tabs_add("e1", "1", &tabs).await.unwrap();
        client.recipient_tabs_modify("e1", "1", &tabs).await.unwrap();
        let removed = client.recipient_tabs_remove("e1", "1", &tabs).await.unwrap();
        assert_eq!(removed.values(), vec![NameValue::new("note", "hi")]);
    }
}

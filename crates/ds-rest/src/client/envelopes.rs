use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use docusign_client::{Call, Result, UploadFile};

use super::{seg, with_params};
use crate::envelopes::{
    AuditEventList, Envelope, EnvelopeList, EnvelopeResponse, EnvelopeUris, Notification,
};
use crate::params::StatusChangesParam;

impl super::DocuSignRestClient {
    /// Create an envelope, uploading `files` as its documents.
    ///
    /// Each file's id must match the `documentId` of a document in the
    /// envelope. With `status: "sent"` the envelope is sent right away,
    /// otherwise it is saved as a draft.
    #[instrument(skip(self, envelope, files))]
    pub async fn envelope_create(
        &self,
        envelope: &Envelope,
        files: Vec<UploadFile>,
    ) -> Result<EnvelopeResponse> {
        let call = Call::post("envelopes").json(envelope)?.files(files);
        self.client.execute_json(call).await
    }

    /// Status changes across the account's envelopes.
    ///
    /// Narrow the result with dates, statuses or envelope ids; without any
    /// option DocuSign may reject the request.
    #[instrument(skip(self))]
    pub async fn envelope_status_changes(
        &self,
        params: &[StatusChangesParam],
    ) -> Result<EnvelopeList> {
        let call = with_params(Call::get("envelopes"), params);
        self.client.execute_json(call).await
    }

    /// Overall status of one envelope.
    #[instrument(skip(self))]
    pub async fn envelope_status(&self, envelope_id: &str) -> Result<EnvelopeUris> {
        let call = Call::get(format!("envelopes/{}", seg(envelope_id)));
        self.client.execute_json(call).await
    }

    /// Status of several envelopes in one request.
    #[instrument(skip(self))]
    pub async fn envelope_status_multi(&self, envelope_ids: &[&str]) -> Result<Vec<EnvelopeUris>> {
        #[derive(Deserialize)]
        struct StatusList {
            #[serde(default)]
            envelopes: Vec<EnvelopeUris>,
        }

        let call = Call::put("envelopes/status")
            .query("envelope_ids", "request_body")
            .json(&json!({ "envelopeIds": envelope_ids }))?;
        let list: StatusList = self.client.execute_json(call).await?;
        Ok(list.envelopes)
    }

    /// Audit log of an envelope.
    #[instrument(skip(self))]
    pub async fn envelope_audit_events(&self, envelope_id: &str) -> Result<AuditEventList> {
        let call = Call::get(format!("envelopes/{}/audit_events", seg(envelope_id)));
        self.client.execute_json(call).await
    }

    /// Reminder and expiration settings of an envelope.
    #[instrument(skip(self))]
    pub async fn envelope_notification(&self, envelope_id: &str) -> Result<Notification> {
        let call = Call::get(format!("envelopes/{}/notification", seg(envelope_id)));
        self.client.execute_json(call).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{account_path, client_for};
    use crate::documents::Document;
    use crate::envelopes::Envelope;
    use crate::params::StatusChangesParam;
    use chrono::{TimeZone, Utc};
    use docusign_client::{ErrorKind, UploadFile};
    use wiremock::matchers::{body_json, body_string_contains, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_envelope_create_multipart() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(account_path("envelopes")))
            .and(body_string_contains("\"emailSubject\":\"Offer letter\""))
            .and(body_string_contains(
                "Content-Disposition: file; filename=\"offer.pdf\";documentid=1",
            ))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "envelopeId": "e1",
                "status": "sent",
                "statusDateTime": "2016-04-12T09:40:01.1Z",
                "uri": "/envelopes/e1"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let envelope = Envelope {
            email_subject: Some("Offer letter".to_string()),
            status: Some("sent".to_string()),
            documents: vec![Document::new("1", "offer.pdf")],
            ..Envelope::default()
        };
        let file = UploadFile::from_bytes("application/pdf", "offer.pdf", "1", "%PDF-1.4");

        let client = client_for(&server);
        let resp = client
            .envelope_create(&envelope, vec![file])
            .await
            .expect("envelope_create should succeed");
        assert_eq!(resp.envelope_id, "e1");
        assert!(resp.status_date_time.is_some());
    }

    #[tokio::test]
    async fn test_envelope_create_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(account_path("envelopes")))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "errorCode": "ENVELOPE_IS_INCOMPLETE",
                "message": "The Envelope is not Complete."
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .envelope_create(&Envelope::default(), Vec::new())
            .await
            .unwrap_err();
        let ErrorKind::Api(api) = &err.kind else {
            panic!("expected api error, got {err:?}");
        };
        assert_eq!(api.status, 400);
        assert_eq!(api.code, "ENVELOPE_IS_INCOMPLETE");
    }

    #[tokio::test]
    async fn test_envelope_status_changes_wiremock() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(account_path("envelopes")))
            .and(query_param("from_date", "04/01/2016 00:00"))
            .and(query_param("envelopeId", "e1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "envelopes": [{"envelopeId": "e1", "status": "completed"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let from = Utc.with_ymd_and_hms(2016, 4, 1, 0, 0, 0).unwrap();
        let client = client_for(&server);
        let list = client
            .envelope_status_changes(&[
                StatusChangesParam::from_date(&from),
                StatusChangesParam::envelope("e1"),
            ])
            .await
            .expect("envelope_status_changes should succeed");
        assert_eq!(list.envelopes[0].status.as_deref(), Some("completed"));
    }

    #[tokio::test]
    async fn test_envelope_status_wiremock() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(account_path("envelopes/e1")))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "envelopeId": "e1",
                "status": "delivered",
                "documentsUri": "/envelopes/e1/documents"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let status = client.envelope_status("e1").await.unwrap();
        assert_eq!(status.status.as_deref(), Some("delivered"));
        assert_eq!(status.documents_uri.as_deref(), Some("/envelopes/e1/documents"));
    }

    #[tokio::test]
    async fn test_envelope_status_multi_wiremock() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path(account_path("envelopes/status")))
            .and(query_param("envelope_ids", "request_body"))
            .and(body_json(serde_json::json!({"envelopeIds": ["e1", "e2"]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "resultSetSize": "2",
                "envelopes": [
                    {"envelopeId": "e1", "status": "sent"},
                    {"envelopeId": "e2", "status": "voided"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let statuses = client.envelope_status_multi(&["e1", "e2"]).await.unwrap();
        assert_eq!(statuses.len(), 2);
        assert_eq!(statuses[1].status.as_deref(), Some("voided"));
    }

    #[tokio::test]
    async fn test_audit_events_and_notification() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(account_path("envelopes/e1/audit_events")))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "auditEvents": [{"eventFields": [{"name": "Action", "value": "Sent"}]}]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(account_path("envelopes/e1/notification")))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "useAccountDefaults": "True",
                "reminders": {"reminderEnabled": "true", "reminderDelay": "2"},
                "expirations": {"expireEnabled": "false"}
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let events = client.envelope_audit_events("e1").await.unwrap();
        assert_eq!(events.audit_events[0].field("Action"), Some("Sent"));

        let n = client.envelope_notification("e1").await.unwrap();
        assert!(n.use_account_defaults.get());
        assert!(n.reminders.as_ref().unwrap().reminder_enabled.get());
        assert!(!n.expirations.as_ref().unwrap().expire_enabled.get());
    }
}

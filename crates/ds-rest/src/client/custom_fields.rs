use tracing::instrument;

use docusign_client::{Call, RequestMethod, Result};

use super::seg;
use crate::custom_fields::CustomFieldList;

impl super::DocuSignRestClient {
    /// Custom fields of an envelope.
    #[instrument(skip(self))]
    pub async fn envelope_custom_fields(&self, envelope_id: &str) -> Result<CustomFieldList> {
        let call = Call::get(format!("envelopes/{}/custom_fields", seg(envelope_id)));
        self.client.execute_json(call).await
    }

    /// Add custom fields to an envelope.
    ///
    /// A duplicate name is reported in the `error_details` of the returned item.
    #[instrument(skip(self, fields))]
    pub async fn envelope_add_custom_fields(
        &self,
        envelope_id: &str,
        fields: &CustomFieldList,
    ) -> Result<CustomFieldList> {
        self.envelope_custom_fields_call(RequestMethod::Post, envelope_id, fields)
            .await
    }

    /// Modify custom fields of an envelope, matched by field id.
    #[instrument(skip(self, fields))]
    pub async fn envelope_modify_custom_fields(
        &self,
        envelope_id: &str,
        fields: &CustomFieldList,
    ) -> Result<CustomFieldList> {
        self.envelope_custom_fields_call(RequestMethod::Put, envelope_id, fields)
            .await
    }

    /// Remove custom fields from an envelope, matched by field id.
    #[instrument(skip(self, fields))]
    pub async fn envelope_remove_custom_fields(
        &self,
        envelope_id: &str,
        fields: &CustomFieldList,
    ) -> Result<CustomFieldList> {
        self.envelope_custom_fields_call(RequestMethod::Delete, envelope_id, fields)
            .await
    }

    /// Custom fields defined on the account.
    #[instrument(skip(self))]
    pub async fn account_custom_fields(&self) -> Result<CustomFieldList> {
        self.client.execute_json(Call::get("custom_fields")).await
    }

    async fn envelope_custom_fields_call(
        &self,
        method: RequestMethod,
        envelope_id: &str,
        fields: &CustomFieldList,
    ) -> Result<CustomFieldList> {
        let path = format!("envelopes/{}/custom_fields", seg(envelope_id));
        let call = Call::new(method, path).json(fields)?;
        self.client.execute_json(call).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{account_path, client_for};
    use crate::custom_fields::{CustomField, CustomFieldList};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_envelope_custom_fields_wiremock() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(account_path("envelopes/e1/custom_fields")))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "textCustomFields": [{"fieldId": "11", "name": "caseNumber", "value": "C-42"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let fields = client.envelope_custom_fields("e1").await.unwrap();
        assert_eq!(fields.value("caseNumber"), Some("C-42"));
    }

    #[tokio::test]
    async fn test_add_modify_remove_wiremock() {
        let server = MockServer::start().await;
        let payload = serde_json::json!({
            "textCustomFields": [{"fieldId": "11", "name": "caseNumber", "value": "C-43"}]
        });
        for verb in ["POST", "PUT", "DELETE"] {
            Mock::given(method(verb))
                .and(path(account_path("envelopes/e1/custom_fields")))
                .and(body_json(&payload))
                .respond_with(ResponseTemplate::new(200).set_body_json(&payload))
                .expect(1)
                .mount(&server)
                .await;
        }

        let fields = CustomFieldList {
            text_custom_fields: vec![CustomField {
                id: Some("11".to_string()),
                ..CustomField::new("caseNumber", "C-43")
            }],
            ..CustomFieldList::default()
        };
        let client = client_for(&server);
        let added = client.envelope_add_custom_fields("e1", &fields).await.unwrap();
        let modified = client
            .envelope_modify_custom_fields("e1", &fields)
            .await
            .unwrap();
        let removed = client
            .envelope_remove_custom_fields("e1", &fields)
            .await
            .unwrap();
        for list in [added, modified, removed] {
            assert_eq!(list.failures().count(), 0);
            assert_eq!(list.value("caseNumber"), Some("C-43"));
        }
    }

    #[tokio::test]
    async fn test_account_custom_fields_wiremock() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(account_path("custom_fields")))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "listCustomFields": [{"fieldId": "3", "name": "region", "listItems": ["EMEA"]}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let fields = client.account_custom_fields().await.unwrap();
        assert_eq!(fields.list_custom_fields[0].list_items, vec!["EMEA"]);
    }
}

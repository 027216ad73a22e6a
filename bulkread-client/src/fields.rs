//! Field-settings API endpoints

use crate::CrmClient;
use crate::error::Result;
use bulkread_core::domain::field::FieldMeta;
use bulkread_core::dto::field::FieldsResponse;
use reqwest::{Method, StatusCode};

impl CrmClient {
    /// Fetch the field schema of a module
    ///
    /// # Arguments
    /// * `module` - Module API name (e.g., "Leads")
    ///
    /// # Returns
    /// Every field the module defines, in the order the API lists them
    pub async fn get_module_fields(&self, module: &str) -> Result<Vec<FieldMeta>> {
        let response = self
            .request(Method::GET, "/crm/v7/settings/fields")
            .query(&[("module", module)])
            .send()
            .await?;

        if response.status() == StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }

        let body: FieldsResponse = self.handle_response(response).await?;
        Ok(body.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_module_fields() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/crm/v7/settings/fields")
                    .query_param("module", "Deals");
                then.status(200).json_body(json!({
                    "fields": [
                        { "api_name": "Deal_Name", "data_type": "text", "field_label": "Deal Name" },
                        { "api_name": "Amount", "data_type": "currency" }
                    ]
                }));
            })
            .await;

        let client = CrmClient::new(server.base_url(), "tok");
        let fields = client.get_module_fields("Deals").await.unwrap();

        mock.assert_async().await;
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].api_name, "Deal_Name");
        assert_eq!(fields[1].data_type, "currency");
    }

    #[tokio::test]
    async fn test_get_module_fields_no_content() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/crm/v7/settings/fields");
                then.status(204);
            })
            .await;

        let client = CrmClient::new(server.base_url(), "tok");
        assert!(client.get_module_fields("Empty").await.unwrap().is_empty());
    }
}

//! Users API endpoints

use crate::CrmClient;
use crate::error::Result;
use bulkread_core::dto::user::UsersResponse;
use reqwest::{Method, StatusCode};

impl CrmClient {
    /// Fetch every user of the organization
    ///
    /// # Returns
    /// Raw user records; empty when the organization has none
    pub async fn fetch_users(&self) -> Result<Vec<serde_json::Value>> {
        let response = self
            .request(Method::GET, "/crm/v7/users")
            .query(&[("type", "AllUsers")])
            .send()
            .await?;

        if response.status() == StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }

        let body: UsersResponse = self.handle_response(response).await?;
        Ok(body.users)
    }
}

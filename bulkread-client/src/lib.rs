//! Bulkread HTTP Client
//!
//! A small, type-safe client for the CRM REST API, centred on submitting
//! bulk-read jobs.
//!
//! # Example
//!
//! ```no_run
//! use bulkread_client::{BulkReader, CrmClient, UserStore};
//! use bulkread_core::domain::request::BulkReadRequest;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = CrmClient::new("https://www.zohoapis.com", "1000.xxxx");
//!     let reader = BulkReader::new(client, UserStore::new("data"));
//!
//!     let request = BulkReadRequest::new("Leads", vec!["Email".into(), "Last_Name".into()]);
//!     let outcome = reader.submit(&request).await?;
//!
//!     println!("Bulk read handle: {}", outcome);
//!     Ok(())
//! }
//! ```

mod bulk;
pub mod error;
mod fields;
mod store;
mod users;
pub mod validator;

// Re-export commonly used types
pub use bulk::{BULK_READ_PATH, BulkReader};
pub use error::{ClientError, Result};
pub use store::{USERS_FILE, UserStore};
pub use validator::{FieldValidator, SchemaFieldValidator};

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use std::fmt;

/// Authenticated HTTP client for the CRM REST API
///
/// Every request carries the configured OAuth access token. Endpoint methods
/// are grouped by resource:
/// - Bulk-read job creation
/// - Module field settings
/// - Users
#[derive(Clone)]
pub struct CrmClient {
    /// Base URL of the API domain (e.g., "https://www.zohoapis.com")
    base_url: String,
    /// OAuth access token, sent as `Zoho-oauthtoken <token>`
    access_token: String,
    /// HTTP client instance
    client: Client,
}

impl CrmClient {
    /// Create a new CRM client
    ///
    /// # Arguments
    /// * `base_url` - The API domain (e.g., "https://www.zohoapis.com")
    /// * `access_token` - A valid OAuth access token
    ///
    /// # Example
    /// ```
    /// use bulkread_client::CrmClient;
    ///
    /// let client = CrmClient::new("https://www.zohoapis.com/", "token");
    /// assert_eq!(client.base_url(), "https://www.zohoapis.com");
    /// ```
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self::with_client(base_url, access_token, Client::new())
    }

    /// Create a new CRM client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.into(),
            client,
        }
    }

    /// Get the base URL of the API domain
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start an authenticated request against `path` (which begins with `/`)
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .header(AUTHORIZATION, format!("Zoho-oauthtoken {}", self.access_token))
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Non-success statuses become [`ClientError::ApiError`] carrying the raw body.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::api_error(status.as_u16(), body));
        }

        serde_json::from_str(&body)
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

impl fmt::Debug for CrmClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrmClient")
            .field("base_url", &self.base_url)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

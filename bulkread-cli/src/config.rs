//! Configuration module
//!
//! Handles CLI configuration: API domain, credentials and export location.

use bulkread_client::{BulkReader, CrmClient, UserStore};
use std::path::PathBuf;

/// API domain used when none is configured
pub const DEFAULT_API_DOMAIN: &str = "https://www.zohoapis.com";

/// Export directory used when none is configured
pub const DEFAULT_DATA_DIR: &str = "data";

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the CRM API (e.g., "https://www.zohoapis.in")
    pub api_domain: String,

    /// OAuth access token; refreshing it is left to the caller
    pub access_token: String,

    /// Where direct exports such as `users.json` are written
    pub data_dir: PathBuf,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.access_token.trim().is_empty() {
            anyhow::bail!("access_token cannot be empty");
        }

        if self.api_domain.is_empty() {
            anyhow::bail!("api_domain cannot be empty");
        }

        if !self.api_domain.starts_with("http://") && !self.api_domain.starts_with("https://") {
            anyhow::bail!("api_domain must start with http:// or https://");
        }

        if self.data_dir.as_os_str().is_empty() {
            anyhow::bail!("data_dir cannot be empty");
        }

        Ok(())
    }

    pub fn client(&self) -> CrmClient {
        CrmClient::new(&self.api_domain, &self.access_token)
    }

    pub fn store(&self) -> UserStore {
        UserStore::new(&self.data_dir)
    }

    pub fn reader(&self) -> BulkReader {
        BulkReader::new(self.client(), self.store())
    }
}

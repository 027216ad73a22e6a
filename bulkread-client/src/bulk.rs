//! Bulk-read job submission

use bulkread_core::domain::job::{BulkReadOutcome, JobId};
use bulkread_core::domain::request::BulkReadRequest;
use bulkread_core::dto::bulk_read::{BulkReadBody, BulkReadResponse};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use tracing::{debug, info, warn};

use crate::CrmClient;
use crate::error::{ClientError, Result};
use crate::store::{USERS_FILE, UserStore};
use crate::validator::{FieldValidator, SchemaFieldValidator};

/// Endpoint that creates bulk-read jobs
pub const BULK_READ_PATH: &str = "/crm/bulk/v7/read";

impl CrmClient {
    /// Create a bulk-read job from a prepared body
    ///
    /// # Arguments
    /// * `body` - The job definition
    ///
    /// # Returns
    /// The vendor job ID. Only `201 Created` counts as success; any other
    /// status is an error carrying the raw response body.
    pub async fn create_bulk_read_job(&self, body: &BulkReadBody) -> Result<JobId> {
        let payload = serde_json::to_vec(body)?;
        debug!("Request body: {}", String::from_utf8_lossy(&payload));

        let response = self
            .request(Method::POST, BULK_READ_PATH)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if status != StatusCode::CREATED {
            return Err(ClientError::api_error(status.as_u16(), text));
        }

        let parsed: BulkReadResponse = serde_json::from_str(&text)
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))?;

        parsed
            .job_id()
            .and_then(JobId::new)
            .ok_or(ClientError::MissingJobId)
    }
}

/// Submits bulk-read requests, exporting the users module directly since the
/// vendor offers no bulk read for it
#[derive(Debug, Clone)]
pub struct BulkReader {
    client: CrmClient,
    store: UserStore,
}

impl BulkReader {
    pub fn new(client: CrmClient, store: UserStore) -> Self {
        Self { client, store }
    }

    pub fn client(&self) -> &CrmClient {
        &self.client
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    /// Submit a bulk read, validating fields against the live module schema
    ///
    /// # Example
    /// ```no_run
    /// # use bulkread_client::{BulkReader, CrmClient, UserStore};
    /// # use bulkread_core::domain::request::BulkReadRequest;
    /// # async fn example() -> anyhow::Result<()> {
    /// let reader = BulkReader::new(
    ///     CrmClient::new("https://www.zohoapis.com", "token"),
    ///     UserStore::new("data"),
    /// );
    /// let request = BulkReadRequest::new("Deals", vec!["Deal_Name".into(), "Amount".into()])
    ///     .with_since("2024-01-01T00:00:00+00:00");
    /// let outcome = reader.submit(&request).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn submit(&self, request: &BulkReadRequest) -> Result<BulkReadOutcome> {
        let mut validator = SchemaFieldValidator::new(&self.client, request.module.clone());
        self.submit_with(&mut validator, request).await
    }

    /// Submit a bulk read using the given field validator
    pub async fn submit_with<V>(
        &self,
        validator: &mut V,
        request: &BulkReadRequest,
    ) -> Result<BulkReadOutcome>
    where
        V: FieldValidator + ?Sized,
    {
        let module = request.module.as_str();
        if module.trim().is_empty() {
            return Err(ClientError::InvalidRequest(
                "module name cannot be empty".to_string(),
            ));
        }

        info!("Starting bulk read for module {}", module);

        if request.is_users_module() {
            info!("{} module doesn't support bulk read, fetching directly", module);
            self.export_users().await?;
            return Ok(BulkReadOutcome::UsersFetched);
        }

        debug!("Validating fields against {} schema", validator.module());
        validator
            .initialize()
            .await
            .map_err(|e| ClientError::ValidatorInit {
                module: module.to_string(),
                source: Box::new(e),
            })?;

        let validation =
            validator
                .validate(&request.fields)
                .map_err(|e| ClientError::FieldValidation {
                    module: module.to_string(),
                    source: Box::new(e),
                })?;

        if !validation.skipped.is_empty() {
            warn!(
                "Skipped fields for bulk read in {}: {:?}",
                module, validation.skipped
            );
        }

        if validation.is_empty() {
            return Err(ClientError::NoValidFields {
                module: module.to_string(),
            });
        }

        info!(
            "Submitting bulk read job for {} with fields: {:?}",
            module, validation.valid
        );

        let body = BulkReadBody::new(module, validation.valid, request.criteria());
        let job_id = self.client.create_bulk_read_job(&body).await?;

        info!(
            "Successfully submitted bulk read job for {}. Job ID: {}",
            module, job_id
        );
        Ok(BulkReadOutcome::Submitted(job_id))
    }

    /// Fetch all users and write them to the data directory
    async fn export_users(&self) -> Result<()> {
        let users = self
            .client
            .fetch_users()
            .await
            .map_err(|e| ClientError::UsersFetch(Box::new(e)))?;

        info!("Fetched {} user(s)", users.len());
        self.store.save(USERS_FILE, &users)?;
        Ok(())
    }
}

//! Submit command handler

use anyhow::{Context, Result};
use bulkread_client::{BulkReader, FieldValidator, SchemaFieldValidator};
use bulkread_core::domain::job::BulkReadOutcome;
use bulkread_core::domain::request::BulkReadRequest;
use chrono::DateTime;
use clap::Args;
use colored::*;

use crate::config::Config;

#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Module API name (e.g. Leads, Deals, Users)
    #[arg(short, long)]
    pub module: String,

    /// Comma-separated field API names
    #[arg(short, long, value_delimiter = ',')]
    pub fields: Vec<String>,

    /// Request every bulk-readable field of the module
    #[arg(long, conflicts_with = "fields")]
    pub all_fields: bool,

    /// Only export records modified after this RFC 3339 timestamp
    #[arg(long)]
    pub since: Option<String>,
}

/// Handle `bulkread submit`
pub async fn handle_submit(args: SubmitArgs, config: &Config) -> Result<()> {
    let reader = config.reader();
    let outcome = submit(&reader, &args).await?;

    match outcome {
        BulkReadOutcome::Submitted(job_id) => {
            println!("{} Bulk read job submitted", "✓".green());
            println!("  Module: {}", args.module.cyan());
            println!("  Job ID: {}", job_id.to_string().bold());
        }
        BulkReadOutcome::UsersFetched => {
            println!(
                "{} {} has no bulk read; users exported to {}",
                "✓".green(),
                args.module.cyan(),
                reader.store().data_dir().display()
            );
        }
    }

    Ok(())
}

/// Build the request from the arguments and submit it
///
/// With `--all-fields` the module schema is loaded once and reused for
/// validation. The users module never loads a schema.
async fn submit(reader: &BulkReader, args: &SubmitArgs) -> Result<BulkReadOutcome> {
    if let Some(since) = &args.since {
        DateTime::parse_from_rfc3339(since)
            .with_context(|| format!("--since must be an RFC 3339 timestamp, got {:?}", since))?;
    }

    let mut request = BulkReadRequest::new(&args.module, args.fields.clone());
    if let Some(since) = &args.since {
        request = request.with_since(since.clone());
    }

    let submitted = if args.all_fields && !request.is_users_module() {
        let mut validator = SchemaFieldValidator::new(reader.client(), args.module.clone());
        validator
            .initialize()
            .await
            .with_context(|| format!("Failed to load fields for {}", args.module))?;
        request.fields = validator.bulk_readable_fields()?;
        reader.submit_with(&mut validator, &request).await
    } else {
        reader.submit(&request).await
    };

    submitted.with_context(|| format!("Bulk read submission failed for {}", args.module))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulkread_client::{BULK_READ_PATH, USERS_FILE};
    use httpmock::prelude::*;
    use serde_json::json;

    fn config(server: &MockServer, data_dir: &std::path::Path) -> Config {
        Config {
            api_domain: server.base_url(),
            access_token: "tok".to_string(),
            data_dir: data_dir.to_path_buf(),
        }
    }

    fn all_fields_args(module: &str) -> SubmitArgs {
        SubmitArgs {
            module: module.to_string(),
            fields: Vec::new(),
            all_fields: true,
            since: None,
        }
    }

    #[tokio::test]
    async fn test_all_fields_for_users_skips_schema() {
        let server = MockServer::start_async().await;
        let tmp = tempfile::tempdir().unwrap();
        let schema = server
            .mock_async(|when, then| {
                when.method(GET).path("/crm/v7/settings/fields");
                then.status(400).body(r#"{"code":"INVALID_MODULE"}"#);
            })
            .await;
        let users = server
            .mock_async(|when, then| {
                when.method(GET).path("/crm/v7/users");
                then.status(200).json_body(json!({ "users": [{ "id": "1" }] }));
            })
            .await;

        let reader = config(&server, tmp.path()).reader();
        let outcome = submit(&reader, &all_fields_args("Users")).await.unwrap();

        assert_eq!(outcome, BulkReadOutcome::UsersFetched);
        assert_eq!(schema.hits_async().await, 0);
        users.assert_async().await;
        assert!(tmp.path().join(USERS_FILE).exists());
    }

    #[tokio::test]
    async fn test_all_fields_loads_schema_once() {
        let server = MockServer::start_async().await;
        let tmp = tempfile::tempdir().unwrap();
        let schema = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/crm/v7/settings/fields")
                    .query_param("module", "Leads");
                then.status(200).json_body(json!({
                    "fields": [
                        { "api_name": "Email", "data_type": "email" },
                        { "api_name": "Line_Items", "data_type": "subform" },
                        { "api_name": "Last_Name", "data_type": "text" }
                    ]
                }));
            })
            .await;
        let bulk = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(BULK_READ_PATH)
                    .json_body_partial(r#"{ "query": { "fields": ["Email", "Last_Name"] } }"#);
                then.status(201)
                    .json_body(json!({ "data": [{ "details": { "id": "777" } }] }));
            })
            .await;

        let reader = config(&server, tmp.path()).reader();
        let outcome = submit(&reader, &all_fields_args("Leads")).await.unwrap();

        assert_eq!(outcome.as_str(), "777");
        schema.assert_async().await;
        bulk.assert_async().await;
    }

    #[tokio::test]
    async fn test_invalid_since_rejected_before_any_request() {
        let server = MockServer::start_async().await;
        let tmp = tempfile::tempdir().unwrap();
        let any = server
            .mock_async(|when, then| {
                when.any_request();
                then.status(500);
            })
            .await;

        let args = SubmitArgs {
            module: "Leads".to_string(),
            fields: vec!["Email".to_string()],
            all_fields: false,
            since: Some("yesterday".to_string()),
        };
        let reader = config(&server, tmp.path()).reader();
        let err = submit(&reader, &args).await.unwrap_err();

        assert!(err.to_string().contains("RFC 3339"));
        assert_eq!(any.hits_async().await, 0);
    }
}

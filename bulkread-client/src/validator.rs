//! Field validation against a module schema
//!
//! Bulk-read jobs fail on the vendor side if any requested field is unknown
//! or of a type the export cannot serialize. Validators filter a candidate
//! list down to the fields that will succeed.
//!
//! The trait exists so the submitter can be driven by a stub in tests.

use async_trait::async_trait;
use bulkread_core::domain::field::{FieldMeta, FieldValidation};
use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::CrmClient;
use crate::error::{ClientError, Result};

/// Filters candidate field names for a single module
#[async_trait]
pub trait FieldValidator: Send + Sync {
    /// Module this validator checks fields for
    fn module(&self) -> &str;

    /// Load whatever schema information validation needs
    ///
    /// Calling it again on an initialized validator may reuse what was loaded.
    async fn initialize(&mut self) -> Result<()>;

    /// Split `fields` into those to request and those to skip
    ///
    /// Must be called after [`FieldValidator::initialize`].
    fn validate(&self, fields: &[String]) -> Result<FieldValidation>;
}

/// Validator backed by the module's field settings
pub struct SchemaFieldValidator<'a> {
    client: &'a CrmClient,
    module: String,
    schema: Option<Vec<FieldMeta>>,
}

impl<'a> SchemaFieldValidator<'a> {
    pub fn new(client: &'a CrmClient, module: impl Into<String>) -> Self {
        Self {
            client,
            module: module.into(),
            schema: None,
        }
    }

    /// Loaded schema, if initialized
    pub fn schema(&self) -> Option<&[FieldMeta]> {
        self.schema.as_deref()
    }

    /// Every schema field a bulk-read job may include, in schema order
    pub fn bulk_readable_fields(&self) -> Result<Vec<String>> {
        let schema = self.loaded()?;
        Ok(schema
            .iter()
            .filter(|f| f.is_bulk_readable())
            .map(|f| f.api_name.clone())
            .collect())
    }

    fn loaded(&self) -> Result<&[FieldMeta]> {
        self.schema
            .as_deref()
            .ok_or_else(|| ClientError::ValidatorNotInitialized {
                module: self.module.clone(),
            })
    }
}

#[async_trait]
impl FieldValidator for SchemaFieldValidator<'_> {
    fn module(&self) -> &str {
        &self.module
    }

    async fn initialize(&mut self) -> Result<()> {
        if self.schema.is_some() {
            return Ok(());
        }
        let fields = self.client.get_module_fields(&self.module).await?;
        debug!("Loaded {} field(s) for {}", fields.len(), self.module);
        self.schema = Some(fields);
        Ok(())
    }

    fn validate(&self, fields: &[String]) -> Result<FieldValidation> {
        let schema: HashMap<&str, &FieldMeta> = self
            .loaded()?
            .iter()
            .map(|f| (f.api_name.as_str(), f))
            .collect();

        let mut seen = HashSet::new();
        let mut result = FieldValidation::default();

        for name in fields.iter().map(|f| f.trim()) {
            if name.is_empty() || !seen.insert(name) {
                continue;
            }
            match schema.get(name) {
                Some(meta) if meta.is_bulk_readable() => result.valid.push(name.to_string()),
                _ => result.skipped.push(name.to_string()),
            }
        }

        Ok(result)
    }
}

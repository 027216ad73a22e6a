//! Fields command handler

use anyhow::{Context, Result};
use colored::*;

use crate::config::Config;

/// List the fields of a module, marking those a bulk read can include
pub async fn list_fields(config: &Config, module: &str) -> Result<()> {
    let client = config.client();
    let fields = client
        .get_module_fields(module)
        .await
        .with_context(|| format!("Failed to fetch fields for {}", module))?;

    if fields.is_empty() {
        println!("{}", format!("No fields found for {}.", module).yellow());
        return Ok(());
    }

    let readable = fields.iter().filter(|f| f.is_bulk_readable()).count();
    println!(
        "{}",
        format!(
            "{} field(s) in {} ({} bulk-readable):",
            fields.len(),
            module,
            readable
        )
        .bold()
    );
    println!();

    for field in &fields {
        let marker = if field.is_bulk_readable() {
            "✓".green()
        } else {
            "✗".red()
        };
        println!(
            "  {} {:<32} {}",
            marker,
            field.api_name,
            field.data_type.dimmed()
        );
    }

    Ok(())
}

//! Users command handler

use anyhow::{Context, Result};
use bulkread_client::USERS_FILE;
use colored::*;

use crate::config::Config;

/// Fetch all users and save them as `users.json`
pub async fn export_users(config: &Config) -> Result<()> {
    let users = config
        .client()
        .fetch_users()
        .await
        .context("Failed to fetch users")?;

    let path = config
        .store()
        .save(USERS_FILE, &users)
        .context("Failed to save users data")?;

    println!(
        "{} Exported {} user(s) to {}",
        "✓".green(),
        users.len(),
        path.display().to_string().cyan()
    );

    Ok(())
}

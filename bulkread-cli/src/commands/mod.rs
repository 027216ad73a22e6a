//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod fields;
mod submit;
mod users;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Submit a bulk-read job for a module
    Submit(submit::SubmitArgs),
    /// List a module's fields and whether they can be bulk-read
    Fields {
        /// Module API name (e.g. Leads)
        #[arg(short, long)]
        module: String,
    },
    /// Export all users to the data directory
    Users,
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Submit(args) => submit::handle_submit(args, config).await,
        Commands::Fields { module } => fields::list_fields(config, &module).await,
        Commands::Users => users::export_users(config).await,
    }
}

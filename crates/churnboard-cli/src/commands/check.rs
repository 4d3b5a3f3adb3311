//! Check command implementation.

use anyhow::Result;
use churnboard_core::storage::JsonAccountStore;
use churnboard_core::{AuthService, PasswordAuthService};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;

/// Run the check command.
pub async fn run(username: String, password: String, accounts: PathBuf) -> Result<()> {
    tracing::debug!("checking credentials against {}", accounts.display());
    let auth = PasswordAuthService::new(Arc::new(JsonAccountStore::new(&accounts)));

    if auth.log_in(&username, &password).await? {
        println!("{} Credentials valid for {}", "✓".green(), username);
    } else {
        println!("{} Invalid credentials", "✗".red());
    }

    Ok(())
}

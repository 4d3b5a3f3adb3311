//! Signup command implementation.

use anyhow::Result;
use churnboard_core::storage::JsonAccountStore;
use churnboard_core::{AuthService, PasswordAuthService, SignUpOutcome};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;

/// Run the signup command.
pub async fn run(username: String, password: String, accounts: PathBuf) -> Result<()> {
    let auth = PasswordAuthService::new(Arc::new(JsonAccountStore::new(&accounts)));

    match auth.sign_up(&username, &password).await? {
        SignUpOutcome::Created => {
            println!("{} Account created successfully.", "✓".green());
        }
        SignUpOutcome::AlreadyExists => {
            println!("{} Username already exists: {}", "✗".red(), username);
        }
    }

    Ok(())
}

//! Stats command implementation.

use anyhow::Result;
use churnboard_core::storage::{AccountStore, JsonAccountStore};
use colored::Colorize;
use std::path::PathBuf;

/// Run the stats command.
pub async fn run(accounts: PathBuf) -> Result<()> {
    // Check if the accounts file exists
    if !accounts.exists() {
        eprintln!(
            "{} Accounts file not found: {}",
            "✗".red(),
            accounts.display()
        );
        eprintln!("Run 'churnboard signup' first to create an account.");
        return Ok(());
    }

    println!("{} Account Statistics", "→".blue());
    println!();

    // Load the roster
    let store = JsonAccountStore::new(&accounts);
    let roster = store.load().await?;

    // Get file size
    let file_size = std::fs::metadata(&accounts)?.len();

    println!("  Accounts file: {}", accounts.display());
    println!("  Accounts: {}", roster.len().to_string().green());
    println!("  File size: {} bytes", file_size);

    if !roster.is_empty() {
        println!();
        println!("  Usernames:");
        for account in &roster.users {
            println!("    {}", account.username);
        }
    }

    Ok(())
}

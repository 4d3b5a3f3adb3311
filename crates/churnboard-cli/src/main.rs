//! Churnboard CLI
//!
//! Command-line account administration for the Churnboard dashboard. Operates
//! on the same accounts file the server uses.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "churnboard")]
#[command(author, version, about = "Churnboard account administration", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account
    Signup {
        /// Username for the new account
        username: String,

        /// Plaintext password (stored as a digest)
        password: String,

        /// Accounts file path
        #[arg(short, long, default_value = "users.json")]
        accounts: PathBuf,
    },

    /// Check a username/password pair against stored accounts
    Check {
        /// Username to check
        username: String,

        /// Password to check
        password: String,

        /// Accounts file path
        #[arg(short, long, default_value = "users.json")]
        accounts: PathBuf,
    },

    /// Show account statistics
    Stats {
        /// Accounts file path
        #[arg(short, long, default_value = "users.json")]
        accounts: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("churnboard_cli=debug,churnboard_core=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("churnboard_cli=info,churnboard_core=info")
            .init();
    }

    match cli.command {
        Commands::Signup {
            username,
            password,
            accounts,
        } => {
            commands::signup::run(username, password, accounts).await?;
        }
        Commands::Check {
            username,
            password,
            accounts,
        } => {
            commands::check::run(username, password, accounts).await?;
        }
        Commands::Stats { accounts } => {
            commands::stats::run(accounts).await?;
        }
    }

    Ok(())
}

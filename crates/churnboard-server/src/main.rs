use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "churnboard-server")]
#[command(author, version, about = "Churnboard HTTP API Server", long_about = None)]
struct Cli {
    /// Accounts file path
    #[arg(short, long, default_value = "users.json")]
    accounts: PathBuf,

    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Verbose output
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "churnboard_server=debug,churnboard_core=debug,tower_http=debug"
    } else {
        "churnboard_server=info,churnboard_core=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    churnboard_server::start(cli.accounts, cli.port).await?;

    Ok(())
}

//! Main entry point for the bicdir CLI application.
//!
//! Fetches a BIC directory archive from a local path or HTTP URL and
//! prints the extracted account records.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bicdir::{Account, Cli, HttpByteSource, LocalFileSource, get_accounts};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let accounts = if cli.is_http_url() {
        let source = HttpByteSource::new(cli.locator.clone())?;
        get_accounts(&source).await?
    } else {
        let source = LocalFileSource::new(&cli.locator);
        get_accounts(&source).await?
    };

    print_accounts(&accounts, &cli)
}

/// Print records either as tab-separated lines or as a JSON array.
fn print_accounts(accounts: &[Account], cli: &Cli) -> Result<()> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(accounts)?);
        return Ok(());
    }

    for account in accounts {
        println!(
            "{}\t{}\t{}",
            account.bic, account.corr_account, account.name
        );
    }

    if !cli.quiet {
        eprintln!("\n{} accounts from {}", accounts.len(), cli.locator);
    }

    Ok(())
}

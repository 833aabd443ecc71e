use anyhow::Context;
use ban_checker::batch::{BatchClient, Platform};
use ban_checker::utils::split_identifiers;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::AsyncReadExt;

/// Check a newline-separated list of accounts against a running ban checker.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Platform to check.
    #[arg(value_enum)]
    platform: Platform,

    /// File with one identifier per line; stdin when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Base URL of the ban checker server.
    #[arg(long, env = "BAN_CHECKER_URL", default_value = "http://127.0.0.1:3000")]
    server: String,

    /// Write good accounts here instead of stdout.
    #[arg(long)]
    good_out: Option<PathBuf>,

    /// Write bad accounts here instead of stdout.
    #[arg(long)]
    bad_out: Option<PathBuf>,

    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args = Args::parse();

    let text = match &args.input {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            buf
        }
    };

    let identifiers = split_identifiers(&text);
    if identifiers.is_empty() {
        tracing::warn!("No identifiers given");
        return Ok(());
    }

    let client = BatchClient::new(&args.server, Duration::from_secs(args.timeout_secs))?;
    tracing::info!("Checking {} {:?} account(s) via {}", identifiers.len(), args.platform, args.server);

    let report = client.check_all(args.platform, &identifiers).await;

    if let Some(message) = &report.first_error {
        tracing::error!("An error occurred while checking some accounts: {}", message);
    }

    let good = report.good.join("\n");
    let bad = report.bad.join("\n");

    match &args.good_out {
        Some(path) => tokio::fs::write(path, &good).await?,
        None => println!("# Good ({})\n{}", report.good.len(), good),
    }
    match &args.bad_out {
        Some(path) => tokio::fs::write(path, &bad).await?,
        None => println!("# Bad ({})\n{}", report.bad.len(), bad),
    }

    Ok(())
}

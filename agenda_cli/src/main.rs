use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{ArgGroup, Parser};

use agenda_lib::pipeline::{self, EventSelector};
use agenda_lib::{writer, Client, RetryPolicy, DEFAULT_CONCURRENCY, DEFAULT_OUTPUT_FILE};

#[derive(Parser)]
#[command(name = "agenda-extract")]
#[command(about = "Extract an enriched meeting agenda from the Legistar Web API")]
#[command(group(ArgGroup::new("selector").required(true).args(["date", "event_id"])))]
struct Cli {
    /// Meeting date to resolve, YYYY-MM-DD
    #[arg(long, value_parser = parse_date)]
    date: Option<NaiveDate>,

    /// Skip date resolution and use this event id directly
    #[arg(long)]
    event_id: Option<i64>,

    /// Legistar client code (tenant)
    #[arg(long, default_value = "HarrisCountyTx")]
    client_code: String,

    /// Base URL of the Legistar Web API
    #[arg(long, default_value = "https://webapi.legistar.com/v1/")]
    base_url: String,

    /// Maximum concurrent enrichment fetches
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    concurrency: usize,

    /// Attempts per fetch before giving up
    #[arg(long, default_value_t = 3)]
    max_attempts: u32,

    /// Seconds to wait between attempts
    #[arg(long, default_value_t = 1)]
    retry_delay_secs: u64,

    /// Per-attempt timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Output file path
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    out: PathBuf,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{}', expected YYYY-MM-DD", s))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("agenda_lib=info".parse().unwrap())
                .add_directive("legistar_api=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let policy = RetryPolicy {
        max_attempts: cli.max_attempts,
        delay: Duration::from_secs(cli.retry_delay_secs),
        timeout: Duration::from_secs(cli.timeout_secs),
    };
    let client = Client::with_base_url(&cli.base_url, &cli.client_code).with_policy(policy);

    // The arg group guarantees exactly one selector is present.
    let selector = match (cli.date, cli.event_id) {
        (Some(date), _) => EventSelector::Date(date),
        (None, Some(event_id)) => EventSelector::Known(event_id),
        (None, None) => unreachable!("clap enforces the selector group"),
    };

    match pipeline::run(&client, selector, cli.concurrency).await {
        Some(items) => {
            writer::write_items(&cli.out, &items)?;
            println!("Extracted data saved to {}", cli.out.display());
        }
        None => {
            println!("No event items to process; nothing written.");
        }
    }

    Ok(())
}

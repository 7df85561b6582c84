//! Fetches every page of a topic and reports pages without a main content
//! region. With `--json`, extracted regions are printed as JSON lines.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use qnabot_pages::{
    BlockingClient, Config, ContentSelector, EmptinessCheck, Options, PageFetcher, DEFAULT_CLASS,
    DEFAULT_CONFIG_PATH, DEFAULT_TAG, DEFAULT_TOPIC,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "parse_pages")]
#[command(about = "Fetch topic pages and extract their main content region", long_about = None)]
struct Cli {
    /// JSON file mapping topic names to page URLs
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Topic whose pages are fetched
    #[arg(long, default_value = DEFAULT_TOPIC)]
    topic: String,

    /// Never report pages as failed, even when no region matches
    #[arg(long)]
    literal: bool,

    /// Tag of the content region
    #[arg(long, default_value = DEFAULT_TAG)]
    tag: String,

    /// Class of the content region
    #[arg(long, default_value = DEFAULT_CLASS)]
    class: String,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long)]
    timeout: Option<u64>,

    /// Print each extracted region as a JSON line
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct PageRecord<'a> {
    url: &'a str,
    status: u16,
    fetched_at: DateTime<Utc>,
    nodes: usize,
    text: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("qnabot_pages=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let options = Options {
        selector: ContentSelector::new(cli.tag, cli.class),
        emptiness_check: if cli.literal {
            EmptinessCheck::Literal
        } else {
            EmptinessCheck::Intended
        },
        timeout: cli.timeout.map(Duration::from_secs),
        ..Options::default()
    };

    let config = Config::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    let client = BlockingClient::new(&options)?;
    let fetcher = PageFetcher::new(client, options);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.json {
        fetcher
            .run_topic(&cli.topic, &config, &mut out)
            .with_context(|| format!("fetching topic {}", cli.topic))?;
        return Ok(());
    }

    for report in fetcher
        .fetch_topic_content(&cli.topic, &config)
        .with_context(|| format!("fetching topic {}", cli.topic))?
    {
        let report = report?;
        if let Some(line) = report.diagnostic() {
            writeln!(out, "{line}")?;
            continue;
        }
        if let Some(region) = report.region() {
            let record = PageRecord {
                url: &report.url,
                status: report.status,
                fetched_at: report.fetched_at,
                nodes: region.len(),
                text: region.text(),
            };
            writeln!(out, "{}", serde_json::to_string(&record)?)?;
        }
    }

    Ok(())
}

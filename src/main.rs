use std::io::{self, Read, Write};

use anyhow::Context;
use dotenv::dotenv;
use log::{LevelFilter, info};
use posting_enricher::{EnrichConfig, Enricher, PostingRecord};

extern crate env_logger;
extern crate log;

// Reads a JSON array of postings on stdin and writes it back on stdout with
// the missing LinkedIn descriptions filled in.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = EnrichConfig::from_env()?;
    let enricher = Enricher::from_config(&config)?;

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read postings from stdin")?;
    let mut postings: Vec<PostingRecord> =
        serde_json::from_str(&input).context("stdin is not a JSON array of postings")?;

    let mut report_progress = |done: usize, total: usize| -> anyhow::Result<()> {
        info!("Fetching LinkedIn description {done}/{total}");
        Ok(())
    };
    enricher
        .enrich(&mut postings, Some(&mut report_progress))
        .await;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &postings)?;
    writeln!(stdout)?;
    Ok(())
}

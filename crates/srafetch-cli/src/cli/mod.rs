//! CLI for the srafetch run-record fetcher.

mod commands;

use anyhow::Result;
use clap::Parser;
use srafetch_core::config;

use commands::run_fetch;

/// Fetch a run record from the sequencing-read archive and print the
/// constructed URL followed by the raw response body.
#[derive(Debug, Parser)]
#[command(name = "srafetch")]
#[command(about = "Fetch an SRA run record by accession", long_about = None)]
pub struct Cli {
    /// Run accession, e.g. SRR000001.
    pub accession: String,

    /// Override the configured base URL of the record endpoint.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let base = cli.base_url.as_deref().unwrap_or(&cfg.base_url);
        run_fetch(&cfg, base, &cli.accession, &mut std::io::stdout())
    }
}

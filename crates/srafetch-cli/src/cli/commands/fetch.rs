//! `srafetch <accession>` – fetch and print one run record.

use anyhow::{Context, Result};
use std::io::Write;
use std::time::Duration;

use srafetch_core::config::SraFetchConfig;
use srafetch_core::fetch::{fetch_run, FetchOutcome};
use srafetch_core::transport::{CurlTransport, HttpGet};

/// Fetches `accession` against `base` with the configured timeouts and writes
/// the output contract to `out`: the request URL on one line, then the body.
pub fn run_fetch(
    cfg: &SraFetchConfig,
    base: &str,
    accession: &str,
    out: &mut impl Write,
) -> Result<()> {
    let transport = CurlTransport {
        connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
        timeout: Duration::from_secs(cfg.timeout_secs),
    };
    fetch_and_print(&transport, base, accession, out)
}

/// Transport-generic body of `run_fetch`; tests drive it with an in-memory
/// transport.
///
/// The body is printed whatever the HTTP status was; nothing is printed when
/// the transfer itself fails.
pub(crate) fn fetch_and_print<T: HttpGet>(
    transport: &T,
    base: &str,
    accession: &str,
    out: &mut impl Write,
) -> Result<()> {
    let FetchOutcome { url, status, body } = fetch_run(transport, base, accession)
        .with_context(|| format!("failed to fetch run {accession}"))?;
    tracing::info!("fetched {} (HTTP {}, {} bytes)", url, status, body.len());

    writeln!(out, "{}", url)?;
    writeln!(out, "{}", String::from_utf8_lossy(&body))?;
    Ok(())
}

//! Blocking HTTP GET behind a small trait.
//!
//! The fetch path talks to `HttpGet` instead of libcurl directly so it can be
//! exercised against an in-memory transport in tests. `CurlTransport` is the
//! production implementation (curl crate, redirects followed, explicit
//! timeouts).

use std::time::Duration;

use thiserror::Error;

/// Raw result of a GET: final status code (after redirects) and the body
/// bytes exactly as received. No schema is assumed for the body.
#[derive(Debug, Clone)]
pub struct GetResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

/// Failure below the HTTP layer: DNS, connect, TLS, timeout.
///
/// A response that arrived, whatever its status code, is not a
/// `TransportError`.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Curl(#[from] curl::Error),
    #[error("connection failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Minimal blocking HTTP GET client.
pub trait HttpGet {
    fn get(&self, url: &str) -> Result<GetResponse, TransportError>;
}

/// libcurl-backed transport. One Easy handle per request; the body is
/// collected in memory (record pages are small).
#[derive(Debug, Clone, Copy)]
pub struct CurlTransport {
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(60),
        }
    }
}

impl HttpGet for CurlTransport {
    fn get(&self, url: &str) -> Result<GetResponse, TransportError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        Ok(GetResponse { status, body })
    }
}

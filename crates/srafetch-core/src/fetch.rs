//! The fetch operation: one accession, one GET, one outcome.

use thiserror::Error;
use url::Url;

use crate::run_url;
use crate::transport::{HttpGet, TransportError};

/// Error from building the request URL or performing the transfer.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The accession argument was present but empty.
    #[error("accession must be non-empty")]
    EmptyAccession,
    /// The base URL did not parse.
    #[error("invalid base URL: {0}")]
    Url(#[from] url::ParseError),
    /// The request never produced a response.
    #[error("transfer failed: {0}")]
    Transfer(#[from] TransportError),
}

/// Result of a completed fetch.
///
/// A non-2xx `status` is not an error: the archive serves error pages with a
/// normal body, so the body is returned regardless and the status is left for
/// the caller to inspect.
#[derive(Debug)]
pub struct FetchOutcome {
    /// The fully constructed request URL.
    pub url: Url,
    /// Final HTTP status code after redirects.
    pub status: u32,
    /// Raw response body as received.
    pub body: Vec<u8>,
}

/// Fetches the record for `accession` with exactly one GET against `base`.
///
/// No retries: a transport failure is returned to the caller as-is.
pub fn fetch_run<T: HttpGet>(
    transport: &T,
    base: &str,
    accession: &str,
) -> Result<FetchOutcome, FetchError> {
    let url = run_url::run_record_url(base, accession)?;
    tracing::debug!("GET {}", url);

    let resp = transport.get(url.as_str())?;
    if !(200..300).contains(&resp.status) {
        tracing::warn!("GET {} returned HTTP {}", url, resp.status);
    }

    Ok(FetchOutcome {
        url,
        status: resp.status,
        body: resp.body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run_url::DEFAULT_BASE_URL;
    use crate::transport::GetResponse;
    use std::cell::RefCell;
    use std::io;

    /// Records the requested URL and replays a canned response.
    struct MockTransport {
        requested: RefCell<Vec<String>>,
        status: u32,
        body: &'static [u8],
    }

    impl MockTransport {
        fn with_body(status: u32, body: &'static [u8]) -> Self {
            Self {
                requested: RefCell::new(Vec::new()),
                status,
                body,
            }
        }
    }

    impl HttpGet for MockTransport {
        fn get(&self, url: &str) -> Result<GetResponse, TransportError> {
            self.requested.borrow_mut().push(url.to_string());
            Ok(GetResponse {
                status: self.status,
                body: self.body.to_vec(),
            })
        }
    }

    /// Always fails as if the connection never happened.
    struct RefusedTransport;

    impl HttpGet for RefusedTransport {
        fn get(&self, _url: &str) -> Result<GetResponse, TransportError> {
            Err(TransportError::Io(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "connection refused",
            )))
        }
    }

    #[test]
    fn fetch_returns_url_status_and_body() {
        let transport = MockTransport::with_body(200, b"<html>run record</html>");
        let out = fetch_run(&transport, DEFAULT_BASE_URL, "SRR000001").unwrap();

        assert_eq!(
            out.url.as_str(),
            "https://trace.ncbi.nlm.nih.gov/Traces/sra/?run=SRR000001"
        );
        assert_eq!(out.status, 200);
        assert_eq!(out.body, b"<html>run record</html>");

        let requested = transport.requested.borrow();
        assert_eq!(requested.as_slice(), [out.url.as_str()]);
    }

    #[test]
    fn non_2xx_status_is_not_an_error() {
        let transport = MockTransport::with_body(404, b"no such run");
        let out = fetch_run(&transport, DEFAULT_BASE_URL, "SRR999999").unwrap();
        assert_eq!(out.status, 404);
        assert_eq!(out.body, b"no such run");
    }

    #[test]
    fn transport_failure_propagates() {
        match fetch_run(&RefusedTransport, DEFAULT_BASE_URL, "SRR000001") {
            Err(FetchError::Transfer(_)) => {}
            other => panic!("expected Transfer error, got {:?}", other),
        }
    }

    #[test]
    fn empty_accession_skips_the_network() {
        let transport = MockTransport::with_body(200, b"");
        match fetch_run(&transport, DEFAULT_BASE_URL, "") {
            Err(FetchError::EmptyAccession) => {}
            other => panic!("expected EmptyAccession, got {:?}", other),
        }
        assert!(transport.requested.borrow().is_empty());
    }
}

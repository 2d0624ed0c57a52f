//! Request-URL construction for run accessions.
//!
//! The accession goes into the `run` query parameter of the archive's record
//! endpoint. Building through the `url` crate keeps the value percent-encoded,
//! so an accession containing reserved characters cannot mangle the URL.

use url::Url;

use crate::fetch::FetchError;

/// Default base of the NCBI Trace/SRA record endpoint.
pub const DEFAULT_BASE_URL: &str = "https://trace.ncbi.nlm.nih.gov/Traces/sra/";

/// Builds the record URL for `accession` against `base`.
///
/// The accession is appended as the value of the `run` query parameter,
/// percent-encoded. An empty accession is rejected before any URL work.
pub fn run_record_url(base: &str, accession: &str) -> Result<Url, FetchError> {
    if accession.is_empty() {
        return Err(FetchError::EmptyAccession);
    }
    let mut url = Url::parse(base)?;
    url.query_pairs_mut().append_pair("run", accession);
    Ok(url)
}

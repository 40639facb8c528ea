//! Document retrieval.
//!
//! One blocking GET per document, no retry, no per-item recovery: the first
//! failed fetch aborts the whole run. The [`Fetch`] trait is the single seam
//! between the network and the extractors, so assembly can be exercised
//! against canned documents.

use crate::error::{Error, Result};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Fixed per-request timeout. The original design had none; a bound on a
/// single hung connection is the one hardening applied at this seam.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Retrieves one URL into a raw byte payload.
pub trait Fetch {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>>;
}

/// HTTP fetcher over a blocking `reqwest` client.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(Error::Client)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        debug!(%url, "fetching");

        let wrap = |source: reqwest::Error| Error::Fetch {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(wrap)?;

        let body = response.bytes().map_err(wrap)?;
        Ok(body.to_vec())
    }
}

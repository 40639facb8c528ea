//! Error types for the extraction pipelines.
//!
//! Every failure mode of fetching, parsing, and projection is a variant here.
//! Apart from `InvalidSelection`, which the interactive menu recovers from by
//! re-prompting, all variants propagate to the top level and end the run.

/// Error type for fetch and extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network retrieval failed (connect, DNS, TLS, or non-success status).
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client itself could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// An expected container or script block was absent or under-count.
    #[error("expected document structure not found: {0}")]
    StructureNotFound(String),

    /// The embedded structured-data payload was not valid JSON.
    #[error("embedded event payload is malformed: {0}")]
    Decode(#[from] serde_json::Error),

    /// A required key was absent from the decoded event payload.
    #[error("event payload is missing field `{0}`")]
    MissingField(&'static str),

    /// An event start timestamp did not match the expected pattern.
    #[error("timestamp `{0}` does not match YYYY-MM-DDTHH:MM")]
    TimestampParse(String),

    /// Interactive menu input was non-numeric or out of range.
    /// Recovered locally by re-prompting; never reaches the top level.
    #[error("invalid selection `{input}`: requires a value between 1 and {max}")]
    InvalidSelection { input: String, max: usize },

    /// The meeting dataset could not be decoded.
    #[error("meeting dataset is invalid: {0}")]
    Dataset(#[from] toml::de::Error),

    /// A derived address was not a valid URL.
    #[error("derived URL is invalid: {0}")]
    Url(#[from] url::ParseError),

    /// Writing the report to its output sink failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for fetch and extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

/// Failure of a single search API page request.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("search API returned {status}: {body}")]
    BadStatus { status: u16, body: String },
    #[error("could not decode search response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Why an employer-size lookup produced no number.
///
/// `NoMatch` means the page was fetched but carried no employee count; the
/// other variants mean the lookup itself failed.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("lookup request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("lookup returned status {0}")]
    BadStatus(u16),
    #[error("no employee count in response")]
    NoMatch,
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("could not open output file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not write csv: {0}")]
    Csv(#[from] csv::Error),
}

use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeliometError {
    #[error("Failed to build HTTP client")]
    HttpClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("Failed to read response body for {0}")]
    BodyRead(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}: {body}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Unsupported response format '{requested}', expected one of: csv, json")]
    UnsupportedFormat { requested: String },

    #[error("Parsing error processing CSV data from {url}")]
    CsvParse {
        url: String,
        #[source]
        source: PolarsError,
    },

    #[error("Parsing error processing JSON data from {url}")]
    JsonParse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No Solcast API key available; set SOLCAST_API_KEY or pass one explicitly")]
    MissingApiKey,
}

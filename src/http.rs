use crate::error::HeliometError;
use crate::params::QueryParams;
use log::{debug, warn};
use reqwest::blocking::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::StatusCode;

/// Builds the blocking HTTP client shared by a provider client.
///
/// No request timeout is set; an unresponsive server blocks the call until
/// the connection dies.
pub(crate) fn build_http_client() -> Result<HttpClient, HeliometError> {
    let mut default_headers = HeaderMap::new();
    default_headers.insert(
        USER_AGENT,
        HeaderValue::from_str(&format!("heliomet/{}", env!("CARGO_PKG_VERSION")))
            .unwrap_or(HeaderValue::from_static("heliomet")),
    );

    HttpClient::builder()
        .default_headers(default_headers)
        .timeout(None)
        .build()
        .map_err(HeliometError::HttpClientBuild)
}

/// Performs one blocking GET and returns the raw body of a 200 response.
///
/// Any other status logs a warning and is returned as
/// [`HeliometError::HttpStatus`] carrying the status code and body.
pub(crate) fn get_text(
    http: &HttpClient,
    url: &str,
    query: &QueryParams,
    bearer: Option<&str>,
) -> Result<String, HeliometError> {
    debug!("GET {} with {} query fields", url, query.as_pairs().len());

    let mut request = http.get(url).query(query.as_pairs());
    if let Some(token) = bearer {
        request = request.bearer_auth(token);
    }

    let response = request
        .send()
        .map_err(|e| HeliometError::NetworkRequest(url.to_string(), e))?;

    let status = response.status();
    let body = response
        .text()
        .map_err(|e| HeliometError::BodyRead(url.to_string(), e))?;

    if status != StatusCode::OK {
        warn!("HTTP error for {}: {} - {}", url, status, body);
        return Err(HeliometError::HttpStatus {
            url: url.to_string(),
            status,
            body,
        });
    }

    Ok(body)
}

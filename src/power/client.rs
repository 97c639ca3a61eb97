//! Provides the `PowerClient` for fetching point data from the NASA POWER
//! temporal API.
//!
//! POWER serves climate variables for any coordinate, unauthenticated. CSV
//! responses open with a metadata block terminated by a `-END HEADER-`
//! line; the client strips that block before parsing.

use crate::error::HeliometError;
use crate::http::{build_http_client, get_text};
use crate::params::{ParamValue, QueryParams};
use crate::types::format::ResponseFormat;
use crate::types::granularity::Granularity;
use crate::types::latlon::LatLon;
use crate::types::payload::Payload;
use bon::bon;
use chrono::NaiveDate;
use reqwest::blocking::Client as HttpClient;

const POWER_BASE_URL: &str = "https://power.larc.nasa.gov/api";

/// User community identifier sent with every request. Overridable through
/// the extension mapping.
const POWER_COMMUNITY: &str = "AG";

/// Marker line separating the CSV metadata block from the data it describes.
const END_HEADER_MARKER: &str = "-END HEADER-";

/// A client for the NASA POWER temporal point API.
///
/// Each fetch performs exactly one blocking GET and parses the response
/// according to the requested [`ResponseFormat`]. The client holds no
/// state beyond its HTTP connection pool; calls are independent.
///
/// # Examples
///
/// ```
/// use heliomet::PowerClient;
///
/// let client = PowerClient::new()?;
/// # Ok::<(), heliomet::HeliometError>(())
/// ```
pub struct PowerClient {
    base_url: String,
    http: HttpClient,
}

#[bon]
impl PowerClient {
    /// Creates a client pointed at the production POWER endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HeliometError::HttpClientBuild`] if the underlying HTTP
    /// client cannot be constructed.
    pub fn new() -> Result<Self, HeliometError> {
        Self::with_base_url(POWER_BASE_URL)
    }

    /// Creates a client pointed at a custom base URL, e.g. a mirror or a
    /// test server.
    ///
    /// # Errors
    ///
    /// Returns [`HeliometError::HttpClientBuild`] if the underlying HTTP
    /// client cannot be constructed.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, HeliometError> {
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: build_http_client()?,
        })
    }

    /// Fetches point data for a coordinate and date range.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.parameters(&[&str])`: **Required.** Physical parameter names (e.g. `"T2M"`),
    ///   joined with commas on the wire.
    /// * `.location(LatLon)`: **Required.** The coordinate to query.
    /// * `.start(NaiveDate)` / `.end(NaiveDate)`: **Required.** Inclusive date range,
    ///   sent as `YYYYMMDD`. Ignored by the server for [`Granularity::Climatology`].
    /// * `.granularity(Granularity)`: Optional. Defaults to [`Granularity::Daily`].
    /// * `.format(ResponseFormat)`: Optional. Defaults to [`ResponseFormat::Csv`].
    /// * `.extra_params(&[(&str, ParamValue)])`: Optional. Extension fields merged
    ///   into the query last; a key matching a core field replaces its value in place.
    ///
    /// # Returns
    ///
    /// A [`Payload::Table`] for CSV responses (metadata block stripped) or a
    /// [`Payload::Json`] holding the response tree unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`HeliometError::HttpStatus`] for any non-200 response, carrying the
    /// status code and raw body. Returns [`HeliometError::NetworkRequest`] when the
    /// request never reaches a status line, and [`HeliometError::CsvParse`] /
    /// [`HeliometError::JsonParse`] when the body does not match the requested format.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use chrono::NaiveDate;
    /// use heliomet::{HeliometError, LatLon, PowerClient};
    ///
    /// # fn main() -> Result<(), HeliometError> {
    /// let client = PowerClient::new()?;
    /// let payload = client
    ///     .fetch()
    ///     .parameters(&["T2M", "WSC"])
    ///     .location(LatLon(0.0, 0.0))
    ///     .start(NaiveDate::from_ymd_opt(2017, 1, 1).unwrap())
    ///     .end(NaiveDate::from_ymd_opt(2017, 2, 1).unwrap())
    ///     .call()?;
    ///
    /// if let Some(frame) = payload.as_table() {
    ///     println!("{}", frame);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub fn fetch(
        &self,
        parameters: &[&str],
        location: LatLon,
        start: NaiveDate,
        end: NaiveDate,
        granularity: Option<Granularity>,
        format: Option<ResponseFormat>,
        extra_params: Option<&[(&str, ParamValue)]>,
    ) -> Result<Payload, HeliometError> {
        let granularity = granularity.unwrap_or(Granularity::Daily);
        let format = format.unwrap_or(ResponseFormat::Csv);

        let url = format!(
            "{}/temporal/{}/point",
            self.base_url,
            granularity.path_segment()
        );

        let mut query = QueryParams::new();
        query.insert("parameters", parameters.join(","));
        query.insert("community", POWER_COMMUNITY);
        query.insert("longitude", location.1);
        query.insert("latitude", location.0);
        query.insert("start", start.format("%Y%m%d"));
        query.insert("end", end.format("%Y%m%d"));
        query.insert("format", format.as_str());
        if let Some(extra) = extra_params {
            query.extend_from(extra);
        }

        let body = get_text(&self.http, &url, &query, None)?;

        match format {
            ResponseFormat::Csv => Payload::parse(format, strip_metadata_block(&body), &url),
            ResponseFormat::Json => Payload::parse(format, &body, &url),
        }
    }
}

/// Returns the data block of a POWER CSV body.
///
/// Everything up to and including the last `-END HEADER-` line is metadata.
/// Bodies without the marker are returned whole, trimmed.
fn strip_metadata_block(body: &str) -> &str {
    match body.rsplit_once(END_HEADER_MARKER) {
        Some((_, data)) => data.trim(),
        None => body.trim(),
    }
}

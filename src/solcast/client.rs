//! Provides the `SolcastClient` for fetching historic radiation and
//! weather data from the Solcast API.
//!
//! Solcast authenticates every request with a bearer token. The key is
//! resolved once at construction, either passed explicitly or read from
//! `SOLCAST_API_KEY` via [`SolcastClient::from_env`]; nothing reads the
//! environment mid-call.

use crate::error::HeliometError;
use crate::http::{build_http_client, get_text};
use crate::params::{ParamValue, QueryParams};
use crate::types::array_type::ArrayType;
use crate::types::format::ResponseFormat;
use crate::types::latlon::LatLon;
use crate::types::payload::Payload;
use bon::bon;
use chrono::NaiveDate;
use reqwest::blocking::Client as HttpClient;
use std::env;

const SOLCAST_BASE_URL: &str = "https://api.solcast.com.au";

/// Timestamps in responses are always requested in UTC.
const SOLCAST_TIME_ZONE: &str = "utc";

/// Environment variable read by [`SolcastClient::from_env`].
const SOLCAST_API_KEY_VAR: &str = "SOLCAST_API_KEY";

/// A client for the Solcast historic radiation and weather API.
///
/// Each fetch performs exactly one blocking, bearer-authenticated GET and
/// parses the response according to the requested [`ResponseFormat`].
///
/// # Examples
///
/// ```
/// use heliomet::SolcastClient;
///
/// let client = SolcastClient::new("my-api-key")?;
/// # Ok::<(), heliomet::HeliometError>(())
/// ```
#[derive(Debug)]
pub struct SolcastClient {
    base_url: String,
    api_key: String,
    http: HttpClient,
}

#[bon]
impl SolcastClient {
    /// Creates a client with an explicit API key, pointed at the production
    /// Solcast endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HeliometError::MissingApiKey`] if the key is empty and
    /// [`HeliometError::HttpClientBuild`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(api_key: impl Into<String>) -> Result<Self, HeliometError> {
        Self::with_base_url(api_key, SOLCAST_BASE_URL)
    }

    /// Creates a client with the key from the `SOLCAST_API_KEY` environment
    /// variable.
    ///
    /// The variable is read once, here; later changes to the environment do
    /// not affect the client.
    ///
    /// # Errors
    ///
    /// Returns [`HeliometError::MissingApiKey`] if the variable is unset or
    /// empty.
    pub fn from_env() -> Result<Self, HeliometError> {
        let api_key = env::var(SOLCAST_API_KEY_VAR).unwrap_or_default();
        Self::new(api_key)
    }

    /// Creates a client pointed at a custom base URL, e.g. a test server.
    ///
    /// # Errors
    ///
    /// Same as [`SolcastClient::new`].
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, HeliometError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(HeliometError::MissingApiKey);
        }
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            http: build_http_client()?,
        })
    }

    /// Fetches historic radiation and weather data for a site.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.location(LatLon)`: **Required.** The site coordinate.
    /// * `.start(NaiveDate)` / `.end(NaiveDate)`: **Required.** Date range, sent as
    ///   `YYYY-MM-DD`.
    /// * `.output_parameters(&[&str])`: **Required.** Output series names (e.g.
    ///   `"ghi"`, `"dni"`), joined with commas on the wire.
    /// * `.duration(&str)`: Optional. ISO-8601 period limiting the range end, sent
    ///   verbatim (e.g. `"P1D"`).
    /// * `.azimuth(f64)` / `.tilt(f64)` / `.array_type(ArrayType)`: Optional PV-array
    ///   geometry. Omitted fields are left out of the request entirely, never sent
    ///   empty.
    /// * `.format(ResponseFormat)`: Optional. Defaults to [`ResponseFormat::Csv`].
    /// * `.api_key(&str)`: Optional. Overrides the constructor key for this call.
    /// * `.extra_params(&[(&str, ParamValue)])`: Optional. Extension fields merged
    ///   into the query last; a key matching a core field replaces its value in place.
    ///
    /// # Returns
    ///
    /// A [`Payload::Table`] for CSV responses or a [`Payload::Json`] holding the
    /// response tree unmodified.
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
    /// use heliomet::{HeliometError, LatLon, SolcastClient};
    ///
    /// # fn main() -> Result<(), HeliometError> {
    /// let client = SolcastClient::from_env()?;
    /// let payload = client
    ///     .fetch()
    ///     .location(LatLon(-33.8679, 151.2073))
    ///     .start(NaiveDate::from_ymd_opt(2022, 1, 1).unwrap())
    ///     .end(NaiveDate::from_ymd_opt(2022, 1, 7).unwrap())
    ///     .output_parameters(&["air_temp", "dni", "ghi"])
    ///     .azimuth(30.0)
    ///     .tilt(10.0)
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
        location: LatLon,
        start: NaiveDate,
        end: NaiveDate,
        output_parameters: &[&str],
        duration: Option<&str>,
        azimuth: Option<f64>,
        tilt: Option<f64>,
        array_type: Option<ArrayType>,
        format: Option<ResponseFormat>,
        api_key: Option<&str>,
        extra_params: Option<&[(&str, ParamValue)]>,
    ) -> Result<Payload, HeliometError> {
        let format = format.unwrap_or(ResponseFormat::Csv);
        let token = api_key.unwrap_or(&self.api_key);

        let url = format!("{}/data/historic/radiation_and_weather", self.base_url);

        let mut query = QueryParams::new();
        query.insert("latitude", location.0);
        query.insert("longitude", location.1);
        query.insert("start", start.format("%Y-%m-%d"));
        query.insert("end", end.format("%Y-%m-%d"));
        query.insert("output_parameters", output_parameters.join(","));
        query.insert("format", format.as_str());
        query.insert("time_zone", SOLCAST_TIME_ZONE);
        if let Some(duration) = duration {
            query.insert("duration", duration);
        }
        if let Some(azimuth) = azimuth {
            query.insert("azimuth", azimuth);
        }
        if let Some(tilt) = tilt {
            query.insert("tilt", tilt);
        }
        if let Some(array_type) = array_type {
            query.insert("array_type", array_type.as_str());
        }
        if let Some(extra) = extra_params {
            query.extend_from(extra);
        }

        let body = get_text(&self.http, &url, &query, Some(token))?;
        Payload::parse(format, &body, &url)
    }
}

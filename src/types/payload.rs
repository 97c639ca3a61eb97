use crate::error::HeliometError;
use crate::table;
use crate::types::format::ResponseFormat;
use polars::frame::DataFrame;
use serde_json::Value;

/// A parsed provider response.
///
/// The requested [`ResponseFormat`] fully determines the variant:
/// [`ResponseFormat::Csv`] yields [`Payload::Table`] and
/// [`ResponseFormat::Json`] yields [`Payload::Json`].
///
/// # Examples
///
/// ```
/// use heliomet::Payload;
/// use serde_json::json;
///
/// let payload = Payload::Json(json!({"data": []}));
/// assert!(payload.as_table().is_none());
/// assert_eq!(payload.into_json().unwrap(), json!({"data": []}));
/// ```
#[derive(Debug, Clone)]
pub enum Payload {
    /// Tabular data with column types inferred from the response text.
    Table(DataFrame),
    /// The response body parsed as a JSON tree, unmodified.
    Json(Value),
}

impl Payload {
    /// Parses a response body according to the requested format.
    pub(crate) fn parse(
        format: ResponseFormat,
        text: &str,
        url: &str,
    ) -> Result<Payload, HeliometError> {
        match format {
            ResponseFormat::Csv => {
                let frame = table::read_csv(text).map_err(|e| HeliometError::CsvParse {
                    url: url.to_string(),
                    source: e,
                })?;
                Ok(Payload::Table(frame))
            }
            ResponseFormat::Json => {
                let value =
                    serde_json::from_str(text).map_err(|e| HeliometError::JsonParse {
                        url: url.to_string(),
                        source: e,
                    })?;
                Ok(Payload::Json(value))
            }
        }
    }

    /// Returns a reference to the contained `DataFrame`, or `None` for JSON payloads.
    pub fn as_table(&self) -> Option<&DataFrame> {
        match self {
            Payload::Table(frame) => Some(frame),
            Payload::Json(_) => None,
        }
    }

    /// Returns a reference to the contained JSON tree, or `None` for tabular payloads.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Table(_) => None,
            Payload::Json(value) => Some(value),
        }
    }

    /// Consumes the payload, returning the contained `DataFrame` if tabular.
    pub fn into_table(self) -> Option<DataFrame> {
        match self {
            Payload::Table(frame) => Some(frame),
            Payload::Json(_) => None,
        }
    }

    /// Consumes the payload, returning the contained JSON tree if structured.
    pub fn into_json(self) -> Option<Value> {
        match self {
            Payload::Table(_) => None,
            Payload::Json(value) => Some(value),
        }
    }
}

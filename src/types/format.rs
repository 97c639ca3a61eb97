use crate::error::HeliometError;
use std::fmt;
use std::str::FromStr;

/// The response format requested from a provider.
///
/// Determines both the `format` query field sent on the wire and the shape
/// of the returned [`Payload`](crate::Payload): `Csv` responses are parsed
/// into a polars `DataFrame`, `Json` responses into a `serde_json::Value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// A JSON document, returned unmodified.
    Json,
}

impl ResponseFormat {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            ResponseFormat::Csv => "csv",
            ResponseFormat::Json => "json",
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parses a format name, case-insensitively.
///
/// Anything other than `csv` or `json` is rejected with
/// [`HeliometError::UnsupportedFormat`] naming the offending value.
///
/// # Examples
///
/// ```
/// use heliomet::ResponseFormat;
///
/// assert_eq!("csv".parse::<ResponseFormat>().unwrap(), ResponseFormat::Csv);
/// assert_eq!("JSON".parse::<ResponseFormat>().unwrap(), ResponseFormat::Json);
/// assert!("netcdf".parse::<ResponseFormat>().is_err());
/// ```
impl FromStr for ResponseFormat {
    type Err = HeliometError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ResponseFormat::Csv),
            "json" => Ok(ResponseFormat::Json),
            _ => Err(HeliometError::UnsupportedFormat {
                requested: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_formats() {
        assert_eq!("csv".parse::<ResponseFormat>().unwrap(), ResponseFormat::Csv);
        assert_eq!("Csv".parse::<ResponseFormat>().unwrap(), ResponseFormat::Csv);
        assert_eq!("JSON".parse::<ResponseFormat>().unwrap(), ResponseFormat::Json);
    }

    #[test]
    fn test_parse_unknown_format_names_the_value() {
        let err = "netcdf".parse::<ResponseFormat>().unwrap_err();
        assert!(matches!(
            &err,
            HeliometError::UnsupportedFormat { requested } if requested == "netcdf"
        ));
        assert!(err.to_string().contains("netcdf"));
    }

    #[test]
    fn test_wire_values() {
        assert_eq!(ResponseFormat::Csv.to_string(), "csv");
        assert_eq!(ResponseFormat::Json.to_string(), "json");
    }
}

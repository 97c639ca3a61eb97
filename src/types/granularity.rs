//! Defines the temporal resolution of NASA POWER point data.

use std::fmt;

/// Represents the time step of NASA POWER temporal data.
///
/// Selects which endpoint of the temporal API is queried (e.g. hourly
/// records vs. daily aggregates) and therefore the shape of the returned
/// data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    /// Values recorded for each hour of the requested range.
    Hourly,
    /// Aggregated values for each day of the requested range.
    Daily,
    /// Long-term monthly averages over the full climatology period.
    /// The endpoint ignores the requested date range for this resolution.
    Climatology,
}

impl Granularity {
    pub(crate) fn path_segment(&self) -> &'static str {
        match self {
            Granularity::Hourly => "hourly",
            Granularity::Daily => "daily",
            Granularity::Climatology => "climatology",
        }
    }
}

/// Allows formatting a `Granularity` variant using its `path_segment`.
///
/// # Examples
///
/// ```
/// use heliomet::Granularity;
///
/// assert_eq!(format!("{}", Granularity::Hourly), "hourly");
/// assert_eq!(Granularity::Daily.to_string(), "daily");
/// ```
impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}

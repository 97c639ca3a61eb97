use std::fmt;

/// The mounting configuration of a PV array, as understood by Solcast.
///
/// Only sent on the wire when the caller supplies one; requests without an
/// array type omit the field entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayType {
    /// Panels fixed at a constant azimuth and tilt.
    Fixed,
    /// Panels mounted on a horizontal single-axis tracker.
    HorizontalSingleAxis,
}

impl ArrayType {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            ArrayType::Fixed => "fixed",
            ArrayType::HorizontalSingleAxis => "horizontal_single_axis",
        }
    }
}

impl fmt::Display for ArrayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
/// Both values are represented as `f64`.
///
/// # Examples
///
/// ```
/// use heliomet::LatLon;
///
/// let wageningen = LatLon(51.9692, 5.6654);
/// assert_eq!(wageningen.0, 51.9692); // Latitude
/// assert_eq!(wageningen.1, 5.6654); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

pub mod array_type;
pub mod format;
pub mod granularity;
pub mod latlon;
pub mod payload;

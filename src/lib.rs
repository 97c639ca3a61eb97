mod error;
mod http;
mod params;
mod power;
mod solcast;
mod table;
mod types;

pub use error::HeliometError;
pub use params::ParamValue;

pub use power::client::*;
pub use solcast::client::*;

pub use types::array_type::*;
pub use types::format::*;
pub use types::granularity::*;
pub use types::latlon::*;
pub use types::payload::*;

//! Infrastructure layer.

pub mod backend;
pub mod geocoder;

pub use self::{backend::Backend, geocoder::Geocoder};
#[cfg(feature = "http")]
pub use self::{backend::Http, geocoder::Nominatim};

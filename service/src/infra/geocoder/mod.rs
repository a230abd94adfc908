//! Place [`Geocoder`] definitions.
//!
//! A [`Geocoder`] handles
//! [`Select`]`<`[`By`]`<Option<`[`Place`]`>, `[`place::Query`]`>>`, returning
//! the best matching [`Place`], if any.
//!
//! [`By`]: common::operations::By
//! [`Place`]: crate::domain::Place
//! [`place::Query`]: crate::domain::place::Query
//! [`Select`]: common::operations::Select

#[cfg(feature = "http")]
pub mod nominatim;

use derive_more::{Display, Error as StdError, From};

#[cfg(feature = "http")]
pub use self::nominatim::Nominatim;

/// Place geocoding operation.
pub use common::Handler as Geocoder;

/// [`Geocoder`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Request could not be performed or its response could not be decoded.
    #[cfg(feature = "http")]
    #[display("request failed: {_0}")]
    Request(reqwest::Error),

    /// Geocoder URL is malformed.
    #[cfg(feature = "http")]
    #[display("invalid geocoder URL: {_0}")]
    Url(url::ParseError),

    /// Geocoder responded with an unexpected status.
    #[display("unexpected response status: {_0}")]
    #[from(ignore)]
    Status(#[error(not(source))] u16),

    /// Geocoder responded with a place having malformed coordinates.
    #[display("malformed place coordinates: `{lat}`, `{lon}`")]
    #[from(ignore)]
    Coordinates {
        /// Returned latitude.
        lat: String,

        /// Returned longitude.
        lon: String,
    },
}

#[cfg(test)]
mod spec {
    use std::error::Error as _;

    use super::Error;

    #[test]
    fn malformed_coordinates_are_described() {
        let err = Error::Coordinates {
            lat: "north".into(),
            lon: "77.1".into(),
        };

        assert_eq!(
            err.to_string(),
            "malformed place coordinates: `north`, `77.1`",
        );
        assert!(err.source().is_none());
    }
}

//! Listing [`Backend`] definitions.
//!
//! A [`Backend`] handles:
//! - [`Select`]`<`[`By`]`<Vec<`[`Listing`]`>, ()>>`: fetches every known
//!   [`Listing`];
//! - [`Insert`]`<`[`listing::New`]`>`: stores a new [`Listing`], returning it
//!   with its assigned ID.
//!
//! [`By`]: common::operations::By
//! [`Insert`]: common::operations::Insert
//! [`Listing`]: crate::domain::Listing
//! [`listing::New`]: crate::domain::listing::New
//! [`Select`]: common::operations::Select

#[cfg(feature = "http")]
pub mod http;

use derive_more::{Display, Error as StdError, From};

#[cfg(feature = "http")]
pub use self::http::Http;

/// Listing backend operation.
pub use common::Handler as Backend;

/// [`Backend`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Request could not be performed or its response could not be decoded.
    #[cfg(feature = "http")]
    #[display("request failed: {_0}")]
    Request(reqwest::Error),

    /// Backend URL is malformed.
    #[cfg(feature = "http")]
    #[display("invalid backend URL: {_0}")]
    Url(url::ParseError),

    /// Backend responded with an unexpected status.
    #[display("unexpected response status: {_0}")]
    #[from(ignore)]
    Status(#[error(not(source))] u16),
}

#[cfg(test)]
mod spec {
    use std::error::Error as _;

    use super::Error;

    #[test]
    fn status_error_has_no_source() {
        let err = Error::Status(503);

        assert_eq!(err.to_string(), "unexpected response status: 503");
        assert!(err.source().is_none());
    }
}

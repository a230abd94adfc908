//! HTTP [`Backend`] implementation.

use common::operations::{By, Insert, Select};
use reqwest::{Client, Response, Url};
use tracerr::Traced;
use tracing as log;

use crate::domain::{listing, Listing};

use super::{Backend, Error};

/// Path of the listings resource, relative to the backend base URL.
const PROPERTIES_PATH: &str = "api/properties";

/// [`Backend`] speaking JSON over HTTP.
#[derive(Clone, Debug)]
pub struct Http {
    /// Underlying HTTP client.
    client: Client,

    /// URL of the listings resource.
    properties: Url,
}

impl Http {
    /// Creates a new [`Http`] backend rooted at the provided `base_url`.
    ///
    /// # Errors
    ///
    /// If the `base_url` is malformed, or the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, Traced<Error>> {
        let client = Client::builder()
            .build()
            .map_err(tracerr::from_and_wrap!(=> Error))?;

        // Ensure exactly one trailing slash, so joining keeps the base path.
        let base = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))
            .map_err(tracerr::from_and_wrap!(=> Error))?;
        let properties = base
            .join(PROPERTIES_PATH)
            .map_err(tracerr::from_and_wrap!(=> Error))?;

        Ok(Self { client, properties })
    }

    /// Returns the URL of the listings resource.
    #[must_use]
    pub fn properties_url(&self) -> &Url {
        &self.properties
    }

    /// Checks the status of the provided [`Response`].
    fn check(response: Response) -> Result<Response, Traced<Error>> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(tracerr::new!(Error::Status(status.as_u16())))
        }
    }
}

impl Backend<Select<By<Vec<Listing>, ()>>> for Http {
    type Ok = Vec<Listing>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Listing>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        log::debug!("fetching listings from `{}`", self.properties);

        let response = self
            .client
            .get(self.properties.clone())
            .send()
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))?;
        Self::check(response)?
            .json()
            .await
            .map_err(tracerr::from_and_wrap!())
    }
}

impl Backend<Insert<listing::New>> for Http {
    type Ok = Listing;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Insert(new): Insert<listing::New>,
    ) -> Result<Self::Ok, Self::Err> {
        log::debug!("posting listing `{}` to `{}`", new.title, self.properties);

        let response = self
            .client
            .post(self.properties.clone())
            .json(&new)
            .send()
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))?;
        Self::check(response)?
            .json()
            .await
            .map_err(tracerr::from_and_wrap!())
    }
}

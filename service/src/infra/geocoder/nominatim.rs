//! [Nominatim] [`Geocoder`] implementation.
//!
//! [Nominatim]: https://nominatim.org/release-docs/latest/api/Search

use common::operations::{By, Select};
use reqwest::{header, Client, Url};
use serde::{de::IgnoredAny, Deserialize, Deserializer};
use tracerr::Traced;
use tracing as log;

use crate::domain::{
    place::{self, Geometry},
    Coordinates, Place,
};

use super::{Error, Geocoder};

/// [`Nominatim`] configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// URL of the search endpoint.
    pub url: String,

    /// Comma-separated ISO 3166-1 alpha-2 codes restricting the search.
    pub country_codes: String,

    /// Preferred language of the results (`Accept-Language` header).
    pub language: String,

    /// `User-Agent` identifying this application, as the usage policy
    /// requires.
    pub user_agent: String,
}

/// [`Geocoder`] backed by a Nominatim search endpoint.
#[derive(Clone, Debug)]
pub struct Nominatim {
    /// Underlying HTTP client.
    client: Client,

    /// URL of the search endpoint.
    url: Url,

    /// Value of the `countrycodes` parameter.
    country_codes: String,

    /// Value of the `Accept-Language` header.
    language: String,
}

impl Nominatim {
    /// Creates a new [`Nominatim`] geocoder with the provided [`Config`].
    ///
    /// # Errors
    ///
    /// If the URL is malformed, or the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self, Traced<Error>> {
        let Config {
            url,
            country_codes,
            language,
            user_agent,
        } = config;

        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(tracerr::from_and_wrap!(=> Error))?;
        let url = Url::parse(&url).map_err(tracerr::from_and_wrap!(=> Error))?;

        Ok(Self {
            client,
            url,
            country_codes,
            language,
        })
    }
}

impl Geocoder<Select<By<Option<Place>, place::Query>>> for Nominatim {
    type Ok = Option<Place>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Place>, place::Query>>,
    ) -> Result<Self::Ok, Self::Err> {
        let query = by.into_inner();
        log::debug!("geocoding `{query}`");

        let response = self
            .client
            .get(self.url.clone())
            .query(&[
                ("q", query.as_ref().as_str()),
                ("format", "jsonv2"),
                ("addressdetails", "1"),
                ("polygon_geojson", "1"),
                ("limit", "1"),
                ("countrycodes", self.country_codes.as_str()),
            ])
            .header(header::ACCEPT_LANGUAGE, self.language.as_str())
            .send()
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))?;
        let status = response.status();
        if !status.is_success() {
            return Err(tracerr::new!(Error::Status(status.as_u16())));
        }

        let hits: Vec<Hit> = response
            .json()
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))?;
        hits.into_iter()
            .next()
            .map(Place::try_from)
            .transpose()
            .map_err(tracerr::wrap!())
    }
}

/// Single search hit as returned by Nominatim.
#[derive(Debug, Deserialize)]
struct Hit {
    /// Latitude, as a decimal string.
    lat: String,

    /// Longitude, as a decimal string.
    lon: String,

    /// Full name of the place.
    display_name: String,

    /// Outline of the place, unless it's malformed.
    #[serde(default, deserialize_with = "lenient_geometry")]
    geojson: Option<Geometry>,
}

/// Deserializes an optional [`Geometry`], treating a malformed one as absent,
/// so the [`Place`] is still found as a point.
fn lenient_geometry<'de, D>(d: D) -> Result<Option<Geometry>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Parsed(Geometry),
        Malformed(IgnoredAny),
    }

    Ok(match Option::<Lenient>::deserialize(d)? {
        Some(Lenient::Parsed(geometry)) => Some(geometry),
        Some(Lenient::Malformed(_)) => {
            log::debug!("ignoring malformed place geometry");
            None
        }
        None => None,
    })
}

impl TryFrom<Hit> for Place {
    type Error = Error;

    fn try_from(hit: Hit) -> Result<Self, Self::Error> {
        let Hit {
            lat,
            lon,
            display_name,
            geojson,
        } = hit;

        let location = lat
            .trim()
            .parse()
            .ok()
            .zip(lon.trim().parse().ok())
            .and_then(|(lat, lng)| Coordinates::new(lat, lng));
        let Some(location) = location else {
            return Err(Error::Coordinates { lat, lon });
        };

        Ok(Self {
            location,
            label: display_name.into(),
            geometry: geojson,
        })
    }
}

//! [`Config`]-related definitions.

use std::time;

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use derive_more::{Display, Error};
use http::{
    header::{self, HeaderValue, InvalidHeaderValue},
    Method,
};
use serde::Deserialize;
use service::{domain::Coordinates, infra::geocoder::nominatim, read::map};
use smart_default::SmartDefault;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: Server,

    /// Listing backend configuration.
    pub backend: Backend,

    /// Geocoder configuration.
    pub geocoder: Geocoder,

    /// Map configuration.
    pub map: Map,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Server configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Server {
    /// Host to bind the server to.
    #[default("0.0.0.0".to_owned())]
    pub host: String,

    /// Port to bind the server to.
    #[default(8080)]
    pub port: u16,

    /// [CORS] configuration.
    ///
    /// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
    pub cors: Cors,
}

/// [CORS] configuration.
///
/// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Cors {
    /// List of allowed origins, with `*` allowing any.
    #[default(vec!["*".to_owned()])]
    pub origins: Vec<String>,
}

impl Cors {
    /// Builds a [`CorsLayer`] allowing the configured origins.
    ///
    /// # Errors
    ///
    /// If any of the origins is not a valid header value.
    pub fn layer(&self) -> Result<CorsLayer, InvalidHeaderValue> {
        let origin = if self.origins.iter().any(|o| o == "*") {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(
                self.origins
                    .iter()
                    .map(|o| o.parse::<HeaderValue>())
                    .collect::<Result<Vec<_>, _>>()?,
            )
        };

        Ok(CorsLayer::new()
            .allow_methods([Method::GET, Method::OPTIONS, Method::POST])
            .allow_headers([header::CONTENT_TYPE])
            .allow_origin(origin))
    }
}

/// Listing backend configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Backend {
    /// Base URL the `/api/properties` resource lives under.
    #[default("http://localhost:5000".to_owned())]
    pub url: String,
}

/// Geocoder configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Geocoder {
    /// URL of the Nominatim search endpoint.
    #[default("https://nominatim.openstreetmap.org/search".to_owned())]
    pub url: String,

    /// Comma-separated country codes restricting the search.
    #[default("in".to_owned())]
    pub country_codes: String,

    /// Preferred language of the results.
    #[default("en-IN".to_owned())]
    pub language: String,

    /// `User-Agent` to identify with.
    #[default("GeoEstate-Demo".to_owned())]
    pub user_agent: String,
}

impl From<Geocoder> for nominatim::Config {
    fn from(value: Geocoder) -> Self {
        let Geocoder {
            url,
            country_codes,
            language,
            user_agent,
        } = value;

        Self {
            url,
            country_codes,
            language,
            user_agent,
        }
    }
}

/// Map configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Map {
    /// Initial center as `[latitude, longitude]`.
    #[default([28.6139, 77.209])]
    pub center: [f64; 2],

    /// Initial zoom.
    #[default(11)]
    pub zoom: u8,

    /// Zoom to fly to once the center changes.
    #[default(14)]
    pub fly_to_zoom: u8,

    /// Duration of the fly-to animation.
    #[default(time::Duration::from_millis(1200))]
    #[serde(with = "humantime_serde")]
    pub fly_to_duration: time::Duration,
}

impl TryFrom<Map> for service::Config {
    type Error = InvalidCenter;

    fn try_from(value: Map) -> Result<Self, Self::Error> {
        let Map {
            center: [lat, lng],
            zoom,
            fly_to_zoom,
            fly_to_duration,
        } = value;

        Ok(Self {
            map: map::Settings {
                center: Coordinates::new(lat, lng)
                    .ok_or(InvalidCenter([lat, lng]))?,
                zoom,
                fly_to_zoom,
                fly_to_duration,
            },
        })
    }
}

/// Error of a [`Map`] center not being a finite coordinate pair.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("map center `{_0:?}` is not a finite coordinate pair")]
pub struct InvalidCenter(#[error(not(source))] pub [f64; 2]);

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

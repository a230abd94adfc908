//! Geocoded [`Place`] definitions.

use derive_more::{AsRef, Display};
use serde::{Deserialize, Serialize};

use super::{Coordinates, Ring};

/// Place found by a geocoder.
#[derive(Clone, Debug, PartialEq)]
pub struct Place {
    /// Representative point of this [`Place`].
    pub location: Coordinates,

    /// Human-readable name of this [`Place`].
    pub label: Label,

    /// Outline [`Geometry`] of this [`Place`], if the geocoder returned any.
    pub geometry: Option<Geometry>,
}

/// Human-readable name of a [`Place`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Label(String);

impl From<String> for Label {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// Query to geocode.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
pub struct Query(String);

impl Query {
    /// Creates a new [`Query`] if the given `query` is not blank.
    ///
    /// The text is kept as typed.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Option<Self> {
        let query = query.into();
        (!query.trim().is_empty()).then_some(Self(query))
    }
}

/// GeoJSON position in `[longitude, latitude]` order.
///
/// Any further values (altitude) are dropped.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(try_from = "Vec<f64>")]
pub struct Position(pub [f64; 2]);

impl TryFrom<Vec<f64>> for Position {
    type Error = &'static str;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        match values[..] {
            [lng, lat, ..] => Ok(Self([lng, lat])),
            _ => Err("GeoJSON position needs at least two values"),
        }
    }
}

/// GeoJSON geometry of a [`Place`].
///
/// Only area geometries are distinguished, everything else collapses into
/// [`Geometry::Other`].
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    /// Polygon: an outer ring followed by holes.
    Polygon {
        /// Rings of the polygon.
        coordinates: Vec<Vec<Position>>,
    },

    /// Several polygons.
    MultiPolygon {
        /// Polygons, each being a list of rings.
        coordinates: Vec<Vec<Vec<Position>>>,
    },

    /// Any other geometry (`Point`, `LineString`, ...).
    #[serde(other)]
    Other,
}

impl Geometry {
    /// Returns the drawable outline of this [`Geometry`]: the outer ring of a
    /// polygon, or the outer ring of the first polygon of a multipolygon.
    #[must_use]
    pub fn outline(&self) -> Option<Ring> {
        let outer = match self {
            Self::Polygon { coordinates } => coordinates.first(),
            Self::MultiPolygon { coordinates } => {
                coordinates.first().and_then(|p| p.first())
            }
            Self::Other => None,
        }?;
        let outer: Vec<_> = outer.iter().map(|p| p.0).collect();
        Ring::from_lng_lat(&outer)
    }
}

/// Highlighted result of a place search.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SearchResult {
    /// Single point.
    Point {
        /// Location of the found place.
        location: Coordinates,

        /// Name of the found place.
        label: Label,
    },

    /// Area with an outline.
    Polygon {
        /// Representative location of the found place.
        location: Coordinates,

        /// Name of the found place.
        label: Label,

        /// Outline of the found place.
        ring: Ring,
    },
}

impl SearchResult {
    /// Returns the location of this [`SearchResult`].
    #[must_use]
    pub fn location(&self) -> Coordinates {
        match self {
            Self::Point { location, .. } | Self::Polygon { location, .. } => {
                *location
            }
        }
    }

    /// Returns the [`Label`] of this [`SearchResult`].
    #[must_use]
    pub fn label(&self) -> &Label {
        match self {
            Self::Point { label, .. } | Self::Polygon { label, .. } => label,
        }
    }

    /// Returns the outline of this [`SearchResult`], if it's an area.
    #[must_use]
    pub fn ring(&self) -> Option<&Ring> {
        match self {
            Self::Point { .. } => None,
            Self::Polygon { ring, .. } => Some(ring),
        }
    }
}

impl From<Place> for SearchResult {
    fn from(place: Place) -> Self {
        let Place {
            location,
            label,
            geometry,
        } = place;

        match geometry.as_ref().and_then(Geometry::outline) {
            Some(ring) => Self::Polygon {
                location,
                label,
                ring,
            },
            None => Self::Point { location, label },
        }
    }
}

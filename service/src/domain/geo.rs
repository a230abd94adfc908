//! Geographic primitives.

use serde::{Deserialize, Serialize};

/// Point on the map in `(latitude, longitude)` order.
///
/// Both components are always finite.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(try_from = "RawCoordinates")]
pub struct Coordinates {
    /// Latitude in degrees.
    lat: f64,

    /// Longitude in degrees.
    lng: f64,
}

impl Coordinates {
    /// Creates new [`Coordinates`] if both components are finite.
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Option<Self> {
        (lat.is_finite() && lng.is_finite()).then_some(Self { lat, lng })
    }

    /// Creates new [`Coordinates`] from a GeoJSON-ordered
    /// `[longitude, latitude]` position.
    #[must_use]
    pub fn from_lng_lat([lng, lat]: [f64; 2]) -> Option<Self> {
        Self::new(lat, lng)
    }

    /// Returns the latitude of these [`Coordinates`].
    #[must_use]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Returns the longitude of these [`Coordinates`].
    #[must_use]
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Returns these [`Coordinates`] as a `[latitude, longitude]` pair, the
    /// order map libraries expect.
    #[must_use]
    pub fn pair(&self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

/// Unchecked [`Coordinates`] as they come over the wire.
#[derive(Deserialize)]
struct RawCoordinates {
    lat: f64,
    lng: f64,
}

impl TryFrom<RawCoordinates> for Coordinates {
    type Error = &'static str;

    fn try_from(raw: RawCoordinates) -> Result<Self, Self::Error> {
        Self::new(raw.lat, raw.lng).ok_or("non-finite `Coordinates`")
    }
}

/// Closed outline of an area as an ordered sequence of [`Coordinates`].
///
/// Serialized as a list of `[latitude, longitude]` pairs.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(into = "Vec<[f64; 2]>")]
pub struct Ring(Vec<Coordinates>);

impl Ring {
    /// Builds a [`Ring`] out of GeoJSON-ordered `[longitude, latitude]`
    /// positions, swapping every pair and preserving their order.
    ///
    /// Non-finite positions are skipped. [`None`] is returned if nothing is
    /// left.
    #[must_use]
    pub fn from_lng_lat(positions: &[[f64; 2]]) -> Option<Self> {
        let points: Vec<_> = positions
            .iter()
            .copied()
            .filter_map(Coordinates::from_lng_lat)
            .collect();
        (!points.is_empty()).then_some(Self(points))
    }

    /// Returns the [`Coordinates`] of this [`Ring`].
    #[must_use]
    pub fn points(&self) -> &[Coordinates] {
        &self.0
    }
}

impl From<Ring> for Vec<[f64; 2]> {
    fn from(ring: Ring) -> Self {
        ring.0.iter().map(Coordinates::pair).collect()
    }
}

#[cfg(test)]
mod spec {
    use super::{Coordinates, Ring};

    #[test]
    fn rejects_non_finite() {
        assert!(Coordinates::new(f64::NAN, 77.2).is_none());
        assert!(Coordinates::new(28.6, f64::INFINITY).is_none());
        assert!(Coordinates::new(28.6, 77.2).is_some());
    }

    #[test]
    fn swaps_ring_positions_in_order() {
        let ring = Ring::from_lng_lat(&[[77.1, 28.6], [77.2, 28.6], [77.2, 28.7]])
            .unwrap();

        assert_eq!(
            Vec::<[f64; 2]>::from(ring),
            vec![[28.6, 77.1], [28.6, 77.2], [28.7, 77.2]],
        );
    }

    #[test]
    fn empty_ring_is_none() {
        assert!(Ring::from_lng_lat(&[]).is_none());
        assert!(Ring::from_lng_lat(&[[f64::NAN, 1.0]]).is_none());
    }

    #[test]
    fn deserializes_checked() {
        let ok: Coordinates =
            serde_json::from_str(r#"{"lat": 28.1, "lng": 77.1}"#).unwrap();
        assert_eq!(ok.pair(), [28.1, 77.1]);

        assert!(serde_json::from_str::<Coordinates>(r#"{"lat": 28.1}"#).is_err());
    }
}

//! Listing form definitions.
//!
//! Two forms produce new listings: the sidebar [`Manual`] form with typed
//! coordinates, and the map-click form, which is just [`Fields`] submitted at
//! the clicked location.

use derive_more::{Display, Error};
use serde::{Deserialize, Deserializer};

use super::{listing, Coordinates};

/// Fields shared by both listing forms.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Fields {
    /// Typed title.
    pub title: String,

    /// Typed price.
    pub price: String,

    /// Typed area.
    pub area: String,

    /// Selected deal kind.
    #[serde(rename = "type")]
    pub kind: Kind,
}

/// Deal kind selected in a form, [`listing::Kind::Rent`] unless chosen
/// otherwise.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(transparent)]
pub struct Kind(pub listing::Kind);

impl Default for Kind {
    fn default() -> Self {
        Self(listing::Kind::Rent)
    }
}

impl Fields {
    /// Submits these [`Fields`] at the provided `location`.
    ///
    /// # Errors
    ///
    /// With [`ValidationError::EmptyTitle`] if the title is blank.
    pub fn submit_at(
        self,
        location: Coordinates,
    ) -> Result<listing::New, ValidationError> {
        let Self {
            title,
            price,
            area,
            kind: Kind(kind),
        } = self;

        Ok(listing::New {
            title: listing::Title::new(title)
                .ok_or(ValidationError::EmptyTitle)?,
            price: price.into(),
            area: area.into(),
            kind,
            location,
        })
    }
}

/// Sidebar form adding a listing at typed coordinates.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Manual {
    /// Typed title.
    pub title: String,

    /// Typed price.
    pub price: String,

    /// Typed area.
    pub area: String,

    /// Selected deal kind.
    #[serde(rename = "type")]
    pub kind: Kind,

    /// Typed latitude.
    #[serde(deserialize_with = "text_or_number")]
    pub lat: String,

    /// Typed longitude.
    #[serde(deserialize_with = "text_or_number")]
    pub lng: String,
}

/// Deserializes typed degrees given either as text or as a number.
fn text_or_number<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Degrees {
        Text(String),
        Number(f64),
    }

    Ok(match Degrees::deserialize(d)? {
        Degrees::Text(text) => text,
        Degrees::Number(n) => n.to_string(),
    })
}

impl Manual {
    /// Submits this [`Manual`] form.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptyTitle`] if the title is blank;
    /// - [`ValidationError::InvalidLatitude`] or
    ///   [`ValidationError::InvalidLongitude`] if a coordinate is empty, not a
    ///   number or not finite.
    pub fn submit(self) -> Result<listing::New, ValidationError> {
        let Self {
            title,
            price,
            area,
            kind,
            lat,
            lng,
        } = self;

        let fields = Fields {
            title,
            price,
            area,
            kind,
        };
        if listing::Title::new(&fields.title).is_none() {
            return Err(ValidationError::EmptyTitle);
        }
        let lat = parse_degrees(&lat).ok_or(ValidationError::InvalidLatitude)?;
        let lng =
            parse_degrees(&lng).ok_or(ValidationError::InvalidLongitude)?;
        let location = Coordinates::new(lat, lng)
            .ok_or(ValidationError::InvalidLatitude)?;

        fields.submit_at(location)
    }
}

/// Parses typed degrees, accepting only finite numbers.
fn parse_degrees(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Reason a listing form submission was rejected.
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum ValidationError {
    /// Title is blank.
    #[display("Title is required")]
    EmptyTitle,

    /// Latitude is missing or malformed.
    #[display("Latitude must be a number")]
    InvalidLatitude,

    /// Longitude is missing or malformed.
    #[display("Longitude must be a number")]
    InvalidLongitude,

    /// Map-click form submitted without a clicked location.
    #[display("Click the map to choose a location first")]
    NoLocation,
}

#[cfg(test)]
mod spec {
    use super::{listing, Coordinates, Fields, Kind, Manual, ValidationError};

    fn manual(title: &str, lat: &str, lng: &str) -> Manual {
        Manual {
            title: title.into(),
            price: "₹6,000/mo".into(),
            area: "1 Room".into(),
            kind: Kind::default(),
            lat: lat.into(),
            lng: lng.into(),
        }
    }

    #[test]
    fn accepts_numeric_coordinates() {
        let form: Manual = serde_json::from_value(serde_json::json!({
            "title": "Room",
            "type": "sale",
            "lat": 28.1,
            "lng": "77.1",
        }))
        .unwrap();

        let new = form.submit().unwrap();
        assert_eq!(new.location, Coordinates::new(28.1, 77.1).unwrap());
        assert_eq!(new.kind, listing::Kind::Sale);
    }

    #[test]
    fn rejects_empty_title() {
        assert_eq!(
            manual("", "28.1", "77.1").submit().unwrap_err(),
            ValidationError::EmptyTitle,
        );
    }

    #[test]
    fn rejects_bad_coordinates() {
        assert_eq!(
            manual("Room", "", "77.1").submit().unwrap_err(),
            ValidationError::InvalidLatitude,
        );
        assert_eq!(
            manual("Room", "28.1", "east").submit().unwrap_err(),
            ValidationError::InvalidLongitude,
        );
        assert_eq!(
            manual("Room", "NaN", "77.1").submit().unwrap_err(),
            ValidationError::InvalidLatitude,
        );
    }

    #[test]
    fn accepts_valid_manual_form() {
        let new = manual(" Room near college ", " 28.6139", "77.209 ")
            .submit()
            .unwrap();

        assert_eq!(new.title.as_ref(), "Room near college");
        assert_eq!(new.kind, listing::Kind::Rent);
        assert_eq!(new.location.pair(), [28.6139, 77.209]);
    }

    #[test]
    fn click_form_takes_location() {
        let at = Coordinates::new(26.76, 83.37).unwrap();
        let new = Fields {
            title: "Plot".into(),
            kind: Kind(listing::Kind::Sale),
            ..Fields::default()
        }
        .submit_at(at)
        .unwrap();

        assert_eq!(new.location, at);
        assert_eq!(new.kind, listing::Kind::Sale);
        assert!(new.price.as_ref().is_empty());
    }
}

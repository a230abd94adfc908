//! [`Listing`] definitions.

use common::define_kind;
use derive_more::{AsRef, Display, From, Into};
use serde::{Deserialize, Serialize};

use super::Coordinates;

/// Property offered for rent or sale.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Listing {
    /// ID of this [`Listing`].
    pub id: Id,

    /// [`Title`] of this [`Listing`].
    pub title: Title,

    /// Human-formatted [`Price`] of this [`Listing`].
    pub price: Price,

    /// Human-formatted [`Area`] of this [`Listing`].
    pub area: Area,

    /// [`Kind`] of the deal this [`Listing`] is offered for.
    #[serde(rename = "type")]
    pub kind: Kind,

    /// Location of this [`Listing`].
    #[serde(flatten)]
    pub location: Coordinates,
}

/// [`Listing`] not stored anywhere yet.
///
/// Serializes into the body of a listing creation request.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct New {
    /// [`Title`] of a new [`Listing`].
    pub title: Title,

    /// [`Price`] of a new [`Listing`].
    pub price: Price,

    /// [`Area`] of a new [`Listing`].
    pub area: Area,

    /// [`Kind`] of a new [`Listing`].
    #[serde(rename = "type")]
    pub kind: Kind,

    /// Location of a new [`Listing`].
    #[serde(flatten)]
    pub location: Coordinates,
}

impl New {
    /// Turns this [`New`] listing into a [`Listing`] with the provided [`Id`].
    #[must_use]
    pub fn with_id(self, id: Id) -> Listing {
        let Self {
            title,
            price,
            area,
            kind,
            location,
        } = self;
        Listing {
            id,
            title,
            price,
            area,
            kind,
            location,
        }
    }
}

/// ID of a [`Listing`].
///
/// Backend-assigned IDs are positive. Negative IDs are temporary and belong to
/// listings inserted locally before the backend confirmed them.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Id(i64);

impl Id {
    /// Indicates whether this [`Id`] is a temporary one.
    #[must_use]
    pub fn is_temporary(self) -> bool {
        self.0 < 0
    }
}

/// Title of a [`Listing`].
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Title(String);

impl Title {
    /// Creates a new [`Title`] if the given `title` is not blank.
    ///
    /// Surrounding whitespace is trimmed.
    #[must_use]
    pub fn new(title: impl AsRef<str>) -> Option<Self> {
        let title = title.as_ref().trim();
        (!title.is_empty()).then(|| Self(title.to_owned()))
    }
}

/// Human-formatted price of a [`Listing`] (`₹6,000/mo`, `₹45 Lakh`).
#[derive(
    AsRef,
    Clone,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    PartialEq,
    Serialize,
)]
#[serde(transparent)]
pub struct Price(String);

/// Human-formatted area of a [`Listing`] (`1350 sqft`, `1 Room`).
#[derive(
    AsRef,
    Clone,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    PartialEq,
    Serialize,
)]
#[serde(transparent)]
pub struct Area(String);

define_kind! {
    #[doc = "Kind of the deal a [`Listing`] is offered for."]
    enum Kind {
        #[doc = "Offered for rent."]
        Rent = 1,

        #[doc = "Offered for sale."]
        Sale = 2,
    }
}

/// Staged [`Listing`] anchored at a clicked point of the map, still missing
/// its title, price and area.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Pending {
    /// Clicked location.
    pub location: Coordinates,
}

//! [`Listing`] filtering.

use common::define_kind;
use serde::{Deserialize, Serialize};

use crate::domain::{listing, Listing};

define_kind! {
    #[doc = "Deal kinds admitted by a [`Criterion`]."]
    enum TypeFilter {
        #[doc = "Any deal kind."]
        All = 0,

        #[doc = "Only [`listing::Kind::Rent`]."]
        Rent = 1,

        #[doc = "Only [`listing::Kind::Sale`]."]
        Sale = 2,
    }
}

impl Default for TypeFilter {
    fn default() -> Self {
        Self::All
    }
}

impl TypeFilter {
    /// Indicates whether this [`TypeFilter`] admits the provided
    /// [`listing::Kind`].
    #[must_use]
    pub fn admits(self, kind: listing::Kind) -> bool {
        match self {
            Self::All => true,
            Self::Rent => kind == listing::Kind::Rent,
            Self::Sale => kind == listing::Kind::Sale,
        }
    }
}

/// Criterion narrowing the visible [`Listing`]s.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Criterion {
    /// Admitted deal kinds.
    #[serde(rename = "type")]
    pub kind: TypeFilter,

    /// Text to look for in a title or an area, case-insensitively.
    pub text: String,
}

impl Criterion {
    /// Returns a predicate admitting [`Listing`]s matching this [`Criterion`].
    fn predicate(&self) -> impl Fn(&Listing) -> bool + '_ {
        let needle = self.text.to_lowercase();
        move |l: &Listing| {
            self.kind.admits(l.kind)
                && (needle.is_empty()
                    || l.title.as_ref().to_lowercase().contains(&needle)
                    || l.area.as_ref().to_lowercase().contains(&needle))
        }
    }

    /// Indicates whether the provided [`Listing`] matches this [`Criterion`].
    #[must_use]
    pub fn admits(&self, listing: &Listing) -> bool {
        self.predicate()(listing)
    }
}

/// Filters the provided `listings` by the provided [`Criterion`], preserving
/// their order.
pub fn filter<'a>(
    listings: &'a [Listing],
    criterion: &'a Criterion,
) -> impl Iterator<Item = &'a Listing> + 'a {
    let admits = criterion.predicate();
    listings.iter().filter(move |l| admits(l))
}

/// [`Listing`]s passing the active [`Criterion`], in display order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Visible(pub Vec<Listing>);

impl Visible {
    /// Collects the `listings` passing the provided [`Criterion`].
    #[must_use]
    pub fn new(listings: &[Listing], criterion: &Criterion) -> Self {
        Self(filter(listings, criterion).cloned().collect())
    }
}

#[cfg(test)]
mod spec {
    use crate::domain::{listing, Coordinates, Listing};

    use super::{filter, Criterion, TypeFilter};

    fn listing(id: i64, title: &str, area: &str, kind: listing::Kind) -> Listing {
        Listing {
            id: id.into(),
            title: listing::Title::new(title).unwrap(),
            price: String::new().into(),
            area: area.to_owned().into(),
            kind,
            location: Coordinates::new(28.6, 77.2).unwrap(),
        }
    }

    fn listings() -> Vec<Listing> {
        vec![
            listing(1, "Room near college", "1 Room", listing::Kind::Rent),
            listing(2, "3 BHK Family Flat", "1350 sqft", listing::Kind::Rent),
            listing(3, "Residential Plot", "200 sqyd", listing::Kind::Sale),
        ]
    }

    fn ids(listings: &[Listing], criterion: &Criterion) -> Vec<i64> {
        filter(listings, criterion).map(|l| l.id.into()).collect()
    }

    #[test]
    fn default_criterion_is_identity() {
        let all = listings();

        let filtered: Vec<_> =
            filter(&all, &Criterion::default()).cloned().collect();

        assert_eq!(filtered, all);
    }

    #[test]
    fn filters_by_type() {
        let all = listings();
        let rent = Criterion {
            kind: TypeFilter::Rent,
            ..Criterion::default()
        };
        let sale = Criterion {
            kind: TypeFilter::Sale,
            ..Criterion::default()
        };

        assert_eq!(ids(&all, &rent), [1, 2]);
        assert_eq!(ids(&all, &sale), [3]);
    }

    #[test]
    fn matches_title_or_area_case_insensitively() {
        let plot = vec![listing(7, "Plot A", "", listing::Kind::Sale)];
        let criterion = Criterion {
            text: "plot a".into(),
            ..Criterion::default()
        };
        assert_eq!(ids(&plot, &criterion), [7]);

        let all = listings();
        let by_area = Criterion {
            text: "SQFT".into(),
            ..Criterion::default()
        };
        assert_eq!(ids(&all, &by_area), [2]);
    }

    #[test]
    fn combines_type_and_text() {
        let all = listings();
        let criterion = Criterion {
            kind: TypeFilter::Sale,
            text: "room".into(),
        };

        assert!(ids(&all, &criterion).is_empty());
    }

    #[test]
    fn preserves_order() {
        let all = listings();
        let criterion = Criterion {
            text: "r".into(),
            ..Criterion::default()
        };

        let got = ids(&all, &criterion);
        let mut sorted = got.clone();
        sorted.sort_unstable();
        assert_eq!(got, sorted);
    }
}

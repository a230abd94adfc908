//! Read models built out of the [`State`].

pub mod listing;
pub mod map;

use serde::Serialize;

use crate::store::{Notice, State};

pub use self::listing::Criterion;

/// Everything the page shows besides the map itself.
#[derive(Clone, Debug, Serialize)]
pub struct Screen {
    /// [`map::View`] to draw.
    pub map: map::View,

    /// Active [`Criterion`], to prefill the filter form with.
    pub criterion: Criterion,

    /// [`Notice`] to show, if any.
    pub notice: Option<Notice>,
}

impl Screen {
    /// Builds a [`Screen`] of the provided [`State`].
    #[must_use]
    pub fn new(state: &State, settings: &map::Settings) -> Self {
        Self {
            map: map::View::new(state, settings),
            criterion: state.criterion().clone(),
            notice: state.notice().cloned(),
        }
    }
}

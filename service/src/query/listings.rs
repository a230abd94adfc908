//! [`Query`] collection related to [`Listing`]s.

#[cfg(doc)]
use crate::{domain::Listing, Query};
use crate::{read, Config, State};

use super::{ReadModel, StateQuery};

/// Queries the [`Listing`]s passing the active [`read::Criterion`].
pub type Visible = StateQuery<read::listing::Visible>;

impl ReadModel for read::listing::Visible {
    fn build(state: &State, _: &Config) -> Self {
        Self::new(state.listings(), state.criterion())
    }
}

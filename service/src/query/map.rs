//! [`Query`] of the map [`read::map::View`].

#[cfg(doc)]
use crate::Query;
use crate::{read, Config, State};

use super::{ReadModel, StateQuery};

/// Queries the [`read::map::View`] to draw.
pub type View = StateQuery<read::map::View>;

impl ReadModel for read::map::View {
    fn build(state: &State, config: &Config) -> Self {
        Self::new(state, &config.map)
    }
}

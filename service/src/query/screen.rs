//! [`Query`] of the whole [`read::Screen`].

#[cfg(doc)]
use crate::Query;
use crate::{read, Config, State};

use super::{ReadModel, StateQuery};

/// Queries the [`read::Screen`] to render.
pub type Screen = StateQuery<read::Screen>;

impl ReadModel for read::Screen {
    fn build(state: &State, config: &Config) -> Self {
        Self::new(state, &config.map)
    }
}

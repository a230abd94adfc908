//! [`Command`] for switching the map [`TileSource`].

use std::convert::Infallible;

#[cfg(doc)]
use crate::read::map::TileSource;
use crate::{store::Action, Service};

use super::Command;

/// [`Command`] for switching between the street and the satellite
/// [`TileSource`].
#[derive(Clone, Copy, Debug)]
pub struct ToggleTiles;

impl<B, G> Command<ToggleTiles> for Service<B, G> {
    type Ok = ();
    type Err = Infallible;

    async fn execute(&self, _: ToggleTiles) -> Result<Self::Ok, Self::Err> {
        self.store().dispatch(Action::TilesToggled).await;
        Ok(())
    }
}

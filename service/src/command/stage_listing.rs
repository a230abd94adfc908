//! [`Command`] for staging a [`Pending`] listing.

use std::convert::Infallible;

#[cfg(doc)]
use crate::domain::listing::Pending;
use crate::{domain::Coordinates, store::Action, Service};

use super::Command;

/// [`Command`] for staging a [`Pending`] listing at a clicked point of the
/// map, replacing the previous one, if any.
#[derive(Clone, Copy, Debug)]
pub struct StageListing {
    /// Clicked location.
    pub location: Coordinates,
}

impl<B, G> Command<StageListing> for Service<B, G> {
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        StageListing { location }: StageListing,
    ) -> Result<Self::Ok, Self::Err> {
        self.store().dispatch(Action::Staged(location)).await;
        Ok(())
    }
}

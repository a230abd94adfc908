//! [`Command`] for discarding the [`Pending`] listing.

use std::convert::Infallible;

#[cfg(doc)]
use crate::domain::listing::Pending;
use crate::{store::Action, Service};

use super::Command;

/// [`Command`] for discarding the [`Pending`] listing without saving it.
#[derive(Clone, Copy, Debug)]
pub struct DiscardPendingListing;

impl<B, G> Command<DiscardPendingListing> for Service<B, G> {
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        _: DiscardPendingListing,
    ) -> Result<Self::Ok, Self::Err> {
        self.store().dispatch(Action::Discarded).await;
        Ok(())
    }
}

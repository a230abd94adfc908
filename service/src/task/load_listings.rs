//! [`LoadListings`] [`Task`].

use std::convert::Infallible;

use common::operations::{By, Select, Start};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::Listing,
    infra::{backend, Backend},
    store::Action,
    Service,
};

use super::Task;

/// [`Task`] fetching every known [`Listing`] from the [`Backend`] into the
/// [`Store`] once.
///
/// A failed fetch is only logged: the [`Store`] stays as it is and nothing is
/// retried.
///
/// [`Store`]: crate::store::Store
#[derive(Clone, Copy, Debug, Default)]
pub struct LoadListings;

impl<B, G> Task<Start<LoadListings>> for Service<B, G>
where
    B: Backend<
        Select<By<Vec<Listing>, ()>>,
        Ok = Vec<Listing>,
        Err = Traced<backend::Error>,
    >,
{
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        _: Start<LoadListings>,
    ) -> Result<Self::Ok, Self::Err> {
        match self.backend().execute(Select(By::new(()))).await {
            Ok(listings) => {
                log::info!("loaded {} properties", listings.len());
                self.store().dispatch(Action::Loaded(listings)).await;
            }
            Err(e) => log::error!("Failed to load properties: {e}"),
        }
        Ok(())
    }
}

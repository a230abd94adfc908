//! [`Command`] for applying a listing [`Criterion`].

use std::convert::Infallible;

use crate::{read::Criterion, store::Action, Service};

use super::Command;

/// [`Command`] for replacing the active listing [`Criterion`].
#[derive(Clone, Debug)]
pub struct ApplyFilter(pub Criterion);

impl<B, G> Command<ApplyFilter> for Service<B, G> {
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        ApplyFilter(criterion): ApplyFilter,
    ) -> Result<Self::Ok, Self::Err> {
        self.store().dispatch(Action::Filtered(criterion)).await;
        Ok(())
    }
}

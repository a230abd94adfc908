//! [`Command`] for creating a new [`Listing`].

use common::operations::Insert;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{listing, Listing},
    infra::{backend, Backend},
    store::{Action, Notice},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Listing`].
///
/// The [`Listing`] is shown right away under a temporary [`listing::Id`],
/// which is replaced by the stored one once the [`Backend`] confirms it. If
/// the [`Backend`] fails, the [`Listing`] is removed again and
/// [`Notice::SaveFailed`] is shown.
#[derive(Clone, Debug)]
pub struct CreateListing(pub listing::New);

impl<B, G> Command<CreateListing> for Service<B, G>
where
    B: Backend<
        Insert<listing::New>,
        Ok = Listing,
        Err = Traced<backend::Error>,
    >,
{
    type Ok = Listing;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        CreateListing(new): CreateListing,
    ) -> Result<Self::Ok, Self::Err> {
        let temporary = self.store().insert(new.clone()).await.id;

        let stored: Result<_, Self::Err> = self
            .backend()
            .execute(Insert(new))
            .await
            .map_err(tracerr::wrap!());
        match &stored {
            Ok(listing) => {
                self.store()
                    .dispatch(Action::Confirmed {
                        temporary,
                        listing: listing.clone(),
                    })
                    .await;
            }
            Err(e) => {
                log::error!("Failed to save property: {e}");
                self.store().dispatch(Action::RolledBack(temporary)).await;
                self.store()
                    .dispatch(Action::Noticed(Notice::SaveFailed))
                    .await;
            }
        }
        stored
    }
}

/// Error of [`CreateListing`] [`Command`] execution.
pub type ExecutionError = backend::Error;

//! [`Command`] for submitting the [`form::Manual`] listing form.

use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{form, Listing},
    infra::backend,
    store::{Action, Notice},
    Service,
};

use super::{create_listing, Command, CreateListing};

/// [`Command`] for submitting the [`form::Manual`] listing form.
///
/// A rejected form creates nothing and shows a [`Notice::Rejected`].
#[derive(Clone, Debug, From)]
pub struct SubmitManualListing(pub form::Manual);

impl<B, G> Command<SubmitManualListing> for Service<B, G>
where
    Self: Command<
        CreateListing,
        Ok = Listing,
        Err = Traced<create_listing::ExecutionError>,
    >,
{
    type Ok = Listing;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        SubmitManualListing(form): SubmitManualListing,
    ) -> Result<Self::Ok, Self::Err> {
        let new = match form.submit() {
            Ok(new) => new,
            Err(e) => {
                log::warn!("manual listing form rejected: {e}");
                self.store()
                    .dispatch(Action::Noticed(Notice::Rejected(e)))
                    .await;
                return Err(tracerr::new!(ExecutionError::Invalid(e)));
            }
        };

        self.execute(CreateListing(new))
            .await
            .map_err(tracerr::map_from_and_wrap!())
    }
}

/// Error of submitting a listing form.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// Form is invalid.
    #[display("invalid listing form: {_0}")]
    Invalid(form::ValidationError),

    /// [`Backend`] failed to store the listing.
    ///
    /// [`Backend`]: crate::infra::Backend
    #[display("`Backend` operation failed: {_0}")]
    Backend(backend::Error),
}

//! [`Command`] for submitting the listing form of the [`Pending`] listing.

use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::listing::Pending;
use crate::{
    domain::{
        form::{self, ValidationError},
        Listing,
    },
    store::{Action, Notice},
    Service,
};

use super::{create_listing, Command, CreateListing};

pub use super::submit_manual_listing::ExecutionError;

/// [`Command`] for submitting the listing form of the [`Pending`] listing,
/// creating a [`Listing`] at its location.
///
/// The [`Pending`] listing is discarded once the [`Listing`] is stored, and
/// kept otherwise, so the submission may be retried.
#[derive(Clone, Debug)]
pub struct SubmitPendingListing(pub form::Fields);

impl<B, G> Command<SubmitPendingListing> for Service<B, G>
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
        SubmitPendingListing(fields): SubmitPendingListing,
    ) -> Result<Self::Ok, Self::Err> {
        let location = self.store().read().await.pending().map(|p| p.location);
        let submitted = match location {
            Some(at) => fields.submit_at(at).map(|new| (new, at)),
            None => Err(ValidationError::NoLocation),
        };
        let (new, location) = match submitted {
            Ok(v) => v,
            Err(e) => {
                log::warn!("pending listing form rejected: {e}");
                self.store()
                    .dispatch(Action::Noticed(Notice::Rejected(e)))
                    .await;
                return Err(tracerr::new!(ExecutionError::Invalid(e)));
            }
        };

        let listing = self
            .execute(CreateListing(new))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> ExecutionError))?;
        self.store().discard_staged_at(location).await;

        Ok(listing)
    }
}

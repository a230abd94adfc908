//! [`Command`] for searching a [`Place`] by its name.

use common::operations::{By, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{place, Place, SearchResult},
    infra::{geocoder, Geocoder},
    store::{Action, Notice},
    Service,
};

use super::Command;

/// [`Command`] for searching a [`Place`] by its name and highlighting it on
/// the map.
///
/// - A found [`Place`] replaces the highlighted [`SearchResult`] and moves the
///   map center to it.
/// - Nothing found clears the highlighted [`SearchResult`] and shows
///   [`Notice::NoResults`].
/// - A [`Geocoder`] failure keeps the highlighted [`SearchResult`] and shows
///   [`Notice::SearchUnavailable`].
#[derive(Clone, Debug, From)]
pub struct SearchPlace {
    /// Typed query.
    pub query: String,
}

impl<B, G> Command<SearchPlace> for Service<B, G>
where
    G: Geocoder<
        Select<By<Option<Place>, place::Query>>,
        Ok = Option<Place>,
        Err = Traced<geocoder::Error>,
    >,
{
    type Ok = SearchResult;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        SearchPlace { query }: SearchPlace,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let query = place::Query::new(query)
            .ok_or_else(|| tracerr::new!(E::EmptyQuery))?;

        let found = self.geocoder().execute(Select(By::new(query))).await;
        let place = match found {
            Ok(place) => place,
            Err(e) => {
                log::error!("place search failed: {e}");
                self.store()
                    .dispatch(Action::Noticed(Notice::SearchUnavailable))
                    .await;
                return Err(e).map_err(tracerr::map_from_and_wrap!(=> E));
            }
        };

        let Some(place) = place else {
            log::info!("place search found nothing");
            self.store().dispatch(Action::NotFound).await;
            self.store()
                .dispatch(Action::Noticed(Notice::NoResults))
                .await;
            return Err(tracerr::new!(E::NotFound));
        };

        let result = SearchResult::from(place);
        log::info!("place search found `{}`", result.label());
        self.store().dispatch(Action::Found(result.clone())).await;
        Ok(result)
    }
}

/// Error of [`SearchPlace`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// Query is blank.
    #[display("search query is empty")]
    #[from(ignore)]
    EmptyQuery,

    /// [`Geocoder`] found nothing.
    #[display("no place found")]
    #[from(ignore)]
    NotFound,

    /// [`Geocoder`] error.
    #[display("`Geocoder` operation failed: {_0}")]
    Geocoder(geocoder::Error),
}

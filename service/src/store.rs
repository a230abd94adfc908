//! UI [`State`] container.
//!
//! The [`State`] changes only by applying [`Action`]s, and every [`Action`] is
//! applied under the write lock of a [`Store`], so transitions never
//! interleave.

use std::{collections::HashSet, mem, sync::Arc};

use derive_more::Display;
use serde::{Serialize, Serializer};
use tokio::sync::{RwLock, RwLockReadGuard};
use tracing as log;

use crate::{
    domain::{
        form::ValidationError,
        listing::{self, Pending},
        Coordinates, Listing, SearchResult,
    },
    read::{listing::Criterion, map::TileSource},
};

/// State of the map browsing UI.
#[derive(Clone, Debug)]
pub struct State {
    /// Known [`Listing`]s in display order.
    listings: Vec<Listing>,

    /// Active [`Criterion`].
    criterion: Criterion,

    /// Highlighted [`SearchResult`].
    search_result: Option<SearchResult>,

    /// [`Pending`] listing staged by a map click.
    pending: Option<Pending>,

    /// Center of the map.
    center: Coordinates,

    /// Number of times the `center` has changed.
    center_revision: u64,

    /// Selected [`TileSource`].
    tile_source: TileSource,

    /// [`Notice`] shown to the user.
    notice: Option<Notice>,

    /// Last allocated temporary [`listing::Id`].
    last_temporary_id: i64,
}

impl State {
    /// Creates a new empty [`State`] centered at the provided [`Coordinates`].
    #[must_use]
    pub fn new(center: Coordinates) -> Self {
        Self {
            listings: Vec::new(),
            criterion: Criterion::default(),
            search_result: None,
            pending: None,
            center,
            center_revision: 0,
            tile_source: TileSource::default(),
            notice: None,
            last_temporary_id: 0,
        }
    }

    /// Returns the known [`Listing`]s in display order.
    #[must_use]
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Returns the active [`Criterion`].
    #[must_use]
    pub fn criterion(&self) -> &Criterion {
        &self.criterion
    }

    /// Returns the highlighted [`SearchResult`], if any.
    #[must_use]
    pub fn search_result(&self) -> Option<&SearchResult> {
        self.search_result.as_ref()
    }

    /// Returns the [`Pending`] listing, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&Pending> {
        self.pending.as_ref()
    }

    /// Returns the center of the map.
    #[must_use]
    pub fn center(&self) -> Coordinates {
        self.center
    }

    /// Returns the number of times the center of the map has changed.
    #[must_use]
    pub fn center_revision(&self) -> u64 {
        self.center_revision
    }

    /// Returns the selected [`TileSource`].
    #[must_use]
    pub fn tile_source(&self) -> TileSource {
        self.tile_source
    }

    /// Returns the [`Notice`] to show, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Allocates a new temporary [`listing::Id`], unique within this
    /// [`State`].
    fn allocate_temporary_id(&mut self) -> listing::Id {
        self.last_temporary_id -= 1;
        self.last_temporary_id.into()
    }

    /// Applies the provided [`Action`] to this [`State`].
    pub fn apply(&mut self, action: Action) {
        log::debug!("applying `{action}`");

        match action {
            Action::Loaded(remote) => {
                let remote_ids: HashSet<_> =
                    remote.iter().map(|l| l.id).collect();
                let local = mem::replace(&mut self.listings, remote);
                self.listings.extend(
                    local.into_iter().filter(|l| !remote_ids.contains(&l.id)),
                );
            }
            Action::Inserted(listing) => {
                if self.listings.iter().all(|l| l.id != listing.id) {
                    self.listings.push(listing);
                }
            }
            Action::Confirmed { temporary, listing } => {
                let exists = self.listings.iter().any(|l| l.id == listing.id);
                let slot = self.listings.iter().position(|l| l.id == temporary);
                match (slot, exists) {
                    (Some(i), false) => self.listings[i] = listing,
                    (Some(i), true) => drop(self.listings.remove(i)),
                    (None, false) => self.listings.push(listing),
                    (None, true) => {}
                }
            }
            Action::RolledBack(temporary) => {
                self.listings.retain(|l| l.id != temporary);
            }
            Action::Filtered(criterion) => self.criterion = criterion,
            Action::Staged(location) => {
                self.pending = Some(Pending { location });
            }
            Action::Discarded => self.pending = None,
            Action::Found(result) => {
                self.center = result.location();
                self.center_revision += 1;
                self.search_result = Some(result);
            }
            Action::NotFound => self.search_result = None,
            Action::TilesToggled => {
                self.tile_source = self.tile_source.toggled();
            }
            Action::Noticed(notice) => self.notice = Some(notice),
            Action::Dismissed => self.notice = None,
        }
    }
}

/// Transition of a [`State`].
#[derive(Clone, Debug, Display)]
pub enum Action {
    /// [`Listing`]s were fetched from the backend.
    ///
    /// Replaces the known ones, keeping the local ones the backend doesn't
    /// know about (yet).
    #[display("Loaded({})", _0.len())]
    Loaded(Vec<Listing>),

    /// [`Listing`] was inserted locally, before the backend confirmed it.
    #[display("Inserted({})", _0.id)]
    Inserted(Listing),

    /// Backend confirmed a locally inserted [`Listing`].
    #[display("Confirmed({temporary} -> {})", listing.id)]
    Confirmed {
        /// Temporary ID of the locally inserted [`Listing`].
        temporary: listing::Id,

        /// [`Listing`] as stored by the backend.
        listing: Listing,
    },

    /// Backend failed to store a locally inserted [`Listing`].
    #[display("RolledBack({_0})")]
    RolledBack(listing::Id),

    /// [`Criterion`] was changed.
    #[display("Filtered")]
    Filtered(Criterion),

    /// Map was clicked to add a [`Pending`] listing there.
    #[display("Staged")]
    Staged(Coordinates),

    /// [`Pending`] listing was closed or saved.
    #[display("Discarded")]
    Discarded,

    /// Place search found something.
    #[display("Found")]
    Found(SearchResult),

    /// Place search found nothing.
    #[display("NotFound")]
    NotFound,

    /// [`TileSource`] was switched.
    #[display("TilesToggled")]
    TilesToggled,

    /// [`Notice`] should be shown.
    #[display("Noticed")]
    Noticed(Notice),

    /// [`Notice`] was dismissed.
    #[display("Dismissed")]
    Dismissed,
}

/// User-facing message.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Notice {
    /// Place search found nothing.
    #[display("No results found for that place.")]
    NoResults,

    /// Place search failed.
    #[display("Unable to search right now. Try again later.")]
    SearchUnavailable,

    /// Listing form was rejected.
    #[display("{_0}")]
    Rejected(ValidationError),

    /// Backend failed to store a listing.
    #[display("Failed to save property")]
    SaveFailed,
}

impl Serialize for Notice {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

/// Shared handle to a [`State`].
#[derive(Clone, Debug)]
pub struct Store(Arc<RwLock<State>>);

impl Store {
    /// Creates a new [`Store`] holding the provided [`State`].
    #[must_use]
    pub fn new(state: State) -> Self {
        Self(Arc::new(RwLock::new(state)))
    }

    /// Applies the provided [`Action`] to the held [`State`].
    pub async fn dispatch(&self, action: Action) {
        self.0.write().await.apply(action);
    }

    /// Inserts the provided [`listing::New`] under a temporary
    /// [`listing::Id`], returning the inserted [`Listing`].
    pub async fn insert(&self, new: listing::New) -> Listing {
        let mut state = self.0.write().await;
        let listing = new.with_id(state.allocate_temporary_id());
        state.apply(Action::Inserted(listing.clone()));
        listing
    }

    /// Discards the [`Pending`] listing, unless it was re-staged elsewhere
    /// than at the provided `location` meanwhile.
    pub async fn discard_staged_at(&self, location: Coordinates) {
        let mut state = self.0.write().await;
        if state.pending().is_some_and(|p| p.location == location) {
            state.apply(Action::Discarded);
        }
    }

    /// Locks the held [`State`] for reading.
    pub async fn read(&self) -> RwLockReadGuard<'_, State> {
        self.0.read().await
    }
}

//! [`Command`] definition.

pub mod apply_filter;
pub mod create_listing;
pub mod discard_pending_listing;
pub mod dismiss_notice;
pub mod search_place;
pub mod stage_listing;
pub mod submit_manual_listing;
pub mod submit_pending_listing;
pub mod toggle_tiles;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    apply_filter::ApplyFilter, create_listing::CreateListing,
    discard_pending_listing::DiscardPendingListing,
    dismiss_notice::DismissNotice, search_place::SearchPlace,
    stage_listing::StageListing, submit_manual_listing::SubmitManualListing,
    submit_pending_listing::SubmitPendingListing, toggle_tiles::ToggleTiles,
};

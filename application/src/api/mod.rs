//! HTTP API definitions.
//!
//! Page actions are plain HTML form submissions answered with a
//! `303 See Other` redirect back to the page, while the JSON API answers
//! with JSON bodies and [`Error`]s.

mod json;

use axum::{
    extract::rejection::FormRejection, response::Redirect, Extension, Form,
};
use maud::Markup;
use serde::Deserialize;
use service::{
    command::{
        ApplyFilter, DiscardPendingListing, DismissNotice, SearchPlace,
        StageListing, SubmitManualListing, SubmitPendingListing, ToggleTiles,
    },
    domain::{form, Coordinates},
    query,
    read::Criterion,
    Command as _,
};
use tracing as log;

use crate::{error::CoordinatesError, page, AsError as _, Error, Service};

pub use self::json::{create_listing, find_place, listings, view};

/// Redirects back to the page.
fn back() -> Redirect {
    Redirect::to("/")
}

/// Renders the page of the current state.
pub async fn index(Extension(svc): Extension<Service>) -> Markup {
    let screen = svc
        .execute(query::screen::Screen::new())
        .await
        .unwrap_or_else(|e| match e {});
    page::render(&screen)
}

/// Replaces the listing [`Criterion`].
pub async fn filter(
    Extension(svc): Extension<Service>,
    Form(criterion): Form<Criterion>,
) -> Redirect {
    svc.execute(ApplyFilter(criterion))
        .await
        .unwrap_or_else(|e| match e {});
    back()
}

/// Place search form.
#[derive(Debug, Deserialize)]
pub struct Search {
    /// Typed query.
    #[serde(default)]
    pub q: String,
}

/// Searches a place and highlights it.
pub async fn search(
    Extension(svc): Extension<Service>,
    Form(Search { q }): Form<Search>,
) -> Redirect {
    if let Err(e) = svc.execute(SearchPlace { query: q }).await {
        log::debug!("place search finished without result: {e}");
    }
    back()
}

/// Switches between the street and the satellite tiles.
pub async fn toggle_tiles(Extension(svc): Extension<Service>) -> Redirect {
    svc.execute(ToggleTiles).await.unwrap_or_else(|e| match e {});
    back()
}

/// Submits the manual listing form.
pub async fn submit_listing(
    Extension(svc): Extension<Service>,
    Form(form): Form<form::Manual>,
) -> Redirect {
    if let Err(e) = svc.execute(SubmitManualListing(form)).await {
        log::debug!("manual listing not created: {e}");
    }
    back()
}

/// Clicked point of the map.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct ClickedAt {
    /// Latitude of the point.
    pub lat: f64,

    /// Longitude of the point.
    pub lng: f64,
}

/// Stages a pending listing at the clicked point of the map.
///
/// # Errors
///
/// If the clicked point is malformed or not a finite coordinate pair.
pub async fn stage_listing(
    Extension(svc): Extension<Service>,
    form: Result<Form<ClickedAt>, FormRejection>,
) -> Result<Redirect, Error> {
    let Form(ClickedAt { lat, lng }) = form.map_err(|e| e.into_error())?;
    let location = Coordinates::new(lat, lng)
        .ok_or_else(|| CoordinatesError::NotFinite.into_error())?;
    svc.execute(StageListing { location })
        .await
        .unwrap_or_else(|e| match e {});
    Ok(back())
}

/// Submits the listing form of the pending listing.
pub async fn submit_pending_listing(
    Extension(svc): Extension<Service>,
    Form(fields): Form<form::Fields>,
) -> Redirect {
    if let Err(e) = svc.execute(SubmitPendingListing(fields)).await {
        log::debug!("pending listing not created: {e}");
    }
    back()
}

/// Discards the pending listing.
pub async fn discard_pending_listing(
    Extension(svc): Extension<Service>,
) -> Redirect {
    svc.execute(DiscardPendingListing)
        .await
        .unwrap_or_else(|e| match e {});
    back()
}

/// Dismisses the shown notice.
pub async fn dismiss_notice(Extension(svc): Extension<Service>) -> Redirect {
    svc.execute(DismissNotice).await.unwrap_or_else(|e| match e {});
    back()
}

//! JSON API handlers.

use axum::{
    extract::{self, rejection::JsonRejection},
    Extension, Json,
};
use service::{
    command::{SearchPlace, SubmitManualListing},
    domain::{form, Listing},
    query,
    read::{listing::Visible, map},
    Command as _,
};

use crate::{AsError as _, Error, Service};

use super::Search;

/// Returns the map [`map::View`] to draw.
pub async fn view(Extension(svc): Extension<Service>) -> Json<map::View> {
    Json(
        svc.execute(query::map::View::new())
            .await
            .unwrap_or_else(|e| match e {}),
    )
}

/// Returns the [`Visible`] listings.
pub async fn listings(Extension(svc): Extension<Service>) -> Json<Visible> {
    Json(
        svc.execute(query::listings::Visible::new())
            .await
            .unwrap_or_else(|e| match e {}),
    )
}

/// Creates a new [`Listing`] out of a manual listing form.
///
/// # Errors
///
/// - `400 Bad Request` if the form is malformed or invalid;
/// - `502 Bad Gateway` if the listing backend failed to store the
///   [`Listing`].
pub async fn create_listing(
    Extension(svc): Extension<Service>,
    form: Result<Json<form::Manual>, JsonRejection>,
) -> Result<(http::StatusCode, Json<Listing>), Error> {
    let Json(form) = form.map_err(|e| e.into_error())?;
    let listing = svc
        .execute(SubmitManualListing(form))
        .await
        .map_err(|e| e.into_error())?;
    Ok((http::StatusCode::CREATED, Json(listing)))
}

/// Searches a place and returns its highlighted [`map::Overlay`].
///
/// # Errors
///
/// - `400 Bad Request` if the query is blank;
/// - `404 Not Found` if nothing is found;
/// - `502 Bad Gateway` if the geocoder failed.
pub async fn find_place(
    Extension(svc): Extension<Service>,
    extract::Query(Search { q }): extract::Query<Search>,
) -> Result<Json<map::Overlay>, Error> {
    let found = svc
        .execute(SearchPlace { query: q })
        .await
        .map_err(|e| e.into_error())?;
    Ok(Json(map::Overlay::from(&found)))
}

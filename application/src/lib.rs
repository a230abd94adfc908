//! Application serves the map browsing UI of the [`Service`].

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod api;
pub mod args;
pub mod config;
pub mod error;
pub mod page;

use axum::{
    http::header,
    response::IntoResponse,
    routing::{get, post},
    Extension, Router,
};
// Used in binary.
use axum_client_ip as _;
use futures as _;
use tokio as _;
use tracing_subscriber as _;
#[cfg(test)]
use tower as _;
#[cfg(test)]
use wiremock as _;

pub use self::{
    args::Args,
    config::Config,
    error::{AsError, Error},
};

/// [`Service`] with filled infrastructure dependencies.
///
/// [`Service`]: service::Service
pub type Service =
    service::Service<service::infra::Http, service::infra::Nominatim>;

/// Script drawing the map.
const MAP_JS: &str = include_str!("../assets/map.js");

/// Stylesheet of the page.
const STYLE_CSS: &str = include_str!("../assets/style.css");

/// Builds the [`Router`] of the whole application.
pub fn router(service: Service) -> Router {
    Router::new()
        .route("/", get(api::index))
        .route("/filter", post(api::filter))
        .route("/search", post(api::search))
        .route("/tiles", post(api::toggle_tiles))
        .route("/listings", post(api::submit_listing))
        .route("/pending", post(api::stage_listing))
        .route("/pending/listing", post(api::submit_pending_listing))
        .route("/pending/close", post(api::discard_pending_listing))
        .route("/notice/dismiss", post(api::dismiss_notice))
        .route("/api/view", get(api::view))
        .route("/api/search", get(api::find_place))
        .route(
            "/api/listings",
            get(api::listings).post(api::create_listing),
        )
        .route("/assets/map.js", get(map_js))
        .route("/assets/style.css", get(style_css))
        .layer(Extension(service))
}

/// Serves the [`MAP_JS`] asset.
async fn map_js() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/javascript; charset=utf-8")], MAP_JS)
}

/// Serves the [`STYLE_CSS`] asset.
async fn style_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLE_CSS)
}

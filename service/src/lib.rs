//! Service contains the business logic of the map browsing UI.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
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

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;
pub mod store;
pub mod task;

#[cfg(test)]
use wiremock as _;

use common::operations::Start;
use derive_more::Error;

#[cfg(doc)]
use infra::{Backend, Geocoder};

pub use self::{
    command::Command,
    query::Query,
    store::{State, Store},
    task::Task,
};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Map settings.
    pub map: read::map::Settings,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<B, G> {
    /// Configuration of this [`Service`].
    config: Config,

    /// Listing [`Backend`] of this [`Service`].
    backend: B,

    /// Place [`Geocoder`] of this [`Service`].
    geocoder: G,

    /// [`Store`] of the UI [`State`].
    store: Store,
}

impl<B, G> Service<B, G> {
    /// Creates a new [`Service`] with the provided parameters.
    ///
    /// The returned [`task::Background`] fetches the listings once, when
    /// awaited.
    pub fn new(
        config: Config,
        backend: B,
        geocoder: G,
    ) -> (Self, task::Background)
    where
        Self: Task<Start<task::LoadListings>, Ok = (), Err: Error + 'static>
            + Clone
            + 'static,
    {
        let this = Service {
            config,
            backend,
            geocoder,
            store: Store::new(State::new(config.map.center)),
        };

        let mut bg = task::Background::default();
        let svc = this.clone();
        bg.spawn("load_listings", async move {
            svc.execute(Start(task::LoadListings)).await
        });

        (this, bg)
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Backend`] of this [`Service`].
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns [`Geocoder`] of this [`Service`].
    #[must_use]
    pub fn geocoder(&self) -> &G {
        &self.geocoder
    }

    /// Returns [`Store`] of this [`Service`].
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }
}

//! [`Query`] definition.

pub mod listings;
pub mod map;
pub mod screen;

use std::{convert::Infallible, marker::PhantomData};

use crate::{Config, Service, State};

/// [`Query`] of the [`Service`].
pub use common::Handler as Query;

/// Read model built out of a [`State`].
pub trait ReadModel {
    /// Builds this read model out of the provided [`State`].
    fn build(state: &State, config: &Config) -> Self;
}

/// [`Query`] building a `T` [`ReadModel`] out of the current [`State`].
#[derive(Debug)]
#[expect(clippy::module_name_repetitions, reason = "more readable")]
pub struct StateQuery<T>(PhantomData<fn() -> T>);

impl<T> StateQuery<T> {
    /// Creates a new [`StateQuery`].
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for StateQuery<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B, G, T: ReadModel> Query<StateQuery<T>> for Service<B, G> {
    type Ok = T;
    type Err = Infallible;

    async fn execute(&self, _: StateQuery<T>) -> Result<Self::Ok, Self::Err> {
        let state = self.store().read().await;
        Ok(T::build(&state, self.config()))
    }
}

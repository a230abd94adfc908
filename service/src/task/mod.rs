//! Background [`Task`]s definitions.

mod background;
pub mod load_listings;

pub use common::Handler as Task;

pub use self::{background::Background, load_listings::LoadListings};

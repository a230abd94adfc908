//! Domain entities.

pub mod form;
pub mod geo;
pub mod listing;
pub mod place;

pub use self::{
    geo::{Coordinates, Ring},
    listing::Listing,
    place::{Place, SearchResult},
};

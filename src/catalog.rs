//! The album catalog: core types, collection operations and render
//! projections.
//!
//! `catalog::model` holds the `Track`/`Album` values and their derived
//! metrics, `catalog::store` the ordered collection with its uniqueness
//! invariant, and `catalog::display` the presentation-ready card
//! projections consumed by the UI.

mod display;
mod model;
mod store;

pub use display::*;
pub use model::*;
pub use store::*;

//! Interactive album entry.
//!
//! `form::model` holds the `AlbumForm` state machine that turns key
//! events into a validated [`Album`](crate::catalog::Album), one field
//! per step with retry on invalid input.

mod model;

pub use model::*;

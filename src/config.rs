//! Configuration loader and schema types.
//!
//! This module exposes the settings schema (source file, UI header,
//! startup sort) and helpers to load it from disk and environment.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;

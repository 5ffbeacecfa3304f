//! The baseline data source: a JSON file of album records.
//!
//! Loading parses the whole file up front; the caller only merges a
//! fully-parsed batch, so a broken file leaves the catalog untouched.

mod load;
mod records;

pub use load::*;
pub use records::*;

#[cfg(test)]
mod tests;

//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the catalog, the active
//! view, the browse selection and the form/search state.

mod model;

pub use model::*;

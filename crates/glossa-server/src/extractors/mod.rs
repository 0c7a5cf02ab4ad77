//! Request extractors for the Glossa API.

pub mod query;

pub use query::{ExportQuery, ListQuery};

//! The fixed file catalog served by the `/files` endpoint.

pub mod types;

pub use types::{Catalog, FileRecord, FilesResponse};

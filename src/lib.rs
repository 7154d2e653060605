//! HTTP service serving a fixed catalog of file descriptors.
//!
//! Every instance answers `GET /files` with the same three records:
//!
//! ```text
//! {"files":[{"id":"FILE-001","path":"/files/001","name":"file_0001.txt"}, ...]}
//! ```
//!
//! The instance-aware variant prefixes the body with the identity read from
//! `INSTANCE_NAME` (default `Instance-2`):
//!
//! ```text
//! {"instance":"Instance-2","files":[...]}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`catalog`]: File records and the fixed catalog
//! - [`instance`]: Instance identity and service variant
//! - [`api`]: HTTP API for files, health, metrics and docs
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod instance;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};

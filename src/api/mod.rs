//! HTTP API module: the catalog endpoint plus health, metrics and docs.

pub mod handlers;
pub mod routes;
pub mod server;

pub use handlers::AppState;
pub use routes::create_router;
pub use server::{bind, serve};

//! HTTP API layer.
//!
//! Exposes the analysis engine as JSON endpoints. The router is
//! composable: `api_router()` returns a `Router` that can be mounted on
//! any axum server instance, and `server::start` runs it with graceful
//! shutdown.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use router::api_router;
pub use server::ApiServer;
pub use types::ApiContext;

//! HTTP API module for the root and prediction endpoints.

pub mod handlers;
pub mod routes;

pub use routes::create_router;

//! Stub model-serving HTTP service.
//!
//! Exposes two endpoints standing in for a future real model server:
//!
//! ```text
//! GET  /         -> {"message": "Model server is ready"}
//! POST /predict  -> {"prediction": "fake prediction"}
//! ```
//!
//! The prediction endpoint accepts and ignores any request body. There is no
//! model loading, no input validation, and no shared state; real inference
//! logic replaces the placeholder handlers once its contract is known.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: HTTP router and handlers
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServerError};

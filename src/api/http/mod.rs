//! HTTP surface
//!
//! Router, shared state, error mapping, and the per-resource handlers.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::HttpError;
pub use state::AppState;

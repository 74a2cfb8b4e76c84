//! Web server module
//!
//! Provides the HTTP API surface: POST /search and GET /health.

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;

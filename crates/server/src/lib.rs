//! Server crate: Axum REST surface for the materials data service.
//!
//! The presentation layer is an external consumer; this crate only maps the
//! service's four retrieval operations (plus catalog lookups and health
//! probes) onto HTTP.
//!
//! # Modules
//!
//! - [`app`]: router builder and server configuration
//! - [`state`]: shared state cloned into handlers
//! - [`error`]: unified error handling with HTTP status codes
//! - [`routes`]: HTTP route handlers (health, data)

pub mod app;
pub mod error;
pub mod routes;
pub mod state;

pub use app::{ServerConfig, create_app};
pub use error::AppError;
pub use state::ServerState;

//! HTTP boundary for the course recommendation engine.
//!
//! Routes, handler state, error mapping, and environment configuration.
//! The binary in `main.rs` wires these to the MySQL store.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::Config;
pub use routes::create_router;
pub use state::AppState;

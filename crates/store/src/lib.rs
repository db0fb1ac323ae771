//! Data access layer for the course recommendation engine.
//!
//! Implements the catalog store traits against the learning platform's
//! MySQL database.

pub mod mysql;

pub use mysql::MySqlCatalogStore;

//! Recipes web server library.
//!
//! Exposes the building blocks (config, state, services, error handling,
//! routes) so integration tests and the binary entrypoint can both use them.

pub mod config;
pub mod error;
pub mod extract;
pub mod forms;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod services;
pub mod state;
pub mod views;

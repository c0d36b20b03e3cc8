//! Fleetmon gateway HTTP surface.
//!
//! Exposes the config, state, error handling, router, and route modules
//! so integration tests and the binary entrypoint share the exact same
//! middleware stack.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;

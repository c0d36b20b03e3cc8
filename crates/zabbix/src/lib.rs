//! JSON-RPC client for the upstream monitoring service.
//!
//! Provides [`client::ZabbixClient`], which layers a static service
//! credential (HTTP basic auth) under the per-operator session token and
//! funnels every operation -- login, inventory, telemetry, triggers --
//! through one envelope-decoding call discipline.

pub mod api;
pub mod client;
pub mod error;

pub use client::{ZabbixClient, ZabbixConfig};
pub use error::ZabbixError;

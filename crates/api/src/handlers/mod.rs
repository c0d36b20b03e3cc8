//! Request handlers for the gateway endpoints.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the upstream client in `fleetmon-zabbix` and
//! map errors via [`crate::error::AppError`].

pub mod auth;
pub mod devices;

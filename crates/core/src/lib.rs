//! Domain types and pure logic for the fleetmon gateway.
//!
//! Everything in this crate is I/O-free: device and trigger records as
//! they appear on the wire, the byte-to-gibibyte unit normalizer, and
//! the metric allow-list fold that turns a flat item list into one
//! device record. The upstream client and HTTP surface live in
//! `fleetmon-zabbix` and `fleetmon-api`.

pub mod device;
pub mod telemetry;
pub mod trigger;
pub mod units;

//! roomsense — portable ambient RF and environment sensing core.
//!
//! Turns raw Wi-Fi/BLE scan snapshots and chip-sensor readings into bounded,
//! classified, human-interpretable metrics: a fixed-capacity temperature
//! history with running extrema, a multi-radio crowd/interference scoring
//! model, a log-distance ranging estimator, and substring-based device and
//! vendor classification.
//!
//! This crate contains all scoring and classification logic with no platform
//! dependencies, testable on any host with `cargo test`. Platform binaries
//! (ESP32 firmware, Linux daemon, web UI) are thin consumers that provide
//! radio access via the [`driver`] traits and render the [`report`] values.
//! The core performs no I/O, owns no sockets, and persists nothing across a
//! restart — every snapshot is ephemeral and owned by the caller.

#![cfg_attr(not(test), no_std)]

pub mod census;
pub mod classify;
pub mod defaults;
pub mod driver;
pub mod monitor;
pub mod proximity;
pub mod report;
pub mod scan;
pub mod temperature;

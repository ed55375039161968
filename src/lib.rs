//! Weather station firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod channels;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod pins;

// Hardware-facing modules compile on every target; the real peripheral
// code inside is cfg-gated, host builds get simulation stubs.
pub mod adapters;
pub mod drivers;

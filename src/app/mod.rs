//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the weather station's two tasks, the reading value
//! object, and the classification rule table. All interaction with
//! hardware happens through **port traits** defined in [`ports`], keeping
//! this layer fully testable without real peripherals.

pub mod acquisition;
pub mod classify;
pub mod events;
pub mod feedback;
pub mod ports;
pub mod presentation;
pub mod reading;
pub mod status_screen;

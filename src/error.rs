//! Unified error types for the weather station firmware.
//!
//! A single `Error` enum that every subsystem can convert into, keeping
//! boot-time error handling uniform. All variants are `Copy` so they can be
//! passed between tasks and logged without allocation.
//!
//! Only two categories reach the application core: sensor read failures
//! (transient, logged and retried next period) and display initialisation
//! failure (fatal at boot). Actuators are treated as infallible.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The climate sensor could not produce a valid reading.
    Sensor(SensorError),
    /// The status display failed.
    Display(DisplayError),
    /// Peripheral initialisation failed.
    Init(&'static str),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensor(e) => write!(f, "sensor: {e}"),
            Self::Display(e) => write!(f, "display: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// Temperature channel reported not-a-number.
    TemperatureNan,
    /// Humidity channel reported not-a-number.
    HumidityNan,
    /// The DHT22 did not answer within its handshake window.
    Timeout,
    /// The 40-bit frame arrived but its checksum byte did not match.
    Checksum,
    /// The data line could not be driven or sampled.
    Pin,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TemperatureNan => write!(f, "temperature is NaN"),
            Self::HumidityNan => write!(f, "humidity is NaN"),
            Self::Timeout => write!(f, "DHT22 response timeout"),
            Self::Checksum => write!(f, "DHT22 checksum mismatch"),
            Self::Pin => write!(f, "DHT22 data line error"),
        }
    }
}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Self::Sensor(e)
    }
}

// ---------------------------------------------------------------------------
// Display errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayError {
    /// The panel did not acknowledge its init sequence. Fatal at boot.
    InitFailed,
    /// A frame could not be pushed over the bus.
    Bus,
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InitFailed => write!(f, "display init failed"),
            Self::Bus => write!(f, "display bus write failed"),
        }
    }
}

impl From<DisplayError> for Error {
    fn from(e: DisplayError) -> Self {
        Self::Display(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;

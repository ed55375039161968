//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AcquisitionTask / PresentationTask
//! ```
//!
//! Driven adapters (sensors, display, LEDs, buzzer, log sinks) implement
//! these traits. The two tasks consume them via generics, so the domain core
//! never touches hardware directly and tests substitute recording fakes.
//!
//! Each task owns the adapters it drives: the acquisition task owns the
//! sensors, the presentation task owns the display and actuators. Only the
//! diagnostic [`LineSink`] is shared, behind
//! [`DiagnosticLog`](crate::diagnostics::DiagnosticLog).

use super::classify::Indicator;
use super::events::MonitorEvent;
use crate::error::DisplayError;

// ───────────────────────────────────────────────────────────────
// Sensor ports (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Temperature / humidity sensor (DHT22 class).
///
/// Both reads return `f32::NAN` when the sensor fails; callers must check.
pub trait ClimateSensor {
    /// Air temperature in °C, or NaN.
    fn read_temperature(&mut self) -> f32;

    /// Relative humidity in %, or NaN.
    fn read_humidity(&mut self) -> f32;
}

/// Analog wind proxy. Never fails.
pub trait WindSensor {
    /// Raw ADC sample in `0..=MAX_ADC`.
    fn read_raw(&mut self) -> u16;
}

// ───────────────────────────────────────────────────────────────
// Actuator ports (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Four discrete class LEDs.
pub trait IndicatorPort {
    fn set_indicator(&mut self, indicator: Indicator, on: bool);
}

/// Tone-capable buzzer output.
pub trait TonePort {
    /// Sound `frequency_hz` for `duration_ms`, then silence.
    ///
    /// Blocks the calling task for the full duration.
    fn emit_tone(&mut self, frequency_hz: u32, duration_ms: u32);
}

/// Monochrome text surface (128×64).
///
/// Drawing is buffered; nothing is visible until [`present`](Self::present).
pub trait StatusDisplay {
    /// Blank the frame buffer.
    fn clear(&mut self);

    /// Draw `text` with its top-left corner at (`x`, `y`) pixels.
    fn draw_text(&mut self, x: i32, y: i32, text: &str);

    /// Push the frame buffer to the panel.
    fn present(&mut self) -> Result<(), DisplayError>;
}

// ───────────────────────────────────────────────────────────────
// Output sinks (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// Line-oriented diagnostic text sink (serial console in production).
pub trait LineSink {
    fn write_line(&mut self, line: &str);
}

/// The domain emits structured [`MonitorEvent`]s through this port.
pub trait EventSink {
    fn emit(&mut self, event: &MonitorEvent);
}

//! Log-based sink adapters.
//!
//! [`LogEventSink`] writes structured monitor events to the ESP-IDF logger
//! (UART / USB-CDC in production). [`LogLineSink`] carries the diagnostic
//! text lines under their own `diag` target so they can be filtered
//! independently.

use log::{info, warn};

use crate::app::events::MonitorEvent;
use crate::app::ports::{EventSink, LineSink};

/// Adapter that logs every [`MonitorEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &MonitorEvent) {
        match event {
            MonitorEvent::TaskStarted(task) => {
                info!("START | {:?}", task);
            }
            MonitorEvent::Published(r) => {
                info!(
                    "READ  | T={:.2}\u{00b0}C | RH={:.2}% | wind_raw={}",
                    r.temperature_c(),
                    r.humidity_pct(),
                    r.wind_raw(),
                );
            }
            MonitorEvent::Classified {
                reading,
                wind_pct,
                weather,
            } => {
                info!(
                    "WX    | {} | T={:.2}\u{00b0}C | RH={:.2}% | wind={}%",
                    weather.label(),
                    reading.temperature_c(),
                    reading.humidity_pct(),
                    wind_pct,
                );
            }
            MonitorEvent::FrameDropped => {
                info!("DISP  | frame dropped, previous frame kept");
            }
        }
    }
}

/// Diagnostic line sink backed by the `log` facade.
pub struct LogLineSink;

impl LogLineSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogLineSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSink for LogLineSink {
    fn write_line(&mut self, line: &str) {
        warn!(target: "diag", "{}", line);
    }
}

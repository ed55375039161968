//! Outbound application events.
//!
//! The tasks emit these through the [`EventSink`](super::ports::EventSink)
//! port. Adapters on the other side decide what to do with them — in the
//! firmware they become one structured log line each.

use super::classify::Weather;
use super::reading::Reading;

/// Which of the two tasks an event concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskId {
    Acquisition,
    Presentation,
}

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum MonitorEvent {
    /// A task entered its main loop.
    TaskStarted(TaskId),

    /// A reading was accepted and published to the channel.
    Published(Reading),

    /// A reading was classified and the outputs were driven.
    Classified {
        reading: Reading,
        wind_pct: u8,
        weather: Weather,
    },

    /// The display rejected a frame; the previous frame stays visible.
    FrameDropped,
}

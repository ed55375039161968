//! Classification & presentation task — the consumer side of the pipeline.
//!
//! ```text
//!            reading arrives
//!  WAITING ───────────────────▶ PROCESSING
//!     ▲                             │
//!     └──────── cycle done ─────────┘
//! ```
//!
//! PROCESSING runs, in order: wind rescale → rule chain → indicators →
//! buzzer (blocking) → screen redraw. The task owns the display and every
//! actuator; nothing else touches them. The current state is published
//! through a [`StateHandle`] that other threads can poll.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info, warn};

use super::classify::{self, Conditions, Weather};
use super::events::{MonitorEvent, TaskId};
use super::feedback::{alert_for, apply_indicators, play_alert};
use super::ports::{EventSink, IndicatorPort, StatusDisplay, TonePort};
use super::reading::Reading;
use super::status_screen;
use crate::channels::ReadingReceiver;

/// Scheduling state of the presentation task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// Parked on the reading slot.
    Waiting,
    /// Handling one reading.
    Processing,
}

/// Shared view of a [`PresentationTask`]'s state.
#[derive(Debug, Clone, Default)]
pub struct StateHandle {
    processing: Arc<AtomicBool>,
}

impl StateHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> TaskState {
        if self.processing.load(Ordering::Acquire) {
            TaskState::Processing
        } else {
            TaskState::Waiting
        }
    }

    fn set(&self, state: TaskState) {
        self.processing
            .store(state == TaskState::Processing, Ordering::Release);
    }
}

/// Consumer side of the pipeline.
pub struct PresentationTask<D, I, T, E>
where
    D: StatusDisplay,
    I: IndicatorPort,
    T: TonePort,
    E: EventSink,
{
    display: D,
    leds: I,
    buzzer: T,
    events: E,
    state: StateHandle,
    last: Option<Weather>,
    processed: u64,
}

impl<D, I, T, E> PresentationTask<D, I, T, E>
where
    D: StatusDisplay,
    I: IndicatorPort,
    T: TonePort,
    E: EventSink,
{
    pub fn new(display: D, leds: I, buzzer: T, events: E) -> Self {
        Self {
            display,
            leds,
            buzzer,
            events,
            state: StateHandle::new(),
            last: None,
            processed: 0,
        }
    }

    /// Report state through `handle` instead of a private one.
    pub fn with_state_handle(mut self, handle: StateHandle) -> Self {
        self.state = handle;
        self
    }

    /// Run one PROCESSING pass for `reading` and return its class.
    pub fn process(&mut self, reading: &Reading) -> Weather {
        self.state.set(TaskState::Processing);
        debug!("presentation | PROCESSING");

        let wind_pct = reading.wind_pct();
        let weather = classify::classify(&Conditions::from(reading));

        apply_indicators(&mut self.leds, weather.indicator());
        play_alert(&mut self.buzzer, alert_for(weather));

        if let Err(e) = status_screen::render(&mut self.display, reading, wind_pct, weather) {
            warn!("DISP | frame dropped: {}", e);
            self.events.emit(&MonitorEvent::FrameDropped);
        }

        if self.last != Some(weather) {
            info!("WX | {:?} -> {:?}", self.last, weather);
        }
        self.last = Some(weather);
        self.processed += 1;

        self.events.emit(&MonitorEvent::Classified {
            reading: *reading,
            wind_pct,
            weather,
        });

        self.state.set(TaskState::Waiting);
        debug!("presentation | WAITING");
        weather
    }

    /// Run forever: block on the slot, process, repeat.
    pub fn run(mut self, rx: ReadingReceiver) -> ! {
        self.events
            .emit(&MonitorEvent::TaskStarted(TaskId::Presentation));
        loop {
            let reading = rx.recv();
            self.process(&reading);
        }
    }

    pub fn state(&self) -> TaskState {
        self.state.get()
    }

    /// Handle that keeps tracking the state after the task moves to its thread.
    pub fn state_handle(&self) -> StateHandle {
        self.state.clone()
    }

    /// Class of the most recently processed reading.
    pub fn last_weather(&self) -> Option<Weather> {
        self.last
    }

    /// Readings processed since start.
    pub fn processed(&self) -> u64 {
        self.processed
    }

    /// Borrow the owned adapters (tests inspect recorded calls).
    pub fn parts(&self) -> (&D, &I, &T) {
        (&self.display, &self.leds, &self.buzzer)
    }
}

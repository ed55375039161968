//! Mock hardware adapters for integration tests.
//!
//! Sensors replay a script; actuators and the display record every call so
//! tests can assert on the full command history without GPIO, LEDC or I2C.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use weatherstation::app::classify::Indicator;
use weatherstation::app::events::MonitorEvent;
use weatherstation::app::feedback::{IndicatorBank, Tone};
use weatherstation::app::ports::{
    ClimateSensor, EventSink, IndicatorPort, LineSink, StatusDisplay, TonePort, WindSensor,
};
use weatherstation::error::DisplayError;

// ── Sensors ───────────────────────────────────────────────────

/// Replays (temperature, humidity) pairs, one per cycle; the last pair
/// repeats once the script runs out.
pub struct ScriptedClimate {
    script: VecDeque<(f32, f32)>,
    current: (f32, f32),
}

impl ScriptedClimate {
    pub fn new(script: &[(f32, f32)]) -> Self {
        Self {
            script: script.iter().copied().collect(),
            current: (f32::NAN, f32::NAN),
        }
    }
}

impl ClimateSensor for ScriptedClimate {
    fn read_temperature(&mut self) -> f32 {
        if let Some(next) = self.script.pop_front() {
            self.current = next;
        }
        self.current.0
    }

    fn read_humidity(&mut self) -> f32 {
        self.current.1
    }
}

pub struct ScriptedWind {
    script: VecDeque<u16>,
    current: u16,
}

impl ScriptedWind {
    pub fn new(script: &[u16]) -> Self {
        Self {
            script: script.iter().copied().collect(),
            current: 0,
        }
    }
}

impl WindSensor for ScriptedWind {
    fn read_raw(&mut self) -> u16 {
        if let Some(next) = self.script.pop_front() {
            self.current = next;
        }
        self.current
    }
}

// ── Actuators ─────────────────────────────────────────────────

#[derive(Default)]
pub struct MockIndicators {
    pub calls: Vec<(Indicator, bool)>,
    pub bank: IndicatorBank,
}

impl IndicatorPort for MockIndicators {
    fn set_indicator(&mut self, indicator: Indicator, on: bool) {
        self.calls.push((indicator, on));
        self.bank.set(indicator, on);
    }
}

/// Records tones instead of sleeping.
#[derive(Default)]
pub struct MockBuzzer {
    pub tones: Vec<Tone>,
}

impl TonePort for MockBuzzer {
    fn emit_tone(&mut self, frequency_hz: u32, duration_ms: u32) {
        self.tones.push(Tone {
            frequency_hz,
            duration_ms,
        });
    }
}

// ── Display ───────────────────────────────────────────────────

pub type TextItem = (i32, i32, String);

/// Text-level display fake. `presented` holds every frame that reached
/// the glass; a failed present leaves it untouched.
#[derive(Default)]
pub struct MockDisplay {
    pending: Vec<TextItem>,
    pub presented: Vec<Vec<TextItem>>,
    /// Once this many frames are on record, every present fails.
    pub fail_after: Option<usize>,
}

#[allow(dead_code)]
impl MockDisplay {
    pub fn failing_after(frames: usize) -> Self {
        Self {
            fail_after: Some(frames),
            ..Self::default()
        }
    }

    /// What the panel currently shows.
    pub fn visible(&self) -> Option<&[TextItem]> {
        self.presented.last().map(Vec::as_slice)
    }

    pub fn visible_text(&self) -> Vec<&str> {
        self.visible()
            .map(|frame| frame.iter().map(|(_, _, t)| t.as_str()).collect())
            .unwrap_or_default()
    }
}

impl StatusDisplay for MockDisplay {
    fn clear(&mut self) {
        self.pending.clear();
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        self.pending.push((x, y, text.to_owned()));
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        if self.fail_after.is_some_and(|n| self.presented.len() >= n) {
            return Err(DisplayError::Bus);
        }
        self.presented.push(self.pending.clone());
        Ok(())
    }
}

// ── Shared output log ─────────────────────────────────────────

/// One output command, in the order the task issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputCall {
    Indicator(Indicator, bool),
    Tone(u32),
    Present,
}

/// Single timeline shared by [`LoggedIndicators`], [`LoggedBuzzer`] and
/// [`LoggedDisplay`].
#[derive(Clone, Default)]
pub struct OutputLog(Arc<Mutex<Vec<OutputCall>>>);

impl OutputLog {
    pub fn calls(&self) -> Vec<OutputCall> {
        self.0.lock().unwrap().clone()
    }

    fn push(&self, call: OutputCall) {
        self.0.lock().unwrap().push(call);
    }
}

pub struct LoggedIndicators(pub OutputLog);

impl IndicatorPort for LoggedIndicators {
    fn set_indicator(&mut self, indicator: Indicator, on: bool) {
        self.0.push(OutputCall::Indicator(indicator, on));
    }
}

pub struct LoggedBuzzer(pub OutputLog);

impl TonePort for LoggedBuzzer {
    fn emit_tone(&mut self, frequency_hz: u32, _duration_ms: u32) {
        self.0.push(OutputCall::Tone(frequency_hz));
    }
}

pub struct LoggedDisplay(pub OutputLog);

impl StatusDisplay for LoggedDisplay {
    fn clear(&mut self) {}

    fn draw_text(&mut self, _x: i32, _y: i32, _text: &str) {}

    fn present(&mut self) -> Result<(), DisplayError> {
        self.0.push(OutputCall::Present);
        Ok(())
    }
}

// ── Sinks ─────────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingLines {
    pub lines: Vec<String>,
}

impl LineSink for RecordingLines {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_owned());
    }
}

/// Event sink that can be observed from another thread.
#[derive(Clone, Default)]
pub struct EventRecorder {
    events: Arc<Mutex<Vec<MonitorEvent>>>,
}

#[allow(dead_code)]
impl EventRecorder {
    pub fn snapshot(&self) -> Vec<MonitorEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn classified(&self) -> usize {
        self.snapshot()
            .iter()
            .filter(|e| matches!(e, MonitorEvent::Classified { .. }))
            .count()
    }
}

impl EventSink for EventRecorder {
    fn emit(&mut self, event: &MonitorEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

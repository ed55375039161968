//! Actuator sequencing: indicator LEDs and buzzer patterns per weather class.

use super::classify::{Indicator, Weather};
use super::ports::{IndicatorPort, TonePort};

/// A single buzzer beep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tone {
    pub frequency_hz: u32,
    pub duration_ms: u32,
}

const STORM_BEEP: Tone = Tone {
    frequency_hz: 200,
    duration_ms: 100,
};

/// Three short low beeps for both severe causes.
pub const SEVERE_ALERT: [Tone; 3] = [STORM_BEEP; 3];

pub const CLEAR_ALERT: [Tone; 1] = [Tone {
    frequency_hz: 900,
    duration_ms: 80,
}];

pub const CLOUDY_ALERT: [Tone; 1] = [Tone {
    frequency_hz: 700,
    duration_ms: 80,
}];

pub const RAIN_ALERT: [Tone; 1] = [Tone {
    frequency_hz: 500,
    duration_ms: 120,
}];

/// Beep sequence for `weather`.
pub fn alert_for(weather: Weather) -> &'static [Tone] {
    match weather {
        Weather::Clear => &CLEAR_ALERT,
        Weather::Cloudy => &CLOUDY_ALERT,
        Weather::Rain => &RAIN_ALERT,
        Weather::Severe(_) => &SEVERE_ALERT,
    }
}

/// Play `tones` back to back. Each call blocks for its duration.
pub fn play_alert(buzzer: &mut impl TonePort, tones: &[Tone]) {
    for tone in tones {
        buzzer.emit_tone(tone.frequency_hz, tone.duration_ms);
    }
}

/// Turn every indicator off, then light exactly `active`.
pub fn apply_indicators(leds: &mut impl IndicatorPort, active: Indicator) {
    for ind in Indicator::ALL {
        leds.set_indicator(ind, false);
    }
    leds.set_indicator(active, true);
}

/// Last commanded level of each indicator.
///
/// Mirrors what was written through an [`IndicatorPort`] so callers can
/// query the current state without reading GPIO back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndicatorBank {
    levels: [bool; Indicator::COUNT],
}

impl IndicatorBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, indicator: Indicator, on: bool) {
        self.levels[indicator.index()] = on;
    }

    pub fn is_on(&self, indicator: Indicator) -> bool {
        self.levels[indicator.index()]
    }

    /// Number of indicators currently lit.
    pub fn lit_count(&self) -> usize {
        self.levels.iter().filter(|&&on| on).count()
    }

    /// The lit indicator, if exactly one is on.
    pub fn active(&self) -> Option<Indicator> {
        if self.lit_count() != 1 {
            return None;
        }
        Indicator::ALL.into_iter().find(|&i| self.is_on(i))
    }
}

impl IndicatorPort for IndicatorBank {
    fn set_indicator(&mut self, indicator: Indicator, on: bool) {
        self.set(indicator, on);
    }
}

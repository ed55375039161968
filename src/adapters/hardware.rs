//! Hardware adapters — bridge the drivers to the domain port traits.
//!
//! The acquisition task owns [`ClimateAdapter`] and [`WindAdapter`]; the
//! presentation task owns [`IndicatorAdapter`] and [`BuzzerAdapter`]. No
//! adapter is shared between tasks. On non-espidf targets the underlying
//! drivers use cfg-gated simulation stubs.

use log::debug;

use crate::app::classify::Indicator;
use crate::app::feedback::IndicatorBank;
use crate::app::ports::{ClimateSensor, IndicatorPort, TonePort, WindSensor};
use crate::drivers::buzzer::Buzzer;
use crate::drivers::dht22::{Dht22, Dht22Reading};
use crate::drivers::indicator_leds::IndicatorLeds;
use crate::drivers::wind_adc::WindAdc;
use crate::error::SensorError;

// ── ClimateSensor ─────────────────────────────────────────────

/// DHT22 behind the NaN-sentinel [`ClimateSensor`] contract.
///
/// One conversion yields both values. `read_temperature` starts a fresh
/// conversion; the following `read_humidity` reuses it. A failed conversion
/// reports NaN on both channels.
pub struct ClimateAdapter {
    dht: Dht22,
    pending: Option<Result<Dht22Reading, SensorError>>,
}

impl ClimateAdapter {
    pub fn new(dht: Dht22) -> Self {
        Self { dht, pending: None }
    }

    fn convert(&mut self) -> Result<Dht22Reading, SensorError> {
        let result = self.dht.read();
        if let Err(e) = result {
            debug!("DHT22 | conversion failed: {}", e);
        }
        result
    }
}

impl ClimateSensor for ClimateAdapter {
    fn read_temperature(&mut self) -> f32 {
        let result = self.convert();
        self.pending = Some(result);
        result.map_or(f32::NAN, |r| r.temperature_c)
    }

    fn read_humidity(&mut self) -> f32 {
        let result = match self.pending.take() {
            Some(r) => r,
            None => self.convert(),
        };
        result.map_or(f32::NAN, |r| r.humidity_pct)
    }
}

// ── WindSensor ────────────────────────────────────────────────

pub struct WindAdapter {
    adc: WindAdc,
}

impl WindAdapter {
    pub fn new(adc: WindAdc) -> Self {
        Self { adc }
    }
}

impl WindSensor for WindAdapter {
    fn read_raw(&mut self) -> u16 {
        self.adc.read()
    }
}

// ── IndicatorPort ─────────────────────────────────────────────

pub struct IndicatorAdapter {
    leds: IndicatorLeds,
}

impl IndicatorAdapter {
    pub fn new(mut leds: IndicatorLeds) -> Self {
        leds.all_off();
        Self { leds }
    }

    pub fn levels(&self) -> IndicatorBank {
        self.leds.levels()
    }
}

impl IndicatorPort for IndicatorAdapter {
    fn set_indicator(&mut self, indicator: Indicator, on: bool) {
        self.leds.set(indicator, on);
    }
}

// ── TonePort ──────────────────────────────────────────────────

pub struct BuzzerAdapter {
    buzzer: Buzzer,
}

impl BuzzerAdapter {
    pub fn new(buzzer: Buzzer) -> Self {
        Self { buzzer }
    }
}

impl TonePort for BuzzerAdapter {
    fn emit_tone(&mut self, frequency_hz: u32, duration_ms: u32) {
        self.buzzer.beep(frequency_hz, duration_ms);
    }
}

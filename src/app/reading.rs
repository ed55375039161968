//! The `Reading` value object and wind-proxy rescaling.

use crate::error::SensorError;

/// Full-scale value of the 12-bit ADC feeding the wind proxy.
pub const MAX_ADC: u16 = 4095;

/// One validated sample of temperature, humidity and the raw wind proxy.
///
/// Immutable once built. Only [`Reading::new`] constructs one, and it
/// refuses NaN inputs, so a `Reading` in the channel is always valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    temperature_c: f32,
    humidity_pct: f32,
    wind_raw: u16,
}

impl Reading {
    /// Validate and build a reading. Temperature is checked first.
    pub fn new(temperature_c: f32, humidity_pct: f32, wind_raw: u16) -> Result<Self, SensorError> {
        if temperature_c.is_nan() {
            return Err(SensorError::TemperatureNan);
        }
        if humidity_pct.is_nan() {
            return Err(SensorError::HumidityNan);
        }
        Ok(Self {
            temperature_c,
            humidity_pct,
            wind_raw: wind_raw.min(MAX_ADC),
        })
    }

    /// Temperature in °C.
    pub fn temperature_c(&self) -> f32 {
        self.temperature_c
    }

    /// Relative humidity in %.
    pub fn humidity_pct(&self) -> f32 {
        self.humidity_pct
    }

    /// Raw ADC value of the wind proxy, `0..=MAX_ADC`.
    pub fn wind_raw(&self) -> u16 {
        self.wind_raw
    }

    /// Wind proxy as an integer percentage (see [`wind_percent`]).
    pub fn wind_pct(&self) -> u8 {
        wind_percent(self.wind_raw)
    }
}

/// Linearly rescale a raw ADC value from `[0, MAX_ADC]` to `[0, 100]`,
/// truncating toward zero. Values above `MAX_ADC` saturate at 100.
pub fn wind_percent(raw: u16) -> u8 {
    let raw = u32::from(raw.min(MAX_ADC));
    (raw * 100 / u32::from(MAX_ADC)) as u8
}

//! Potentiometer wind-speed proxy on ADC2.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC2_CH6 via the oneshot API (initialised by hw_init).
//! On host/test: reads from a static AtomicU16 for injection.

use core::sync::atomic::AtomicU16;
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::Ordering;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
use crate::app::reading::MAX_ADC;

static SIM_WIND_ADC: AtomicU16 = AtomicU16::new(0);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_wind_adc(raw: u16) {
    SIM_WIND_ADC.store(raw, Ordering::Relaxed);
}

pub struct WindAdc {
    _channel: u32,
}

impl WindAdc {
    pub fn new(adc2_channel: u32) -> Self {
        Self {
            _channel: adc2_channel,
        }
    }

    /// One raw sample, clamped to `0..=MAX_ADC`.
    pub fn read(&self) -> u16 {
        self.read_adc().min(MAX_ADC)
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> u16 {
        hw_init::adc2_read(self._channel)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> u16 {
        SIM_WIND_ADC.load(Ordering::Relaxed)
    }
}

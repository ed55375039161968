//! Four discrete weather LEDs on plain GPIO outputs (active HIGH).
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives GPIO levels via hw_init.
//! On host/test: tracks state in-memory only.

use crate::app::classify::Indicator;
use crate::app::feedback::IndicatorBank;
use crate::drivers::hw_init;
use crate::pins;

pub struct IndicatorLeds {
    bank: IndicatorBank,
}

impl IndicatorLeds {
    pub fn new() -> Self {
        Self {
            bank: IndicatorBank::new(),
        }
    }

    pub fn set(&mut self, indicator: Indicator, on: bool) {
        hw_init::gpio_write(Self::gpio(indicator), on);
        self.bank.set(indicator, on);
    }

    pub fn all_off(&mut self) {
        for ind in Indicator::ALL {
            self.set(ind, false);
        }
    }

    /// Last commanded levels.
    pub fn levels(&self) -> IndicatorBank {
        self.bank
    }

    const fn gpio(indicator: Indicator) -> i32 {
        match indicator {
            Indicator::Clear => pins::LED_CLEAR_GPIO,
            Indicator::Cloudy => pins::LED_CLOUDY_GPIO,
            Indicator::Rain => pins::LED_RAIN_GPIO,
            Indicator::Severe => pins::LED_SEVERE_GPIO,
        }
    }
}

impl Default for IndicatorLeds {
    fn default() -> Self {
        Self::new()
    }
}

//! Passive piezo buzzer on an LEDC channel.
//!
//! `beep()` is synchronous: it starts the square wave, sleeps the calling
//! thread for the duration, then silences the output.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: retunes the LEDC timer per tone via hw_init.
//! On host/test: only sleeps, so timing behaviour matches the target.

use std::thread;
use std::time::Duration;

use crate::drivers::hw_init;

pub struct Buzzer {
    channel: u32,
}

impl Buzzer {
    pub fn new() -> Self {
        Self {
            channel: hw_init::LEDC_CH_BUZZER,
        }
    }

    pub fn beep(&mut self, frequency_hz: u32, duration_ms: u32) {
        hw_init::ledc_tone(self.channel, frequency_hz);
        thread::sleep(Duration::from_millis(u64::from(duration_ms)));
        self.silence();
    }

    pub fn silence(&mut self) {
        hw_init::ledc_tone(self.channel, 0);
    }
}

impl Default for Buzzer {
    fn default() -> Self {
        Self::new()
    }
}

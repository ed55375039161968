//! System configuration parameters
//!
//! Compile-time defaults for timing, task placement, and the display bus.
//! Classification thresholds are not here: they are fixed in the
//! rule table (`app::classify::RULES`) and never change at runtime.

use serde::{Deserialize, Serialize};

use crate::drivers::dht22;
use crate::error::{Error, Result};

/// Where and how a task is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPlacement {
    /// CPU core index (0 = PRO, 1 = APP on the ESP32-S3).
    pub core: u8,
    /// FreeRTOS priority.
    pub priority: u8,
    /// Stack size in KiB.
    pub stack_kb: usize,
}

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    // --- Timing ---
    /// Acquisition period (milliseconds). Soft deadline; never below the
    /// DHT22's 2 s conversion interval.
    pub sample_period_ms: u32,
    /// How long the boot splash stays on screen before tasks start.
    pub boot_splash_ms: u32,

    // --- Display ---
    /// 7-bit I2C address of the SSD1306.
    pub display_i2c_addr: u8,

    // --- Tasks ---
    pub acquisition: TaskPlacement,
    pub presentation: TaskPlacement,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            sample_period_ms: 2000,
            boot_splash_ms: 1000,

            display_i2c_addr: 0x3C,

            // Sensor sampling on the APP core, screen + buzzer on PRO.
            acquisition: TaskPlacement {
                core: 1,
                priority: 1,
                stack_kb: 8,
            },
            // Float formatting, glyph rendering and the I2C flush all run here.
            presentation: TaskPlacement {
                core: 0,
                priority: 1,
                stack_kb: 12,
            },
        }
    }
}

impl MonitorConfig {
    /// Reject values that would stall or crash a task.
    pub fn validate(&self) -> Result<()> {
        if self.sample_period_ms < dht22::MIN_INTERVAL_MS {
            return Err(Error::Config("sample_period_ms below DHT22 minimum interval"));
        }
        if self.acquisition.stack_kb == 0 || self.presentation.stack_kb == 0 {
            return Err(Error::Config("task stack_kb must be non-zero"));
        }
        if self.acquisition.core > 1 || self.presentation.core > 1 {
            return Err(Error::Config("core must be 0 or 1"));
        }
        Ok(())
    }
}

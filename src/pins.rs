//! GPIO / peripheral pin assignments for the weather station board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Sensors
// ---------------------------------------------------------------------------

/// DHT22 single-wire data line (open-drain, external 10 kΩ pull-up).
pub const DHT22_GPIO: i32 = 21;

/// Potentiometer standing in for an anemometer. ADC2 channel 6 on ESP32-S3.
pub const WIND_ADC_GPIO: i32 = 17;
pub const WIND_ADC2_CHANNEL: u32 = 6;

// ---------------------------------------------------------------------------
// Weather indicator LEDs (active HIGH)
// ---------------------------------------------------------------------------

pub const LED_CLEAR_GPIO: i32 = 15;
pub const LED_CLOUDY_GPIO: i32 = 7;
pub const LED_RAIN_GPIO: i32 = 6;
pub const LED_SEVERE_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// Buzzer (passive piezo, LEDC square wave)
// ---------------------------------------------------------------------------

pub const BUZZER_GPIO: i32 = 12;
/// LEDC timer resolution (bits) for the buzzer. 10 bits reaches down to
/// ~80 Hz from the 80 MHz APB clock.
pub const BUZZER_RESOLUTION_BITS: u32 = 10;

// ---------------------------------------------------------------------------
// I²C bus (SSD1306 OLED)
// ---------------------------------------------------------------------------

pub const I2C_SDA_GPIO: i32 = 8;
pub const I2C_SCL_GPIO: i32 = 9;
pub const I2C_FREQ_HZ: u32 = 400_000;

//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements     | Connects to                  |
//! |-------------|----------------|------------------------------|
//! | `hardware`  | ClimateSensor  | DHT22 single-wire (GPIO21)   |
//! |             | WindSensor     | ADC2 CH6 potentiometer       |
//! |             | IndicatorPort  | Four class LEDs              |
//! |             | TonePort       | LEDC buzzer                  |
//! | `display`   | StatusDisplay  | SSD1306 over I2C / sim panel |
//! | `log_sink`  | EventSink      | Serial log output            |
//! |             | LineSink       | Serial log, `diag` target    |

pub mod display;
pub mod hardware;
pub mod log_sink;

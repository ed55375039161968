//! Sensor and actuator drivers, hardware initialisation, and task helpers.

pub mod buzzer;
pub mod dht22;
pub mod hw_init;
pub mod indicator_leds;
pub mod task_pin;
pub mod wind_adc;

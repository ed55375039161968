//! DHT22 / AM2302 temperature + humidity sensor.
//!
//! The single-wire protocol (start pulse, 40-bit frame, checksum) is
//! handled by the `dht-sensor` crate over an open-drain `PinDriver` and
//! the ROM busy-wait delay. This module owns the data line, keeps the bit
//! windows free of interrupts and maps the crate's errors onto
//! [`SensorError`].
//!
//! ## Dual-target design
//!
//! On ESP-IDF: `dht_sensor::dht22::Reading::read` on GPIO21.
//! On host/test: returns values injected through `sim_set_reading`.

use dht_sensor::DhtError;

use crate::error::SensorError;

/// Minimum interval between two conversions (datasheet: 2 s).
pub const MIN_INTERVAL_MS: u32 = 2_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dht22Reading {
    pub temperature_c: f32,
    pub humidity_pct: f32,
}

impl From<dht_sensor::dht22::Reading> for Dht22Reading {
    fn from(r: dht_sensor::dht22::Reading) -> Self {
        Self {
            temperature_c: r.temperature,
            humidity_pct: r.relative_humidity,
        }
    }
}

impl<E> From<DhtError<E>> for SensorError {
    fn from(e: DhtError<E>) -> Self {
        match e {
            DhtError::PinError(_) => Self::Pin,
            DhtError::ChecksumMismatch => Self::Checksum,
            DhtError::Timeout => Self::Timeout,
        }
    }
}

// ── ESP-IDF ───────────────────────────────────────────────────

/// Open-drain data line, idle HIGH through the pull-up.
#[cfg(target_os = "espidf")]
pub type DhtPin = esp_idf_hal::gpio::PinDriver<
    'static,
    esp_idf_hal::gpio::AnyIOPin,
    esp_idf_hal::gpio::InputOutput,
>;

pub struct Dht22 {
    #[cfg(target_os = "espidf")]
    pin: DhtPin,
}

#[cfg(target_os = "espidf")]
impl Dht22 {
    /// Take ownership of the data line and release it HIGH.
    pub fn new(mut pin: DhtPin) -> Result<Self, SensorError> {
        pin.set_pull(esp_idf_hal::gpio::Pull::Up)
            .map_err(|_| SensorError::Pin)?;
        pin.set_high().map_err(|_| SensorError::Pin)?;
        log::info!("DHT22 on GPIO{}", crate::pins::DHT22_GPIO);
        Ok(Self { pin })
    }

    /// Run one conversion. Takes ~25 ms, all of it with interrupts masked
    /// on the calling core: a 26 µs `0` bit stretched by an ISR reads as a
    /// 70 µs `1`.
    pub fn read(&mut self) -> Result<Dht22Reading, SensorError> {
        use dht_sensor::DhtReading;
        use esp_idf_hal::delay::Ets;

        let pin = &mut self.pin;
        let reading = esp_idf_hal::interrupt::free(|| {
            dht_sensor::dht22::Reading::read(&mut Ets, pin)
        })?;
        Ok(reading.into())
    }
}

// ── Host simulation ───────────────────────────────────────────

#[cfg(not(target_os = "espidf"))]
impl Dht22 {
    pub fn new() -> Self {
        Self {}
    }

    pub fn read(&mut self) -> Result<Dht22Reading, SensorError> {
        sim::read()
    }
}

#[cfg(not(target_os = "espidf"))]
impl Default for Dht22 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_os = "espidf"))]
mod sim {
    use core::sync::atomic::{AtomicU64, Ordering};

    use super::Dht22Reading;
    use crate::error::SensorError;

    /// Temperature tenths (i16) in bits 16..32, humidity tenths in 0..16.
    static SIM_READING: AtomicU64 = AtomicU64::new(pack(250, 500));
    const TIMEOUT_FLAG: u64 = 1 << 32;

    const fn pack(temp_tenths: i16, humidity_tenths: u16) -> u64 {
        ((temp_tenths as u16 as u64) << 16) | humidity_tenths as u64
    }

    pub fn set(temp_tenths: i16, humidity_tenths: u16) {
        SIM_READING.store(pack(temp_tenths, humidity_tenths), Ordering::Relaxed);
    }

    pub fn set_timeout() {
        SIM_READING.store(TIMEOUT_FLAG, Ordering::Relaxed);
    }

    pub fn read() -> Result<Dht22Reading, SensorError> {
        let packed = SIM_READING.load(Ordering::Relaxed);
        if packed & TIMEOUT_FLAG != 0 {
            return Err(SensorError::Timeout);
        }
        let temp_tenths = (packed >> 16) as u16 as i16;
        let humidity_tenths = packed as u16;
        Ok(Dht22Reading {
            temperature_c: f32::from(temp_tenths) / 10.0,
            humidity_pct: f32::from(humidity_tenths) / 10.0,
        })
    }
}

/// Inject the next simulated conversion (tenths of °C / %RH).
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_reading(temp_tenths: i16, humidity_tenths: u16) {
    sim::set(temp_tenths, humidity_tenths);
}

/// Make the simulated sensor stop answering.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_unresponsive() {
    sim::set_timeout();
}

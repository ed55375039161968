//! Weather Station Firmware — Main Entry Point
//!
//! Two tasks joined by a single-slot reading handoff:
//!
//! ```text
//! ┌──────────────────────── APP core ────────────────────────┐
//! │  AcquisitionTask                                         │
//! │  ClimateAdapter (DHT22) · WindAdapter (ADC2)             │
//! │          │ publish (overwrite)       │ diagnostics       │
//! └──────────┼───────────────────────────┼───────────────────┘
//!            ▼                           ▼
//!      ReadingSender ─▶ slot       DiagnosticLog (shared)
//!            │                           ▲
//! ┌──────────┼───────────────────────────┼── PRO core ───────┐
//! │  PresentationTask  ◀── recv (block) ─┘                   │
//! │  OledDisplay (SSD1306) · IndicatorAdapter · BuzzerAdapter│
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::thread;
use std::time::Duration;

use anyhow::Result;
use esp_idf_hal::gpio::{IOPin, PinDriver};
use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::units::Hertz;
use log::{error, info, warn};

use weatherstation::adapters::display::open_ssd1306;
use weatherstation::adapters::hardware::{BuzzerAdapter, ClimateAdapter, IndicatorAdapter, WindAdapter};
use weatherstation::adapters::log_sink::{LogEventSink, LogLineSink};
use weatherstation::app::acquisition::AcquisitionTask;
use weatherstation::app::presentation::PresentationTask;
use weatherstation::app::status_screen;
use weatherstation::channels::reading_channel;
use weatherstation::config::MonitorConfig;
use weatherstation::diagnostics::DiagnosticLog;
use weatherstation::drivers::buzzer::Buzzer;
use weatherstation::drivers::dht22::Dht22;
use weatherstation::drivers::hw_init;
use weatherstation::drivers::indicator_leds::IndicatorLeds;
use weatherstation::drivers::task_pin::spawn_task;
use weatherstation::drivers::wind_adc::WindAdc;
use weatherstation::error::Error;
use weatherstation::pins;

/// Stop here for good. Nothing is spawned yet, so no output is ever driven.
fn halt(reason: Error) -> ! {
    error!("{} — halting", reason);
    loop {
        thread::sleep(Duration::from_secs(1));
    }
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("WeatherStation v{}", env!("CARGO_PKG_VERSION"));

    let config = MonitorConfig::default();
    config.validate()?;

    // ── 2. Peripherals ────────────────────────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        error!("hw_init: {}", e);
        halt(e.into());
    }

    let peripherals = Peripherals::take()?;
    let dht = Dht22::new(PinDriver::input_output_od(peripherals.pins.gpio21.downgrade())?)
        .unwrap_or_else(|e| halt(e.into()));

    // SDA = pins::I2C_SDA_GPIO, SCL = pins::I2C_SCL_GPIO
    let i2c = I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio8,
        peripherals.pins.gpio9,
        &I2cConfig::new().baudrate(Hertz(pins::I2C_FREQ_HZ)),
    )?;

    // ── 3. Display + splash ───────────────────────────────────
    let mut display =
        open_ssd1306(i2c, config.display_i2c_addr).unwrap_or_else(|e| halt(e.into()));
    if let Err(e) = status_screen::render_splash(&mut display) {
        warn!("splash not shown: {}", e);
    }
    thread::sleep(Duration::from_millis(config.boot_splash_ms.into()));

    // ── 4. Wire the pipeline ──────────────────────────────────
    let (tx, rx) = reading_channel();
    let diag = DiagnosticLog::new(LogLineSink::new());

    let acquisition = AcquisitionTask::new(
        ClimateAdapter::new(dht),
        WindAdapter::new(WindAdc::new(pins::WIND_ADC2_CHANNEL)),
        tx,
        diag,
        LogEventSink::new(),
        Duration::from_millis(config.sample_period_ms.into()),
    );
    let presentation = PresentationTask::new(
        display,
        IndicatorAdapter::new(IndicatorLeds::new()),
        BuzzerAdapter::new(Buzzer::new()),
        LogEventSink::new(),
    );

    // ── 5. Spawn ──────────────────────────────────────────────
    spawn_task(&config.acquisition, "sensor\0", move || {
        acquisition.run();
    })?;
    spawn_task(&config.presentation, "display\0", move || {
        presentation.run(rx);
    })?;

    info!("Tasks running");

    // The main task has nothing left to do.
    loop {
        thread::park();
    }
}

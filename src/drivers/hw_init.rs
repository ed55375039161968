//! One-shot hardware peripheral initialization.
//!
//! Configures the indicator GPIOs, the buzzer LEDC timer/channel and the
//! wind ADC using raw ESP-IDF sys calls. Called once from `main()` before
//! the tasks are spawned. The DHT22 line and the I2C display are owned as
//! `esp-idf-hal` drivers by their adapters.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    AdcInitFailed(i32),
    GpioConfigFailed(i32),
    LedcInitFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AdcInitFailed(rc) => write!(f, "ADC2 init failed (rc={})", rc),
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
            Self::LedcInitFailed(rc) => write!(f, "LEDC timer/channel config failed (rc={})", rc),
        }
    }
}

impl From<HwInitError> for crate::error::Error {
    fn from(e: HwInitError) -> Self {
        Self::Init(match e {
            HwInitError::AdcInitFailed(_) => "wind ADC",
            HwInitError::GpioConfigFailed(_) => "indicator GPIO",
            HwInitError::LedcInitFailed(_) => "buzzer LEDC",
        })
    }
}

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::pins;

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before tasks are spawned; single-threaded.
    unsafe {
        init_adc()?;
        init_gpio_outputs()?;
        init_ledc()?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── ADC (oneshot, wind proxy) ─────────────────────────────────

#[cfg(target_os = "espidf")]
static mut ADC2_HANDLE: adc_oneshot_unit_handle_t = core::ptr::null_mut();

/// SAFETY: ADC2_HANDLE is written once in `init_adc()` before any task
/// exists; afterwards only the acquisition task reads it.
#[cfg(target_os = "espidf")]
unsafe fn adc2_handle() -> adc_oneshot_unit_handle_t {
    unsafe { ADC2_HANDLE }
}

#[cfg(target_os = "espidf")]
unsafe fn init_adc() -> Result<(), HwInitError> {
    let init_cfg = adc_oneshot_unit_init_cfg_t {
        unit_id: adc_unit_t_ADC_UNIT_2,
        ulp_mode: adc_ulp_mode_t_ADC_ULP_MODE_DISABLE,
        ..Default::default()
    };
    // SAFETY: ADC2_HANDLE is only written here, once at boot.
    let ret = unsafe { adc_oneshot_new_unit(&init_cfg, &raw mut ADC2_HANDLE) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::AdcInitFailed(ret));
    }

    let chan_cfg = adc_oneshot_chan_cfg_t {
        atten: adc_atten_t_ADC_ATTEN_DB_12,
        bitwidth: adc_bitwidth_t_ADC_BITWIDTH_12,
    };
    let ret = unsafe { adc_oneshot_config_channel(adc2_handle(), pins::WIND_ADC2_CHANNEL, &chan_cfg) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::AdcInitFailed(ret));
    }

    info!(
        "hw_init: ADC2 configured (CH{} on GPIO{} = wind)",
        pins::WIND_ADC2_CHANNEL,
        pins::WIND_ADC_GPIO
    );
    Ok(())
}

/// Read one 12-bit sample. Returns 0 on a driver error.
#[cfg(target_os = "espidf")]
pub fn adc2_read(channel: u32) -> u16 {
    let mut raw: i32 = 0;
    // SAFETY: adc2_handle() contract — initialised before tasks start,
    // read only from the acquisition task.
    let ret = unsafe { adc_oneshot_read(adc2_handle(), channel, &mut raw) };
    if ret != ESP_OK as i32 {
        return 0;
    }
    raw.max(0) as u16
}

// ── GPIO Outputs (indicator LEDs) ─────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_gpio_outputs() -> Result<(), HwInitError> {
    let output_pins = [
        pins::LED_CLEAR_GPIO,
        pins::LED_CLOUDY_GPIO,
        pins::LED_RAIN_GPIO,
        pins::LED_SEVERE_GPIO,
    ];

    for &pin in &output_pins {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_OUTPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 {
            return Err(HwInitError::GpioConfigFailed(ret));
        }
        unsafe { gpio_set_level(pin, 0) };
    }

    info!("hw_init: indicator GPIOs configured");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) {
    // SAFETY: gpio_set_level writes to an already-configured output pin.
    // Each pin is driven by exactly one task.
    unsafe {
        gpio_set_level(pin, u32::from(high));
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(_pin: i32, _high: bool) {}

// ── LEDC (buzzer) ─────────────────────────────────────────────

pub const LEDC_CH_BUZZER: u32 = 0;

/// Initial frequency; retuned per tone by [`ledc_tone`].
#[cfg(target_os = "espidf")]
const BUZZER_IDLE_FREQ_HZ: u32 = 1_000;

#[cfg(target_os = "espidf")]
unsafe fn init_ledc() -> Result<(), HwInitError> {
    let timer = ledc_timer_config_t {
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        timer_num: ledc_timer_t_LEDC_TIMER_0,
        duty_resolution: ledc_timer_bit_t_LEDC_TIMER_10_BIT,
        freq_hz: BUZZER_IDLE_FREQ_HZ,
        clk_cfg: soc_periph_ledc_clk_src_legacy_t_LEDC_AUTO_CLK,
        ..Default::default()
    };
    // SAFETY: Called from single main-task context via init_peripherals().
    let ret = unsafe { ledc_timer_config(&timer) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::LedcInitFailed(ret));
    }

    let ret = unsafe {
        ledc_channel_config(&ledc_channel_config_t {
            speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
            channel: LEDC_CH_BUZZER,
            timer_sel: ledc_timer_t_LEDC_TIMER_0,
            gpio_num: pins::BUZZER_GPIO,
            duty: 0,
            hpoint: 0,
            ..Default::default()
        })
    };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::LedcInitFailed(ret));
    }

    info!("hw_init: LEDC configured (buzzer=CH{})", LEDC_CH_BUZZER);
    Ok(())
}

/// Start a square wave at `frequency_hz` (50 % duty), or silence with 0.
#[cfg(target_os = "espidf")]
pub fn ledc_tone(channel: u32, frequency_hz: u32) {
    let half_duty = 1u32 << (pins::BUZZER_RESOLUTION_BITS - 1);
    // SAFETY: the buzzer channel was configured in init_ledc(); only the
    // presentation task calls this.
    unsafe {
        if frequency_hz == 0 {
            ledc_set_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel, 0);
        } else {
            ledc_set_freq(
                ledc_mode_t_LEDC_LOW_SPEED_MODE,
                ledc_timer_t_LEDC_TIMER_0,
                frequency_hz,
            );
            ledc_set_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel, half_duty);
        }
        ledc_update_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel);
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn ledc_tone(_channel: u32, _frequency_hz: u32) {}

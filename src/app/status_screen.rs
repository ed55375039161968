//! Fixed four-line status layout.
//!
//! ```text
//!  y=0   Temp: 26.00°C
//!  y=15  Humidity: 55.00 %
//!  y=30  Wind: 24 %
//!  y=50  Cuaca: CERAH
//! ```

use core::fmt::{self, Write};

use super::classify::Weather;
use super::ports::StatusDisplay;
use super::reading::Reading;
use crate::error::DisplayError;

pub const LINE_X: i32 = 0;
pub const TEMP_Y: i32 = 0;
pub const HUMIDITY_Y: i32 = 15;
pub const WIND_Y: i32 = 30;
pub const LABEL_Y: i32 = 50;

/// Longest line: "Humidity: -100.00 %" plus headroom.
pub type Line = heapless::String<32>;

/// `prefix` followed by `value`, or `prefix--` when the value does not fit.
fn line(prefix: &str, value: fmt::Arguments<'_>) -> Line {
    let mut s = Line::new();
    if write!(s, "{prefix}{value}").is_err() {
        s.clear();
        let _ = write!(s, "{prefix}--");
    }
    s
}

pub fn temperature_line(temperature_c: f32) -> Line {
    line("Temp: ", format_args!("{:.2}\u{00b0}C", temperature_c))
}

pub fn humidity_line(humidity_pct: f32) -> Line {
    line("Humidity: ", format_args!("{:.2} %", humidity_pct))
}

pub fn wind_line(wind_pct: u8) -> Line {
    line("Wind: ", format_args!("{} %", wind_pct))
}

pub fn label_line(weather: Weather) -> Line {
    line("Cuaca: ", format_args!("{}", weather.label()))
}

/// Clear, draw all four lines, present.
pub fn render(
    display: &mut impl StatusDisplay,
    reading: &Reading,
    wind_pct: u8,
    weather: Weather,
) -> Result<(), DisplayError> {
    display.clear();
    display.draw_text(LINE_X, TEMP_Y, &temperature_line(reading.temperature_c()));
    display.draw_text(LINE_X, HUMIDITY_Y, &humidity_line(reading.humidity_pct()));
    display.draw_text(LINE_X, WIND_Y, &wind_line(wind_pct));
    display.draw_text(LINE_X, LABEL_Y, &label_line(weather));
    display.present()
}

/// Boot splash shown before the tasks start.
pub fn render_splash(display: &mut impl StatusDisplay) -> Result<(), DisplayError> {
    display.clear();
    display.draw_text(LINE_X, TEMP_Y, "Booting...");
    display.present()
}

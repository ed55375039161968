//! Status display adapter over `embedded-graphics`.
//!
//! [`OledDisplay`] implements [`StatusDisplay`] for any monochrome
//! [`FramePanel`]: a buffered `DrawTarget` that can push its buffer to
//! glass. On the firmware that is the SSD1306 in buffered graphics mode on
//! I2C; on the host it is [`SimPanel`], a plain 128×64 pixel array.

use embedded_graphics::{
    mono_font::{MonoTextStyle, iso_8859_1::FONT_6X10},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};
use log::warn;

use crate::app::ports::StatusDisplay;
use crate::error::DisplayError;

pub const WIDTH: usize = 128;
pub const HEIGHT: usize = 64;

/// A monochrome buffered panel.
pub trait FramePanel: DrawTarget<Color = BinaryColor> {
    /// Send the whole frame buffer to the panel.
    fn flush_frame(&mut self) -> Result<(), DisplayError>;
}

/// Text-oriented [`StatusDisplay`] over a [`FramePanel`].
///
/// Draw errors are latched and reported by the next [`present`](StatusDisplay::present),
/// which then skips the flush so a half-drawn frame never reaches the glass.
pub struct OledDisplay<P> {
    panel: P,
    draw_failed: bool,
}

impl<P: FramePanel> OledDisplay<P> {
    pub fn new(panel: P) -> Self {
        Self {
            panel,
            draw_failed: false,
        }
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut P {
        &mut self.panel
    }
}

impl<P: FramePanel> StatusDisplay for OledDisplay<P> {
    fn clear(&mut self) {
        if self.panel.clear(BinaryColor::Off).is_err() {
            self.draw_failed = true;
        }
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        // ISO 8859-1 so the degree sign renders.
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        if Text::with_baseline(text, Point::new(x, y), style, Baseline::Top)
            .draw(&mut self.panel)
            .is_err()
        {
            self.draw_failed = true;
        }
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        if core::mem::take(&mut self.draw_failed) {
            warn!("DISP | draw failed, frame not flushed");
            return Err(DisplayError::Bus);
        }
        self.panel.flush_frame()
    }
}

// ── SSD1306 (firmware) ────────────────────────────────────────

#[cfg(feature = "espidf")]
mod ssd1306_panel {
    use embedded_hal::i2c::I2c;
    use ssd1306::mode::BufferedGraphicsMode;
    use ssd1306::prelude::*;
    use ssd1306::{I2CDisplayInterface, Ssd1306};

    use super::{FramePanel, OledDisplay};
    use crate::error::DisplayError;

    pub type Ssd1306Panel<I2C> = Ssd1306<
        I2CInterface<I2C>,
        DisplaySize128x64,
        BufferedGraphicsMode<DisplaySize128x64>,
    >;

    impl<I2C: I2c> FramePanel for Ssd1306Panel<I2C> {
        fn flush_frame(&mut self) -> Result<(), DisplayError> {
            self.flush().map_err(|_| DisplayError::Bus)
        }
    }

    /// Bring up the SSD1306 at `addr` on an already-configured I2C bus.
    pub fn open<I2C: I2c>(i2c: I2C, addr: u8) -> Result<OledDisplay<Ssd1306Panel<I2C>>, DisplayError> {
        let interface = I2CDisplayInterface::new_custom_address(i2c, addr);
        let mut panel = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        panel.init().map_err(|_| DisplayError::InitFailed)?;
        log::info!("SSD1306 ready at 0x{:02X}", addr);
        Ok(OledDisplay::new(panel))
    }
}

#[cfg(feature = "espidf")]
pub use ssd1306_panel::{Ssd1306Panel, open as open_ssd1306};

// ── Host simulation ───────────────────────────────────────────

/// In-memory 128×64 panel for host runs and tests.
#[cfg(not(target_os = "espidf"))]
pub struct SimPanel {
    pixels: [[bool; WIDTH]; HEIGHT],
    flushes: u32,
    fail_flush: bool,
}

#[cfg(not(target_os = "espidf"))]
impl SimPanel {
    pub fn new() -> Self {
        Self {
            pixels: [[false; WIDTH]; HEIGHT],
            flushes: 0,
            fail_flush: false,
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.pixels.get(y).and_then(|row| row.get(x)).copied().unwrap_or(false)
    }

    /// Number of lit pixels in rows `rows`.
    pub fn lit_in_rows(&self, rows: core::ops::Range<usize>) -> usize {
        self.pixels[rows]
            .iter()
            .map(|row| row.iter().filter(|&&p| p).count())
            .sum()
    }

    pub fn flushes(&self) -> u32 {
        self.flushes
    }

    /// Make every following flush fail with a bus error.
    pub fn set_flush_failure(&mut self, fail: bool) {
        self.fail_flush = fail;
    }
}

#[cfg(not(target_os = "espidf"))]
impl Default for SimPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_os = "espidf"))]
impl OriginDimensions for SimPanel {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

#[cfg(not(target_os = "espidf"))]
impl DrawTarget for SimPanel {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) else {
                continue;
            };
            if x < WIDTH && y < HEIGHT {
                self.pixels[y][x] = color.is_on();
            }
        }
        Ok(())
    }
}

#[cfg(not(target_os = "espidf"))]
impl FramePanel for SimPanel {
    fn flush_frame(&mut self) -> Result<(), DisplayError> {
        if self.fail_flush {
            return Err(DisplayError::Bus);
        }
        self.flushes += 1;
        log::debug!(
            "DISP(sim) | frame {} ({} px lit)",
            self.flushes,
            self.lit_in_rows(0..HEIGHT)
        );
        Ok(())
    }
}

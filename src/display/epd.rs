//! `Panel` for the Waveshare 7.5" V2 (800x480, black/white) via
//! `epd-waveshare`.
//!
//! All drawing goes into a full-size frame buffer. The driver has no
//! windowed update for this controller, so a partial window only limits
//! what is painted into the buffer; the whole buffer is then pushed.

use embedded_graphics::prelude::*;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::spi::SpiDevice;
use epd_waveshare::color::Color;
use epd_waveshare::epd7in5_v2::{Epd7in5, HEIGHT, WIDTH};
use epd_waveshare::graphics::VarDisplay;
use epd_waveshare::prelude::WaveshareDisplay;

use super::canvas::{Canvas, Panel};
use super::graphics::GraphicsCanvas;
use super::{Rect, Window};
use crate::error::{Error, Result};

/// Bytes of one full 1-bpp frame.
pub const FRAME_LEN: usize = epd_waveshare::buffer_len(WIDTH as usize, HEIGHT as usize);

const PANEL: Rect = Rect::new(0, 0, WIDTH as i32, HEIGHT as i32);

pub struct EpdPanel<SPI, BUSY, DC, RST, DELAY>
where
    SPI: SpiDevice,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    epd: Epd7in5<SPI, BUSY, DC, RST, DELAY>,
    spi: SPI,
    delay: DELAY,
    frame: VarDisplay<'static, Color>,
}

impl<SPI, BUSY, DC, RST, DELAY> EpdPanel<SPI, BUSY, DC, RST, DELAY>
where
    SPI: SpiDevice,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    /// Reset the controller and wrap a `FRAME_LEN` frame buffer.
    pub fn new(
        mut spi: SPI,
        busy: BUSY,
        dc: DC,
        rst: RST,
        mut delay: DELAY,
        frame: &'static mut [u8],
    ) -> Result<Self> {
        let epd = Epd7in5::new(&mut spi, busy, dc, rst, &mut delay, None)
            .map_err(|_| Error::Display)?;
        let mut frame =
            VarDisplay::new(WIDTH, HEIGHT, frame, false).map_err(|_| Error::BufferOverflow)?;
        let _ = frame.clear(Color::White);

        Ok(Self {
            epd,
            spi,
            delay,
            frame,
        })
    }

    /// Current frame buffer, as last pushed to the panel.
    pub fn frame(&self) -> &[u8] {
        self.frame.buffer()
    }

    fn push_frame(&mut self) -> Result<()> {
        self.epd
            .update_and_display_frame(&mut self.spi, self.frame.buffer(), &mut self.delay)
            .map_err(|_| Error::Display)
    }

    /// Put the controller into deep sleep. `init` wakes it again.
    pub fn sleep(&mut self) -> Result<()> {
        self.epd
            .sleep(&mut self.spi, &mut self.delay)
            .map_err(|_| Error::Display)
    }
}

impl<SPI, BUSY, DC, RST, DELAY> Panel for EpdPanel<SPI, BUSY, DC, RST, DELAY>
where
    SPI: SpiDevice,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    fn init(&mut self) -> Result<()> {
        self.epd
            .wake_up(&mut self.spi, &mut self.delay)
            .map_err(|_| Error::Display)
    }

    fn size(&self) -> Size {
        Size::new(WIDTH, HEIGHT)
    }

    fn refresh(&mut self, window: Window, draw: &mut dyn FnMut(&mut dyn Canvas)) -> Result<()> {
        if let Window::Partial(rect) = window {
            if rect.x < 0 || rect.y < 0 || rect.right() > PANEL.w || rect.bottom() > PANEL.h {
                return Err(Error::Display);
            }
            #[cfg(feature = "defmt")]
            defmt::trace!("partial window {}", rect);
        }

        draw(&mut GraphicsCanvas::new(&mut self.frame));
        self.push_frame()
    }
}

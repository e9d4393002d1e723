//! Drawing seam between the layout engine and the panel driver.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{Point, Size};

use super::logo::Bitmap;
use super::{Font, Rect, Window};
use crate::error::Result;

/// Drawing primitives on the panel's frame buffer.
///
/// `BinaryColor::On` is ink (black), `BinaryColor::Off` is paper (white).
/// Text is always drawn in ink, anchored at its baseline, without
/// wrapping or clipping.
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: BinaryColor);

    /// One-pixel outline.
    fn draw_rect(&mut self, rect: Rect, color: BinaryColor);

    fn draw_line(&mut self, start: Point, end: Point, color: BinaryColor);

    fn draw_bitmap(&mut self, top_left: Point, bitmap: &Bitmap);

    /// Select the font for subsequent `text_size` / `draw_text` calls.
    fn set_font(&mut self, font: Font);

    /// Bounding box of `text` rendered in the current font.
    fn text_size(&self, text: &str) -> Size;

    fn draw_text(&mut self, baseline: Point, text: &str);
}

/// An e-paper panel that commits drawing in full or partial windows.
pub trait Panel {
    /// Bring the controller out of reset and configure it.
    fn init(&mut self) -> Result<()>;

    /// Panel resolution in pixels.
    fn size(&self) -> Size;

    /// Open `window`, let `draw` paint into it and push it to the glass.
    ///
    /// Drivers that render in pages may call `draw` once per page, so it
    /// must paint the same content on every call.
    fn refresh(&mut self, window: Window, draw: &mut dyn FnMut(&mut dyn Canvas)) -> Result<()>;
}

//! `Canvas` over an `embedded-graphics` draw target.

use embedded_graphics::image::{Image, ImageRaw};
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_9X15, FONT_9X18_BOLD};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::renderer::TextRenderer;
use embedded_graphics::text::{Baseline, Text};

use super::canvas::Canvas;
use super::logo::Bitmap;
use super::{Font, Rect};

/// Mono font backing each layout font.
pub fn mono_font(font: Font) -> &'static MonoFont<'static> {
    match font {
        Font::Regular => &FONT_9X15,
        Font::Large => &FONT_10X20,
        Font::Bold => &FONT_9X18_BOLD,
    }
}

/// Adapts any draw target whose colour converts from `BinaryColor`
/// (plain `BinaryColor` buffers, `epd_waveshare::color::Color`, ...).
///
/// Draw errors are dropped: frame-buffer targets cannot fail, and the
/// panel reports transfer errors when the window is committed.
pub struct GraphicsCanvas<'a, D> {
    target: &'a mut D,
    font: Font,
}

impl<'a, D> GraphicsCanvas<'a, D>
where
    D: DrawTarget,
    D::Color: From<BinaryColor>,
{
    pub fn new(target: &'a mut D) -> Self {
        Self {
            target,
            font: Font::default(),
        }
    }

    fn text_style(&self) -> MonoTextStyle<'static, D::Color> {
        MonoTextStyle::new(mono_font(self.font), BinaryColor::On.into())
    }
}

impl<D> Canvas for GraphicsCanvas<'_, D>
where
    D: DrawTarget,
    D::Color: From<BinaryColor>,
{
    fn fill_rect(&mut self, rect: Rect, color: BinaryColor) {
        if let Some(area) = rect.to_rectangle() {
            let _ = area
                .into_styled(PrimitiveStyle::with_fill(color.into()))
                .draw(&mut *self.target);
        }
    }

    fn draw_rect(&mut self, rect: Rect, color: BinaryColor) {
        if let Some(area) = rect.to_rectangle() {
            let _ = area
                .into_styled(PrimitiveStyle::with_stroke(color.into(), 1))
                .draw(&mut *self.target);
        }
    }

    fn draw_line(&mut self, start: Point, end: Point, color: BinaryColor) {
        let _ = Line::new(start, end)
            .into_styled(PrimitiveStyle::with_stroke(color.into(), 1))
            .draw(&mut *self.target);
    }

    fn draw_bitmap(&mut self, top_left: Point, bitmap: &Bitmap) {
        let raw = ImageRaw::<BinaryColor>::new(bitmap.data, bitmap.width);
        let _ = Image::new(&raw, top_left).draw(&mut self.target.color_converted());
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn text_size(&self, text: &str) -> Size {
        self.text_style()
            .measure_string(text, Point::zero(), Baseline::Alphabetic)
            .bounding_box
            .size
    }

    fn draw_text(&mut self, baseline: Point, text: &str) {
        let _ = Text::with_baseline(text, baseline, self.text_style(), Baseline::Alphabetic)
            .draw(&mut *self.target);
    }
}

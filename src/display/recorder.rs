//! Recording `Panel` for host tests: logs every primitive instead of
//! rasterising it.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{Point, Size};

use super::canvas::{Canvas, Panel};
use super::logo::Bitmap;
use super::{Font, Rect, Window};
use crate::config::{PANEL_HEIGHT, PANEL_WIDTH};
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Commit(Window),
    Fill(Rect, BinaryColor),
    Outline(Rect),
    Line(Point, Point),
    Bitmap(Point),
    Text(Point, Font, String),
}

/// Glyph cell of each font, matching the mono fonts `GraphicsCanvas` uses.
pub fn cell(font: Font) -> Size {
    match font {
        Font::Regular => Size::new(9, 15),
        Font::Large => Size::new(10, 20),
        Font::Bold => Size::new(9, 18),
    }
}

#[derive(Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
    font: Font,
}

impl Canvas for Recorder {
    fn fill_rect(&mut self, rect: Rect, color: BinaryColor) {
        self.ops.push(Op::Fill(rect, color));
    }

    fn draw_rect(&mut self, rect: Rect, _color: BinaryColor) {
        self.ops.push(Op::Outline(rect));
    }

    fn draw_line(&mut self, start: Point, end: Point, _color: BinaryColor) {
        self.ops.push(Op::Line(start, end));
    }

    fn draw_bitmap(&mut self, top_left: Point, _bitmap: &Bitmap) {
        self.ops.push(Op::Bitmap(top_left));
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn text_size(&self, text: &str) -> Size {
        let cell = cell(self.font);
        Size::new(cell.width * text.chars().count() as u32, cell.height)
    }

    fn draw_text(&mut self, baseline: Point, text: &str) {
        self.ops.push(Op::Text(baseline, self.font, text.into()));
    }
}

pub struct RecordingPanel {
    pub canvas: Recorder,
    pub size: Size,
    pub inits: u32,
    /// Times `draw` runs per commit, like a paged driver.
    pub pages: u32,
    pub fail_commits: bool,
}

impl Default for RecordingPanel {
    fn default() -> Self {
        Self {
            canvas: Recorder::default(),
            size: Size::new(PANEL_WIDTH as u32, PANEL_HEIGHT as u32),
            inits: 0,
            pages: 1,
            fail_commits: false,
        }
    }
}

impl RecordingPanel {
    pub fn ops(&self) -> &[Op] {
        &self.canvas.ops
    }

    pub fn clear(&mut self) {
        self.canvas.ops.clear();
    }

    pub fn commits(&self) -> Vec<Window> {
        self.ops()
            .iter()
            .filter_map(|op| match op {
                Op::Commit(window) => Some(*window),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<(Point, String)> {
        self.ops()
            .iter()
            .filter_map(|op| match op {
                Op::Text(at, _, text) => Some((*at, text.clone())),
                _ => None,
            })
            .collect()
    }

    /// Lines with equal start and end y.
    pub fn horizontal_lines(&self) -> usize {
        self.ops()
            .iter()
            .filter(|op| matches!(op, Op::Line(a, b) if a.y == b.y))
            .count()
    }
}

impl Panel for RecordingPanel {
    fn init(&mut self) -> Result<()> {
        self.inits += 1;
        Ok(())
    }

    fn size(&self) -> Size {
        self.size
    }

    fn refresh(&mut self, window: Window, draw: &mut dyn FnMut(&mut dyn Canvas)) -> Result<()> {
        if self.fail_commits {
            return Err(Error::Display);
        }
        self.canvas.ops.push(Op::Commit(window));
        for _ in 0..self.pages {
            draw(&mut self.canvas);
        }
        Ok(())
    }
}

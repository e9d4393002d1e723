//! Display subsystem - e-paper layout and partial refresh.
//!
//! The panel shows a narrow rail (room, date, logo) on the left and up
//! to three person rows in the content area. Status boxes and the date
//! box can be refreshed on their own without redrawing the whole panel.
//!
//! ## Components
//!
//! - **Canvas / Panel**: drawing primitives and the refresh-window commit
//! - **GraphicsCanvas**: `Canvas` over any `embedded-graphics` target
//! - **LayoutEngine**: rail + content geometry, full and partial draws
//! - **EpdPanel** (`epd` feature): `Panel` for the Waveshare 7.5" V2

pub mod canvas;
pub mod graphics;
pub mod layout;
pub mod logo;

#[cfg(feature = "epd")]
pub mod epd;

#[cfg(test)]
pub(crate) mod recorder;

pub use canvas::{Canvas, Panel};
pub use graphics::GraphicsCanvas;
pub use layout::{dirty_region, status_rects, LayoutEngine, DATE_RECT};

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

/// Pixel rectangle in panel coordinates.
///
/// Width and height are signed: a rect with a non-positive extent is
/// "absent" and never drawn or refreshed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub const fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Widen horizontally so both edges fall on byte (8 px) boundaries.
    pub const fn align_x8(&self) -> Self {
        let x = self.x & !7;
        let right = (self.right() + 7) & !7;
        Self::new(x, self.y, right - x, self.h)
    }

    /// `embedded-graphics` rectangle, or `None` for an empty rect.
    pub fn to_rectangle(&self) -> Option<Rectangle> {
        if self.is_empty() {
            return None;
        }
        Some(Rectangle::new(
            self.top_left(),
            Size::new(self.w as u32, self.h as u32),
        ))
    }
}

/// Layout variant, named after how many people it shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayoutType {
    Display1,
    Display2,
    Display3,
}

impl LayoutType {
    /// Number of person slots the layout draws.
    pub const fn slots(self) -> usize {
        match self {
            Self::Display1 => 1,
            Self::Display2 => 2,
            Self::Display3 => 3,
        }
    }

    /// Smallest layout that fits `people` persons (at least one slot).
    pub const fn for_people(people: usize) -> Self {
        match people {
            0 | 1 => Self::Display1,
            2 => Self::Display2,
            _ => Self::Display3,
        }
    }
}

/// Type faces used by the layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// Small labels: date, roles in the multi-row layouts.
    #[default]
    Regular,
    /// Large label: the role in the single-person layout.
    Large,
    /// Names, statuses and the room label.
    Bold,
}

/// Panel area a refresh commits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Window {
    Full,
    Partial(Rect),
}

//! Rail/content layout and partial status/date refresh.
//!
//! ```text
//!  ┌──────┬─────────────────────────────────────────┐
//!  │ Room │ Role                                    │
//!  │ Date │ Name                                    │
//!  │      │ ┌─────────────────────────────────────┐ │
//!  │ Logo │ │              Status                 │ │
//!  │      │ └─────────────────────────────────────┘ │
//!  │      ├─────────────────────────────────────────┤
//!  │      │ ... one row per person (up to 3) ...    │
//!  └──────┴─────────────────────────────────────────┘
//! ```
//!
//! Geometry is computed by [`status_rects`] and [`row_geometry`], which
//! both the full draw and [`LayoutEngine::prime_layout`] go through, so
//! a primed engine always targets the same boxes a full draw would.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::Point;

use super::canvas::{Canvas, Panel};
use super::logo::LOGO;
use super::{Font, LayoutType, Rect, Window};
use crate::config::{
    CONTENT_PAD, DATE_BOX_H, DIRTY_MARGIN_BOTTOM, DIRTY_MARGIN_SIDE, DIRTY_MARGIN_TOP,
    LOGO_BOX_H, MAX_PEOPLE, PANEL_HEIGHT, PANEL_WIDTH, RAIL_PAD, RAIL_WIDTH, ROOM_BOX_H,
    STATUS_MAX_H, STATUS_MIN_H,
};
use crate::error::Result;
use crate::roster::Person;

/// First column right of the rail divider.
pub const CONTENT_X: i32 = RAIL_WIDTH + 1;

/// Content area width, leaving room for the outer border.
pub const CONTENT_W: i32 = PANEL_WIDTH - CONTENT_X - 2;

/// Date box in the rail; the only part of the rail that is refreshed
/// on its own.
pub const DATE_RECT: Rect = Rect::new(
    RAIL_PAD,
    RAIL_PAD + ROOM_BOX_H,
    RAIL_WIDTH - 2 * RAIL_PAD,
    DATE_BOX_H,
);

/// Fixed status box of the single-person layout.
pub const SINGLE_STATUS_W: i32 = 560;
pub const SINGLE_STATUS_H: i32 = 100;
const SINGLE_STATUS_CENTER_Y: i32 = 320;
const SINGLE_ROLE_Y: i32 = 90;
const SINGLE_NAME_Y: i32 = 140;

/// Rows span the panel minus a 5 px top and bottom inset.
const ROWS_TOP: i32 = 5;
const ROWS_BOTTOM: i32 = PANEL_HEIGHT - 5;

/// Empirical baseline correction for vertically centred text.
const BASELINE_FIX: i32 = 2;

/// Vertical offsets of one person row, relative to the row top.
struct RowOffsets {
    role: i32,
    name: i32,
    status: i32,
}

const fn row_offsets(layout: LayoutType) -> RowOffsets {
    match layout {
        LayoutType::Display3 => RowOffsets {
            role: 18,
            name: 36,
            status: 24,
        },
        _ => RowOffsets {
            role: 20,
            name: 38,
            status: 30,
        },
    }
}

/// Where one person row puts its labels and status box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowGeometry {
    pub top: i32,
    pub bottom: i32,
    pub role_baseline: i32,
    pub name_baseline: i32,
    pub status: Rect,
}

/// Geometry of row `row` in a multi-row layout.
pub fn row_geometry(layout: LayoutType, row: usize) -> RowGeometry {
    let rows = layout.slots() as i32;
    let row_h = (ROWS_BOTTOM - ROWS_TOP) / rows;
    let top = ROWS_TOP + row as i32 * row_h;
    let bottom = top + row_h;

    let offsets = row_offsets(layout);
    let role_baseline = top + offsets.role;
    let name_baseline = role_baseline + offsets.name;
    let status_top = name_baseline + offsets.status;
    let status_h = (bottom - status_top - 6).clamp(STATUS_MIN_H, STATUS_MAX_H);

    RowGeometry {
        top,
        bottom,
        role_baseline,
        name_baseline,
        status: Rect::new(
            CONTENT_X + CONTENT_PAD,
            status_top,
            CONTENT_W - 2 * CONTENT_PAD,
            status_h,
        ),
    }
}

const fn single_status_rect() -> Rect {
    Rect::new(
        CONTENT_X + (CONTENT_W - SINGLE_STATUS_W) / 2,
        SINGLE_STATUS_CENTER_Y - SINGLE_STATUS_H / 2,
        SINGLE_STATUS_W,
        SINGLE_STATUS_H,
    )
}

/// Status boxes of every slot for `layout`; unused slots are `Rect::ZERO`.
pub fn status_rects(layout: LayoutType) -> [Rect; MAX_PEOPLE] {
    let mut rects = [Rect::ZERO; MAX_PEOPLE];
    match layout {
        LayoutType::Display1 => rects[0] = single_status_rect(),
        LayoutType::Display2 | LayoutType::Display3 => {
            for (row, rect) in rects.iter_mut().take(layout.slots()).enumerate() {
                *rect = row_geometry(layout, row).status;
            }
        }
    }
    rects
}

/// Area refreshed when a status box changes.
///
/// The box grows by the dirty margins, its horizontal edges snap
/// outward to 8 px (one frame-buffer byte) and the result is clamped to
/// the panel. Returns `None` if nothing of it is on the panel.
pub fn dirty_region(rect: Rect, panel_w: i32, panel_h: i32) -> Option<Rect> {
    let left = rect.x - DIRTY_MARGIN_SIDE;
    let x = if left < 0 { 0 } else { left & !7 };
    let right = ((rect.right() + DIRTY_MARGIN_SIDE + 7) & !7).min(panel_w);

    let y = (rect.y - DIRTY_MARGIN_TOP).max(0);
    let bottom = (rect.bottom() + DIRTY_MARGIN_BOTTOM).min(panel_h);

    let region = Rect::new(x, y, right - x, bottom - y);
    (!region.is_empty()).then_some(region)
}

fn text_left(canvas: &mut dyn Canvas, x: i32, baseline: i32, text: &str) {
    canvas.draw_text(Point::new(x, baseline), text);
}

/// Centre `text` in `rect` using the current font.
fn text_centered(canvas: &mut dyn Canvas, rect: Rect, text: &str) {
    let size = canvas.text_size(text);
    let x = rect.x + (rect.w - size.width as i32) / 2;
    let y = rect.y + (rect.h + size.height as i32) / 2 - BASELINE_FIX;
    canvas.draw_text(Point::new(x, y), text);
}

/// Border, rail divider, room, date and logo.
fn draw_rail(canvas: &mut dyn Canvas, room: &str, date: &str) {
    canvas.fill_rect(
        Rect::new(0, 0, PANEL_WIDTH, PANEL_HEIGHT),
        BinaryColor::Off,
    );
    canvas.draw_rect(
        Rect::new(2, 2, PANEL_WIDTH - 4, PANEL_HEIGHT - 4),
        BinaryColor::On,
    );
    canvas.draw_line(
        Point::new(RAIL_WIDTH, 2),
        Point::new(RAIL_WIDTH, PANEL_HEIGHT - 2),
        BinaryColor::On,
    );

    canvas.set_font(Font::Bold);
    text_left(canvas, RAIL_PAD, RAIL_PAD + ROOM_BOX_H, room);

    canvas.set_font(Font::Regular);
    text_left(canvas, DATE_RECT.x, DATE_RECT.bottom(), date);

    let logo_y = RAIL_PAD + ROOM_BOX_H + DATE_BOX_H + 10;
    let logo_w = RAIL_WIDTH - 2 * RAIL_PAD;
    let x = RAIL_PAD + (logo_w - LOGO.width as i32) / 2;
    let y = logo_y + (LOGO_BOX_H - LOGO.height as i32) / 2;
    canvas.draw_bitmap(Point::new(x, y), &LOGO);
}

fn field<'p>(people: &'p [Person], slot: usize, pick: impl Fn(&'p Person) -> &'p str) -> &'p str {
    people.get(slot).map(pick).unwrap_or("")
}

fn draw_single(canvas: &mut dyn Canvas, status_rect: Rect, people: &[Person]) {
    let left = CONTENT_X + CONTENT_PAD;

    canvas.set_font(Font::Large);
    text_left(canvas, left, SINGLE_ROLE_Y, field(people, 0, |p| p.role.as_str()));

    canvas.set_font(Font::Bold);
    text_left(canvas, left, SINGLE_NAME_Y, field(people, 0, |p| p.name.as_str()));
    text_centered(canvas, status_rect, field(people, 0, |p| p.status.as_str()));
}

fn draw_rows(canvas: &mut dyn Canvas, layout: LayoutType, people: &[Person]) {
    let left = CONTENT_X + CONTENT_PAD;
    let rows = layout.slots();

    for row in 0..rows {
        let geometry = row_geometry(layout, row);

        canvas.set_font(Font::Regular);
        text_left(canvas, left, geometry.role_baseline, field(people, row, |p| p.role.as_str()));

        canvas.set_font(Font::Bold);
        text_left(canvas, left, geometry.name_baseline, field(people, row, |p| p.name.as_str()));
        text_centered(canvas, geometry.status, field(people, row, |p| p.status.as_str()));

        if row + 1 < rows {
            canvas.draw_line(
                Point::new(CONTENT_X + 1, geometry.bottom),
                Point::new(CONTENT_X + CONTENT_W - 1, geometry.bottom),
                BinaryColor::On,
            );
        }
    }
}

/// Draws the board and keeps the status boxes needed for partial updates.
///
/// The engine starts *blank* (no boxes recorded). A full
/// [`draw_layout`](Self::draw_layout) or a [`prime_layout`](Self::prime_layout)
/// records the boxes of the chosen layout.
pub struct LayoutEngine<P> {
    panel: P,
    status_rects: [Rect; MAX_PEOPLE],
}

impl<P: Panel> LayoutEngine<P> {
    pub const fn new(panel: P) -> Self {
        Self {
            panel,
            status_rects: [Rect::ZERO; MAX_PEOPLE],
        }
    }

    /// Initialise the panel controller.
    pub fn begin(&mut self) -> Result<()> {
        self.panel.init()
    }

    /// Full-panel draw of the rail and `layout` for `people`.
    ///
    /// Only the first `layout.slots()` people are shown; missing people
    /// leave their row empty but still get a status box.
    pub fn draw_layout(
        &mut self,
        layout: LayoutType,
        room: &str,
        date: &str,
        people: &[Person],
    ) -> Result<()> {
        self.status_rects = status_rects(layout);
        let single = self.status_rects[0];

        self.panel.refresh(Window::Full, &mut |canvas| {
            draw_rail(canvas, room, date);
            match layout {
                LayoutType::Display1 => draw_single(canvas, single, people),
                LayoutType::Display2 | LayoutType::Display3 => draw_rows(canvas, layout, people),
            }
        })
    }

    /// Replace the status text of slot `index` using partial refresh.
    ///
    /// Does nothing for slots outside `0..3` or without a recorded box.
    /// The region is cleared in one pass and cleared + redrawn in a second
    /// pass, which settles partial refresh on this panel without ghosts.
    pub fn show_status_partial(&mut self, index: usize, status: &str) -> Result<()> {
        let Some(rect) = self.status_rect(index) else {
            return Ok(());
        };
        let size = self.panel.size();
        let Some(region) = dirty_region(rect, size.width as i32, size.height as i32) else {
            return Ok(());
        };

        #[cfg(feature = "defmt")]
        defmt::debug!("status partial: slot {} region {}", index, region);

        let window = Window::Partial(region);
        self.panel.refresh(window, &mut |canvas| {
            canvas.fill_rect(region, BinaryColor::Off);
        })?;
        self.panel.refresh(window, &mut |canvas| {
            canvas.fill_rect(region, BinaryColor::Off);
            canvas.set_font(Font::Bold);
            text_centered(canvas, rect, status);
        })
    }

    /// Replace the date in the rail using partial refresh.
    pub fn show_date_partial(&mut self, date: &str) -> Result<()> {
        self.panel.refresh(Window::Partial(DATE_RECT), &mut |canvas| {
            canvas.fill_rect(DATE_RECT, BinaryColor::Off);
            canvas.set_font(Font::Regular);
            text_centered(canvas, DATE_RECT, date);
        })
    }

    /// Record the status boxes of `layout` without drawing.
    ///
    /// Used when the panel still shows a board drawn before a reset, so
    /// later partial updates hit the boxes on the glass.
    pub fn prime_layout(&mut self, layout: LayoutType) {
        self.status_rects = status_rects(layout);
    }

    /// Recorded status box of slot `index`, if it is drawable.
    pub fn status_rect(&self, index: usize) -> Option<Rect> {
        self.status_rects
            .get(index)
            .copied()
            .filter(|rect| !rect.is_empty())
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut P {
        &mut self.panel
    }
}

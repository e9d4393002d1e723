//! Integration tests for the door sign: a rasterising panel and a scripted
//! card reader driven through the public API.

use std::collections::VecDeque;
use std::convert::Infallible;

use doorsign::display::{dirty_region, GraphicsCanvas, DATE_RECT};
use doorsign::{
    CardReader, Canvas, LayoutType, Panel, Person, Rect, Result, Roster, Station, TagEvent, Window,
};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

// ════════════════════════════════════════════════════════════════════════
// Fakes
// ════════════════════════════════════════════════════════════════════════

#[derive(Clone, PartialEq)]
struct Frame {
    size: Size,
    ink: Vec<bool>,
}

impl Frame {
    fn new(size: Size) -> Self {
        Self {
            size,
            ink: vec![false; (size.width * size.height) as usize],
        }
    }

    /// Coordinates of pixels that differ from `other`.
    fn diff(&self, other: &Frame) -> Vec<Point> {
        let w = self.size.width as usize;
        self.ink
            .iter()
            .zip(&other.ink)
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| Point::new((i % w) as i32, (i / w) as i32))
            .collect()
    }

    fn ink_count(&self) -> usize {
        self.ink.iter().filter(|&&on| on).count()
    }
}

impl OriginDimensions for Frame {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for Frame {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, color) in pixels {
            if p.x >= 0 && p.y >= 0 && (p.x as u32) < self.size.width && (p.y as u32) < self.size.height
            {
                let i = p.y as usize * self.size.width as usize + p.x as usize;
                self.ink[i] = color.is_on();
            }
        }
        Ok(())
    }
}

/// Panel that rasterises into a frame and remembers each window.
struct FramePanel {
    frame: Frame,
    windows: Vec<Window>,
}

impl FramePanel {
    fn new() -> Self {
        Self {
            frame: Frame::new(Size::new(800, 480)),
            windows: Vec::new(),
        }
    }
}

impl Panel for FramePanel {
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    fn size(&self) -> Size {
        self.frame.size
    }

    fn refresh(&mut self, window: Window, draw: &mut dyn FnMut(&mut dyn Canvas)) -> Result<()> {
        self.windows.push(window);
        draw(&mut GraphicsCanvas::new(&mut self.frame));
        Ok(())
    }
}

#[derive(Default)]
struct ScriptedReader {
    cards: VecDeque<Vec<u8>>,
    latched: Vec<u8>,
    released: u32,
}

impl CardReader for ScriptedReader {
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    fn new_card_present(&mut self) -> bool {
        !self.cards.is_empty()
    }

    fn read_card_serial(&mut self) -> bool {
        match self.cards.pop_front() {
            Some(uid) => {
                self.latched = uid;
                true
            }
            None => false,
        }
    }

    fn uid(&self) -> &[u8] {
        &self.latched
    }

    fn halt(&mut self) -> Result<()> {
        self.released += 1;
        Ok(())
    }

    fn stop_crypto(&mut self) -> Result<()> {
        Ok(())
    }
}

const CYCLE: &[&str] = &["Available", "In a meeting", "Out of office"];

fn roster(n: usize) -> Roster {
    let mut roster = Roster::new();
    let people = [
        ("Dr. A. Weber", "Group Leader", "04A2B3C4"),
        ("M. Keller", "Research Associate", "3F9E0C21"),
        ("J. Otto", "PhD Student", "7711AB02"),
    ];
    for (name, role, uid) in people.iter().take(n) {
        roster
            .add(Person::new(name, role, "Available", uid).unwrap())
            .unwrap();
    }
    roster
}

fn station(n: usize) -> Station<FramePanel, ScriptedReader> {
    let mut station = Station::new(
        FramePanel::new(),
        ScriptedReader::default(),
        roster(n),
        "R 104",
        "01.02.2025",
    )
    .unwrap()
    .with_status_cycle(CYCLE);
    station.start().unwrap();
    station
}

fn snapshot(station: &Station<FramePanel, ScriptedReader>) -> Frame {
    station.engine().panel().frame.clone()
}

fn within(p: Point, r: Rect) -> bool {
    p.x >= r.x && p.x < r.right() && p.y >= r.y && p.y < r.bottom()
}

// ════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════

#[test]
fn start_paints_the_board() {
    let station = station(2);
    assert_eq!(station.engine().panel().windows, vec![Window::Full]);
    assert!(station.engine().panel().frame.ink_count() > 0);
}

#[test]
fn tap_changes_only_the_status_region() {
    let mut station = station(2);
    let before = snapshot(&station);

    station.reader_mut().cards.push_back(vec![0x3F, 0x9E, 0x0C, 0x21]);
    let event = station.poll().unwrap();
    assert!(matches!(event, Some(TagEvent::StatusChanged { slot: 1, .. })));

    let rect = station.engine().status_rect(1).unwrap();
    let region = dirty_region(rect, 800, 480).unwrap();
    let changed = snapshot(&station).diff(&before);

    assert!(!changed.is_empty());
    assert!(changed.iter().all(|&p| within(p, region)));
    assert_eq!(
        station.roster().get(1).unwrap().status.as_str(),
        "In a meeting"
    );
}

#[test]
fn unknown_card_leaves_panel_alone() {
    let mut station = station(1);
    let before = snapshot(&station);

    station.reader_mut().cards.push_back(vec![0xDE, 0xAD, 0xBE, 0xEF]);
    match station.poll().unwrap() {
        Some(TagEvent::Unknown(uid)) => assert_eq!(uid.as_str(), "DEADBEEF"),
        other => panic!("expected unknown tag, got {:?}", other),
    }

    assert!(snapshot(&station).diff(&before).is_empty());
    assert_eq!(station.reader_mut().released, 1);
}

#[test]
fn date_change_stays_in_date_box() {
    let mut station = station(3);
    let before = snapshot(&station);

    station.set_date("02.02.2025").unwrap();

    let changed = snapshot(&station).diff(&before);
    assert!(!changed.is_empty());
    assert!(changed.iter().all(|&p| within(p, DATE_RECT)));
}

#[test]
fn status_cycle_wraps_back() {
    let mut station = station(1);
    for _ in 0..CYCLE.len() {
        station.reader_mut().cards.push_back(vec![0x04, 0xA2, 0xB3, 0xC4]);
        station.poll().unwrap();
    }
    assert_eq!(station.roster().get(0).unwrap().status.as_str(), "Available");
}

#[test]
fn resume_then_partial_matches_fresh_board() {
    // Board drawn before a reset.
    let mut drawn = station(3);

    // After the reset the engine only primes; the glass keeps its image.
    let mut resumed = Station::new(
        FramePanel::new(),
        ScriptedReader::default(),
        roster(3),
        "R 104",
        "01.02.2025",
    )
    .unwrap()
    .with_status_cycle(CYCLE);
    resumed.resume().unwrap();
    assert!(resumed.engine().panel().windows.is_empty());

    for station in [&mut drawn, &mut resumed] {
        station.reader_mut().cards.push_back(vec![0x77, 0x11, 0xAB, 0x02]);
        station.poll().unwrap();
    }

    let partial = |s: &Station<FramePanel, ScriptedReader>| {
        s.engine()
            .panel()
            .windows
            .iter()
            .filter(|w| matches!(w, Window::Partial(_)))
            .copied()
            .collect::<Vec<_>>()
    };
    assert_eq!(partial(&drawn), partial(&resumed));
    assert_eq!(
        resumed.engine().status_rect(2),
        doorsign::display::status_rects(LayoutType::Display3)[2].into()
    );
}

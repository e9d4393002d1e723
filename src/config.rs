//! Board setup for one door: panel geometry and layout metrics, the
//! refresh budget, SPI wiring, the room label and who is on the sign.

use crate::roster::RosterEntry;

// Panel (Waveshare 7.5" V2, landscape)

/// Panel width in pixels.
pub const PANEL_WIDTH: i32 = 800;

/// Panel height in pixels.
pub const PANEL_HEIGHT: i32 = 480;

// Layout

/// Width of the side rail holding room, date and logo.
pub const RAIL_WIDTH: i32 = 120;

/// Inner padding of the rail.
pub const RAIL_PAD: i32 = 4;

/// Height reserved for the room label at the top of the rail.
pub const ROOM_BOX_H: i32 = 50;

/// Height of the date box under the room label.
pub const DATE_BOX_H: i32 = 30;

/// Height of the box the logo is centred in.
pub const LOGO_BOX_H: i32 = 140;

/// Horizontal padding inside the content area.
pub const CONTENT_PAD: i32 = 20;

/// Number of person slots the panel can show.
pub const MAX_PEOPLE: usize = 3;

/// Status box height limits for the multi-row layouts.
pub const STATUS_MIN_H: i32 = 34;
pub const STATUS_MAX_H: i32 = 60;

// Partial refresh

/// Margins added around a status box before refreshing it, so glyph
/// descenders ("g", "j", "q") of the previous text are wiped too.
pub const DIRTY_MARGIN_SIDE: i32 = 8;
pub const DIRTY_MARGIN_TOP: i32 = 2;
pub const DIRTY_MARGIN_BOTTOM: i32 = 10;

/// Partial updates allowed before the next update is forced to a full
/// refresh to clear accumulated ghosting.
pub const PARTIALS_BEFORE_FULL: u16 = 20;

// Text capacities (bytes)

pub const NAME_LEN: usize = 32;
pub const ROLE_LEN: usize = 32;
pub const STATUS_LEN: usize = 24;
pub const ROOM_LEN: usize = 16;
pub const DATE_LEN: usize = 16;

/// Hex characters for the longest ISO 14443 UID (10 bytes).
pub const UID_LEN: usize = 20;

// RFID

/// Interval between reader polls (ms).
pub const TAG_POLL_MS: u64 = 200;

/// SPI clock for the shared panel / reader bus.
///
/// The MFRC522 tops out at 10 MHz; the panel is happy with anything
/// up to 20 MHz, so the reader sets the pace.
pub const SPI_FREQUENCY_MHZ: u32 = 8;

// GPIO pin assignments (nRF52840-DK defaults)
//
// Both devices share SPIM3; each has its own chip select.
//
//   SPI SCK        → P1.15
//   SPI MOSI       → P1.13
//   SPI MISO       → P1.14
//   EPD CS         → P1.12
//   EPD DC         → P1.11
//   EPD RST        → P1.10
//   EPD BUSY       → P1.08
//   RFID CS (SDA)  → P0.28
//   RFID RST       → P0.29

// Board content

/// Room label shown at the top of the rail.
pub const ROOM_LABEL: &str = "R 104";

/// Date shown until the first clock sync.
pub const DEFAULT_DATE: &str = "--.--.----";

/// Statuses a person steps through on each tap, in order.
pub const STATUS_CYCLE: &[&str] = &["Available", "In a meeting", "Out of office"];

/// People registered on this board at boot.
pub const DEFAULT_ROSTER: &[RosterEntry] = &[
    RosterEntry {
        uid: "04A2B3C4",
        name: "Dr. A. Weber",
        role: "Group Leader",
        status: "Available",
    },
    RosterEntry {
        uid: "3F9E0C21",
        name: "M. Keller",
        role: "Research Associate",
        status: "Available",
    },
];

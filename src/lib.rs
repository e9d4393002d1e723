//! doorsign - RFID attendance door sign.
//!
//! A card reader identifies people by UID; an 800x480 e-paper panel
//! shows up to three people with their role, name and current status,
//! next to a rail with the room, the date and a logo. Tapping a card
//! steps its owner to the next status and refreshes only that box.
//!
//! Everything here is `no_std` and hardware-agnostic except the
//! `embedded` adapters (`display::epd`, `rfid::mfrc522`), so the logic
//! runs under `cargo test --lib` on the host.
//!
//! The firmware entry point lives in main.rs (`--features embedded`).

#![cfg_attr(not(test), no_std)]

// ═══════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════

pub mod config;
pub mod display;
pub mod error;
pub mod rfid;
pub mod roster;
pub mod station;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports
// ═══════════════════════════════════════════════════════════════════════════

pub use display::{Canvas, Font, LayoutEngine, LayoutType, Panel, Rect, Window};
pub use error::{Error, Result};
pub use rfid::{format_uid, CardReader, TagReader, Uid};
pub use roster::{Person, Roster, RosterEntry};
pub use station::{Station, TagEvent};

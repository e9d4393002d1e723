//! RFID subsystem - contactless card reader boundary and UID reading.
//!
//! The reader driver (REQA, anticollision, select, crypto) is owned by
//! the hardware library; this module only asks it "is there a new card"
//! and "what is its UID", then releases the card again.
//!
//! ## Components
//!
//! - **CardReader**: the driver-facing trait
//! - **TagReader**: presence check + UID formatting on top of it
//! - **Mfrc522Reader** (`rfid` feature): `CardReader` for the MFRC522

pub mod tag_reader;

#[cfg(feature = "rfid")]
pub mod mfrc522;

pub use tag_reader::{format_uid, TagReader, Uid};

use crate::error::Result;

/// Operations the application needs from a contactless card reader.
///
/// Mirrors the usual PCD/PICC split: `init` configures the reader chip,
/// the `new_card_present` / `read_card_serial` pair latches one card,
/// and `halt` / `stop_crypto` release it so the next poll starts clean.
pub trait CardReader {
    /// One-time device configuration.
    fn init(&mut self) -> Result<()>;

    /// True if a card that has not been selected yet is in the field.
    fn new_card_present(&mut self) -> bool;

    /// Select the present card and latch its serial (UID).
    fn read_card_serial(&mut self) -> bool;

    /// UID bytes of the last latched card; empty if none.
    fn uid(&self) -> &[u8];

    /// Put the selected card into HALT state.
    fn halt(&mut self) -> Result<()>;

    /// Leave any authenticated (Crypto1) session.
    fn stop_crypto(&mut self) -> Result<()>;
}

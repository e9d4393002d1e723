//! Card presence polling and UID formatting.

use core::fmt::Write;

use heapless::String;

use super::CardReader;
use crate::config::UID_LEN;
use crate::error::{Error, Result};

/// Card UID as uppercase hex, two digits per byte, no separators.
pub type Uid = String<UID_LEN>;

/// Format raw UID bytes as `"0AFF..."`.
pub fn format_uid(bytes: &[u8]) -> Result<Uid> {
    let mut uid = Uid::new();
    for b in bytes {
        write!(uid, "{:02X}", b).map_err(|_| Error::BufferOverflow)?;
    }
    Ok(uid)
}

/// Polls a [`CardReader`] for new cards.
///
/// There is no retry or timeout here: callers poll repeatedly and a
/// missed card simply shows up on the next poll.
pub struct TagReader<R> {
    reader: R,
}

impl<R: CardReader> TagReader<R> {
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Configure the reader device.
    pub fn begin(&mut self) -> Result<()> {
        self.reader.init()?;
        #[cfg(feature = "defmt")]
        defmt::info!("RFID ready, present a card");
        Ok(())
    }

    /// True iff a new card is in the field and its serial was latched.
    pub fn is_present(&mut self) -> bool {
        self.reader.new_card_present() && self.reader.read_card_serial()
    }

    /// Read the UID of a newly presented card and release the card.
    ///
    /// Returns `Ok(None)` when no card (or no serial) is available.
    pub fn read_uid(&mut self) -> Result<Option<Uid>> {
        if !self.is_present() {
            return Ok(None);
        }

        let uid = format_uid(self.reader.uid());

        self.reader.halt()?;
        self.reader.stop_crypto()?;

        uid.map(Some)
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn reader_mut(&mut self) -> &mut R {
        &mut self.reader
    }
}

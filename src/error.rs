//! Failures of the door sign: a panel or reader that stopped answering,
//! and roster or text input that does not fit.
//!
//! `Error` is `Copy` and holds no heap data. With the `defmt` feature it
//! can be logged directly.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Display
    /// SPI transfer or BUSY handshake with the e-paper panel failed.
    Display,

    // RFID
    /// The card reader driver reported a communication failure.
    Reader,

    // Roster
    /// Person slot outside `0..MAX_PEOPLE` or not occupied.
    InvalidSlot,

    /// All `MAX_PEOPLE` slots are taken.
    RosterFull,

    // Generic
    /// A bounded string or buffer was too small for the requested value.
    BufferOverflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Display => write!(f, "e-paper panel error"),
            Self::Reader => write!(f, "card reader error"),
            Self::InvalidSlot => write!(f, "person slot out of range"),
            Self::RosterFull => write!(f, "roster is full"),
            Self::BufferOverflow => write!(f, "buffer too small"),
        }
    }
}

/// Shorthand used by every fallible operation in the crate.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_part() {
        assert_eq!(Error::Display.to_string(), "e-paper panel error");
        assert_eq!(Error::Reader.to_string(), "card reader error");
        assert_eq!(Error::RosterFull.to_string(), "roster is full");
    }
}

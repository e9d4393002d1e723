//! `CardReader` implementation for the NXP MFRC522 over SPI.

use core::mem;

use embedded_hal::spi::SpiDevice;
use heapless::Vec;
use mfrc522::comm::blocking::spi::{DummyDelay, SpiInterface};
use mfrc522::{AtqA, Initialized, Mfrc522, Uninitialized};

use super::CardReader;
use crate::error::{Error, Result};

/// Longest UID ISO 14443-3 allows (triple size).
const MAX_UID_BYTES: usize = 10;

type Interface<SPI> = SpiInterface<SPI, DummyDelay>;

enum State<SPI>
where
    SPI: SpiDevice,
{
    Uninitialized(Mfrc522<Interface<SPI>, Uninitialized>),
    Ready(Mfrc522<Interface<SPI>, Initialized>),
    /// `init` failed and consumed the driver.
    Failed,
}

/// MFRC522 wrapper bridging the driver's typestate to [`CardReader`].
pub struct Mfrc522Reader<SPI>
where
    SPI: SpiDevice,
{
    state: State<SPI>,
    atqa: Option<AtqA>,
    uid: Vec<u8, MAX_UID_BYTES>,
}

impl<SPI: SpiDevice> Mfrc522Reader<SPI> {
    pub fn new(spi: SPI) -> Self {
        Self {
            state: State::Uninitialized(Mfrc522::new(SpiInterface::new(spi))),
            atqa: None,
            uid: Vec::new(),
        }
    }

    fn ready(&mut self) -> Option<&mut Mfrc522<Interface<SPI>, Initialized>> {
        match &mut self.state {
            State::Ready(dev) => Some(dev),
            _ => None,
        }
    }
}

impl<SPI: SpiDevice> CardReader for Mfrc522Reader<SPI> {
    fn init(&mut self) -> Result<()> {
        match mem::replace(&mut self.state, State::Failed) {
            State::Uninitialized(dev) => {
                #[cfg_attr(not(feature = "defmt"), allow(unused_mut))]
                let mut dev = dev.init().map_err(|_| Error::Reader)?;
                #[cfg(feature = "defmt")]
                if let Ok(version) = dev.version() {
                    defmt::debug!("MFRC522 version {=u8:#x}", version);
                }
                self.state = State::Ready(dev);
                Ok(())
            }
            State::Ready(dev) => {
                self.state = State::Ready(dev);
                Ok(())
            }
            State::Failed => Err(Error::Reader),
        }
    }

    fn new_card_present(&mut self) -> bool {
        let atqa = self.ready().and_then(|dev| dev.new_card_present().ok());
        self.atqa = atqa;
        self.atqa.is_some()
    }

    fn read_card_serial(&mut self) -> bool {
        let Some(atqa) = self.atqa.take() else {
            return false;
        };
        let Some(dev) = self.ready() else {
            return false;
        };
        match dev.select(&atqa) {
            Ok(uid) => match Vec::from_slice(uid.as_bytes()) {
                Ok(latched) => {
                    self.uid = latched;
                    true
                }
                Err(()) => false,
            },
            Err(_) => false,
        }
    }

    fn uid(&self) -> &[u8] {
        &self.uid
    }

    fn halt(&mut self) -> Result<()> {
        let dev = self.ready().ok_or(Error::Reader)?;
        dev.hlta().map_err(|_| Error::Reader)
    }

    fn stop_crypto(&mut self) -> Result<()> {
        let dev = self.ready().ok_or(Error::Reader)?;
        dev.stop_crypto1().map_err(|_| Error::Reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::spi::{ErrorType, Operation};

    struct NullSpi;

    impl ErrorType for NullSpi {
        type Error = Infallible;
    }

    impl SpiDevice for NullSpi {
        fn transaction(&mut self, _ops: &mut [Operation<'_, u8>]) -> core::result::Result<(), Infallible> {
            Ok(())
        }
    }

    #[test]
    fn uninitialised_reader_sees_no_card() {
        let mut reader = Mfrc522Reader::new(NullSpi);
        assert!(!reader.new_card_present());
        assert!(!reader.read_card_serial());
        assert!(reader.uid().is_empty());
    }

    #[test]
    fn release_before_init_is_reader_error() {
        let mut reader = Mfrc522Reader::new(NullSpi);
        assert_eq!(reader.halt(), Err(Error::Reader));
        assert_eq!(reader.stop_crypto(), Err(Error::Reader));
    }
}

//! doorsign firmware - nRF52840 + Waveshare 7.5" V2 + MFRC522.
//!
//! Both devices hang off SPIM3 with separate chip selects (see the pin
//! map in config.rs). A single task polls the reader; every panel and
//! reader call blocks until the device is done.

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::*;
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pull};
use embassy_nrf::peripherals::SPI3;
use embassy_nrf::spim::{self, Frequency, Spim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::{Delay, Duration, Ticker};
use embedded_hal_bus::spi::RefCellDevice;
use static_cell::{ConstStaticCell, StaticCell};
use {defmt_rtt as _, panic_probe as _};

use doorsign::config::{
    DEFAULT_DATE, DEFAULT_ROSTER, ROOM_LABEL, SPI_FREQUENCY_MHZ, TAG_POLL_MS,
};
use doorsign::display::epd::{EpdPanel, FRAME_LEN};
use doorsign::rfid::mfrc522::Mfrc522Reader;
use doorsign::{Roster, Station, TagEvent};

bind_interrupts!(struct Irqs {
    SPIM3 => spim::InterruptHandler<peripherals::SPI3>;
});

type Bus = RefCell<Spim<'static, SPI3>>;
type Device = RefCellDevice<'static, Spim<'static, SPI3>, Output<'static>, Delay>;
type Panel = EpdPanel<Device, Input<'static>, Output<'static>, Output<'static>, Delay>;

static SPI_BUS: StaticCell<Bus> = StaticCell::new();
static FRAME: ConstStaticCell<[u8; FRAME_LEN]> = ConstStaticCell::new([0; FRAME_LEN]);

fn spi_frequency() -> Frequency {
    match SPI_FREQUENCY_MHZ {
        0 | 1 => Frequency::M1,
        2 | 3 => Frequency::M2,
        4..=7 => Frequency::M4,
        _ => Frequency::M8,
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("doorsign starting...");

    let p = embassy_nrf::init(Default::default());

    let mut spi_config = spim::Config::default();
    spi_config.frequency = spi_frequency();
    let spim = Spim::new(p.SPI3, Irqs, p.P1_15, p.P1_14, p.P1_13, spi_config);
    let bus: &'static Bus = SPI_BUS.init(RefCell::new(spim));

    // Panel: CS P1.12, DC P1.11, RST P1.10, BUSY P1.08
    let epd_cs = Output::new(p.P1_12, Level::High, OutputDrive::Standard);
    let epd_dc = Output::new(p.P1_11, Level::Low, OutputDrive::Standard);
    let epd_rst = Output::new(p.P1_10, Level::High, OutputDrive::Standard);
    let epd_busy = Input::new(p.P1_08, Pull::None);
    let epd_spi = unwrap!(RefCellDevice::new(bus, epd_cs, Delay));

    let panel: Panel = unwrap!(EpdPanel::new(
        epd_spi,
        epd_busy,
        epd_dc,
        epd_rst,
        Delay,
        FRAME.take(),
    ));
    info!("e-paper panel initialized");

    // Reader: CS P0.28, RST P0.29 (held high while running)
    let rfid_cs = Output::new(p.P0_28, Level::High, OutputDrive::Standard);
    let _rfid_rst = Output::new(p.P0_29, Level::High, OutputDrive::Standard);
    let rfid_spi = unwrap!(RefCellDevice::new(bus, rfid_cs, Delay));
    let reader = Mfrc522Reader::new(rfid_spi);

    let roster = match Roster::from_entries(DEFAULT_ROSTER) {
        Ok(roster) => roster,
        Err(e) => {
            error!("invalid default roster: {}", e);
            Roster::new()
        }
    };

    let mut station = unwrap!(Station::new(panel, reader, roster, ROOM_LABEL, DEFAULT_DATE));
    if let Err(e) = station.start() {
        error!("start failed: {}", e);
    }

    let mut ticker = Ticker::every(Duration::from_millis(TAG_POLL_MS));
    loop {
        match station.poll() {
            Ok(Some(TagEvent::StatusChanged { slot, .. })) => {
                if let Some(person) = station.roster().get(slot) {
                    info!("{} is now {}", person.name.as_str(), person.status.as_str());
                }
            }
            Ok(_) => {}
            Err(e) => error!("poll failed: {}", e),
        }
        ticker.next().await;
    }
}

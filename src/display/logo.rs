//! Rail logo, 1 bit per pixel, MSB first, rows padded to whole bytes.

/// Monochrome bitmap; set bits are drawn in ink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub data: &'static [u8],
}

impl Bitmap {
    /// Bytes per row.
    pub const fn stride(&self) -> usize {
        (self.width as usize + 7) / 8
    }
}

pub const LOGO_WIDTH: u32 = 64;
pub const LOGO_HEIGHT: u32 = 64;

/// Door emblem shown in the rail under the date.
pub const LOGO: Bitmap = Bitmap {
    width: LOGO_WIDTH,
    height: LOGO_HEIGHT,
    data: &LOGO_BITS,
};

#[rustfmt::skip]
const LOGO_BITS: [u8; 512] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x0F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xF0,
    0x0F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xF0,
    0x0F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xF0,
    0x0E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x70,
    0x0E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x70,
    0x0E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x70,
    0x0E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x70,
    0x0E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x70,
    0x0E, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x70,
    0x0E, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x70,
    0x0E, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x70,
    0x0E, 0x00, 0xE0, 0x00, 0x00, 0x07, 0x00, 0x70,
    0x0E, 0x00, 0xE0, 0x00, 0x00, 0x07, 0x00, 0x70,
    0x0E, 0x00, 0xE7, 0xFF, 0xFF, 0xE7, 0x00, 0x70,
    0x0E, 0x00, 0xE7, 0xFF, 0xFF, 0xE7, 0x00, 0x70,
    0x0E, 0x00, 0xE6, 0x00, 0x00, 0x67, 0x00, 0x70,
    0x0E, 0x00, 0xE6, 0x00, 0x00, 0x67, 0x00, 0x70,
    0x0E, 0x00, 0xE6, 0x00, 0x00, 0x67, 0x00, 0x70,
    0x0E, 0x00, 0xE6, 0x00, 0x00, 0x67, 0x00, 0x70,
    0x0E, 0x00, 0xE6, 0x00, 0x00, 0x67, 0x00, 0x70,
    0x0E, 0x00, 0xE6, 0x00, 0x00, 0x67, 0x00, 0x70,
    0x0E, 0x00, 0xE6, 0x00, 0x00, 0x67, 0x00, 0x70,
    0x0E, 0x00, 0xE6, 0x00, 0x00, 0x67, 0x00, 0x70,
    0x0E, 0x00, 0xE6, 0x00, 0x00, 0x67, 0x00, 0x70,
    0x0E, 0x00, 0xE6, 0x00, 0x00, 0x67, 0x00, 0x70,
    0x0E, 0x00, 0xE6, 0x00, 0x00, 0x67, 0x00, 0x70,
    0x0E, 0x00, 0xE6, 0x00, 0x00, 0x67, 0x00, 0x70,
    0x0E, 0x00, 0xE6, 0x00, 0x00, 0x67, 0x00, 0x70,
    0x0E, 0x00, 0xE6, 0x00, 0x00, 0x67, 0x00, 0x70,
    0x0E, 0x00, 0xE7, 0xFF, 0xFF, 0xE7, 0x00, 0x70,
    0x0E, 0x00, 0xE7, 0xFF, 0xFF, 0xE7, 0x00, 0x70,
    0x0E, 0x00, 0xE0, 0x00, 0x00, 0x07, 0x00, 0x70,
    0x0E, 0x00, 0xE0, 0x00, 0x00, 0x07, 0x00, 0x70,
    0x0E, 0x00, 0xE0, 0x00, 0x00, 0x07, 0x00, 0x70,
    0x0E, 0x00, 0xE0, 0x00, 0x00, 0x07, 0x00, 0x70,
    0x0E, 0x00, 0xE7, 0xFF, 0xFF, 0xE7, 0x00, 0x70,
    0x0E, 0x00, 0xE7, 0xFF, 0xFF, 0xE7, 0x00, 0x70,
    0x0E, 0x00, 0xE6, 0x00, 0x00, 0x67, 0x00, 0x70,
    0x0E, 0x00, 0xE6, 0x00, 0x07, 0xE7, 0x00, 0x70,
    0x0E, 0x00, 0xE6, 0x00, 0x07, 0xE7, 0x00, 0x70,
    0x0E, 0x00, 0xE6, 0x00, 0x07, 0xE7, 0x00, 0x70,
    0x0E, 0x00, 0xE6, 0x00, 0x07, 0xE7, 0x00, 0x70,
    0x0E, 0x00, 0xE6, 0x00, 0x07, 0xE7, 0x00, 0x70,
    0x0E, 0x00, 0xE6, 0x00, 0x07, 0xE7, 0x00, 0x70,
    0x0E, 0x00, 0xE6, 0x00, 0x00, 0x67, 0x00, 0x70,
    0x0E, 0x00, 0xE6, 0x00, 0x00, 0x67, 0x00, 0x70,
    0x0E, 0x00, 0xE6, 0x00, 0x00, 0x67, 0x00, 0x70,
    0x0E, 0x00, 0xE6, 0x00, 0x00, 0x67, 0x00, 0x70,
    0x0E, 0x00, 0xE6, 0x00, 0x00, 0x67, 0x00, 0x70,
    0x0E, 0x00, 0xE6, 0x00, 0x00, 0x67, 0x00, 0x70,
    0x0E, 0x00, 0xE6, 0x00, 0x00, 0x67, 0x00, 0x70,
    0x0E, 0x00, 0xE7, 0xFF, 0xFF, 0xE7, 0x00, 0x70,
    0x0E, 0x00, 0xE7, 0xFF, 0xFF, 0xE7, 0x00, 0x70,
    0x0E, 0x00, 0xE0, 0x00, 0x00, 0x07, 0x00, 0x70,
    0x0E, 0x00, 0xE0, 0x00, 0x00, 0x07, 0x00, 0x70,
    0x0E, 0x00, 0xE0, 0x00, 0x00, 0x07, 0x00, 0x70,
    0x0E, 0x00, 0xE0, 0x00, 0x00, 0x07, 0x00, 0x70,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

//! RGB565 color packing
//!
//! The controller runs in 16-bit color mode: 5 bits red, 6 bits green,
//! 5 bits blue, transmitted high byte first.

/// A packed 16-bit RGB565 color.
///
/// Any 16-bit value is a legal color; the associated constants are the
/// stock palette. `GREEN` is the palette's dim green; `LIME` is the
/// full-intensity one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Rgb565 = Rgb565(0x0000);
    pub const BLUE: Rgb565 = Rgb565(0x001F);
    pub const RED: Rgb565 = Rgb565(0xF800);
    pub const GREEN: Rgb565 = Rgb565(0x0400);
    pub const LIME: Rgb565 = Rgb565(0x07E0);
    pub const CYAN: Rgb565 = Rgb565(0x07FF);
    pub const MAGENTA: Rgb565 = Rgb565(0xF81F);
    pub const YELLOW: Rgb565 = Rgb565(0xFFE0);
    pub const WHITE: Rgb565 = Rgb565(0xFFFF);

    /// Wire representation: high byte first.
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

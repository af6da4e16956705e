//! ST7735 command set
//!
//! The subset of the controller's command table this driver uses. Each
//! command is a single opcode byte sent with the data/command line low;
//! parameters follow with the line high.

use tessera_core::orientation::Orientation;

/// Software reset. Listed for completeness; the driver resets through
/// the dedicated reset line instead.
pub const SWRESET: u8 = 0x01;

/// Exit sleep mode. Needs 150 ms to settle before further commands.
pub const SLPOUT: u8 = 0x11;

/// Blank the panel without touching display memory.
pub const DISPOFF: u8 = 0x28;

/// Light the panel, showing whatever display memory holds.
pub const DISPON: u8 = 0x29;

/// Column address window. Two 16-bit bounds, inclusive.
pub const CASET: u8 = 0x2A;

/// Row address window. Two 16-bit bounds, inclusive.
pub const RASET: u8 = 0x2B;

/// Memory write. A pixel stream follows, filling the current window
/// column-first and wrapping row by row.
pub const RAMWR: u8 = 0x2C;

/// Memory data access control. One parameter byte selecting axis swap
/// and mirroring, see [`madctl_code`].
pub const MADCTL: u8 = 0x36;

/// Interface pixel format. One parameter byte, see [`COLMOD_16BIT`].
pub const COLMOD: u8 = 0x3A;

/// COLMOD parameter selecting 16-bit RGB565 pixels.
pub const COLMOD_16BIT: u8 = 0x05;

/// MADCTL parameter for an orientation.
///
/// The codes combine the controller's row/column exchange and mirror
/// bits so that (0, 0) stays the top-left corner of whichever edge is
/// up.
pub const fn madctl_code(orientation: Orientation) -> u8 {
    match orientation {
        Orientation::Portrait => 0x00,
        Orientation::Landscape => 0x60,
        Orientation::PortraitFlipped => 0xC0,
        Orientation::LandscapeFlipped => 0xA0,
    }
}

//! ST7735 session driver
//!
//! One [`St7735`] value owns one panel: the SPI bus, the data/command
//! and reset lines, a delay source, and the session state that the
//! write-only wire cannot echo back (power state, orientation, latched
//! window size, text cursor).

use tessera_core::color::Rgb565;
use tessera_core::orientation::Orientation;
use tessera_hal::{DelayMs, OutputPin, SpiBus};

use crate::command;
use crate::state::{PowerEvent, PowerState};

/// Native panel width in pixels, portrait.
pub const WIDTH: u8 = 128;

/// Native panel height in pixels, portrait.
pub const HEIGHT: u8 = 160;

/// Reset line hold time, milliseconds.
const RESET_PULSE_MS: u32 = 1;

/// Settle time after releasing reset and after sleep-out, milliseconds.
const SETTLE_MS: u32 = 150;

/// An ST7735 display session.
///
/// The controller cannot be read back, so this value is the single
/// source of truth for panel state; keep one per panel and route all
/// traffic through it. Coordinates are panel pixels under the current
/// orientation, (0, 0) top left. Shapes must lie on screen; the driver
/// does not clip.
pub struct St7735<SPI, DC, RST, D> {
    spi: SPI,
    dc: DC,
    rst: RST,
    delay: D,
    state: PowerState,
    orientation: Orientation,
    /// Pixel capacity of the last address window, for the write burst
    /// overflow check.
    window_area: u32,
    pub(crate) cursor_col: u8,
    pub(crate) cursor_row: u8,
}

impl<SPI, DC, RST, D> St7735<SPI, DC, RST, D>
where
    SPI: SpiBus,
    DC: OutputPin,
    RST: OutputPin,
    D: DelayMs,
{
    /// Wrap the wires of one panel. Nothing is sent until
    /// [`initialize`](Self::initialize).
    pub fn new(spi: SPI, dc: DC, rst: RST, delay: D) -> Self {
        Self {
            spi,
            dc,
            rst,
            delay,
            state: PowerState::default(),
            orientation: Orientation::default(),
            window_area: 0,
            cursor_col: 0,
            cursor_row: 0,
        }
    }

    /// Pulse the reset line and wait for the controller to come up.
    ///
    /// Drops everything the controller knew: sleep mode, pixel format,
    /// orientation. The full wake sequence must follow before drawing.
    pub fn reset(&mut self) {
        self.rst.set_low();
        self.delay.delay_ms(RESET_PULSE_MS);
        self.rst.set_high();
        self.delay.delay_ms(SETTLE_MS);
        self.state = self.state.transition(PowerEvent::Reset);
    }

    /// Run the full power-up sequence: reset, sleep-out, 16-bit pixel
    /// format, display on.
    ///
    /// Safe to call again at any time; each call re-runs the sequence
    /// and leaves the panel on, in portrait, with the cursor homed.
    pub fn initialize(&mut self) {
        self.spi.open();
        self.reset();

        self.write_command(command::SLPOUT);
        self.delay.delay_ms(SETTLE_MS);
        self.state = self.state.transition(PowerEvent::Wake);

        self.write_command(command::COLMOD);
        self.write_byte(command::COLMOD_16BIT);
        self.state = self.state.transition(PowerEvent::SetColorMode);

        self.write_command(command::DISPON);
        self.state = self.state.transition(PowerEvent::DisplayOn);

        // The reset pulse put the controller back in portrait; the
        // session state has to follow it.
        self.orientation = Orientation::Portrait;
        self.window_area = 0;
        self.cursor_col = 0;
        self.cursor_row = 0;
    }

    /// Select axis mapping so (0, 0) is the top-left corner of the
    /// chosen edge. Re-homes the text cursor, since the character grid
    /// changes shape with the axes.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.write_command(command::MADCTL);
        self.write_byte(command::madctl_code(orientation));
        self.orientation = orientation;
        self.cursor_col = 0;
        self.cursor_row = 0;
    }

    /// Light the panel, showing display memory as it stands.
    pub fn display_on(&mut self) {
        self.write_command(command::DISPON);
        self.state = self.state.transition(PowerEvent::DisplayOn);
    }

    /// Blank the panel. Display memory and the pixel format survive;
    /// [`display_on`](Self::display_on) brings the image straight back.
    pub fn display_off(&mut self) {
        self.write_command(command::DISPOFF);
        self.state = self.state.transition(PowerEvent::DisplayOff);
    }

    /// Aim subsequent pixel writes at an inclusive window.
    ///
    /// Bounds must be ordered and on screen under the current
    /// orientation.
    pub fn set_address_window(&mut self, x0: u8, y0: u8, x1: u8, y1: u8) {
        debug_assert!(self.state.is_on());
        debug_assert!(x0 <= x1 && y0 <= y1);
        debug_assert!(x1 < self.width() && y1 < self.height());

        self.write_command(command::CASET);
        self.write_word(u16::from(x0));
        self.write_word(u16::from(x1));

        self.write_command(command::RASET);
        self.write_word(u16::from(y0));
        self.write_word(u16::from(y1));

        self.window_area = (u32::from(x1 - x0) + 1) * (u32::from(y1 - y0) + 1);
    }

    /// Stream `count` pixels of one color into the current window.
    ///
    /// `count` must not exceed the window's pixel capacity; the
    /// controller would wrap the excess back to the window origin.
    pub fn write_pixels(&mut self, color: Rgb565, count: u32) {
        debug_assert!(self.state.is_on());
        debug_assert!(count <= self.window_area);

        self.write_command(command::RAMWR);
        for _ in 0..count {
            self.write_word(color.0);
        }
    }

    /// Fill the whole screen with black and home the text cursor.
    pub fn clear(&mut self) {
        let (x1, y1) = (self.width() - 1, self.height() - 1);
        self.set_address_window(0, 0, x1, y1);
        self.write_pixels(Rgb565::BLACK, u32::from(WIDTH) * u32::from(HEIGHT));
        self.cursor_col = 0;
        self.cursor_row = 0;
    }

    /// Screen width in pixels under the current orientation.
    pub fn width(&self) -> u8 {
        if self.orientation.is_landscape() {
            HEIGHT
        } else {
            WIDTH
        }
    }

    /// Screen height in pixels under the current orientation.
    pub fn height(&self) -> u8 {
        if self.orientation.is_landscape() {
            WIDTH
        } else {
            HEIGHT
        }
    }

    /// Where the controller sits in its wake sequence.
    pub fn power_state(&self) -> PowerState {
        self.state
    }

    /// The orientation last sent to the controller.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Tear the session down and hand the wires back.
    pub fn release(mut self) -> (SPI, DC, RST, D) {
        self.spi.close();
        (self.spi, self.dc, self.rst, self.delay)
    }

    /// Send an opcode byte with the data/command line low.
    pub(crate) fn write_command(&mut self, opcode: u8) {
        self.dc.set_low();
        self.spi.transfer(opcode);
        self.dc.set_high();
    }

    /// Send one parameter or pixel byte.
    fn write_byte(&mut self, byte: u8) {
        self.spi.transfer(byte);
    }

    /// Send a 16-bit value big-endian, the order the controller
    /// expects for bounds and pixels.
    pub(crate) fn write_word(&mut self, word: u16) {
        let [high, low] = word.to_be_bytes();
        self.spi.transfer(high);
        self.spi.transfer(low);
    }
}

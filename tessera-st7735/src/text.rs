//! Text rendering
//!
//! 5x7 glyphs on a 6x8 cell grid: 21x20 characters in portrait, 26x16
//! in landscape. The cursor advances left to right, wraps at the right
//! margin, and falls back to the top row after the bottom one; nothing
//! scrolls.

use core::fmt::Write as _;

use heapless::String;
use tessera_core::color::Rgb565;
use tessera_core::font;
use tessera_hal::{DelayMs, OutputPin, SpiBus};

use crate::command;
use crate::display::St7735;

/// Width of one character cell in pixels: 5 glyph columns plus a gap.
pub const CELL_WIDTH: u8 = 6;

/// Height of one character cell in pixels: 7 glyph rows plus a gap.
pub const CELL_HEIGHT: u8 = 8;

/// Holds the widest rendering of an i16 in either base ("-32768").
type NumberBuffer = String<8>;

impl<SPI, DC, RST, D> St7735<SPI, DC, RST, D>
where
    SPI: SpiBus,
    DC: OutputPin,
    RST: OutputPin,
    D: DelayMs,
{
    /// Character grid as (columns, rows) under the current orientation.
    pub fn text_grid(&self) -> (u8, u8) {
        (
            self.width() / CELL_WIDTH,
            self.height() / CELL_HEIGHT,
        )
    }

    /// Put the cursor on a character cell.
    pub fn set_cursor(&mut self, col: u8, row: u8) {
        self.cursor_col = col;
        self.cursor_row = row;
    }

    /// Move the cursor to the start of a row.
    pub fn set_line(&mut self, row: u8) {
        self.cursor_col = 0;
        self.cursor_row = row;
    }

    /// Cursor position as (column, row).
    pub fn cursor(&self) -> (u8, u8) {
        (self.cursor_col, self.cursor_row)
    }

    /// Render one glyph with its top-left pixel at (x, y).
    ///
    /// Streams the full 5x7 cell: glyph bits in `color`, the rest in
    /// black, so no erase pass is needed when overwriting. Characters
    /// without a glyph render as a space.
    pub fn put_char(&mut self, ch: char, x: u8, y: u8, color: Rgb565) {
        let glyph = font::glyph(ch);
        self.set_address_window(x, y, x + 4, y + 6);
        self.write_command(command::RAMWR);
        for row in 0..7 {
            let mask = 1u8 << row;
            for col in 0..5 {
                let word = if glyph[col] & mask != 0 {
                    color
                } else {
                    Rgb565::BLACK
                };
                self.write_word(word.0);
            }
        }
    }

    /// Write a character at the cursor and advance it.
    pub fn write_char(&mut self, ch: char, color: Rgb565) {
        let x = self.cursor_col * CELL_WIDTH;
        let y = self.cursor_row * CELL_HEIGHT;
        self.put_char(ch, x, y, color);
        self.advance_cursor();
    }

    /// Write a string at the cursor, wrapping cell by cell.
    pub fn write_str(&mut self, text: &str, color: Rgb565) {
        for ch in text.chars() {
            self.write_char(ch, color);
        }
    }

    /// Write a decimal integer at the cursor, in white.
    pub fn write_int(&mut self, value: i16) {
        let mut buffer = NumberBuffer::new();
        let _ = write!(buffer, "{value}");
        self.write_str(&buffer, Rgb565::WHITE);
    }

    /// Write a hexadecimal integer at the cursor, in white.
    ///
    /// Negative values print as their two's-complement bit pattern,
    /// "ffff" for -1.
    pub fn write_hex(&mut self, value: i16) {
        let mut buffer = NumberBuffer::new();
        let _ = write!(buffer, "{value:x}");
        self.write_str(&buffer, Rgb565::WHITE);
    }

    fn advance_cursor(&mut self) {
        let (cols, rows) = self.text_grid();
        self.cursor_col += 1;
        if self.cursor_col >= cols {
            self.cursor_row += 1;
            self.cursor_col = 0;
        }
        if self.cursor_row >= rows {
            self.cursor_row = 0;
        }
    }
}

//! 5x7 bitmap font
//!
//! One table row per supported character code, five column bytes per row.
//! Bit n of a column byte is pixel row n, top to bottom; bit 7 is unused.
//! Rows 0..=95 are printable ASCII starting at space (the last two slots
//! hold arrow glyphs), rows 96..=159 an extended block of accented
//! characters.

/// Pixel columns per glyph.
pub const GLYPH_WIDTH: usize = 5;
/// Pixel rows per glyph.
pub const GLYPH_HEIGHT: usize = 7;
/// Number of glyphs in [`GLYPHS`].
pub const GLYPH_COUNT: usize = 160;

/// Table row for a character code.
///
/// The table starts at ASCII space: `index = code - 32`. Offsets past the
/// table end fold back by 64, so codes 192..=255 alias the accented block
/// at 128..=191. Codes below 32 have no glyph and land on the space entry.
pub const fn glyph_index(code: u8) -> usize {
    let index = (code as usize).saturating_sub(32);
    if index >= GLYPH_COUNT {
        index - 64
    } else {
        index
    }
}

/// Glyph bitmap for `ch`.
///
/// Characters above U+00FF have no table entry and render as a space.
pub fn glyph(ch: char) -> &'static [u8; GLYPH_WIDTH] {
    let code = ch as u32;
    if code > 0xFF {
        return &GLYPHS[0];
    }
    &GLYPHS[glyph_index(code as u8)]
}

/// Column bitmaps, one row per glyph; see [`glyph_index`].
pub static GLYPHS: [[u8; GLYPH_WIDTH]; GLYPH_COUNT] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // (space)
    [0x00, 0x00, 0x5F, 0x00, 0x00], // !
    [0x00, 0x07, 0x00, 0x07, 0x00], // "
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // #
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // $
    [0x23, 0x13, 0x08, 0x64, 0x62], // %
    [0x36, 0x49, 0x55, 0x22, 0x50], // &
    [0x00, 0x05, 0x03, 0x00, 0x00], // '
    [0x00, 0x1C, 0x22, 0x41, 0x00], // (
    [0x00, 0x41, 0x22, 0x1C, 0x00], // )
    [0x08, 0x2A, 0x1C, 0x2A, 0x08], // *
    [0x08, 0x08, 0x3E, 0x08, 0x08], // +
    [0x00, 0x50, 0x30, 0x00, 0x00], // ,
    [0x08, 0x08, 0x08, 0x08, 0x08], // -
    [0x00, 0x60, 0x60, 0x00, 0x00], // .
    [0x20, 0x10, 0x08, 0x04, 0x02], // /
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 1
    [0x42, 0x61, 0x51, 0x49, 0x46], // 2
    [0x21, 0x41, 0x45, 0x4B, 0x31], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // 6
    [0x01, 0x71, 0x09, 0x05, 0x03], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x06, 0x49, 0x49, 0x29, 0x1E], // 9
    [0x00, 0x36, 0x36, 0x00, 0x00], // :
    [0x00, 0x56, 0x36, 0x00, 0x00], // ;
    [0x00, 0x08, 0x14, 0x22, 0x41], // <
    [0x14, 0x14, 0x14, 0x14, 0x14], // =
    [0x41, 0x22, 0x14, 0x08, 0x00], // >
    [0x02, 0x01, 0x51, 0x09, 0x06], // ?
    [0x32, 0x49, 0x79, 0x41, 0x3E], // @
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // A
    [0x7F, 0x49, 0x49, 0x49, 0x36], // B
    [0x3E, 0x41, 0x41, 0x41, 0x22], // C
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // D
    [0x7F, 0x49, 0x49, 0x49, 0x41], // E
    [0x7F, 0x09, 0x09, 0x01, 0x01], // F
    [0x3E, 0x41, 0x41, 0x51, 0x32], // G
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // H
    [0x00, 0x41, 0x7F, 0x41, 0x00], // I
    [0x20, 0x40, 0x41, 0x3F, 0x01], // J
    [0x7F, 0x08, 0x14, 0x22, 0x41], // K
    [0x7F, 0x40, 0x40, 0x40, 0x40], // L
    [0x7F, 0x02, 0x04, 0x02, 0x7F], // M
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // N
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // O
    [0x7F, 0x09, 0x09, 0x09, 0x06], // P
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // Q
    [0x7F, 0x09, 0x19, 0x29, 0x46], // R
    [0x46, 0x49, 0x49, 0x49, 0x31], // S
    [0x01, 0x01, 0x7F, 0x01, 0x01], // T
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // U
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // V
    [0x7F, 0x20, 0x18, 0x20, 0x7F], // W
    [0x63, 0x14, 0x08, 0x14, 0x63], // X
    [0x03, 0x04, 0x78, 0x04, 0x03], // Y
    [0x61, 0x51, 0x49, 0x45, 0x43], // Z
    [0x00, 0x00, 0x7F, 0x41, 0x41], // [
    [0x02, 0x04, 0x08, 0x10, 0x20], // "\"
    [0x41, 0x41, 0x7F, 0x00, 0x00], // ]
    [0x04, 0x02, 0x01, 0x02, 0x04], // ^
    [0x40, 0x40, 0x40, 0x40, 0x40], // _
    [0x00, 0x01, 0x02, 0x04, 0x00], // `
    [0x20, 0x54, 0x54, 0x54, 0x78], // a
    [0x7F, 0x48, 0x44, 0x44, 0x38], // b
    [0x38, 0x44, 0x44, 0x44, 0x20], // c
    [0x38, 0x44, 0x44, 0x48, 0x7F], // d
    [0x38, 0x54, 0x54, 0x54, 0x18], // e
    [0x08, 0x7E, 0x09, 0x01, 0x02], // f
    [0x08, 0x14, 0x54, 0x54, 0x3C], // g
    [0x7F, 0x08, 0x04, 0x04, 0x78], // h
    [0x00, 0x44, 0x7D, 0x40, 0x00], // i
    [0x20, 0x40, 0x44, 0x3D, 0x00], // j
    [0x00, 0x7F, 0x10, 0x28, 0x44], // k
    [0x00, 0x41, 0x7F, 0x40, 0x00], // l
    [0x7C, 0x04, 0x18, 0x04, 0x78], // m
    [0x7C, 0x08, 0x04, 0x04, 0x78], // n
    [0x38, 0x44, 0x44, 0x44, 0x38], // o
    [0x7C, 0x14, 0x14, 0x14, 0x08], // p
    [0x08, 0x14, 0x14, 0x18, 0x7C], // q
    [0x7C, 0x08, 0x04, 0x04, 0x08], // r
    [0x48, 0x54, 0x54, 0x54, 0x20], // s
    [0x04, 0x3F, 0x44, 0x40, 0x20], // t
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // u
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // v
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // w
    [0x44, 0x28, 0x10, 0x28, 0x44], // x
    [0x0C, 0x50, 0x50, 0x50, 0x3C], // y
    [0x44, 0x64, 0x54, 0x4C, 0x44], // z
    [0x00, 0x08, 0x36, 0x41, 0x00], // {
    [0x00, 0x00, 0x7F, 0x00, 0x00], // |
    [0x00, 0x41, 0x36, 0x08, 0x00], // }
    [0x08, 0x08, 0x2A, 0x1C, 0x08], // ->
    [0x08, 0x1C, 0x2A, 0x08, 0x08], // <-
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // A 0x80
    [0x7F, 0x49, 0x49, 0x49, 0x33], // Á 0x81
    [0x7F, 0x49, 0x49, 0x49, 0x36], // Â 0x82
    [0x7F, 0x01, 0x01, 0x01, 0x03], // Ă 0x83
    [0xE0, 0x51, 0x4F, 0x41, 0xFF], // Ä 0x84
    [0x7F, 0x49, 0x49, 0x49, 0x41], // E 0x85
    [0x77, 0x08, 0x7F, 0x08, 0x77], // Ć 0x86
    [0x41, 0x49, 0x49, 0x49, 0x36], // Ç 0x87
    [0x7F, 0x10, 0x08, 0x04, 0x7F], // Č 0x88
    [0x7C, 0x21, 0x12, 0x09, 0x7C], // É 0x89
    [0x7F, 0x08, 0x14, 0x22, 0x41], // K 0x8A
    [0x20, 0x41, 0x3F, 0x01, 0x7F], // Ë 0x8B
    [0x7F, 0x02, 0x0C, 0x02, 0x7F], // M 0x8C
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // H 0x8D
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // O 0x8E
    [0x7F, 0x01, 0x01, 0x01, 0x7F], // Ď 0x8F
    [0x7F, 0x09, 0x09, 0x09, 0x06], // P 0x90
    [0x3E, 0x41, 0x41, 0x41, 0x22], // C 0x91
    [0x01, 0x01, 0x7F, 0x01, 0x01], // T 0x92
    [0x47, 0x28, 0x10, 0x08, 0x07], // Ó 0x93
    [0x1C, 0x22, 0x7F, 0x22, 0x1C], // Ô 0x94
    [0x63, 0x14, 0x08, 0x14, 0x63], // X 0x95
    [0x7F, 0x40, 0x40, 0x40, 0xFF], // Ö 0x96
    [0x07, 0x08, 0x08, 0x08, 0x7F], // × 0x97
    [0x7F, 0x40, 0x7F, 0x40, 0x7F], // Ř 0x98
    [0x7F, 0x40, 0x7F, 0x40, 0xFF], // Ů 0x99
    [0x01, 0x7F, 0x48, 0x48, 0x30], // Ú 0x9A
    [0x7F, 0x48, 0x30, 0x00, 0x7F], // Ű 0x9B
    [0x00, 0x7F, 0x48, 0x48, 0x30], // Ý 0x9C
    [0x22, 0x41, 0x49, 0x49, 0x3E], // Ü 0x9D
    [0x7F, 0x08, 0x3E, 0x41, 0x3E], // Ţ 0x9E
    [0x46, 0x29, 0x19, 0x09, 0x7F], // ß 0x9F
    [0x20, 0x54, 0x54, 0x54, 0x78], // a 0xA0
    [0x3C, 0x4A, 0x4A, 0x49, 0x31], // á 0xA1
    [0x7C, 0x54, 0x54, 0x28, 0x00], // â 0xA2
    [0x7C, 0x04, 0x04, 0x04, 0x0C], // ă 0xA3
    [0xE0, 0x54, 0x4C, 0x44, 0xFC], // ä 0xA4
    [0x38, 0x54, 0x54, 0x54, 0x18], // e 0xA5
    [0x6C, 0x10, 0x7C, 0x10, 0x6C], // ć 0xA6
    [0x44, 0x44, 0x54, 0x54, 0x28], // ç 0xA7
    [0x7C, 0x20, 0x10, 0x08, 0x7C], // č 0xA8
    [0x7C, 0x41, 0x22, 0x11, 0x7C], // é 0xA9
    [0x7C, 0x10, 0x28, 0x44, 0x00], // ę 0xAA
    [0x20, 0x44, 0x3C, 0x04, 0x7C], // ë 0xAB
    [0x7C, 0x08, 0x10, 0x08, 0x7C], // ě 0xAC
    [0x7C, 0x10, 0x10, 0x10, 0x7C], // í 0xAD
    [0x38, 0x44, 0x44, 0x44, 0x38], // o 0xAE
    [0x7C, 0x04, 0x04, 0x04, 0x7C], // ď 0xAF
    [0x7C, 0x14, 0x14, 0x14, 0x08], // p 0xB0
    [0x38, 0x44, 0x44, 0x44, 0x20], // c 0xB1
    [0x04, 0x04, 0x7C, 0x04, 0x04], // ň 0xB2
    [0x0C, 0x50, 0x50, 0x50, 0x3C], // ó 0xB3
    [0x30, 0x48, 0xFC, 0x48, 0x30], // ô 0xB4
    [0x44, 0x28, 0x10, 0x28, 0x44], // x 0xB5
    [0x7C, 0x40, 0x40, 0x40, 0xFC], // ö 0xB6
    [0x0C, 0x10, 0x10, 0x10, 0x7C], // ÷ 0xB7
    [0x7C, 0x40, 0x7C, 0x40, 0x7C], // ř 0xB8
    [0x7C, 0x40, 0x7C, 0x40, 0xFC], // ů 0xB9
    [0x04, 0x7C, 0x50, 0x50, 0x20], // ú 0xBA
    [0x7C, 0x50, 0x50, 0x20, 0x7C], // ű 0xBB
    [0x7C, 0x50, 0x50, 0x20, 0x00], // ü 0xBC
    [0x28, 0x44, 0x54, 0x54, 0x38], // ý 0xBD
    [0x7C, 0x10, 0x38, 0x44, 0x38], // ţ 0xBE
    [0x08, 0x54, 0x34, 0x14, 0x7C], // ˙ 0xBF
];

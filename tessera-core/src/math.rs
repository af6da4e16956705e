//! Integer math for the rasterizers
//!
//! The circle and ellipse primitives need square roots. The target class
//! of microcontroller has no FPU, so this is the classic bit-by-bit method
//! on plain u32 arithmetic.

/// Floor of the square root, computed bit by bit.
///
/// Exact for every `u32` input: the candidate root starts at bit 15 and so
/// stays within 16 bits, which covers the root of `u32::MAX` and keeps the
/// intermediate square from overflowing.
pub fn isqrt(val: u32) -> u32 {
    let mut root: u32 = 0;
    let mut mask: u32 = 0x8000;
    while mask != 0 {
        root |= mask;
        if root * root > val {
            root &= !mask;
        }
        mask >>= 1;
    }
    root
}

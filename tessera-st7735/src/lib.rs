//! ST7735 display driver and graphics primitives
//!
//! A synchronous, no-allocation driver for ST7735-class 128x160 RGB565
//! panels, plus the integer-only drawing layer that classically ships
//! with them:
//!
//! - Controller protocol: reset and wake sequencing, address windows,
//!   pixel streaming, orientation, display on/off
//! - Geometry: pixels, lines, rectangles, circles, ellipses and their
//!   filled variants
//! - Text: 5x7 bitmap font on a 6x8 cell grid, cursor tracking, string
//!   and integer output
//!
//! Everything is fire and forget. The panel has no readable status, so
//! methods return nothing and the driver trusts the wire; callers keep
//! shapes on screen and coordinates ordered where the method asks for it.
//! Debug builds check those contracts with `debug_assert!`.
//!
//! The driver is generic over the [`tessera_hal`] traits. Pass it any
//! bus, pin and delay implementation; `tessera-hal-ehal` adapts the
//! `embedded-hal` ecosystem.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
mod display;
mod graphics;
mod state;
mod text;

#[cfg(test)]
mod testing;

// Re-exported at the crate root for convenience.
pub use display::{St7735, HEIGHT, WIDTH};
pub use state::{PowerEvent, PowerState};
pub use text::{CELL_HEIGHT, CELL_WIDTH};

//! embedded-hal 1.0 adapters for the Tessera HAL traits
//!
//! Any platform with an embedded-hal 1.0 implementation (rp2040-hal,
//! stm32-hal, esp-hal, avr-hal, ...) can drive the display stack through
//! the wrappers in this crate:
//!
//! - [`spi::EhalSpi`] - wraps an `embedded_hal::spi::SpiBus`
//! - [`gpio::EhalPin`] - wraps an `embedded_hal::digital::OutputPin`
//! - [`delay::EhalDelay`] - wraps an `embedded_hal::delay::DelayNs`
//!
//! The Tessera traits are infallible (the driver stack is fire and forget),
//! so platform errors are discarded at this boundary. On a wiring that can
//! actually fail mid-session there is nothing the driver could do about it
//! anyway; the display simply stops updating.
//!
//! Chip select is not managed here: wire CS low, or manage it around driver
//! calls, exactly as with the raw controller.

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;
pub mod spi;

pub use delay::EhalDelay;
pub use gpio::EhalPin;
pub use spi::EhalSpi;

//! Board-agnostic core types for the Tessera display stack
//!
//! This crate contains everything that depends on neither the bus nor a
//! specific controller:
//!
//! - RGB565 color packing and the stock palette
//! - Display orientation
//! - Integer square root for the circle/ellipse rasterizers
//! - The 5x7 bitmap font table and its character-code index rule

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod color;
pub mod font;
pub mod math;
pub mod orientation;

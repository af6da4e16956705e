//! Tessera Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the display driver
//! stack is written against. It is dependency-free; implementations live
//! in adapter crates (`tessera-hal-ehal` covers any embedded-hal 1.0
//! platform) or in test code.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application                            │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tessera-st7735 (driver + renderers)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tessera-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ tessera-hal-  │       │ recording bus │
//! │     ehal      │       │  (test code)  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`spi::SpiBus`] - Single-byte synchronous SPI transfers
//! - [`gpio::OutputPin`] - Digital output (command/data select, reset)
//! - [`delay::DelayMs`] - Blocking millisecond delays

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use delay::DelayMs;
pub use gpio::OutputPin;
pub use spi::SpiBus;

//! Blocking delay abstraction
//!
//! Controller reset and sleep-out each require a fixed millisecond hold from
//! the datasheet; the driver takes those holds through this trait.

/// Blocking millisecond delay
pub trait DelayMs {
    /// Block the calling thread for at least `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

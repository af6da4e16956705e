//! GPIO pin abstractions
//!
//! Besides the bus itself the display controller needs two dedicated output
//! lines: the command/data selector and the hardware reset.

/// Digital output pin
///
/// Implementations handle the actual hardware register manipulation for the
/// specific platform.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);
}

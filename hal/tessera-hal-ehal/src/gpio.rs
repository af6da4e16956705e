//! GPIO pin adapter

/// Wraps an `embedded_hal::digital::OutputPin` as a
/// [`tessera_hal::OutputPin`].
pub struct EhalPin<P> {
    pin: P,
}

impl<P> EhalPin<P> {
    /// Wrap a platform output pin.
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Give the platform pin back.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: embedded_hal::digital::OutputPin> tessera_hal::OutputPin for EhalPin<P> {
    fn set_high(&mut self) {
        let _ = self.pin.set_high();
    }

    fn set_low(&mut self) {
        let _ = self.pin.set_low();
    }
}

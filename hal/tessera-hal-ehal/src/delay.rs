//! Delay adapter

/// Wraps an `embedded_hal::delay::DelayNs` as a [`tessera_hal::DelayMs`].
pub struct EhalDelay<D> {
    delay: D,
}

impl<D> EhalDelay<D> {
    /// Wrap a platform delay provider.
    pub fn new(delay: D) -> Self {
        Self { delay }
    }

    /// Give the platform delay provider back.
    pub fn release(self) -> D {
        self.delay
    }
}

impl<D: embedded_hal::delay::DelayNs> tessera_hal::DelayMs for EhalDelay<D> {
    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

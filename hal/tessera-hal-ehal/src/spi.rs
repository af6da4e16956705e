//! SPI bus adapter

/// Wraps an `embedded_hal::spi::SpiBus` as a [`tessera_hal::SpiBus`].
///
/// The wrapped bus arrives configured by the platform HAL, so `open` and
/// `close` are no-ops here; enable/disable and clocking belong to the
/// platform on these HALs.
pub struct EhalSpi<B> {
    bus: B,
}

impl<B> EhalSpi<B> {
    /// Wrap a configured platform SPI bus.
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Give the platform bus back.
    pub fn release(self) -> B {
        self.bus
    }
}

impl<B: embedded_hal::spi::SpiBus> tessera_hal::SpiBus for EhalSpi<B> {
    fn open(&mut self) {}

    fn close(&mut self) {}

    fn transfer(&mut self, byte: u8) -> u8 {
        let mut read = [0u8];
        // A one-word exchange must materialize the read word before
        // returning, which gives the busy-wait semantics the trait asks for.
        let _ = self.bus.transfer(&mut read, &[byte]);
        read[0]
    }
}

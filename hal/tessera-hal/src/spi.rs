//! SPI bus abstraction
//!
//! The display stack talks to its controller over a synchronous serial bus,
//! one byte at a time. This trait is deliberately narrow: it is the single
//! seam between the rendering stack and hardware, so tests can substitute a
//! software bus without touching any drawing logic.

/// Synchronous SPI bus in controller role.
///
/// All operations are infallible: the driver stack above is fire and forget
/// and returns no error codes. A transfer that cannot complete (stalled bus,
/// unpowered controller) blocks its caller forever; implementations must not
/// paper over that with a timeout.
pub trait SpiBus {
    /// Enable the bus in controller role.
    ///
    /// Clock rate and mode are fixed properties of the implementation.
    /// ST7735-class controllers expect SPI mode 0; the reference wiring
    /// clocks at 8 MHz.
    fn open(&mut self);

    /// Disable the bus.
    fn close(&mut self);

    /// Write one byte and busy-wait until the shift completes.
    ///
    /// Returns the byte clocked in during the write. The display driver
    /// discards it, but it is part of the full-duplex contract and lets an
    /// implementation serve read-capable peripherals on the same bus.
    fn transfer(&mut self, byte: u8) -> u8;
}

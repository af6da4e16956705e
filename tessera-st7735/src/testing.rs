//! Shared test doubles for the driver tests
//!
//! The recording bus, pins and delay all funnel into one ordered event
//! log, so tests can assert the exact wire traffic a call produced,
//! including where the data/command line sat for every byte.

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use tessera_hal::{DelayMs, OutputPin, SpiBus};

use crate::display::St7735;

/// One hardware-visible action, in the order the driver performed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Open,
    Close,
    Byte(u8),
    DcHigh,
    DcLow,
    RstHigh,
    RstLow,
    DelayMs(u32),
}

/// Shared log of everything the driver did on the wire.
#[derive(Clone, Default)]
pub struct Wire(Rc<RefCell<Vec<Event>>>);

impl Wire {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    /// Drop everything logged so far. Tests call this after
    /// initialization to assert on one operation in isolation.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

pub struct RecordingBus {
    wire: Wire,
}

impl SpiBus for RecordingBus {
    fn open(&mut self) {
        self.wire.push(Event::Open);
    }

    fn close(&mut self) {
        self.wire.push(Event::Close);
    }

    fn transfer(&mut self, byte: u8) -> u8 {
        self.wire.push(Event::Byte(byte));
        0
    }
}

pub struct RecordingPin {
    wire: Wire,
    high: Event,
    low: Event,
}

impl RecordingPin {
    fn dc(wire: &Wire) -> Self {
        Self {
            wire: wire.clone(),
            high: Event::DcHigh,
            low: Event::DcLow,
        }
    }

    fn rst(wire: &Wire) -> Self {
        Self {
            wire: wire.clone(),
            high: Event::RstHigh,
            low: Event::RstLow,
        }
    }
}

impl OutputPin for RecordingPin {
    fn set_high(&mut self) {
        self.wire.push(self.high);
    }

    fn set_low(&mut self) {
        self.wire.push(self.low);
    }
}

pub struct RecordingDelay {
    wire: Wire,
}

impl DelayMs for RecordingDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.wire.push(Event::DelayMs(ms));
    }
}

pub type RecordedDisplay = St7735<RecordingBus, RecordingPin, RecordingPin, RecordingDelay>;

/// A driver wired to a fresh recording rig.
pub fn harness() -> (RecordedDisplay, Wire) {
    let wire = Wire::new();
    let display = St7735::new(
        RecordingBus { wire: wire.clone() },
        RecordingPin::dc(&wire),
        RecordingPin::rst(&wire),
        RecordingDelay { wire: wire.clone() },
    );
    (display, wire)
}

/// A driver taken through the wake sequence, with the log cleared so
/// the next assertion sees only the operation under test.
pub fn lit_harness() -> (RecordedDisplay, Wire) {
    let (mut display, wire) = harness();
    display.initialize();
    wire.clear();
    (display, wire)
}

/// One decoded controller transaction: an opcode byte sent with DC low
/// and the parameter/pixel bytes that followed it with DC high.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub command: u8,
    pub data: Vec<u8>,
}

/// Fold the raw event log into command-led transactions.
///
/// Panics if a byte crosses the wire with DC high before any command
/// has been sent; the controller would misinterpret such a stream.
pub fn transactions(wire: &Wire) -> Vec<Transaction> {
    let mut out: Vec<Transaction> = Vec::new();
    let mut dc_high = true;
    for event in wire.events() {
        match event {
            Event::DcLow => dc_high = false,
            Event::DcHigh => dc_high = true,
            Event::Byte(byte) => {
                if dc_high {
                    match out.last_mut() {
                        Some(transaction) => transaction.data.push(byte),
                        None => panic!("data byte {byte:#04x} before any command"),
                    }
                } else {
                    out.push(Transaction {
                        command: byte,
                        data: Vec::new(),
                    });
                }
            }
            _ => {}
        }
    }
    out
}

/// One RAMWR burst: the address window it landed in and the pixel
/// words it carried, decoded from the big-endian byte stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelWrite {
    /// (x0, y0, x1, y1), inclusive.
    pub window: (u8, u8, u8, u8),
    pub words: Vec<u16>,
}

/// Interpret the log as address-window writes.
///
/// Tracks CASET/RASET as they go by and attaches each RAMWR payload to
/// the window in force at that moment. Panics on malformed traffic:
/// wrong parameter counts, coordinates beyond the panel, or a RAMWR
/// before both window axes are set.
pub fn pixel_writes(wire: &Wire) -> Vec<PixelWrite> {
    fn bounds(data: &[u8]) -> (u8, u8) {
        assert_eq!(data.len(), 4, "window command wants two 16-bit bounds");
        assert_eq!(data[0], 0, "start bound exceeds the panel");
        assert_eq!(data[2], 0, "end bound exceeds the panel");
        (data[1], data[3])
    }

    let mut out = Vec::new();
    let mut columns: Option<(u8, u8)> = None;
    let mut rows: Option<(u8, u8)> = None;
    for transaction in transactions(wire) {
        match transaction.command {
            crate::command::CASET => columns = Some(bounds(&transaction.data)),
            crate::command::RASET => rows = Some(bounds(&transaction.data)),
            crate::command::RAMWR => {
                let (x0, x1) = columns.expect("RAMWR before any CASET");
                let (y0, y1) = rows.expect("RAMWR before any RASET");
                assert!(
                    transaction.data.len() % 2 == 0,
                    "pixel stream split mid-word"
                );
                let words = transaction
                    .data
                    .chunks_exact(2)
                    .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                    .collect();
                out.push(PixelWrite {
                    window: (x0, y0, x1, y1),
                    words,
                });
            }
            _ => {}
        }
    }
    out
}

/// Interpret the log as single-pixel writes and return their
/// coordinates in order. Panics if any write was not exactly one pixel
/// into a 1x1 window.
pub fn pixels(wire: &Wire) -> Vec<(u8, u8)> {
    pixel_writes(wire)
        .into_iter()
        .map(|write| {
            let (x0, y0, x1, y1) = write.window;
            assert_eq!((x0, y0), (x1, y1), "window wider than one pixel");
            assert_eq!(write.words.len(), 1, "burst wider than one pixel");
            (x0, y0)
        })
        .collect()
}

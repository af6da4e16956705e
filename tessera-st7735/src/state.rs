//! Controller power-state machine
//!
//! The ST7735 wakes through a fixed command sequence, and drawing only
//! means anything once the panel is on. The driver tracks where in that
//! sequence the controller is and gates the drawing entry points on it.

/// Controller states, in wake order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    /// No reset issued yet; the controller's state is unknown
    #[default]
    Uninitialized,
    /// Hardware reset pulsed and settled
    Resetting,
    /// Sleep-out issued and settled
    SleepOut,
    /// 16-bit pixel format selected
    ColorModeSet,
    /// Panel lit; drawing is valid
    On,
}

/// Protocol steps that move the power state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerEvent {
    /// Reset line pulsed and released
    Reset,
    /// SLPOUT written and settled
    Wake,
    /// COLMOD written
    SetColorMode,
    /// DISPON written
    DisplayOn,
    /// DISPOFF written
    DisplayOff,
}

impl PowerState {
    /// True once the panel is lit and drawing calls are permitted.
    pub fn is_on(self) -> bool {
        matches!(self, PowerState::On)
    }

    /// Process a protocol step and return the next state.
    pub fn transition(self, event: PowerEvent) -> Self {
        use PowerEvent::*;
        use PowerState::*;

        match (self, event) {
            // A reset pulse restarts the sequence from anywhere.
            (_, Reset) => Resetting,

            // The wake sequence moves strictly forward.
            (Resetting, Wake) => SleepOut,
            (SleepOut, SetColorMode) => ColorModeSet,
            (ColorModeSet, DisplayOn) => On,

            // A configured panel can be blanked and re-lit; display
            // memory and the pixel format survive the round trip.
            (On, DisplayOff) => ColorModeSet,

            // Out-of-order steps do not advance the sequence.
            (state, _) => state,
        }
    }
}

//! Display orientation
//!
//! The controller can swap and mirror its addressing axes. Changing
//! orientation never moves pixels already written; it only changes how
//! subsequent coordinates are interpreted.

/// Display orientation, clockwise from the portrait default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    /// 0 degrees, the controller reset default
    #[default]
    Portrait,
    /// 90 degrees
    Landscape,
    /// 180 degrees
    PortraitFlipped,
    /// 270 degrees
    LandscapeFlipped,
}

impl Orientation {
    /// Map a degree value to an orientation.
    ///
    /// Anything other than 90, 180 or 270 falls back to 0 degrees. The
    /// fallback is silent, matching the long-standing behavior of this
    /// display stack; callers wanting strictness construct the variant
    /// directly.
    pub const fn from_degrees(degrees: u16) -> Self {
        match degrees {
            90 => Orientation::Landscape,
            180 => Orientation::PortraitFlipped,
            270 => Orientation::LandscapeFlipped,
            _ => Orientation::Portrait,
        }
    }

    /// True when the axes are swapped relative to portrait.
    pub const fn is_landscape(self) -> bool {
        matches!(
            self,
            Orientation::Landscape | Orientation::LandscapeFlipped
        )
    }
}

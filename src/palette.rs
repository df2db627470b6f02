//! Unit colors for the four zones.
//!
//! A unit color is the dimmest visible tint of a zone; the rendered color
//! is `unit * brightness`. The palette is owned by the engine and only
//! mutated between frames, so a zone's three channels always change as
//! one unit.

use crate::color::{Rgb, scaled};
use crate::geometry::Zone;

/// Default tints matched to the sign's painted colors. Light, not
/// pigment: they do not replicate the paint exactly.
/// VIOLET #8B3E6E, CYAN #4DBAC3, YELLOW #C6C474, BEIGE #E3E1CD.
pub const DEFAULT_UNITS: [Rgb; 4] = [
    Rgb { r: 8, g: 0, b: 1 }, // violet
    Rgb { r: 8, g: 3, b: 1 }, // beige
    Rgb { r: 8, g: 3, b: 0 }, // yellow
    Rgb { r: 0, g: 3, b: 4 }, // cyan
];

#[derive(Debug, Clone)]
pub struct Palette {
    units: [Rgb; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self { units: DEFAULT_UNITS }
    }
}

impl Palette {
    pub const fn new(units: [Rgb; 4]) -> Self {
        Self { units }
    }

    /// The unit color of a zone.
    pub fn unit(&self, zone: Zone) -> Rgb {
        self.units[zone.index()]
    }

    /// Replace a zone's unit color.
    pub fn set_unit(&mut self, zone: Zone, color: Rgb) {
        self.units[zone.index()] = color;
    }

    /// The rendered color of a zone at the given brightness factor.
    pub fn scaled(&self, zone: Zone, factor: u8) -> Rgb {
        scaled(self.unit(zone), factor)
    }
}

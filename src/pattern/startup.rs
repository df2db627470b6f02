//! Power-on ramp
//!
//! Ramps every zone linearly from black to its unit color, then freezes.
//! The engine forces the transition to the first real pattern once
//! enough epochs have elapsed; this mode never asks to advance itself.

use super::{Pattern, Surface, Ticks};
use crate::geometry::Zone;

const RAMP_STEPS: u16 = 13;

#[derive(Debug, Clone, Default)]
pub struct StartupPattern {
    frozen: bool,
}

impl StartupPattern {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Pattern for StartupPattern {
    fn render(&mut self, surface: &mut Surface<'_>, ticks: &mut Ticks) -> bool {
        if ticks.step > RAMP_STEPS {
            self.frozen = true;
        }
        if self.frozen {
            return false;
        }

        #[allow(clippy::cast_possible_truncation)]
        let level = ticks.step as u8;
        for zone in Zone::ALL {
            let color = surface.palette.scaled(zone, level);
            let (from, to) = zone.range();
            surface.frame[from..to].fill(color);
        }

        false
    }
}

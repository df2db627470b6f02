//! Breathe pattern
//!
//! Uniform brightness ramp over the whole display: a fast leg and a
//! slower tail in each direction, flipping direction every 20 steps.
//! The global brightness scalar is ignored here; the ramp level is the
//! brightness. This is the one mode paced by a blocking per-frame delay
//! (reported through the engine's pacing), so its `delay` is not a
//! frame divisor.

use super::{Pattern, Surface, Ticks};
use crate::geometry::Zone;

const FLIP_AT: u16 = 20;

#[derive(Debug, Clone)]
pub struct BreathePattern {
    cycles: u16,
    threshold: u16,
    ramp_up: bool,
}

impl BreathePattern {
    pub fn new(threshold: u16) -> Self {
        Self {
            cycles: 0,
            threshold,
            ramp_up: true,
        }
    }
}

impl Pattern for BreathePattern {
    fn render(&mut self, surface: &mut Surface<'_>, ticks: &mut Ticks) -> bool {
        if ticks.step >= FLIP_AT {
            ticks.step = 0;
            self.cycles = self.cycles.saturating_add(1);
            self.ramp_up = !self.ramp_up;
        }
        let cycle_done = self.cycles >= self.threshold;

        let step = ticks.step;
        #[allow(clippy::cast_possible_truncation)]
        let level = if self.ramp_up {
            // Half-rate start, then linear.
            let sub = if step >= 5 { step } else { step / 2 };
            (sub + 1) as u8
        } else {
            // Linear down to step 10, then half rate.
            let sub = if step <= 10 { step } else { (step - 10) / 2 + 10 };
            14u8.saturating_sub(sub as u8)
        };

        for zone in Zone::ALL {
            let color = surface.palette.scaled(zone, level);
            let (from, to) = zone.range();
            surface.frame[from..to].fill(color);
        }

        cycle_done
    }
}

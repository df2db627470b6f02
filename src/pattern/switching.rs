//! Switch pattern
//!
//! Paints the whole display every tick, rotating which zone range shows
//! which color through the twelve pre-baked permutations.

use super::{Pattern, Surface, Ticks};
use crate::geometry::{SWITCH_PERMUTATIONS, Zone};

#[derive(Debug, Clone)]
pub struct SwitchPattern {
    cycles: u16,
    threshold: u16,
}

impl SwitchPattern {
    pub fn new(threshold: u16) -> Self {
        Self { cycles: 0, threshold }
    }
}

impl Pattern for SwitchPattern {
    fn render(&mut self, surface: &mut Surface<'_>, ticks: &mut Ticks) -> bool {
        let mut phase = ticks.step / u16::from(ticks.delay);
        if phase >= SWITCH_PERMUTATIONS.len() as u16 {
            ticks.step = 0;
            phase = 0;
            self.cycles = self.cycles.saturating_add(1);
        }
        let cycle_done = self.cycles >= self.threshold;

        // Row entry k names the zone range that receives color k.
        let row = SWITCH_PERMUTATIONS[phase as usize];
        for (range_index, color_zone) in row.into_iter().zip(Zone::ALL) {
            let color = surface.palette.scaled(color_zone, surface.brightness);
            let (from, to) = Zone::ALL[range_index].range();
            surface.frame[from..to].fill(color);
        }

        cycle_done
    }
}

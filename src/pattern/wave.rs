//! Wave pattern
//!
//! Lights one ring per zone and moves the lit ring inward each phase,
//! returning to the outer ring after three phases. The phase span lists
//! live in `geometry.rs`.

use super::{Pattern, Surface, Ticks};
use crate::color::clear;
use crate::geometry::WAVE_PHASES;

#[derive(Debug, Clone)]
pub struct WavePattern {
    cycles: u16,
    threshold: u16,
}

impl WavePattern {
    pub fn new(threshold: u16) -> Self {
        Self { cycles: 0, threshold }
    }
}

impl Pattern for WavePattern {
    fn render(&mut self, surface: &mut Surface<'_>, ticks: &mut Ticks) -> bool {
        let mut phase = ticks.step / u16::from(ticks.delay);
        if phase >= 3 {
            ticks.step = 0;
            phase = 0;
            self.cycles = self.cycles.saturating_add(1);
        }
        let cycle_done = self.cycles >= self.threshold;

        clear(surface.frame);
        for span in WAVE_PHASES[phase as usize] {
            let color = surface.palette.scaled(span.zone, surface.brightness);
            surface.frame[span.from..span.to].fill(color);
        }

        cycle_done
    }
}

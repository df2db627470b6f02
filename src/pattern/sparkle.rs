//! Sparkle pattern
//!
//! Every `delay` ticks the frame is cleared and `sparkle_count + 1`
//! pseudo-random pixels are lit in each zone. Randomness is a chained
//! 8-bit xorshift: each refill reseeds from the step counter, each
//! zone's draw seeds the next, and a draw's clamped cyan index seeds
//! the following draw.

use super::{Pattern, Surface, Ticks};
use crate::color::{Rgb, clear};
use crate::geometry::{
    BEIGE_LEDS, BEIGE_START, CYAN_LEDS, CYAN_START, VIOLET_LEDS, YELLOW_LEDS, YELLOW_START, Zone,
};
use crate::palette::Palette;

/// 8-bit xorshift (4, 7, 1 triplet).
fn xorshift(seed: u8) -> u8 {
    let mut s = seed;
    s ^= s << 4;
    s ^= s >> 7;
    s ^= s << 1;
    s
}

/// Light one pseudo-random pixel per zone; returns the clamped cyan
/// index, which seeds the next draw.
///
/// Zone clamping is a single conditional subtraction, not a true modulo,
/// matching the original sign firmware: beige compares with `>` so a
/// draw of exactly 83 survives and lands on the first yellow pixel, and
/// yellow's base is offset by one so a zero draw lands on the last beige
/// pixel. Every reachable index stays inside the frame.
fn scatter(frame: &mut [Rgb], palette: &Palette, brightness: u8, seed: u8) -> u8 {
    let draw_violet = xorshift(seed);
    let draw_beige = xorshift(draw_violet);
    let draw_yellow = xorshift(draw_beige);
    let draw_cyan = xorshift(draw_yellow);

    let mut violet = draw_violet;
    if violet >= VIOLET_LEDS {
        violet -= VIOLET_LEDS;
    }

    // Seven bits are enough for the two short zones.
    let mut beige = draw_beige >> 1;
    if beige > BEIGE_LEDS {
        beige -= BEIGE_LEDS;
    }

    let mut yellow = draw_yellow >> 1;
    if yellow > YELLOW_LEDS {
        yellow -= YELLOW_LEDS;
    }

    let mut cyan = draw_cyan;
    if cyan >= CYAN_LEDS {
        cyan -= CYAN_LEDS;
    }

    frame[violet as usize] = palette.scaled(Zone::Violet, brightness);
    frame[BEIGE_START + beige as usize] = palette.scaled(Zone::Beige, brightness);
    frame[YELLOW_START + yellow as usize - 1] = palette.scaled(Zone::Yellow, brightness);
    frame[CYAN_START + cyan as usize] = palette.scaled(Zone::Cyan, brightness);

    cyan
}

#[derive(Debug, Clone)]
pub struct SparklePattern {
    refills: u16,
    threshold: u16,
}

impl SparklePattern {
    pub fn new(threshold: u16) -> Self {
        Self { refills: 0, threshold }
    }
}

impl Pattern for SparklePattern {
    fn render(&mut self, surface: &mut Surface<'_>, ticks: &mut Ticks) -> bool {
        if ticks.step % u16::from(ticks.delay) == 0 {
            self.refills = self.refills.saturating_add(1);
            clear(surface.frame);

            #[allow(clippy::cast_possible_truncation)]
            let mut seed = scatter(
                surface.frame,
                surface.palette,
                surface.brightness,
                ticks.step as u8,
            );
            for _ in 0..surface.sparkle_count {
                seed = scatter(surface.frame, surface.palette, surface.brightness, seed);
            }
        }

        self.refills >= self.threshold
    }
}

//! Race pattern
//!
//! A window of lit table rows travels around every zone's rings at once.
//! The cursor moves one row per `delay` ticks; the window trails it by
//! `race_width` rows. The leading row lights only the middle ring entry,
//! the trailing row lights inner and outer, interior rows light all
//! three. The window is repainted in full every tick so brightness and
//! palette changes land without waiting for the next cursor move.

use super::{Pattern, RaceDirection, Surface, Ticks};
use crate::color::clear;
use crate::geometry::{
    RACE_STEPS_BEIGE, RACE_STEPS_CYAN, RACE_STEPS_VIOLET, RACE_STEPS_YELLOW, Zone,
};

/// Position on a circular geometry table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaceCursor {
    pos: u16,
    len: u16,
}

impl RaceCursor {
    /// A cursor at row 0 of a table with `len` rows. `len` must be
    /// non-zero.
    pub const fn new(len: u16) -> Self {
        Self { pos: 0, len }
    }

    pub const fn position(self) -> u16 {
        self.pos
    }

    pub fn advance(&mut self) {
        self.pos += 1;
        if self.pos >= self.len {
            self.pos = 0;
        }
    }

    pub fn retreat(&mut self) {
        if self.pos == 0 {
            self.pos = self.len - 1;
        } else {
            self.pos -= 1;
        }
    }

    /// Table row `offset` positions from the cursor, measured in the
    /// direction of travel. The cursor itself is the trailing edge of
    /// the lit window.
    pub fn trailing(self, direction: RaceDirection, offset: u16) -> u16 {
        match direction {
            RaceDirection::Forward => (self.pos + offset) % self.len,
            RaceDirection::Reverse => {
                (self.pos + self.len - (offset % self.len)) % self.len
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct RacePattern {
    direction: RaceDirection,
    /// Violet and cyan tables have the same period and share a cursor.
    violet_cyan: RaceCursor,
    beige: RaceCursor,
    yellow: RaceCursor,
    moves: u16,
    threshold: u16,
}

impl RacePattern {
    pub fn new(direction: RaceDirection, threshold: u16) -> Self {
        Self {
            direction,
            violet_cyan: RaceCursor::new(RACE_STEPS_VIOLET.len() as u16),
            beige: RaceCursor::new(RACE_STEPS_BEIGE.len() as u16),
            yellow: RaceCursor::new(RACE_STEPS_YELLOW.len() as u16),
            moves: 0,
            threshold,
        }
    }

    pub fn direction(&self) -> RaceDirection {
        self.direction
    }
}

impl Pattern for RacePattern {
    fn render(&mut self, surface: &mut Surface<'_>, ticks: &mut Ticks) -> bool {
        clear(surface.frame);

        let cycle_done = self.moves >= self.threshold;

        if ticks.step % u16::from(ticks.delay) == 0 {
            self.moves = self.moves.saturating_add(1);
            match self.direction {
                RaceDirection::Forward => {
                    self.violet_cyan.advance();
                    self.beige.advance();
                    self.yellow.advance();
                }
                RaceDirection::Reverse => {
                    self.violet_cyan.retreat();
                    self.beige.retreat();
                    self.yellow.retreat();
                }
            }
        }

        let width = u16::from(surface.race_width);
        let violet = surface.palette.scaled(Zone::Violet, surface.brightness);
        let beige = surface.palette.scaled(Zone::Beige, surface.brightness);
        let yellow = surface.palette.scaled(Zone::Yellow, surface.brightness);
        let cyan = surface.palette.scaled(Zone::Cyan, surface.brightness);

        for entry in 0..width {
            let vc = self.violet_cyan.trailing(self.direction, entry) as usize;
            let bg = self.beige.trailing(self.direction, entry) as usize;
            let yl = self.yellow.trailing(self.direction, entry) as usize;

            let rows = [
                (RACE_STEPS_VIOLET[vc], violet),
                (RACE_STEPS_BEIGE[bg], beige),
                (RACE_STEPS_YELLOW[yl], yellow),
                (RACE_STEPS_CYAN[vc], cyan),
            ];

            for (row, color) in rows {
                if entry == width - 1 {
                    // Leading edge: middle ring only.
                    surface.frame[row[1] as usize] = color;
                } else if entry == 0 {
                    // Trailing edge: inner and outer rings.
                    surface.frame[row[0] as usize] = color;
                    surface.frame[row[2] as usize] = color;
                } else {
                    surface.frame[row[0] as usize] = color;
                    surface.frame[row[1] as usize] = color;
                    surface.frame[row[2] as usize] = color;
                }
            }
        }

        cycle_done
    }
}

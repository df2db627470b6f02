//! Pattern state machine with compile-time known mode variants
//!
//! All modes are stored in an enum to avoid heap allocations. Each mode
//! implements the `Pattern` trait and owns its cycle counters, so a mode
//! transition simply builds a fresh slot.

mod breathe;
mod race;
mod sparkle;
mod startup;
mod switching;
mod wave;

pub use breathe::BreathePattern;
pub use race::{RaceCursor, RacePattern};
pub use sparkle::SparklePattern;
pub use startup::StartupPattern;
pub use switching::SwitchPattern;
pub use wave::WavePattern;

use crate::color::Rgb;
use crate::config::{EngineConfig, ModeTuning};
use crate::palette::Palette;

const PATTERN_NAME_STARTUP: &str = "startup";
const PATTERN_NAME_WAVE: &str = "wave";
const PATTERN_NAME_SWITCH: &str = "switch";
const PATTERN_NAME_BREATHE: &str = "breathe";
const PATTERN_NAME_RACE_FORWARD: &str = "race_forward";
const PATTERN_NAME_RACE_REVERSE: &str = "race_reverse";
const PATTERN_NAME_SPARKLE: &str = "sparkle";

/// Travel direction of the race window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaceDirection {
    Forward,
    Reverse,
}

/// Global tick state shared by every mode.
///
/// `step` is the raw loop counter; modes divide it by `delay` to derive
/// their visual phase. `global` wraps freely and bumps `epoch` on each
/// wrap; the startup ramp is forced over once enough epochs elapse.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ticks {
    pub step: u16,
    pub delay: u8,
    pub(crate) global: u16,
    pub(crate) epoch: u16,
}

impl Ticks {
    pub(crate) fn advance(&mut self) {
        self.step = self.step.wrapping_add(1);
        self.global = self.global.wrapping_add(1);
        if self.global == 0 {
            self.epoch = self.epoch.wrapping_add(1);
        }
    }

    pub(crate) fn reset(&mut self, delay: u8) {
        self.step = 0;
        self.global = 0;
        self.epoch = 0;
        self.delay = delay;
    }
}

/// Everything a mode may read or paint during one tick.
pub(crate) struct Surface<'a> {
    pub frame: &'a mut [Rgb],
    pub palette: &'a Palette,
    pub brightness: u8,
    pub race_width: u8,
    pub sparkle_count: u8,
}

pub(crate) trait Pattern {
    /// Render one tick.
    ///
    /// Returns `true` once the mode has completed enough cycles to hand
    /// off to the next pattern; the engine decides whether auto-advance
    /// is currently honored.
    fn render(&mut self, surface: &mut Surface<'_>, ticks: &mut Ticks) -> bool;
}

/// Known pattern modes, in their fixed cyclic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternId {
    Startup,
    Wave,
    Switch,
    Breathe,
    Race(RaceDirection),
    Sparkle,
}

impl PatternId {
    /// The mode following this one. Wraps from the last mode back to
    /// wave; startup runs exactly once after power-on and is never
    /// re-entered.
    pub const fn next(self) -> Self {
        match self {
            Self::Startup => Self::Wave,
            Self::Wave => Self::Switch,
            Self::Switch => Self::Breathe,
            Self::Breathe => Self::Race(RaceDirection::Forward),
            Self::Race(RaceDirection::Forward) => Self::Race(RaceDirection::Reverse),
            Self::Race(RaceDirection::Reverse) => Self::Sparkle,
            Self::Sparkle => Self::Wave,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Startup => PATTERN_NAME_STARTUP,
            Self::Wave => PATTERN_NAME_WAVE,
            Self::Switch => PATTERN_NAME_SWITCH,
            Self::Breathe => PATTERN_NAME_BREATHE,
            Self::Race(RaceDirection::Forward) => PATTERN_NAME_RACE_FORWARD,
            Self::Race(RaceDirection::Reverse) => PATTERN_NAME_RACE_REVERSE,
            Self::Sparkle => PATTERN_NAME_SPARKLE,
        }
    }

    /// Tuning block for this mode.
    pub fn tuning(self, config: &EngineConfig) -> ModeTuning {
        match self {
            Self::Startup => config.startup,
            Self::Wave => config.wave,
            Self::Switch => config.switching,
            Self::Breathe => config.breathe,
            Self::Race(_) => config.race,
            Self::Sparkle => config.sparkle,
        }
    }

    pub(crate) fn to_slot(self, config: &EngineConfig) -> PatternSlot {
        let tuning = self.tuning(config);
        match self {
            Self::Startup => PatternSlot::Startup(StartupPattern::new()),
            Self::Wave => PatternSlot::Wave(WavePattern::new(tuning.auto_advance_after)),
            Self::Switch => PatternSlot::Switch(SwitchPattern::new(tuning.auto_advance_after)),
            Self::Breathe => PatternSlot::Breathe(BreathePattern::new(tuning.auto_advance_after)),
            Self::Race(direction) => {
                PatternSlot::Race(RacePattern::new(direction, tuning.auto_advance_after))
            }
            Self::Sparkle => PatternSlot::Sparkle(SparklePattern::new(tuning.auto_advance_after)),
        }
    }
}

/// Pattern slot - enum containing all possible modes
#[derive(Debug, Clone)]
pub(crate) enum PatternSlot {
    Startup(StartupPattern),
    Wave(WavePattern),
    Switch(SwitchPattern),
    Breathe(BreathePattern),
    Race(RacePattern),
    Sparkle(SparklePattern),
}

impl PatternSlot {
    pub(crate) fn id(&self) -> PatternId {
        match self {
            Self::Startup(_) => PatternId::Startup,
            Self::Wave(_) => PatternId::Wave,
            Self::Switch(_) => PatternId::Switch,
            Self::Breathe(_) => PatternId::Breathe,
            Self::Race(pattern) => PatternId::Race(pattern.direction()),
            Self::Sparkle(_) => PatternId::Sparkle,
        }
    }

    /// Render the active mode for one tick.
    pub(crate) fn render(&mut self, surface: &mut Surface<'_>, ticks: &mut Ticks) -> bool {
        match self {
            Self::Startup(pattern) => pattern.render(surface, ticks),
            Self::Wave(pattern) => pattern.render(surface, ticks),
            Self::Switch(pattern) => pattern.render(surface, ticks),
            Self::Breathe(pattern) => pattern.render(surface, ticks),
            Self::Race(pattern) => pattern.render(surface, ticks),
            Self::Sparkle(pattern) => pattern.render(surface, ticks),
        }
    }
}

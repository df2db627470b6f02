//! The pattern engine.
//!
//! Owns the frame buffer, palette and all mode state. Interrupt sources
//! never touch any of this directly: button and serial events arrive as
//! [`Command`] values (drained by the scheduler) and are applied between
//! frames, so compound state like a palette triple or a delay/step
//! rewrite can never tear.

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{Rgb, clear};
use crate::command::Command;
use crate::config::EngineConfig;
use crate::geometry::{LED_COUNT, Zone};
use crate::palette::Palette;
use crate::pattern::{PatternId, PatternSlot, Surface, Ticks};

pub struct SignEngine {
    config: EngineConfig,

    // Internal state
    frame: [Rgb; LED_COUNT],
    palette: Palette,
    brightness: u8,
    auto_advance: bool,
    race_width: u8,
    sparkle_count: u8,
    ticks: Ticks,
    slot: PatternSlot,
}

impl Default for SignEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl SignEngine {
    pub fn new(config: EngineConfig) -> Self {
        let slot = PatternId::Startup.to_slot(&config);
        let mut ticks = Ticks::default();
        ticks.reset(PatternId::Startup.tuning(&config).delay.initial());

        Self {
            frame: [Rgb { r: 0, g: 0, b: 0 }; LED_COUNT],
            palette: Palette::default(),
            brightness: config.max_brightness,
            auto_advance: true,
            race_width: config.race_width.min(config.max_race_width),
            sparkle_count: config.sparkle_count,
            ticks,
            slot,
            config,
        }
    }

    /// Process one frame
    ///
    /// Renders the active mode, advances the tick counters and performs
    /// any pending auto-advance. Call this continuously; pacing is the
    /// caller's job (see [`Self::pacing`]).
    pub fn render(&mut self) -> &[Rgb] {
        // The startup ramp freezes itself and is forced over once enough
        // epochs have passed.
        if self.slot.id() == PatternId::Startup && self.ticks.epoch >= self.config.startup_epochs {
            self.update_pattern();
        }

        let mut surface = Surface {
            frame: &mut self.frame,
            palette: &self.palette,
            brightness: self.brightness,
            race_width: self.race_width,
            sparkle_count: self.sparkle_count,
        };
        let cycle_done = self.slot.render(&mut surface, &mut self.ticks);
        self.ticks.advance();

        if cycle_done && self.auto_advance {
            self.update_pattern();
        }

        &self.frame
    }

    /// Per-frame blocking delay for the active mode.
    ///
    /// Breathe is paced by a real wait; every other mode paces itself by
    /// dividing the tick counter and must not block, so it stays
    /// responsive to incoming events.
    pub fn pacing(&self) -> Duration {
        match self.slot.id() {
            PatternId::Breathe => Duration::from_millis(u64::from(self.ticks.delay)),
            _ => Duration::from_millis(0),
        }
    }

    /// Apply a decoded command.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::NextPattern => self.update_pattern(),
            Command::CycleSpeed => self.update_speed(),
            Command::CycleBrightness => self.update_brightness(),
            Command::ToggleAutoAdvance => self.toggle_auto_advance(),
            Command::SetZoneColor { zone, color } => self.set_unit_color(zone, color),
            Command::SetRaceWidth(width) => self.set_race_width(width),
            Command::SetSparkleCount(count) => self.set_sparkle_count(count),
        }
    }

    /// Advance to the next mode in the fixed cyclic order.
    pub fn update_pattern(&mut self) {
        self.set_pattern(self.slot.id().next());
    }

    /// Jump to a specific mode.
    ///
    /// Builds a fresh slot (step and cycle counters at zero), resets the
    /// delay to the mode's nominal value and blanks the frame so the new
    /// mode starts from black.
    pub fn set_pattern(&mut self, id: PatternId) {
        self.slot = id.to_slot(&self.config);
        self.ticks.reset(id.tuning(&self.config).delay.initial());
        clear(&mut self.frame);

        #[cfg(feature = "esp32-log")]
        println!("pattern -> {}", id.as_str());
    }

    /// Halve the active mode's delay; wrap to the slowest delay when
    /// already at the floor.
    ///
    /// The visual phase is `step / delay`, so changing the delay alone
    /// can make the displayed phase jump. If the new phase would move
    /// more than one unit past the old one, `step` is rewritten so the
    /// display advances by exactly one phase.
    pub fn update_speed(&mut self) {
        let bounds = self.slot.id().tuning(&self.config).delay;
        let prev_phase = u32::from(self.ticks.step) / u32::from(self.ticks.delay);

        if self.ticks.delay <= 1 {
            self.ticks.delay = bounds.max;
        } else {
            self.ticks.delay /= 2;
        }

        let new_delay = u32::from(self.ticks.delay);
        if u32::from(self.ticks.step) / new_delay > prev_phase + 1 {
            #[allow(clippy::cast_possible_truncation)]
            {
                self.ticks.step = ((prev_phase + 1) * new_delay) as u16;
            }
        }
    }

    /// Decrement brightness; wrap back to the maximum below one.
    pub fn update_brightness(&mut self) {
        self.brightness = if self.brightness <= 1 {
            self.config.max_brightness
        } else {
            self.brightness - 1
        };
    }

    pub fn toggle_auto_advance(&mut self) {
        self.auto_advance = !self.auto_advance;
    }

    /// Replace a zone's unit color.
    pub fn set_unit_color(&mut self, zone: Zone, color: Rgb) {
        self.palette.set_unit(zone, color);
    }

    /// Set the race window thickness, clamped to the configured maximum.
    pub fn set_race_width(&mut self, width: u8) {
        self.race_width = width.min(self.config.max_race_width);
    }

    pub fn set_sparkle_count(&mut self, count: u8) {
        self.sparkle_count = count;
    }

    // Observers, mainly for the platform layer and tests.

    pub fn pattern(&self) -> PatternId {
        self.slot.id()
    }

    pub fn frame(&self) -> &[Rgb] {
        &self.frame
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn step(&self) -> u16 {
        self.ticks.step
    }

    pub fn delay(&self) -> u8 {
        self.ticks.delay
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    pub fn race_width(&self) -> u8 {
        self.race_width
    }

    pub fn sparkle_count(&self) -> u8 {
        self.sparkle_count
    }
}

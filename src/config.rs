//! Typed engine configuration.
//!
//! Every per-mode delay bound and auto-advance threshold has a named
//! field; `Default` reproduces the sign's shipped tuning.

/// Frame-divisor limits for one mode. The delay divides the tick counter
/// into visual steps, so a larger delay is slower.
#[derive(Debug, Clone, Copy)]
pub struct DelayBounds {
    pub min: u8,
    pub max: u8,
    pub nominal: u8,
}

impl DelayBounds {
    /// Delay a mode starts with. The startup ramp intentionally begins
    /// below its `min`; the bounds only govern speed-cycle wrapping.
    pub fn initial(self) -> u8 {
        self.nominal
    }
}

/// Tuning for one pattern mode.
#[derive(Debug, Clone, Copy)]
pub struct ModeTuning {
    pub delay: DelayBounds,
    /// Completed cycles before the mode hands off to the next one.
    /// Ignored while auto-advance is disabled.
    pub auto_advance_after: u16,
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub startup: ModeTuning,
    pub wave: ModeTuning,
    pub switching: ModeTuning,
    pub breathe: ModeTuning,
    pub race: ModeTuning,
    pub sparkle: ModeTuning,

    /// Brightness ceiling. Set for the power supply, not the LEDs: too
    /// high and the full-on patterns draw more current than the supply
    /// delivers.
    pub max_brightness: u8,
    /// Ceiling for the race window thickness.
    pub max_race_width: u8,
    /// Initial race window thickness.
    pub race_width: u8,
    /// Initial extra sparkle pixels per refill.
    pub sparkle_count: u8,
    /// Epochs (tick-counter wraps) before the startup ramp is forced
    /// over into the first real pattern.
    pub startup_epochs: u16,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            startup: ModeTuning {
                delay: DelayBounds { min: 16, max: 16, nominal: 4 },
                // Startup never auto-advances by cycles; it is forced
                // over by `startup_epochs`.
                auto_advance_after: u16::MAX,
            },
            wave: ModeTuning {
                delay: DelayBounds { min: 1, max: 64, nominal: 16 },
                auto_advance_after: 100,
            },
            switching: ModeTuning {
                delay: DelayBounds { min: 1, max: 64, nominal: 64 },
                auto_advance_after: 20,
            },
            breathe: ModeTuning {
                delay: DelayBounds { min: 1, max: 64, nominal: 64 },
                auto_advance_after: 50,
            },
            race: ModeTuning {
                delay: DelayBounds { min: 1, max: 64, nominal: 4 },
                auto_advance_after: 5000,
            },
            sparkle: ModeTuning {
                delay: DelayBounds { min: 1, max: 32, nominal: 8 },
                auto_advance_after: 1000,
            },
            max_brightness: 4,
            max_race_width: 60,
            race_width: 10,
            sparkle_count: 8,
            startup_epochs: 10,
        }
    }
}

#![no_std]

pub mod channel;
pub mod color;
pub mod command;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod input;
pub mod palette;
pub mod pattern;
pub mod scheduler;

pub use channel::{CommandChannel, CommandReceiver, CommandSender};
pub use color::{Rgb, scaled};
pub use command::{ACK, Command, SerialLink, read_command};
pub use config::{DelayBounds, EngineConfig, ModeTuning};
pub use engine::SignEngine;
pub use geometry::{LED_COUNT, Zone};
pub use input::{Button, InputArbiter};
pub use palette::Palette;
pub use pattern::{PatternId, RaceDirection};
pub use scheduler::{FrameResult, POWER_ON_SETTLE, SignScheduler};

pub use embassy_time::Duration;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The sign engine is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED chain
    fn write(&mut self, colors: &[Rgb]);
}

//! The main loop glue.
//!
//! Ties the engine to the platform: drains queued commands, renders one
//! frame, hands it to the output driver and reports how long the caller
//! should wait before the next tick. The scheduler itself never sleeps;
//! timing stays with the platform layer.

use embassy_time::Duration;

use crate::OutputDriver;
use crate::channel::CommandReceiver;
use crate::engine::SignEngine;

/// Fixed settle delay the caller should apply after power-on, before the
/// first tick, so the LED chain is ready for data.
pub const POWER_ON_SETTLE: Duration = Duration::from_millis(100);

/// Result of one scheduler tick.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// How long to wait before the next tick. Zero for the self-pacing
    /// modes; only breathe asks for a real wait.
    pub pacing: Duration,
}

pub struct SignScheduler<'a, O: OutputDriver, const COMMANDS: usize> {
    output: O,
    engine: SignEngine,
    commands: CommandReceiver<'a, COMMANDS>,
}

impl<'a, O: OutputDriver, const COMMANDS: usize> SignScheduler<'a, O, COMMANDS> {
    pub fn new(engine: SignEngine, output: O, commands: CommandReceiver<'a, COMMANDS>) -> Self {
        Self {
            output,
            engine,
            commands,
        }
    }

    /// Run one loop iteration.
    ///
    /// Applies every command queued since the previous tick, renders the
    /// active mode and writes the frame to the output driver.
    pub fn tick(&mut self) -> FrameResult {
        while let Ok(command) = self.commands.try_receive() {
            self.engine.apply(command);
        }

        let frame = self.engine.render();
        self.output.write(frame);

        FrameResult {
            pacing: self.engine.pacing(),
        }
    }

    pub fn engine(&self) -> &SignEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut SignEngine {
        &mut self.engine
    }
}

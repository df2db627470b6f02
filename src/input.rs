//! Debounced button arbitration.
//!
//! Button edges are noisy; a physical press can fire several interrupts.
//! Each edge latches its button bit and (re)arms a debounce timer in the
//! platform layer. When the window expires with no further edges, the
//! latch is resolved to at most one action, pattern over speed over
//! brightness, and cleared whole. Coalescing to a single action per
//! window is deliberate: it suppresses both bounce and ghost presses of
//! a second button inside the same window.

use core::cell::Cell;

use critical_section::Mutex;

use crate::command::Command;

/// The three physical buttons, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Pattern,
    Speed,
    Brightness,
}

impl Button {
    const fn bit(self) -> u8 {
        match self {
            Button::Pattern => 1 << 0,
            Button::Speed => 1 << 1,
            Button::Brightness => 1 << 2,
        }
    }
}

/// Latch of buttons seen inside the open debounce window.
///
/// `press` is called from edge interrupts, `resolve` from the debounce
/// timer interrupt; the single byte of state sits behind a critical
/// section so the two never tear.
pub struct InputArbiter {
    latch: Mutex<Cell<u8>>,
}

impl InputArbiter {
    pub const fn new() -> Self {
        Self {
            latch: Mutex::new(Cell::new(0)),
        }
    }

    /// Record a button edge.
    ///
    /// The caller must (re)start its debounce timer after every edge so
    /// the window only closes once the input has settled.
    pub fn press(&self, button: Button) {
        critical_section::with(|cs| {
            let latch = self.latch.borrow(cs);
            latch.set(latch.get() | button.bit());
        });
    }

    /// Close the debounce window.
    ///
    /// Returns the action for the highest-priority latched button, if
    /// any, and clears the entire latch; lower-priority presses in the
    /// same window are dropped.
    pub fn resolve(&self) -> Option<Command> {
        let bits = critical_section::with(|cs| self.latch.borrow(cs).replace(0));

        if bits & Button::Pattern.bit() != 0 {
            Some(Command::NextPattern)
        } else if bits & Button::Speed.bit() != 0 {
            Some(Command::CycleSpeed)
        } else if bits & Button::Brightness.bit() != 0 {
            Some(Command::CycleBrightness)
        } else {
            None
        }
    }
}

impl Default for InputArbiter {
    fn default() -> Self {
        Self::new()
    }
}

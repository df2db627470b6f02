//! Serial command protocol.
//!
//! A minimal point-to-point byte protocol with no framing beyond opcode
//! prefixes: every command frame is an opcode byte plus one more byte,
//! except the palette command which carries three extra color bytes. The
//! link does not resynchronize; a dropped byte corrupts decoding until
//! the peer resets, which is accepted for this reliable short link.

use crate::color::Rgb;
use crate::geometry::Zone;

/// Acknowledgment byte emitted before the palette payload is read, to
/// pace the sender.
pub const ACK: u8 = 1;

const OP_CONTROL: u8 = 0x4A;
const OP_SET_COLOR: u8 = 0xA4;
const OP_RACE_WIDTH: u8 = 0xA5;
const OP_SPARKLE_COUNT: u8 = 0xA6;

const CONTROL_NEXT_PATTERN: u8 = 0x01;
const CONTROL_CYCLE_SPEED: u8 = 0x02;
const CONTROL_CYCLE_BRIGHTNESS: u8 = 0x03;
const CONTROL_TOGGLE_AUTO_ADVANCE: u8 = 0x04;

/// Blocking byte-level serial transport.
///
/// Implemented by the platform layer over its UART. No retry or flow
/// control beyond [`ACK`].
pub trait SerialLink {
    /// Receive one byte, blocking until it arrives.
    fn read_byte(&mut self) -> u8;
    /// Send one byte, blocking until it is accepted.
    fn write_byte(&mut self, byte: u8);
}

/// A decoded state mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Advance to the next pattern.
    NextPattern,
    /// Halve the active pattern's delay, wrapping to slowest at the floor.
    CycleSpeed,
    /// Decrement brightness, wrapping to maximum at the floor.
    CycleBrightness,
    /// Enable/disable automatic pattern advancement.
    ToggleAutoAdvance,
    /// Replace a zone's unit color.
    SetZoneColor { zone: Zone, color: Rgb },
    /// Set the race window thickness (clamped by the engine).
    SetRaceWidth(u8),
    /// Set the number of extra sparkle pixels per refill.
    SetSparkleCount(u8),
}

/// Wire zone ids for [`Command::SetZoneColor`].
fn zone_from_wire(id: u8) -> Option<Zone> {
    match id {
        1 => Some(Zone::Violet),
        2 => Some(Zone::Cyan),
        3 => Some(Zone::Yellow),
        4 => Some(Zone::Beige),
        _ => None,
    }
}

/// Read one command frame from the link.
///
/// Consumes exactly two bytes, plus the three color bytes of a palette
/// frame. Unrecognized opcodes and control codes are consumed and
/// silently dropped (`None`); decoding resumes at the next byte.
pub fn read_command<L: SerialLink>(link: &mut L) -> Option<Command> {
    let opcode = link.read_byte();
    let arg = link.read_byte();

    match opcode {
        OP_CONTROL => match arg {
            CONTROL_NEXT_PATTERN => Some(Command::NextPattern),
            CONTROL_CYCLE_SPEED => Some(Command::CycleSpeed),
            CONTROL_CYCLE_BRIGHTNESS => Some(Command::CycleBrightness),
            CONTROL_TOGGLE_AUTO_ADVANCE => Some(Command::ToggleAutoAdvance),
            _ => None,
        },
        OP_SET_COLOR => {
            // Ack first so the sender releases the payload bytes.
            link.write_byte(ACK);
            let r = link.read_byte();
            let g = link.read_byte();
            let b = link.read_byte();
            let zone = zone_from_wire(arg)?;
            Some(Command::SetZoneColor {
                zone,
                color: Rgb { r, g, b },
            })
        }
        OP_RACE_WIDTH => Some(Command::SetRaceWidth(arg)),
        OP_SPARKLE_COUNT => Some(Command::SetSparkleCount(arg)),
        _ => None,
    }
}

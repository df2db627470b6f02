//! Bounded interrupt-to-loop command queue.
//!
//! Interrupt handlers enqueue decoded [`Command`] values and the
//! scheduler loop drains them between frames. Storage is a fixed-size
//! `heapless::Deque` behind a `critical-section` mutex, so both sides
//! may touch it without locks and nothing allocates after init.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::command::Command;

/// Error returned when trying to send to a full queue. Carries the
/// rejected command so the caller may retry or drop it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError(pub Command);

/// Error returned when trying to receive from an empty queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// Bounded queue carrying commands from interrupt context into the
/// scheduler loop.
pub struct CommandChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<Command, SIZE>>>,
}

impl<const SIZE: usize> CommandChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this channel.
    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { channel: self }
    }

    /// Get a receiver handle for this channel.
    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { channel: self }
    }

    /// Try to enqueue a command, failing if the queue is full.
    pub fn try_send(&self, command: Command) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(TrySendError)
        })
    }

    /// Try to dequeue the oldest command, failing if the queue is empty.
    pub fn try_receive(&self) -> Result<Command, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }
}

impl<const SIZE: usize> Default for CommandChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloneable sender handle for a [`CommandChannel`], held by the
/// interrupt side (serial decoder, input arbiter glue).
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    pub fn try_send(&self, command: Command) -> Result<(), TrySendError> {
        self.channel.try_send(command)
    }
}

/// Cloneable receiver handle for a [`CommandChannel`], held by the
/// scheduler loop.
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Result<Command, TryReceiveError> {
        self.channel.try_receive()
    }
}

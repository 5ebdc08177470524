//! The typed command stream.

use crate::Category;

/// What a [`Command`] does at replay time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Bind the arena's GPU vertex/index buffers.
    SetBuffers,
    /// Commit the batch named by the command index and make it current.
    UpdateBuffers,
    /// Issue one GPU draw; the index names an entry in the draw buffer.
    Draw,
    /// Apply a state value; the index names an entry in the category's
    /// committed-value buffer.
    State(Category),
}

/// One entry of the replay-ready command stream.
///
/// Commands never carry values, only an index into the buffer owned by
/// their kind, so the stream itself stays small and trivially copyable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub kind: CommandKind,
    pub index: u32,
}

impl Command {
    pub const fn new(kind: CommandKind, index: u32) -> Self {
        Self { kind, index }
    }
}

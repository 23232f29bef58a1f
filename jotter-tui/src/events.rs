//! Event types for the TUI event loop.
//!
//! Fetch results carry the key they were issued for; the state layer
//! compares it against the current key and ignores superseded responses
//! for display (they still land in the cache). Errors cross the channel
//! as rendered strings so events stay `Clone`.

use crossterm::event::KeyEvent;
use jotter_core::{ListKey, Note, NoteId, NotePage};

#[derive(Debug, Clone)]
pub enum TuiEvent {
    Input(KeyEvent),
    Tick,
    Resize { width: u16, height: u16 },
    NotesLoaded {
        key: ListKey,
        outcome: Result<NotePage, String>,
    },
    NoteLoaded {
        id: NoteId,
        outcome: Result<Note, String>,
    },
    NoteCreated {
        outcome: Result<Note, String>,
    },
}

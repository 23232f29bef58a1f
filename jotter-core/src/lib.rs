//! JOTTER Core - Entity Types
//!
//! Pure data structures plus the small pure-logic pieces every client
//! surface relies on: the note model, the filter state that produces
//! fetch keys, and draft validation. No I/O lives here.

pub mod error;
pub mod filter;
pub mod note;
pub mod validation;

pub use error::ValidationError;
pub use filter::{parse_slug, FilterState, ListKey};
pub use note::{Note, NoteDraft, NoteId, NotePage, Tag};
pub use validation::{validate_draft, CONTENT_MAX_CHARS, TITLE_MAX_CHARS, TITLE_MIN_CHARS};

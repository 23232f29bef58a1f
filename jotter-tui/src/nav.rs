//! Navigation between the two client surfaces.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    /// The filtered, searchable, paginated list plus creation modal.
    Board,
    /// A single note by id.
    Detail,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Board => "Notes",
            View::Detail => "Note",
        }
    }
}

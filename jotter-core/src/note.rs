//! Note entity types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Server-assigned note identifier.
pub type NoteId = i64;

/// Fixed category attached to every note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Tag {
    Work,
    Personal,
    Meeting,
    Shopping,
    #[default]
    Todo,
}

impl Tag {
    /// Every tag, in display order.
    pub const ALL: [Tag; 5] = [
        Tag::Work,
        Tag::Personal,
        Tag::Meeting,
        Tag::Shopping,
        Tag::Todo,
    ];
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Tag::Work => "Work",
            Tag::Personal => "Personal",
            Tag::Meeting => "Meeting",
            Tag::Shopping => "Shopping",
            Tag::Todo => "Todo",
        };
        write!(f, "{}", value)
    }
}

impl FromStr for Tag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "work" => Ok(Tag::Work),
            "personal" => Ok(Tag::Personal),
            "meeting" => Ok(Tag::Meeting),
            "shopping" => Ok(Tag::Shopping),
            "todo" => Ok(Tag::Todo),
            _ => Err(format!("Invalid tag: {}", s)),
        }
    }
}

/// A note as returned by the service.
///
/// Timestamps are opaque strings; the client displays them verbatim and
/// never parses them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub tag: Tag,
    pub created_at: String,
    pub updated_at: String,
}

/// Payload for creating a note. Content is omitted from the wire when
/// empty, matching the service's optional field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NoteDraft {
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,
    pub tag: Tag,
}

/// One page of list results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotePage {
    pub notes: Vec<Note>,
    pub total_pages: u32,
}

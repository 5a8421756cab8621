//! Node identifier conventions for collaboration graphs.
//!
//! A node identifier is the raw record line: a one-character `<` prefix, a
//! kind tag, a closing `>`, then the display name: `<a>Bacon, Kevin (I)`,
//! `<t>Wild Things (1998)`. The tag byte alone decides the kind: `a` marks
//! a person, anything else an event.

use serde::{Deserialize, Serialize};

/// Byte offset of the kind tag within an identifier.
const TAG_OFFSET: usize = 1;

/// Tag byte marking a person identifier.
const PERSON_TAG: u8 = b'a';

/// Length of the `<x>` kind marker preceding the display name.
const MARKER_LEN: usize = 3;

/// The two kinds of node in a collaboration graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// An individual (e.g. an actor), tagged `a`.
    Person,
    /// A shared context connecting persons (e.g. a movie).
    Event,
}

impl NodeKind {
    /// Read the kind tag of an identifier.
    ///
    /// Returns `None` when the identifier is too short to carry a tag.
    #[must_use]
    pub fn of(id: &str) -> Option<Self> {
        let tag = id.as_bytes().get(TAG_OFFSET)?;
        if *tag == PERSON_TAG {
            Some(Self::Person)
        } else {
            Some(Self::Event)
        }
    }

    /// Lowercase label used in rendered output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Event => "event",
        }
    }
}

/// Strip the kind marker from an identifier, yielding the display name.
///
/// Identifiers shorter than the marker are returned unchanged.
#[must_use]
pub fn display_name(id: &str) -> &str {
    id.get(MARKER_LEN..).unwrap_or(id)
}

/// Build a person identifier from its name parts: `<a>Lastname, Firstname`.
#[must_use]
pub fn person_id(last: &str, first: &str) -> String {
    format!("<a>{last}, {first}")
}

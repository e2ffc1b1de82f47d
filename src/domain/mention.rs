//! Unlinked mention of a known note.

use serde::Serialize;

/// An unlinked plain-text occurrence of a note's name or alias.
///
/// Transient: mentions only exist to drive the selection step, they are
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mention {
    /// The alias text that matched in the document body.
    pub alias: String,
    /// The note that owns the alias.
    pub note: String,
    /// Byte offset of the first occurrence within the document body
    /// (frontmatter excluded).
    pub offset: usize,
}

//! Mention scanning and mention-to-link conversion.
//!
//! A mention is a case-insensitive whole-word occurrence of a known note's
//! name or alias that is not already part of a wiki-style link. Whether an
//! occurrence is "already linked" is decided by looking at the immediately
//! adjacent characters only (`[[` before, `]]` after), not by tracking full
//! link boundaries. This adjacency check is a deliberate heuristic carried
//! over from the matching rules this crate implements: it can miss
//! occurrences that merely sit near brackets (accepted false negatives),
//! but it never proposes a mention that is truly the inner text of a link's
//! own bracket pair. Do not "fix" it into a structural link parser.

use regex::Regex;
use thiserror::Error;

use super::document::split_frontmatter;
use super::extract::linked_names;
use crate::catalog::NoteMeta;
use crate::domain::Mention;

/// Error returned when a chosen alias resolves to no catalog note.
#[derive(Debug, Clone, Error)]
#[error("no matching note found for \"{alias}\"")]
pub struct UnknownAliasError {
    pub alias: String,
}

/// Result of converting a mention into a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedMention {
    /// The full document with the first occurrence rewritten.
    pub text: String,
    /// The serialized link that was inserted, for the success notice.
    pub link: String,
}

/// Scans a document for unlinked mentions of catalog notes.
///
/// Frontmatter is split off first and never scanned. For every catalog note
/// other than `current_name`, each of its candidate aliases (name plus
/// declared aliases) is searched for in the body. An alias is skipped when
/// it, or its owning note's name, already appears linked anywhere in the
/// body; a note that is linked once therefore suppresses all of its
/// aliases. Only the first qualifying occurrence per alias is recorded, and
/// the first catalog note to claim an alias string keeps it.
///
/// Returns mentions sorted ascending by body offset.
pub fn scan_mentions(text: &str, catalog: &[NoteMeta], current_name: &str) -> Vec<Mention> {
    let body = split_frontmatter(text).body;
    let excluded = linked_names(body);

    let mut claimed: Vec<&str> = Vec::new();
    let mut mentions = Vec::new();

    for note in catalog {
        if note.name() == current_name {
            continue;
        }

        let note_key = note.name().to_lowercase();
        for alias in note.candidates() {
            if alias.is_empty() {
                continue;
            }
            if excluded.contains(&alias.to_lowercase()) || excluded.contains(&note_key) {
                continue;
            }
            if claimed.contains(&alias) {
                continue;
            }

            if let Some((offset, _)) = find_unlinked_word(body, alias) {
                claimed.push(alias);
                mentions.push(Mention {
                    alias: alias.to_string(),
                    note: note.name().to_string(),
                    offset,
                });
            }
        }
    }

    mentions.sort_by_key(|m| m.offset);
    mentions
}

/// Converts the first unlinked occurrence of `alias` into a wiki-style link.
///
/// The alias is re-resolved against the catalog in order: per note, an
/// exact case-insensitive match on the name wins, else a match on any
/// declared alias; the first note to match is the target. The inserted link
/// is `[[target]]` when the note name equals the alias exactly, else
/// `[[target|alias]]`. Frontmatter is spliced back unchanged. When the body
/// holds no qualifying occurrence the text comes back unmodified.
pub fn link_mention(
    text: &str,
    alias: &str,
    catalog: &[NoteMeta],
) -> Result<LinkedMention, UnknownAliasError> {
    let target = resolve_alias(alias, catalog).ok_or_else(|| UnknownAliasError {
        alias: alias.to_string(),
    })?;

    let link = if target == alias {
        format!("[[{}]]", target)
    } else {
        format!("[[{}|{}]]", target, alias)
    };

    let zones = split_frontmatter(text);
    let body = match find_unlinked_word(zones.body, alias) {
        Some((start, end)) => {
            let mut rewritten = String::with_capacity(zones.body.len() + link.len());
            rewritten.push_str(&zones.body[..start]);
            rewritten.push_str(&link);
            rewritten.push_str(&zones.body[end..]);
            rewritten
        }
        None => zones.body.to_string(),
    };

    Ok(LinkedMention {
        text: zones.splice(&body),
        link,
    })
}

/// Resolves an alias to the name of the catalog note that owns it.
fn resolve_alias<'a>(alias: &str, catalog: &'a [NoteMeta]) -> Option<&'a str> {
    let wanted = alias.to_lowercase();
    for note in catalog {
        if note.name().to_lowercase() == wanted {
            return Some(note.name());
        }
        if note.aliases().iter().any(|a| a.to_lowercase() == wanted) {
            return Some(note.name());
        }
    }
    None
}

/// Finds the first case-insensitive whole-word occurrence of `word` in
/// `body` whose adjacent characters are not enclosing brackets.
///
/// Returns the byte range of the occurrence.
fn find_unlinked_word(body: &str, word: &str) -> Option<(usize, usize)> {
    let pattern = format!(r"(?i)\b{}\b", regex::escape(word));
    let re = Regex::new(&pattern).unwrap();

    for m in re.find_iter(body) {
        if body[..m.start()].ends_with("[[") {
            continue;
        }
        if body[m.end()..].starts_with("]]") {
            continue;
        }
        return Some((m.start(), m.end()));
    }
    None
}

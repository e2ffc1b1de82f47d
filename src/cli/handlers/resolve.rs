//! Note argument resolution against the vault catalog.

use std::path::{Path, PathBuf};

use crate::catalog::{Catalog, NoteMeta};

/// A note argument resolved to an actual file.
#[derive(Debug, Clone)]
pub struct ResolvedNote {
    name: String,
    path: PathBuf,
}

impl ResolvedNote {
    fn from_meta(meta: &NoteMeta, vault_dir: &Path) -> Self {
        Self {
            name: meta.name().to_string(),
            path: vault_dir.join(meta.path()),
        }
    }

    /// The note's base name, used for self-exclusion in mention scans.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The note's file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The note's file name, used in status notices.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.name.clone())
    }
}

/// Result of resolving a note identifier.
#[derive(Debug)]
pub enum ResolveResult {
    /// Exactly one note matched.
    Unique(ResolvedNote),
    /// Multiple notes matched (ambiguous).
    Ambiguous(Vec<ResolvedNote>),
    /// No notes matched.
    NotFound,
}

/// Prints detailed information about ambiguous notes to help distinguish them.
pub(crate) fn print_ambiguous_notes(identifier: &str, notes: &[ResolvedNote]) {
    eprintln!("Ambiguous: '{}' matches {} notes:", identifier, notes.len());
    for note in notes {
        eprintln!("  {} - {}", note.name(), note.path().display());
    }
    eprintln!();
    eprintln!("Use a path to specify which note you mean.");
}

/// Resolves a note identifier to a unique note file.
///
/// Resolution order:
/// 1. A path to an existing file, as given or vault-relative
/// 2. Case-insensitive match on vault note base names (a trailing `.md`
///    on the argument is ignored)
///
/// Returns `Unique` if exactly one note matches, `Ambiguous` if multiple
/// notes share the name, or `NotFound` if no match.
pub fn resolve_note(catalog: &Catalog, vault_dir: &Path, identifier: &str) -> ResolveResult {
    let identifier = identifier.trim();

    // 1. Try as a literal path first; paths are the most precise.
    for candidate in [PathBuf::from(identifier), vault_dir.join(identifier)] {
        if candidate.is_file() {
            let name = candidate
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| identifier.to_string());
            return ResolveResult::Unique(ResolvedNote {
                name,
                path: candidate,
            });
        }
    }

    // 2. Match against catalog note names.
    let wanted = identifier.strip_suffix(".md").unwrap_or(identifier);
    let matches: Vec<ResolvedNote> = catalog
        .find_by_name(wanted)
        .into_iter()
        .map(|meta| ResolvedNote::from_meta(meta, vault_dir))
        .collect();

    match matches.len() {
        0 => ResolveResult::NotFound,
        1 => ResolveResult::Unique(matches.into_iter().next().unwrap()),
        _ => ResolveResult::Ambiguous(matches),
    }
}

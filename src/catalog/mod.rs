//! The note catalog: every markdown note in the vault with its aliases.

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::infra::{FsError, scan_vault};

/// A single catalog entry: a note's base name, its declared aliases, and
/// its vault-relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteMeta {
    name: String,
    aliases: Vec<String>,
    path: PathBuf,
}

impl NoteMeta {
    pub fn new(name: impl Into<String>, aliases: Vec<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            aliases,
            path: path.into(),
        }
    }

    /// The note's base name (file name without the `.md` extension).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Aliases declared in the note's frontmatter `aliases` list.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// The note's path relative to the vault root.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The strings this note can be mentioned by: its name followed by its
    /// declared aliases, with exact duplicates dropped.
    pub fn candidates(&self) -> Vec<&str> {
        let mut candidates = vec![self.name.as_str()];
        for alias in &self.aliases {
            if !candidates.contains(&alias.as_str()) {
                candidates.push(alias);
            }
        }
        candidates
    }
}

/// All known notes in a vault, sorted by path for deterministic scans.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    notes: Vec<NoteMeta>,
}

impl Catalog {
    /// Builds the catalog by scanning `vault_dir` for `.md` files.
    ///
    /// Hidden files and directories are skipped. Aliases come from a
    /// lenient read of each note's frontmatter: an unreadable file, a
    /// missing frontmatter block, or unparseable YAML yields an entry with
    /// no aliases rather than an error.
    ///
    /// # Errors
    ///
    /// Returns `FsError::NotFound` if the directory doesn't exist.
    /// Returns `FsError::NotADirectory` if the path is not a directory.
    pub fn load(vault_dir: &Path) -> Result<Self, FsError> {
        let mut notes: Vec<NoteMeta> = Vec::new();

        for rel_path in scan_vault(vault_dir)? {
            let Some(name) = rel_path
                .file_stem()
                .and_then(|s| s.to_str())
                .map(str::to_string)
            else {
                continue;
            };
            let aliases = std::fs::read_to_string(vault_dir.join(&rel_path))
                .map(|content| frontmatter_aliases(&content))
                .unwrap_or_default();
            notes.push(NoteMeta::new(name, aliases, rel_path));
        }

        notes.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(Self { notes })
    }

    pub fn notes(&self) -> &[NoteMeta] {
        &self.notes
    }

    pub fn iter(&self) -> impl Iterator<Item = &NoteMeta> {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Finds the entry for an exact vault-relative path.
    pub fn find_by_path(&self, rel_path: &Path) -> Option<&NoteMeta> {
        self.notes.iter().find(|n| n.path == rel_path)
    }

    /// Finds entries whose name matches `name` case-insensitively.
    pub fn find_by_name(&self, name: &str) -> Vec<&NoteMeta> {
        let wanted = name.to_lowercase();
        self.notes
            .iter()
            .filter(|n| n.name.to_lowercase() == wanted)
            .collect()
    }
}

/// Reads the `aliases` list out of a frontmatter block, leniently.
///
/// Only a YAML sequence under `aliases` is consumed, and only its string
/// entries; anything else (no block, bad YAML, scalar aliases) produces an
/// empty list. This is the one place the crate interprets frontmatter
/// content at all.
fn frontmatter_aliases(content: &str) -> Vec<String> {
    let re = Regex::new(r"(?s)^---\s*\n(.*?)\n---").unwrap();
    let Some(caps) = re.captures(content) else {
        return Vec::new();
    };

    let Ok(value) = serde_yaml::from_str::<serde_yaml::Value>(&caps[1]) else {
        return Vec::new();
    };

    match value.get("aliases") {
        Some(serde_yaml::Value::Sequence(entries)) => entries
            .iter()
            .filter_map(|v| v.as_str().map(ToString::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

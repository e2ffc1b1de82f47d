//! `dedupe` command handler: collapse duplicate links to plain text.

use anyhow::{Context, Result};
use std::path::Path;

use super::{load_catalog, resolve_or_bail};
use super::resolve::ResolvedNote;
use crate::cli::DedupeArgs;
use crate::infra::{read_document, write_document};
use crate::linker::collapse_duplicates;

pub fn handle_dedupe(args: &DedupeArgs, vault_dir: &Path, verbose: bool) -> Result<()> {
    let catalog = load_catalog(vault_dir, verbose)?;
    let note = resolve_or_bail(&catalog, vault_dir, &args.note)?;
    collapse_file(&note)
}

/// Collapses duplicate links in a resolved note, printing the notice.
///
/// Shared with the `clean` command.
pub(crate) fn collapse_file(note: &ResolvedNote) -> Result<()> {
    let text = read_document(note.path())
        .with_context(|| format!("failed to read note: {}", note.path().display()))?;

    match collapse_duplicates(&text) {
        Some(updated) => {
            write_document(note.path(), &updated)
                .with_context(|| format!("failed to write note: {}", note.path().display()))?;
            println!("Duplicate links removed in: {}", note.file_name());
        }
        None => {
            println!("No duplicate links found.");
        }
    }
    Ok(())
}

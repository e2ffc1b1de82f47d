//! `update` command handler: refresh the "links:" summary line.

use anyhow::{Context, Result};
use std::path::Path;

use super::{load_catalog, resolve_or_bail};
use super::resolve::ResolvedNote;
use crate::cli::UpdateArgs;
use crate::infra::{read_document, write_document};
use crate::linker::{LinksRefresh, refresh_links_line};

pub fn handle_update(args: &UpdateArgs, vault_dir: &Path, verbose: bool) -> Result<()> {
    let catalog = load_catalog(vault_dir, verbose)?;
    let note = resolve_or_bail(&catalog, vault_dir, &args.note)?;
    refresh_file(&note)
}

/// Refreshes the links line of a resolved note, printing the notice.
///
/// Shared with the `clean` command.
pub(crate) fn refresh_file(note: &ResolvedNote) -> Result<()> {
    let text = read_document(note.path())
        .with_context(|| format!("failed to read note: {}", note.path().display()))?;

    match refresh_links_line(&text) {
        LinksRefresh::NoLinks => {
            println!("No links found in the note.");
        }
        LinksRefresh::Updated { text, .. } => {
            write_document(note.path(), &text)
                .with_context(|| format!("failed to write note: {}", note.path().display()))?;
            println!("Links updated in: {}", note.file_name());
        }
    }
    Ok(())
}

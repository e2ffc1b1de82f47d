//! Command handlers for the CLI.

mod clean;
mod completions;
mod dedupe;
mod list;
mod mentions;
mod resolve;
mod update;

use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::catalog::Catalog;

// Re-export public items
pub use clean::handle_clean;
pub use completions::handle_completions;
pub use dedupe::handle_dedupe;
pub use list::handle_list;
pub use mentions::handle_mentions;
pub use resolve::{ResolveResult, ResolvedNote, resolve_note};
pub use update::handle_update;

// ===========================================
// Shared Utilities
// ===========================================

/// Loads the vault catalog, reporting its size when verbose.
pub(crate) fn load_catalog(vault_dir: &Path, verbose: bool) -> Result<Catalog> {
    let catalog = Catalog::load(vault_dir)
        .with_context(|| format!("failed to scan vault: {}", vault_dir.display()))?;
    if verbose {
        eprintln!(
            "catalog: {} notes in {}",
            catalog.len(),
            vault_dir.display()
        );
    }
    Ok(catalog)
}

/// Resolves a note argument or fails with a user-facing error.
///
/// An unresolvable argument is the no-active-document condition: the
/// command aborts here, before any read.
pub(crate) fn resolve_or_bail(
    catalog: &Catalog,
    vault_dir: &Path,
    identifier: &str,
) -> Result<ResolvedNote> {
    match resolve_note(catalog, vault_dir, identifier) {
        ResolveResult::Unique(note) => Ok(note),
        ResolveResult::Ambiguous(notes) => {
            resolve::print_ambiguous_notes(identifier, &notes);
            bail!("ambiguous note identifier");
        }
        ResolveResult::NotFound => {
            bail!("note not found: '{}'", identifier);
        }
    }
}

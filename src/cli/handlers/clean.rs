//! `clean` command handler: update the links line, then dedupe.

use anyhow::Result;
use std::path::Path;

use super::dedupe::collapse_file;
use super::update::refresh_file;
use super::{load_catalog, resolve_or_bail};
use crate::cli::CleanArgs;

/// Runs `update` and `dedupe` in sequence against the same note, each with
/// its own read and write, then prints the combined notice.
pub fn handle_clean(args: &CleanArgs, vault_dir: &Path, verbose: bool) -> Result<()> {
    let catalog = load_catalog(vault_dir, verbose)?;
    let note = resolve_or_bail(&catalog, vault_dir, &args.note)?;

    refresh_file(&note)?;
    collapse_file(&note)?;

    println!("Links updated and cleaned in: {}", note.file_name());
    Ok(())
}

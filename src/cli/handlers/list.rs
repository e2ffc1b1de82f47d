//! `ls` command handler: list catalog notes with their aliases.

use anyhow::Result;
use std::path::Path;

use super::load_catalog;
use crate::cli::ListArgs;
use crate::cli::output::{NoteListing, Output, OutputFormat};

pub fn handle_list(args: &ListArgs, vault_dir: &Path, verbose: bool) -> Result<()> {
    let catalog = load_catalog(vault_dir, verbose)?;

    match args.format {
        OutputFormat::Human => {
            if catalog.is_empty() {
                println!("No notes found.");
            } else {
                for note in catalog.iter() {
                    if note.aliases().is_empty() {
                        println!("{}", note.name());
                    } else {
                        println!("{} ({})", note.name(), note.aliases().join(", "));
                    }
                }
                println!();
                println!("{} note(s)", catalog.len());
            }
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = catalog
                .iter()
                .map(|n| NoteListing {
                    name: n.name().to_string(),
                    aliases: n.aliases().to_vec(),
                    path: n.path().to_string_lossy().to_string(),
                })
                .collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Paths => {
            for note in catalog.iter() {
                println!("{}", vault_dir.join(note.path()).display());
            }
        }
    }
    Ok(())
}

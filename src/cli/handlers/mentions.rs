//! `mentions` command handler: scan, select, and link unlinked mentions.

use anyhow::{Context, Result, bail};
use std::io::{self, BufRead, Write as IoWrite};
use std::path::Path;

use super::{load_catalog, resolve_or_bail};
use crate::cli::MentionsArgs;
use crate::cli::output::{MentionListing, Output, OutputFormat};
use crate::domain::Mention;
use crate::infra::{read_document, write_document};
use crate::linker::{link_mention, scan_mentions};

/// Trait for choosing one mention out of the scan results (allows mocking
/// in tests). Returning `None` means the picker was dismissed: no write,
/// no notice.
pub(crate) trait MentionPicker {
    fn pick(&self, mentions: &[Mention]) -> Result<Option<String>>;
}

/// Interactive picker: numbered list on stdout, one line read from stdin.
/// An index or an alias (case-insensitive) selects; EOF, a blank line, or
/// unrecognized input dismisses.
struct ConsolePicker;

impl MentionPicker for ConsolePicker {
    fn pick(&self, mentions: &[Mention]) -> Result<Option<String>> {
        for (i, mention) in mentions.iter().enumerate() {
            println!("{:>3}. {} -> {}", i + 1, mention.alias, mention.note);
        }
        print!("Link which mention? ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let choice = line.trim();
        if choice.is_empty() {
            return Ok(None);
        }

        if let Ok(n) = choice.parse::<usize>() {
            if (1..=mentions.len()).contains(&n) {
                return Ok(Some(mentions[n - 1].alias.clone()));
            }
        }

        let wanted = choice.to_lowercase();
        Ok(mentions
            .iter()
            .find(|m| m.alias.to_lowercase() == wanted)
            .map(|m| m.alias.clone()))
    }
}

/// Non-interactive picker backing `--pick ALIAS`. The alias must match one
/// of the proposed mentions.
pub(crate) struct PresetPicker {
    pub alias: String,
}

impl MentionPicker for PresetPicker {
    fn pick(&self, mentions: &[Mention]) -> Result<Option<String>> {
        let wanted = self.alias.to_lowercase();
        match mentions.iter().find(|m| m.alias.to_lowercase() == wanted) {
            Some(mention) => Ok(Some(mention.alias.clone())),
            None => bail!("'{}' is not a proposed mention", self.alias),
        }
    }
}

pub fn handle_mentions(args: &MentionsArgs, vault_dir: &Path, verbose: bool) -> Result<()> {
    match &args.pick {
        Some(alias) => {
            let picker = PresetPicker {
                alias: alias.clone(),
            };
            handle_mentions_impl(args, vault_dir, verbose, &picker)
        }
        None => handle_mentions_impl(args, vault_dir, verbose, &ConsolePicker),
    }
}

/// Internal implementation that accepts a generic mention picker.
pub(crate) fn handle_mentions_impl<P: MentionPicker>(
    args: &MentionsArgs,
    vault_dir: &Path,
    verbose: bool,
    picker: &P,
) -> Result<()> {
    let catalog = load_catalog(vault_dir, verbose)?;
    let note = resolve_or_bail(&catalog, vault_dir, &args.note)?;

    let text = read_document(note.path())
        .with_context(|| format!("failed to read note: {}", note.path().display()))?;
    let mentions = scan_mentions(&text, catalog.notes(), note.name());

    if mentions.is_empty() {
        println!("No unlinked mentions found.");
        return Ok(());
    }

    // Non-human formats list the scan result and exit without prompting
    // or writing, unless --pick selected a mention explicitly.
    if args.pick.is_none() {
        match args.format {
            OutputFormat::Human => {}
            OutputFormat::Json => {
                let listings: Vec<MentionListing> = mentions
                    .iter()
                    .map(|m| MentionListing {
                        alias: m.alias.clone(),
                        note: m.note.clone(),
                        offset: m.offset,
                    })
                    .collect();
                let output = Output::new(listings);
                println!("{}", serde_json::to_string_pretty(&output)?);
                return Ok(());
            }
            OutputFormat::Paths => {
                for mention in &mentions {
                    if let Some(meta) = catalog.find_by_name(&mention.note).into_iter().next() {
                        println!("{}", vault_dir.join(meta.path()).display());
                    }
                }
                return Ok(());
            }
        }
    }

    let Some(alias) = picker.pick(&mentions)? else {
        return Ok(());
    };

    match link_mention(&text, &alias, catalog.notes()) {
        Ok(linked) => {
            write_document(note.path(), &linked.text)
                .with_context(|| format!("failed to write note: {}", note.path().display()))?;
            println!("Linked mention: {}", linked.link);
        }
        Err(err) => {
            // Informational: the document stays untouched.
            println!("{}", err);
        }
    }
    Ok(())
}

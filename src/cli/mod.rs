//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// warren - wiki-link upkeep for markdown note vaults
#[derive(Parser, Debug)]
#[command(name = "warren", version, about, long_about = None)]
pub struct Cli {
    /// Vault directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Refresh the "links:" summary line of a note
    Update(UpdateArgs),

    /// Demote duplicate links in a note to plain text
    Dedupe(DedupeArgs),

    /// Update the "links:" line, then remove duplicates
    Clean(CleanArgs),

    /// Find unlinked mentions of other notes and link one
    Mentions(MentionsArgs),

    /// List catalog notes with their aliases
    #[command(name = "ls")]
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `update` command
#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Note name or path
    pub note: String,
}

/// Arguments for the `dedupe` command
#[derive(Parser, Debug)]
pub struct DedupeArgs {
    /// Note name or path
    pub note: String,
}

/// Arguments for the `clean` command
#[derive(Parser, Debug)]
pub struct CleanArgs {
    /// Note name or path
    pub note: String,
}

/// Arguments for the `mentions` command
#[derive(Parser, Debug)]
pub struct MentionsArgs {
    /// Note name or path
    pub note: String,

    /// Link this alias directly instead of prompting
    #[arg(short, long)]
    pub pick: Option<String>,

    /// Output format (non-human formats list mentions without linking)
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}

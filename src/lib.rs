//! warren - wiki-link upkeep for markdown note vaults

pub mod catalog;
pub mod cli;
pub mod domain;
pub mod infra;
pub mod linker;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_clean, handle_completions, handle_dedupe, handle_list, handle_mentions,
        handle_update,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let vault_dir = config.vault_dir(cli.dir.as_ref());
    let verbose = cli.verbose > 0;

    match &cli.command {
        Command::Update(args) => handle_update(args, &vault_dir, verbose),
        Command::Dedupe(args) => handle_dedupe(args, &vault_dir, verbose),
        Command::Clean(args) => handle_clean(args, &vault_dir, verbose),
        Command::Mentions(args) => handle_mentions(args, &vault_dir, verbose),
        Command::List(args) => handle_list(args, &vault_dir, verbose),
        Command::Completions(args) => handle_completions(args),
    }
}

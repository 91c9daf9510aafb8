// SPDX-License-Identifier: MIT OR Apache-2.0

//! wat - Terminal documentation browser
//!
//! Resolves abbreviated or misspelled commands against a documentation
//! index and renders tab-completion listings sized to the terminal.

mod cli;
mod query;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::{Cli, CliMatcher, Commands, OutputFormat};
use query::Session;
use tracing_subscriber::EnvFilter;
use wat::config::{Config, ConfigMatcher, ConfigOutputFormat};
use wat::format::FormatOptions;
use wat::resolve::ResolveOptions;

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = Config::load();
    let session = build_session(&cli, &config);

    match cli.command {
        Commands::Resolve {
            words,
            detail,
            install,
        } => {
            let options = ResolveOptions {
                detail: Config::merge_flag(detail, config.detail),
                install: Config::merge_flag(install, config.install),
            };
            query::resolve::run(&words, options, &session)?;
        }
        Commands::Complete {
            text,
            iteration,
            matcher,
        } => {
            let matcher = matcher.unwrap_or(match config.matcher() {
                Some(ConfigMatcher::Levenshtein) => CliMatcher::Levenshtein,
                _ => CliMatcher::Prefix,
            });
            query::complete::run(&text, iteration, matcher, &session)?;
        }
        Commands::Ls { words } => {
            query::ls::run(&words, &session)?;
        }
        Commands::List { words } => {
            query::list::run(&words, &session)?;
        }
        Commands::Describe { path } => {
            query::describe::run(&path, &session)?;
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "wat", &mut std::io::stdout());
        }
    }

    Ok(())
}

/// Diagnostics go to stderr, filtered by `WAT_LOG` (default: warn).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("WAT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn build_session(cli: &Cli, config: &Config) -> Session {
    let format = cli.format.unwrap_or(match config.output_format() {
        Some(ConfigOutputFormat::Json) => OutputFormat::Json,
        Some(ConfigOutputFormat::Text) | None => OutputFormat::Text,
    });

    let color = !cli.no_color
        && config
            .color
            .unwrap_or_else(|| console::Term::stdout().is_term());
    colored::control::set_override(color);

    let mut listing = FormatOptions::detect(color);
    if let Some(columns) = cli.width {
        listing.terminal.columns = columns;
    }
    if let Some(rows) = cli.height {
        listing.terminal.rows = rows;
    }

    Session {
        index_path: config.resolve_index_path(cli.index.as_deref()),
        format,
        compact: cli.compact,
        listing,
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! CLI argument parsing using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// wat - Terminal documentation browser
///
/// Resolves abbreviated or misspelled commands against a documentation
/// index and drives tab completion with column-formatted listings.
#[derive(Parser, Debug)]
#[command(name = "wat")]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "Quickstart:\n  wat resolve js array splice\n  wat complete \"js array sp\" -n 2\n  wat ls js array"
)]
pub struct Cli {
    /// Documentation index JSON (defaults to config, then <data dir>/wat/index.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub index: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Compact JSON output (no pretty formatting)
    #[arg(long, global = true)]
    pub compact: bool,

    /// Disable colored listings
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Terminal width used for listings (defaults to the detected width)
    #[arg(long, global = true, value_name = "COLS")]
    pub width: Option<usize>,

    /// Terminal height used for listings (defaults to the detected height)
    #[arg(long, global = true, value_name = "ROWS")]
    pub height: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Completion strategy for partially typed words
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliMatcher {
    /// Shell-style: unique prefix match or longest shared prefix
    Prefix,
    /// Unique closest entry by edit distance
    Levenshtein,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a command to its document path
    #[command(visible_aliases = ["r", "path"])]
    Resolve {
        /// Command words, e.g. `js array splice` or `js array.splice()`
        words: Vec<String>,

        /// Prefer the detailed document when one exists
        #[arg(short = 'd', long)]
        detail: bool,

        /// Prefer the install document when one exists
        #[arg(short = 'i', long)]
        install: bool,
    },

    /// Complete a partially typed command, as on a tab press
    #[command(visible_aliases = ["c"])]
    Complete {
        /// Current input buffer
        #[arg(allow_hyphen_values = true)]
        text: String,

        /// Consecutive tab presses on this buffer (1 = first press)
        #[arg(short = 'n', long, default_value = "1")]
        iteration: usize,

        /// Matcher used to extend the last word
        #[arg(short = 'm', long, value_enum)]
        matcher: Option<CliMatcher>,
    },

    /// Show the entries available after the typed words
    Ls {
        /// Command words; an unfinished last word filters by prefix
        words: Vec<String>,
    },

    /// List every document below the typed words
    List {
        /// Command words naming the level to list
        words: Vec<String>,
    },

    /// Turn a stored document path into its command
    Describe {
        /// Document path, e.g. `docs/js/array/splice.detail.md`
        path: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

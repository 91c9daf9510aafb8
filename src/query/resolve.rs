// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolve a typed command to a document path

use anyhow::Result;
use colored::Colorize;

use super::Session;
use crate::cli::OutputFormat;
use wat::errors::DocumentNotFoundError;
use wat::format::format_candidates;
use wat::index::descend;
use wat::output::print_json;
use wat::resolve::{resolve, ResolutionResult, ResolveOptions};

/// Run the resolve command
pub fn run(words: &[String], options: ResolveOptions, session: &Session) -> Result<()> {
    let index = session.load_index()?;
    let input = words.join(" ");
    let result = resolve(&input, &index, options);

    if session.format == OutputFormat::Json {
        print_json(&result.summary(), session.compact)?;
        return Ok(());
    }

    match &result {
        ResolutionResult::Resolved(resolution) => {
            println!("{}", resolution.path);
        }
        ResolutionResult::Ambiguous { commands, .. } => {
            let candidates = descend(commands, &index, |_, _| {});
            let label = if commands.is_empty() {
                "Available docs:".to_string()
            } else {
                format!("'{}' has several entries. Did you mean:", commands.join(" "))
            };
            println!("\n  {}\n", label.yellow());
            println!("{}\n", format_candidates(&candidates, &session.listing));
        }
        ResolutionResult::NotFound { commands } => {
            let command = if commands.is_empty() {
                input.trim().to_string()
            } else {
                commands.join(" ")
            };
            return Err(DocumentNotFoundError { command }.into());
        }
    }

    Ok(())
}

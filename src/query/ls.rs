// SPDX-License-Identifier: MIT OR Apache-2.0

//! Show the entries available at one index level

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use super::Session;
use crate::cli::OutputFormat;
use wat::format::format_candidates;
use wat::index::{descend, ClassTag};
use wat::output::print_json;
use wat::standardize::standardize;
use wat::tokenizer::tokenize;

#[derive(Debug, Serialize)]
struct LsEntry<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    class: Option<ClassTag>,
    descendable: bool,
    documented: bool,
}

#[derive(Debug, Serialize)]
struct LsPayload<'a> {
    commands: &'a [String],
    entries: Vec<LsEntry<'a>>,
}

/// Run the ls command
pub fn run(words: &[String], session: &Session) -> Result<()> {
    let index = session.load_index()?;
    let commands = standardize(&tokenize(&words.join(" ")), &index);
    let candidates = descend(&commands, &index, |_, _| {});

    match session.format {
        OutputFormat::Json => {
            let entries = candidates
                .iter()
                .map(|(name, node)| LsEntry {
                    name,
                    class: node.class,
                    descendable: node.has_children(),
                    documented: node.has_document(),
                })
                .collect();
            print_json(
                &LsPayload {
                    commands: &commands,
                    entries,
                },
                session.compact,
            )?;
        }
        OutputFormat::Text => {
            if candidates.is_empty() {
                eprintln!(
                    "{} No entries match '{}'",
                    "!".yellow(),
                    commands.join(" ")
                );
            } else {
                println!("\n{}\n", format_candidates(&candidates, &session.listing));
            }
        }
    }

    Ok(())
}

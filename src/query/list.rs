// SPDX-License-Identifier: MIT OR Apache-2.0

//! List every document below a command prefix

use anyhow::Result;

use super::Session;
use crate::cli::OutputFormat;
use wat::errors::DocumentNotFoundError;
use wat::index::walk_exact;
use wat::output::print_json;
use wat::standardize::standardize;
use wat::tokenizer::tokenize;

/// Run the list command
pub fn run(words: &[String], session: &Session) -> Result<()> {
    let index = session.load_index()?;
    let prefix = standardize(&tokenize(&words.join(" ")), &index);
    let Some(node) = walk_exact(&prefix, &index) else {
        return Err(DocumentNotFoundError {
            command: prefix.join(" "),
        }
        .into());
    };

    let mut documents: Vec<String> = Vec::new();
    if !prefix.is_empty() && node.has_document() {
        documents.push(prefix.join(" "));
    }
    for relative in node.documents() {
        let full: Vec<&str> = prefix
            .iter()
            .chain(relative.iter())
            .map(String::as_str)
            .collect();
        documents.push(full.join(" "));
    }

    match session.format {
        OutputFormat::Json => print_json(&documents, session.compact)?,
        OutputFormat::Text => {
            for document in &documents {
                println!("{document}");
            }
        }
    }

    Ok(())
}

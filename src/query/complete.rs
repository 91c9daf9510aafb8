// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tab completion command

use anyhow::Result;

use super::Session;
use crate::cli::{CliMatcher, OutputFormat};
use wat::complete::{complete, Completion, LevenshteinMatcher, Matcher, PrefixMatcher};
use wat::output::print_json;

/// Run the complete command
pub fn run(text: &str, iteration: usize, matcher: CliMatcher, session: &Session) -> Result<()> {
    let index = session.load_index()?;
    let levenshtein = LevenshteinMatcher::default();
    let matcher: &dyn Matcher = match matcher {
        CliMatcher::Prefix => &PrefixMatcher,
        CliMatcher::Levenshtein => &levenshtein,
    };
    let completion = complete(text, iteration.max(1), &index, matcher, &session.listing);

    match session.format {
        OutputFormat::Json => print_json(&completion, session.compact)?,
        OutputFormat::Text => match &completion {
            Completion::Line(line) => println!("{line}"),
            Completion::Listing(listing) => println!("\n{listing}\n"),
        },
    }

    Ok(())
}

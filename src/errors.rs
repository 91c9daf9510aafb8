// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types with helpful suggestions
//!
//! Provides user-friendly error messages with actionable suggestions.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to read or convert the documentation index file.
#[derive(Debug, Error)]
pub enum IndexLoadError {
    #[error("failed to read index at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("index is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("index root must be an object, found {found}")]
    RootNotObject { found: &'static str },
}

/// Error indicating the documentation index was not found
#[derive(Debug)]
pub struct IndexNotFoundError {
    pub index_path: String,
}

impl fmt::Display for IndexNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Index not found at '{}'\n\n\
             Suggestion: point wat at an index built by the indexer.\n\
             Example: wat --index ./docs/index.json resolve js array splice\n\
             Or set `index_path` in .watrc.toml",
            self.index_path
        )
    }
}

impl std::error::Error for IndexNotFoundError {}

/// Error indicating no document matched the typed command
#[derive(Debug)]
pub struct DocumentNotFoundError {
    pub command: String,
}

impl fmt::Display for DocumentNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "No documentation found for: '{}'\n\n\
             Suggestions:\n\
             - Check the spelling of each word\n\
             - List what is available at a level: wat ls {}",
            self.command,
            parent_command(&self.command)
        )
    }
}

impl std::error::Error for DocumentNotFoundError {}

fn parent_command(command: &str) -> &str {
    let trimmed = command.trim();
    match trimmed.rfind(char::is_whitespace) {
        Some(idx) => trimmed[..idx].trim_end(),
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_suggests_listing_parent_level() {
        let err = DocumentNotFoundError {
            command: "js array splcie".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("'js array splcie'"));
        assert!(message.contains("wat ls js array"));
    }

    #[test]
    fn parent_of_single_word_is_root() {
        assert_eq!(parent_command("js"), "");
        assert_eq!(parent_command("  js  array "), "js");
    }
}

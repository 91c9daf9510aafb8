// SPDX-License-Identifier: MIT OR Apache-2.0

//! Turns typed commands into document paths.

use serde::Serialize;

use crate::index::{walk_exact, IndexNode, Variant};
use crate::standardize::standardize;
use crate::tokenizer::tokenize;

/// Which document variant the caller prefers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    pub detail: bool,
    pub install: bool,
}

/// A concrete document found for a command.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution<'a> {
    /// Canonical command words that led to the document.
    pub commands: Vec<String>,
    /// Document path including the variant extension, e.g. `array/splice.detail.md`.
    pub path: String,
    /// Metadata of the document node.
    pub leaf: &'a IndexNode,
    /// Reached through a node's implicit `index` document.
    pub implicit_index: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionResult<'a> {
    Resolved(Resolution<'a>),
    /// The command names a level with several entries and no own document.
    Ambiguous {
        commands: Vec<String>,
        suggestions: Vec<String>,
    },
    NotFound {
        commands: Vec<String>,
    },
}

impl ResolutionResult<'_> {
    pub fn status(&self) -> &'static str {
        match self {
            ResolutionResult::Resolved(_) => "resolved",
            ResolutionResult::Ambiguous { .. } => "ambiguous",
            ResolutionResult::NotFound { .. } => "not_found",
        }
    }

    pub fn commands(&self) -> &[String] {
        match self {
            ResolutionResult::Resolved(resolution) => &resolution.commands,
            ResolutionResult::Ambiguous { commands, .. } => commands,
            ResolutionResult::NotFound { commands } => commands,
        }
    }

    /// Serializable view for JSON output.
    pub fn summary(&self) -> ResolutionSummary<'_> {
        let (path, variants, suggestions) = match self {
            ResolutionResult::Resolved(resolution) => (
                Some(resolution.path.as_str()),
                Some(resolution.leaf.variants),
                None,
            ),
            ResolutionResult::Ambiguous { suggestions, .. } => {
                (None, None, Some(suggestions.as_slice()))
            }
            ResolutionResult::NotFound { .. } => (None, None, None),
        };
        ResolutionSummary {
            status: self.status(),
            commands: self.commands(),
            path,
            variants,
            suggestions,
        }
    }
}

/// Resolve raw user input against the index.
pub fn resolve<'a>(
    raw: &str,
    index: &'a IndexNode,
    options: ResolveOptions,
) -> ResolutionResult<'a> {
    let commands = standardize(&tokenize(raw), index);

    let Some(node) = walk_exact(&commands, index) else {
        tracing::debug!(input = raw, "no index entry for command");
        return ResolutionResult::NotFound { commands };
    };

    let (leaf, implicit_index) = if let Some(index_leaf) = node.index_leaf.as_deref() {
        (index_leaf, true)
    } else if node.has_variant(Variant::Basic) {
        (node, false)
    } else if node.has_children() {
        let suggestions = node.child_names().map(str::to_string).collect();
        return ResolutionResult::Ambiguous {
            commands,
            suggestions,
        };
    } else {
        return ResolutionResult::NotFound { commands };
    };

    let path = build_extension(&commands.join("/"), leaf, implicit_index, options);
    tracing::debug!(input = raw, path = %path, "resolved document");
    ResolutionResult::Resolved(Resolution {
        commands,
        path,
        leaf,
        implicit_index,
    })
}

/// Append the document extension for `leaf`.
///
/// `detail` wins over `install` when both are requested and available; a
/// missing variant falls back to the basic `.md` document.
pub fn build_extension(
    path: &str,
    leaf: &IndexNode,
    implicit_index: bool,
    options: ResolveOptions,
) -> String {
    let mut result = path.to_string();
    if implicit_index {
        if !result.is_empty() {
            result.push('/');
        }
        result.push_str("index");
    }

    let variant = if options.detail && leaf.has_variant(Variant::Detail) {
        Variant::Detail
    } else if options.install && leaf.has_variant(Variant::Install) {
        Variant::Install
    } else {
        Variant::Basic
    };
    result.push_str(variant.extension());
    result
}

#[derive(Debug, Serialize)]
pub struct ResolutionSummary<'a> {
    pub status: &'static str,
    pub commands: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<crate::index::Variants>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<&'a [String]>,
}

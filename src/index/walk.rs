// SPDX-License-Identifier: MIT OR Apache-2.0

//! Token-by-token descent through the index tree.

use super::IndexNode;

/// Children of one index level that could continue a partially typed
/// command, in index order. Built fresh per call.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet<'a> {
    entries: Vec<(&'a str, &'a IndexNode)>,
}

impl<'a> CandidateSet<'a> {
    /// Every child of `node` whose name starts with `prefix`, compared
    /// case-insensitively over the prefix's length.
    pub fn matching_prefix(node: &'a IndexNode, prefix: &str) -> Self {
        let entries = node
            .children
            .iter()
            .filter(|(name, _)| starts_with_ignore_case(name, prefix))
            .map(|(name, child)| (name.as_str(), child))
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> Vec<&'a str> {
        self.entries.iter().map(|(name, _)| *name).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(candidate, _)| *candidate == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a IndexNode)> + '_ {
        self.entries.iter().copied()
    }
}

fn starts_with_ignore_case(name: &str, prefix: &str) -> bool {
    let mut name_chars = name.chars().flat_map(char::to_lowercase);
    prefix
        .chars()
        .flat_map(char::to_lowercase)
        .all(|expected| name_chars.next() == Some(expected))
}

/// Follow `tokens` through `node` while each one names an existing child,
/// calling `on_level` with the tokens still unconsumed and the child entered.
///
/// Returns the candidates at the level where matching stopped: children
/// prefixed by the first unmatched token, or every child when the tokens
/// ran out.
pub fn descend<'a, F>(tokens: &[String], node: &'a IndexNode, mut on_level: F) -> CandidateSet<'a>
where
    F: FnMut(&[String], &'a IndexNode),
{
    let mut current = node;
    let mut cursor = 0;

    while let Some(token) = tokens.get(cursor) {
        let Some(child) = current.child(token) else {
            break;
        };
        cursor += 1;
        tracing::trace!(token = %token, depth = cursor, "descending into index level");
        on_level(&tokens[cursor..], child);
        current = child;
    }

    let unmatched = tokens.get(cursor).map(String::as_str).unwrap_or("");
    CandidateSet::matching_prefix(current, unmatched)
}

/// Exact walk used for resolution: the node reached by consuming every
/// token, or `None` as soon as one token names no child.
pub fn walk_exact<'a>(tokens: &[String], node: &'a IndexNode) -> Option<&'a IndexNode> {
    tokens
        .iter()
        .try_fold(node, |current, token| current.child(token))
}

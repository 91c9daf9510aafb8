// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tab completion over the documentation index.
//!
//! [`complete`] is stateless: the shell passes the current buffer and how
//! many times in a row tab was pressed on it. The first press completes
//! silently when a single continuation exists; later presses on an
//! ambiguous prefix return a rendered listing instead.

use serde::Serialize;
use strsim::levenshtein;

use crate::format::{format_candidates, FormatOptions};
use crate::index::{descend, IndexNode};
use crate::standardize::standardize;
use crate::tokenizer::tokenize;

/// Picks the best continuation for a partially typed word.
pub trait Matcher {
    /// Best match for `query` among `candidates`, or `None`. The result may
    /// be a candidate or a shared prefix of several candidates.
    fn best_match(&self, query: &str, candidates: &[&str]) -> Option<String>;
}

impl<F> Matcher for F
where
    F: Fn(&str, &[&str]) -> Option<String>,
{
    fn best_match(&self, query: &str, candidates: &[&str]) -> Option<String> {
        self(query, candidates)
    }
}

/// Shell-style prefix completion.
///
/// A single candidate starting with the query is returned whole; several
/// yield their longest common prefix when it extends the query.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixMatcher;

impl Matcher for PrefixMatcher {
    fn best_match(&self, query: &str, candidates: &[&str]) -> Option<String> {
        if query.is_empty() {
            return None;
        }
        let query_lower = query.to_lowercase();
        let matches: Vec<&str> = candidates
            .iter()
            .copied()
            .filter(|candidate| candidate.to_lowercase().starts_with(&query_lower))
            .collect();

        match matches.as_slice() {
            [] => None,
            [only] => Some((*only).to_string()),
            [first, rest @ ..] => {
                let prefix = rest
                    .iter()
                    .fold(*first, |prefix, candidate| common_prefix(prefix, candidate));
                (prefix.chars().count() > query.chars().count()).then(|| prefix.to_string())
            }
        }
    }
}

fn common_prefix<'a>(left: &'a str, right: &str) -> &'a str {
    let mut end = 0;
    for ((idx, a), b) in left.char_indices().zip(right.chars()) {
        if !a.to_lowercase().eq(b.to_lowercase()) {
            break;
        }
        end = idx + a.len_utf8();
    }
    &left[..end]
}

/// Unique closest candidate by edit distance.
#[derive(Debug, Clone, Copy)]
pub struct LevenshteinMatcher {
    pub max_distance: usize,
}

impl Default for LevenshteinMatcher {
    fn default() -> Self {
        Self { max_distance: 2 }
    }
}

impl Matcher for LevenshteinMatcher {
    fn best_match(&self, query: &str, candidates: &[&str]) -> Option<String> {
        if query.is_empty() {
            return None;
        }
        let query_lower = query.to_lowercase();
        let mut best: Option<(&str, usize)> = None;
        let mut tied = false;
        for candidate in candidates {
            let distance = levenshtein(&query_lower, &candidate.to_lowercase());
            if distance > self.max_distance {
                continue;
            }
            match best {
                Some((_, best_distance)) if distance == best_distance => tied = true,
                Some((_, best_distance)) if distance > best_distance => {}
                _ => {
                    best = Some((candidate, distance));
                    tied = false;
                }
            }
        }
        match best {
            Some((candidate, _)) if !tied => Some(candidate.to_string()),
            _ => None,
        }
    }
}

/// What the shell should do with a tab press.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Completion {
    /// Replace the input buffer with this line.
    Line(String),
    /// Print this pre-rendered listing and keep the buffer.
    Listing(String),
}

/// Compute the response to a tab press on `raw`.
///
/// `iteration` counts consecutive presses on the same buffer, starting at 1.
pub fn complete<M>(
    raw: &str,
    iteration: usize,
    index: &IndexNode,
    matcher: &M,
    format: &FormatOptions,
) -> Completion
where
    M: Matcher + ?Sized,
{
    let commands = standardize(&tokenize(raw), index);
    let (last_word, other_words) = match commands.split_last() {
        Some((last, rest)) => (last.trim(), rest),
        None => ("", &[][..]),
    };

    let mut levels = 0;
    let candidates = descend(&commands, index, |_, _| levels += 1);
    let names = candidates.names();
    let fully_matched = levels == other_words.len() + 1;

    if !fully_matched {
        if let Some(matched) = matcher.best_match(last_word, &names) {
            let space = if candidates.contains(matched.trim()) { " " } else { "" };
            let line = join_words(other_words.iter().map(String::as_str).chain([matched.as_str()]));
            tracing::debug!(input = raw, completed = %line, "completed word");
            return Completion::Line(format!("{line}{space}"));
        }
    }

    let space = if fully_matched { " " } else { "" };
    let original = format!("{}{space}", commands.join(" ").trim());

    if iteration > 1 && names.len() > 1 {
        tracing::debug!(input = raw, candidates = names.len(), "listing candidates");
        return Completion::Listing(format_candidates(&candidates, format));
    }
    if iteration > 1 && names.len() == 1 && other_words.len() != levels {
        return Completion::Line(format!("{} ", format!("{original}{}", names[0]).trim()));
    }
    Completion::Line(original)
}

fn join_words<'a>(words: impl Iterator<Item = &'a str>) -> String {
    words.collect::<Vec<_>>().join(" ").trim().to_string()
}

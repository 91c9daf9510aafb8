// SPDX-License-Identifier: MIT OR Apache-2.0

//! Edit-distance correction of typed words against the index.
//!
//! Each word is compared with the children of the level reached so far. A
//! close enough match replaces the word so that `arary splcie` and
//! `Array Splice` both become the canonical `array splice`.

use strsim::levenshtein;

use crate::index::IndexNode;

/// Best and runner-up edit distance of a word against one index level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDistance<'a> {
    pub key: &'a str,
    pub distance: usize,
    /// Distance of the runner-up minus `distance`; `None` when the level
    /// has a single candidate.
    pub gap: Option<usize>,
}

impl KeyDistance<'_> {
    /// Whether the match is safe to adopt as a correction.
    pub fn is_confident(&self) -> bool {
        let gap = self.gap.unwrap_or(usize::MAX);
        match self.distance {
            0 => true,
            1 => gap > 3,
            2 => gap > 5 && self.key.chars().count() > 5,
            _ => false,
        }
    }
}

/// Closest child of `node` to `word`, compared trimmed and lowercased.
/// Ties keep the earlier child.
pub fn closest_key<'a>(word: &str, node: &'a IndexNode) -> Option<KeyDistance<'a>> {
    let needle = word.trim().to_lowercase();
    let mut best: Option<(&'a str, usize)> = None;
    let mut runner_up: Option<usize> = None;

    for name in node.child_names() {
        let distance = levenshtein(&needle, &name.trim().to_lowercase());
        match best {
            Some((_, best_distance)) if distance >= best_distance => {
                if !runner_up.is_some_and(|second| distance >= second) {
                    runner_up = Some(distance);
                }
            }
            Some((_, best_distance)) => {
                runner_up = Some(best_distance);
                best = Some((name, distance));
            }
            None => best = Some((name, distance)),
        }
    }

    best.map(|(key, distance)| KeyDistance {
        key,
        distance,
        gap: runner_up.map(|second| second - distance),
    })
}

/// Correct each token against the index level it lands on, descending one
/// level per recognised token.
///
/// Stops at the first token naming no child; that token is kept as typed
/// unless it is empty. Never fails.
pub fn standardize(tokens: &[String], index: &IndexNode) -> Vec<String> {
    let mut result = Vec::with_capacity(tokens.len());
    let mut current = index;

    for token in tokens {
        let word = canonical_word(token, current);
        match current.child(&word) {
            Some(child) => {
                result.push(word);
                current = child;
            }
            None => {
                if !word.is_empty() {
                    result.push(word);
                }
                break;
            }
        }
    }

    result
}

fn canonical_word(token: &str, level: &IndexNode) -> String {
    if token.trim().is_empty() {
        return token.to_string();
    }
    match closest_key(token, level) {
        Some(found) if found.is_confident() => {
            if found.key != token {
                tracing::debug!(
                    typed = token,
                    corrected = found.key,
                    distance = found.distance,
                    "standardized word against index"
                );
            }
            found.key.to_string()
        }
        _ => token.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn js_index() -> IndexNode {
        IndexNode::new().with_child(
            "js",
            IndexNode::new()
                .with_child(
                    "array",
                    IndexNode::new()
                        .with_index_leaf(IndexNode::leaf())
                        .with_child("splice", IndexNode::leaf())
                        .with_child("toLocaleString", IndexNode::leaf()),
                )
                .with_child("string", IndexNode::new()),
        )
    }

    #[test]
    fn exact_match_restores_canonical_case() {
        let root = js_index();
        assert_eq!(
            standardize(&words(&["JS", "Array", "TOLOCALESTRING"]), &root),
            words(&["js", "array", "toLocaleString"])
        );
    }

    #[test]
    fn single_typo_with_clear_gap_is_corrected() {
        let root = js_index();
        assert_eq!(
            standardize(&words(&["js", "aray", "splce"]), &root),
            words(&["js", "array", "splice"])
        );
    }

    #[test]
    fn two_edits_need_a_long_key() {
        let level = IndexNode::new().with_child("array", IndexNode::leaf());
        let found = closest_key("arr", &level).expect("candidate");
        assert_eq!(found.distance, 2);
        assert!(!found.is_confident());

        let level = IndexNode::new().with_child("splice", IndexNode::leaf());
        let found = closest_key("splc", &level).expect("candidate");
        assert_eq!(found.distance, 2);
        assert!(found.is_confident());
    }

    #[test]
    fn close_runner_up_blocks_correction() {
        let level = IndexNode::new()
            .with_child("map", IndexNode::leaf())
            .with_child("max", IndexNode::leaf());
        let found = closest_key("mag", &level).expect("candidate");
        assert_eq!(found.key, "map");
        assert_eq!(found.distance, 1);
        assert_eq!(found.gap, Some(0));
        assert!(!found.is_confident());
        assert_eq!(standardize(&words(&["mag"]), &level), words(&["mag"]));
    }

    #[test]
    fn runner_up_tracks_demoted_best() {
        let level = IndexNode::new()
            .with_child("slice", IndexNode::leaf())
            .with_child("splice", IndexNode::leaf());
        let found = closest_key("splice", &level).expect("candidate");
        assert_eq!(found.key, "splice");
        assert_eq!(found.gap, Some(1));
    }

    #[test]
    fn unmatched_word_is_kept_and_ends_the_walk() {
        let root = js_index();
        assert_eq!(
            standardize(&words(&["js", "wat", "splice"]), &root),
            words(&["js", "wat"])
        );
    }

    #[test]
    fn empty_tokens_are_dropped() {
        let root = js_index();
        assert_eq!(standardize(&words(&["js", ""]), &root), words(&["js"]));
        assert!(standardize(&words(&[""]), &root).is_empty());
    }

    #[test]
    fn index_is_never_a_correction_target() {
        let root = js_index();
        let standardized = standardize(&words(&["js", "array", "index"]), &root);
        assert_eq!(standardized, words(&["js", "array", "index"]));
        let index_only = IndexNode::new().with_index_leaf(IndexNode::leaf());
        assert!(closest_key("index", &index_only).is_none());
    }

    #[test]
    fn canonical_input_is_unchanged() {
        let root = js_index();
        let canonical = words(&["js", "array", "toLocaleString"]);
        let once = standardize(&canonical, &root);
        assert_eq!(once, canonical);
        assert_eq!(standardize(&once, &root), once);
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Splits raw user input into command words.

/// Characters dropped from every word; left over when users paste code
/// such as `array.splice();`.
const STRIPPED_CHARS: [char; 3] = ['(', ')', ';'];

/// Split raw input on whitespace and on `.`, then strip call punctuation.
///
/// Never fails. Empty input yields a single empty token, and a trailing dot
/// (`array.`) yields a trailing empty token meaning "list the children".
pub fn tokenize(raw: &str) -> Vec<String> {
    let mut words: Vec<String> = raw
        .split_whitespace()
        .flat_map(|unit| unit.split('.'))
        .map(clean_word)
        .collect();

    if words.is_empty() {
        words.push(String::new());
    }
    words
}

fn clean_word(word: &str) -> String {
    word.trim()
        .chars()
        .filter(|c| !STRIPPED_CHARS.contains(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_spaces_and_dots() {
        assert_eq!(tokenize("js array.splice"), vec!["js", "array", "splice"]);
    }

    #[test]
    fn strips_pasted_call_syntax() {
        assert_eq!(tokenize("  array.splice();  "), vec!["array", "splice"]);
        assert_eq!(tokenize("console.log(x)"), vec!["console", "logx"]);
    }

    #[test]
    fn empty_input_is_one_empty_token() {
        assert_eq!(tokenize(""), vec![""]);
        assert_eq!(tokenize("   \t "), vec![""]);
    }

    #[test]
    fn trailing_dot_leaves_empty_selector() {
        assert_eq!(tokenize("array."), vec!["array", ""]);
    }

    #[test]
    fn collapses_runs_of_whitespace() {
        assert_eq!(tokenize("js   array\tsplice"), vec!["js", "array", "splice"]);
    }
}

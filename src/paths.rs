// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversions between stored document paths and command words.

const DOCS_MARKER: &str = "docs/";
const INDEX_SEGMENT: &str = "index";

/// Command words for a document path.
///
/// Everything before the first `docs/` is dropped, so both absolute cache
/// paths and index-relative paths work: `/home/u/.wat/docs/js/array/splice`
/// gives `["js", "array", "splice"]`.
pub fn commands_from_path(path: &str) -> Vec<String> {
    let relative = match path.split_once(DOCS_MARKER) {
        Some((_, rest)) => rest,
        None => path,
    };
    relative.split('/').map(str::to_string).collect()
}

/// Human-readable command for a document file, as shown in update queues:
/// `docs/js/array/splice.detail.md` becomes `js array splice (detailed)`.
pub fn describe_document(path: &str) -> String {
    let mut words = commands_from_path(path);
    let mut note = None;

    if let Some(last) = words.last_mut() {
        let stem = last.strip_suffix(".md").unwrap_or(last.as_str());
        let (stem, variant) = if let Some(stem) = stem.strip_suffix(".detail") {
            (stem, Some("(detailed)"))
        } else if let Some(stem) = stem.strip_suffix(".install") {
            (stem, Some("(install)"))
        } else {
            (stem, None)
        };
        note = variant;
        *last = stem.to_string();
    }

    if words.last().is_some_and(|word| word == INDEX_SEGMENT) {
        words.pop();
    }
    words.retain(|word| !word.is_empty());

    let mut description = words.join(" ");
    if let Some(note) = note {
        if !description.is_empty() {
            description.push(' ');
        }
        description.push_str(note);
    }
    description
}

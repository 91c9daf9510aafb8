// SPDX-License-Identifier: MIT OR Apache-2.0

//! wat - Terminal documentation browser library
//!
//! Resolves typed, possibly abbreviated or misspelled commands such as
//! `js array splce` against a documentation index, and drives tab
//! completion with class-grouped column listings sized to the terminal.

pub mod complete;
pub mod config;
pub mod errors;
pub mod format;
pub mod index;
pub mod output;
pub mod paths;
pub mod resolve;
pub mod standardize;
pub mod tokenizer;

pub use complete::{complete, Completion, LevenshteinMatcher, Matcher, PrefixMatcher};
pub use format::{format_candidates, FormatOptions, TerminalSize};
pub use index::{CandidateSet, ClassTag, IndexNode, Variant, Variants};
pub use resolve::{resolve, Resolution, ResolutionResult, ResolveOptions};

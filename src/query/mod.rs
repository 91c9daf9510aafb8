// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query module - resolution, completion and listing commands

pub mod complete;
pub mod describe;
pub mod list;
pub mod ls;
pub mod resolve;

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::cli::OutputFormat;
use wat::errors::IndexNotFoundError;
use wat::format::FormatOptions;
use wat::index::{load_index, IndexNode};

/// Settings shared by every command, merged from CLI flags and config.
#[derive(Debug, Clone)]
pub struct Session {
    pub index_path: PathBuf,
    pub format: OutputFormat,
    pub compact: bool,
    pub listing: FormatOptions,
}

impl Session {
    /// Load the documentation index this session points at.
    pub fn load_index(&self) -> Result<IndexNode> {
        if !self.index_path.exists() {
            return Err(IndexNotFoundError {
                index_path: self.index_path.display().to_string(),
            }
            .into());
        }
        load_index(&self.index_path)
            .with_context(|| format!("Cannot load index {}", self.index_path.display()))
    }
}

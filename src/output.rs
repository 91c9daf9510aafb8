// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared stdout helpers for command output.

use anyhow::Result;
use serde::Serialize;

/// Print a value as JSON, pretty unless `compact`.
pub fn print_json<T: Serialize + ?Sized>(value: &T, compact: bool) -> Result<()> {
    println!("{}", to_json(value, compact)?);
    Ok(())
}

pub fn to_json<T: Serialize + ?Sized>(value: &T, compact: bool) -> Result<String> {
    let text = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(text)
}

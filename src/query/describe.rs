// SPDX-License-Identifier: MIT OR Apache-2.0

//! Describe a stored document path as a command

use anyhow::Result;
use serde::Serialize;

use super::Session;
use crate::cli::OutputFormat;
use wat::output::print_json;
use wat::paths::{commands_from_path, describe_document};

#[derive(Debug, Serialize)]
struct DescribePayload<'a> {
    path: &'a str,
    commands: Vec<String>,
    description: String,
}

/// Run the describe command
pub fn run(path: &str, session: &Session) -> Result<()> {
    let description = describe_document(path);
    match session.format {
        OutputFormat::Json => print_json(
            &DescribePayload {
                path,
                commands: commands_from_path(path),
                description,
            },
            session.compact,
        )?,
        OutputFormat::Text => println!("{description}"),
    }
    Ok(())
}

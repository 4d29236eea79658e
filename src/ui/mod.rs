//! User interface module - output rendering for the command-line driver.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Choosing between text and JSON output

use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::Result;

pub mod formatter;

pub use formatter::{
    display_commits, display_error, display_status, display_success, format_commit,
    format_next_version,
};

/// Render a value as pretty JSON
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Print `value` as JSON when requested, otherwise run the text renderer.
pub fn emit<T, F>(format: OutputFormat, value: &T, text: F) -> Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T),
{
    match format {
        OutputFormat::Json => println!("{}", to_json(value)?),
        OutputFormat::Text => text(value),
    }
    Ok(())
}

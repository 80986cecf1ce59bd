//! Input collection for batch lookups
//!
//! Names can arrive three ways: as command-line arguments, as a
//! line-delimited file, or interactively from stdin (semicolon-separated).
//! All three paths trim entries and drop blanks before the pipeline sees them.

use crate::error::AppError;
use tokio::fs;
use tokio::io::{self, AsyncBufReadExt};

/// Trims entries and removes blank or whitespace-only names.
pub fn filter_usable_names<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .map(|n| n.as_ref().trim().to_string())
        .filter(|n| !n.is_empty())
        .collect()
}

/// Reads player names from a file, one per line. Blank lines are skipped.
///
/// # Returns
/// * `Ok(Vec<String>)` - Trimmed, non-empty names in file order
/// * `Err(AppError)` - Error reading the file
pub async fn read_names_from_file(path: &str) -> Result<Vec<String>, AppError> {
    let content = fs::read_to_string(path).await?;
    Ok(filter_usable_names(content.lines()))
}

/// Prompts the user for player names on stdin, separated by semicolons.
///
/// This function displays a prompt and waits for a single line of input.
/// The line is split on `;` and each entry is trimmed; blank entries are
/// dropped.
///
/// # Returns
/// * `Ok(Vec<String>)` - The parsed names
/// * `Err(AppError)` - Error reading from stdin
pub async fn prompt_for_names() -> Result<Vec<String>, AppError> {
    println!("Enter player names separated by semicolons: ");
    let mut input = String::new();
    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin);
    reader.read_line(&mut input).await?;
    Ok(filter_usable_names(input.split(';')))
}

/// Gathers the batch's names from the available sources in priority order:
/// explicit arguments, then the input file, then the interactive prompt.
pub async fn gather_names(
    arg_names: &[String],
    input_path: Option<&str>,
) -> Result<Vec<String>, AppError> {
    if !arg_names.is_empty() {
        return Ok(filter_usable_names(arg_names.iter().map(|s| s.as_str())));
    }
    if let Some(path) = input_path {
        return read_names_from_file(path).await;
    }
    prompt_for_names().await
}

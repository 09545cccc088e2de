use std::fs;
use std::path::{Path, PathBuf};

use miette::*;

const DEFAULT_INPUT: &str = "input.txt";

/// Reads the puzzle input named on the command line.
///
/// With no arguments the puzzle reads `input.txt` from the current
/// directory; a single argument names the file to read instead.
pub fn read(args: impl IntoIterator<Item = String>) -> Result<String> {
    let args: Vec<String> = args.into_iter().collect();
    if args.len() > 2 {
        bail!(
            "too many arguments\nexpected usage: {} [INPUT FILE]",
            args.first().map(String::as_str).unwrap_or("part1")
        );
    }
    let path = args
        .into_iter()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
    validate(&path)?;
    tracing::info!(path = %path.display(), "reading input");
    fs::read_to_string(&path)
        .into_diagnostic()
        .wrap_err_with(|| format!("unable to open {}", path.display()))
}

fn validate(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("file {} does not exist", path.display());
    }
    if !path.is_file() {
        bail!("file {} is not a valid regular file", path.display());
    }
    Ok(())
}

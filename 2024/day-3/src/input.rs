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

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    fn args_for(path: &str) -> Vec<String> {
        vec!["part1".to_string(), path.to_string()]
    }

    #[test]
    fn reads_an_existing_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new().into_diagnostic()?;
        writeln!(file, "mul(2,4)").into_diagnostic()?;
        let input = read(args_for(&file.path().display().to_string()))?;
        assert_eq!("mul(2,4)\n", input);
        Ok(())
    }

    #[test]
    fn rejects_a_missing_file() {
        assert!(read(args_for("definitely/not/here.txt")).is_err());
    }

    #[test]
    fn rejects_a_directory() -> Result<()> {
        let dir = tempfile::tempdir().into_diagnostic()?;
        assert!(read(args_for(&dir.path().display().to_string())).is_err());
        Ok(())
    }

    #[test]
    fn rejects_extra_arguments() {
        let args = vec![
            "part1".to_string(),
            "input.txt".to_string(),
            "extra".to_string(),
        ];
        assert!(read(args).is_err());
    }
}

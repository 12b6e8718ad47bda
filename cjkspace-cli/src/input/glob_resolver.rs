//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::{Path, PathBuf};

/// Resolve file patterns to actual file paths
///
/// A pattern without glob metacharacters names a single file, which must
/// exist. Results are sorted and deduplicated.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        if !is_glob(pattern) {
            let path = Path::new(pattern);
            if !path.is_file() {
                return Err(CliError::FileNotFound(pattern.clone()).into());
            }
            files.push(path.to_path_buf());
            continue;
        }

        let paths = glob(pattern)
            .map_err(|e| CliError::InvalidPattern(format!("{pattern} ({e})")))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn pattern(dir: &TempDir, name: &str) -> String {
        dir.path().join(name).to_string_lossy().into_owned()
    }

    #[test]
    fn test_resolve_glob_sorted() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["b.txt", "a.txt", "c.md"] {
            fs::write(temp_dir.path().join(name), "中文").unwrap();
        }

        let files = resolve_patterns(&[pattern(&temp_dir, "*.txt")]).unwrap();
        assert_eq!(
            files,
            vec![temp_dir.path().join("a.txt"), temp_dir.path().join("b.txt")]
        );
    }

    #[test]
    fn test_resolve_dedups_overlapping_patterns() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "中文").unwrap();

        let files = resolve_patterns(&[
            pattern(&temp_dir, "*.txt"),
            pattern(&temp_dir, "a.txt"),
        ])
        .unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_missing_literal_path() {
        let temp_dir = TempDir::new().unwrap();
        let error = resolve_patterns(&[pattern(&temp_dir, "missing.txt")]).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_glob_without_matches() {
        let temp_dir = TempDir::new().unwrap();
        let error = resolve_patterns(&[pattern(&temp_dir, "*.none")]).unwrap_err();
        assert!(error.to_string().contains("No files found"));
    }

    #[test]
    fn test_invalid_glob_pattern() {
        let error = resolve_patterns(&["[invalid".to_string()]).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_directories_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("sub")).unwrap();
        fs::write(temp_dir.path().join("file.txt"), "x").unwrap();

        let files = resolve_patterns(&[pattern(&temp_dir, "*")]).unwrap();
        assert_eq!(files, vec![temp_dir.path().join("file.txt")]);
    }
}

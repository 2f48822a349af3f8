//! Directory token counting.
//!
//! Walks a directory, counts tokens per file, and sums the result. Files
//! that are not valid UTF-8 text are skipped rather than aborting the walk.

use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;

use tiktally_core::{Error, Result};

use crate::selector::Selector;

/// Options for directory walks.
#[derive(Debug, Clone, Default)]
pub struct DirOptions {
    pub recursive: bool,
    pub max_files: Option<usize>,
    pub exclude: Vec<String>,
}

/// Token count for a single file in a walk.
#[derive(Debug, Clone)]
pub struct FileCount {
    pub path: PathBuf,
    pub tokens: usize,
}

/// Result of a directory count: per-file counts, their sum, and how many
/// files were skipped as unreadable.
#[derive(Debug, Clone)]
pub struct DirCount {
    pub files: Vec<FileCount>,
    pub total: usize,
    pub skipped: usize,
}

/// Count tokens in every text file under `path`.
pub fn count_dir(
    path: impl AsRef<Path>,
    selector: &Selector,
    options: &DirOptions,
) -> Result<DirCount> {
    let path = path.as_ref();

    if !path.is_dir() {
        return Err(Error::Other(anyhow::anyhow!(
            "Directory does not exist: {}",
            path.display()
        )));
    }

    let tokenizer = selector.resolve()?;
    let exclude = compile_patterns(&options.exclude);

    let mut paths = Vec::new();

    if options.recursive {
        for entry in walkdir::WalkDir::new(path)
            .into_iter()
            .filter_entry(|e| !is_excluded(e.path(), &exclude))
        {
            let entry = entry.map_err(|e| Error::Other(e.into()))?;
            if entry.file_type().is_file() {
                paths.push(entry.path().to_path_buf());
            }
        }
    } else {
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let entry_path = entry.path();
            if entry.file_type()?.is_file() && !is_excluded(&entry_path, &exclude) {
                paths.push(entry_path);
            }
        }
    }

    // Sort for determinism
    paths.sort();

    if let Some(max) = options.max_files {
        paths.truncate(max);
    }

    let mut files = Vec::new();
    let mut skipped = 0;

    for file_path in paths {
        match fs::read_to_string(&file_path) {
            Ok(contents) => {
                let tokens = tokenizer.count(&contents);
                files.push(FileCount {
                    path: file_path,
                    tokens,
                });
            }
            Err(e) => {
                tracing::debug!("skipping {}: {}", file_path.display(), e);
                skipped += 1;
            }
        }
    }

    let total = files.iter().map(|f| f.tokens).sum();

    Ok(DirCount {
        files,
        total,
        skipped,
    })
}

fn compile_patterns(patterns: &[String]) -> Vec<Pattern> {
    patterns
        .iter()
        .filter_map(|p| Pattern::new(p).ok())
        .collect()
}

fn is_excluded(path: &Path, exclude: &[Pattern]) -> bool {
    let path_str = path.display().to_string();
    exclude.iter().any(|pattern| pattern.matches(&path_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "Hello, world!").unwrap();
        std::fs::write(dir.path().join("b.txt"), "Another file with more words.").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested/c.txt"), "Deeply nested text.").unwrap();
        dir
    }

    #[test]
    fn test_flat_walk_ignores_subdirectories() {
        let dir = fixture_dir();
        let selector = Selector::new().encoding("cl100k_base");

        let counts = count_dir(dir.path(), &selector, &DirOptions::default()).unwrap();
        assert_eq!(counts.files.len(), 2);
        assert_eq!(counts.skipped, 0);
    }

    #[test]
    fn test_recursive_walk_includes_subdirectories() {
        let dir = fixture_dir();
        let selector = Selector::new().encoding("cl100k_base");
        let options = DirOptions {
            recursive: true,
            ..Default::default()
        };

        let counts = count_dir(dir.path(), &selector, &options).unwrap();
        assert_eq!(counts.files.len(), 3);
    }

    #[test]
    fn test_total_is_sum_of_file_counts() {
        let dir = fixture_dir();
        let selector = Selector::new().model("gpt-4o");
        let options = DirOptions {
            recursive: true,
            ..Default::default()
        };

        let counts = count_dir(dir.path(), &selector, &options).unwrap();
        let sum: usize = counts.files.iter().map(|f| f.tokens).sum();
        assert_eq!(counts.total, sum);
        assert!(counts.total > 0);
    }

    #[test]
    fn test_exclude_patterns() {
        let dir = fixture_dir();
        let selector = Selector::new().encoding("cl100k_base");
        let options = DirOptions {
            exclude: vec!["**/a.txt".to_string()],
            ..Default::default()
        };

        let counts = count_dir(dir.path(), &selector, &options).unwrap();
        assert_eq!(counts.files.len(), 1);
        assert!(counts.files[0].path.ends_with("b.txt"));
    }

    #[test]
    fn test_max_files_truncates_sorted_list() {
        let dir = fixture_dir();
        let selector = Selector::new().encoding("cl100k_base");
        let options = DirOptions {
            max_files: Some(1),
            ..Default::default()
        };

        let counts = count_dir(dir.path(), &selector, &options).unwrap();
        assert_eq!(counts.files.len(), 1);
        assert!(counts.files[0].path.ends_with("a.txt"));
    }

    #[test]
    fn test_non_utf8_files_are_skipped() {
        let dir = fixture_dir();
        std::fs::write(dir.path().join("blob.bin"), [0xff, 0xfe, 0x00, 0x01]).unwrap();
        let selector = Selector::new().encoding("cl100k_base");

        let counts = count_dir(dir.path(), &selector, &DirOptions::default()).unwrap();
        assert_eq!(counts.files.len(), 2);
        assert_eq!(counts.skipped, 1);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let selector = Selector::new().encoding("cl100k_base");
        let err = count_dir("/no/such/dir", &selector, &DirOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Other(_)));
    }
}

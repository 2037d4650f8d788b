//! Reading history files from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// One history file's decoded content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLog {
    /// File name, used in log messages and progress output
    pub name: String,
    pub text: String,
}

impl SourceLog {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot read history directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Check whether a file name is a hand history: the right extension and no
/// skip token (case-insensitive) in the name.
pub fn is_history_file(path: &Path, extension: &str, skip_token: &str) -> bool {
    let has_extension = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension));

    let skipped = !skip_token.is_empty()
        && path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.to_lowercase().contains(&skip_token.to_lowercase()));

    has_extension && !skipped
}

/// List history files in a directory, sorted by name.
pub fn list_history_files(dir: &Path, extension: &str, skip_token: &str) -> Result<Vec<PathBuf>, SourceError> {
    let entries = fs::read_dir(dir).map_err(|source| SourceError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_history_file(path, extension, skip_token))
        .collect();
    files.sort();
    Ok(files)
}

/// Read every history file in a directory.
///
/// Files that cannot be read as UTF-8 text are logged and skipped.
pub fn collect_logs(dir: &Path, extension: &str, skip_token: &str) -> Result<Vec<SourceLog>, SourceError> {
    let files = list_history_files(dir, extension, skip_token)?;
    log::info!("found {} history files in {}", files.len(), dir.display());

    let logs = files
        .iter()
        .filter_map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            match fs::read_to_string(path) {
                Ok(text) => Some(SourceLog::new(name, text)),
                Err(e) => {
                    log::warn!("skipping {}: {}", name, e);
                    None
                }
            }
        })
        .collect();

    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("open-raise-stats-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_is_history_file() {
        assert!(is_history_file(Path::new("20240101_Sunday(123)_real_holdem_no-limit.txt"), "txt", "summary"));
        assert!(is_history_file(Path::new("hands.TXT"), "txt", "summary"));
        assert!(!is_history_file(Path::new("20240101_Sunday(123)_real_holdem_no-limit_summary.txt"), "txt", "summary"));
        assert!(!is_history_file(Path::new("Tournament_SUMMARY.txt"), "txt", "summary"));
        assert!(!is_history_file(Path::new("notes.md"), "txt", "summary"));
        assert!(!is_history_file(Path::new("noextension"), "txt", "summary"));
        assert!(is_history_file(Path::new("a_summary.txt"), "txt", ""));
    }

    #[test]
    fn test_collect_logs_sorted_and_filtered() {
        let dir = scratch_dir("collect");
        fs::write(dir.join("b.txt"), "second").unwrap();
        fs::write(dir.join("a.txt"), "first").unwrap();
        fs::write(dir.join("a_summary.txt"), "skip").unwrap();
        fs::write(dir.join("c.log"), "skip").unwrap();
        fs::write(dir.join("d.txt"), [0xff, 0xfe, 0x00]).unwrap();
        fs::create_dir_all(dir.join("sub.txt")).unwrap();

        let logs = collect_logs(&dir, "txt", "summary").unwrap();
        assert_eq!(
            logs,
            vec![SourceLog::new("a.txt", "first"), SourceLog::new("b.txt", "second")]
        );

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_dir() {
        let dir = std::env::temp_dir().join("open-raise-stats-does-not-exist");
        let err = collect_logs(&dir, "txt", "summary").unwrap_err();
        assert!(err.to_string().starts_with("cannot read history directory"));
    }
}

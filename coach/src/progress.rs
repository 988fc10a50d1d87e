//! Learner progress persisted under `.coach/progress.json`.
//!
//! One record per exercise, holding the last verification status, the hash of
//! the exercise file at that time (so edits show up as stale), and the full
//! judgment for inspection.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::check::Judgment;
use crate::outcome::Status;

/// All progress records, keyed by exercise id.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ProgressFile {
    #[serde(default)]
    pub entries: BTreeMap<String, ProgressEntry>,
}

/// Result of the last verification of one exercise.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub status: Status,
    /// SHA-256 of the exercise file when it was verified.
    pub source_hash: String,
    /// RFC 3339 timestamp of the verification.
    pub verified_at: String,
    pub judgment: Judgment,
}

/// Load the progress file.
///
/// A missing file is an empty record set; an unreadable one is reported as a
/// warning and treated as empty rather than aborting the command.
pub fn load(path: &Path) -> (ProgressFile, Vec<String>) {
    if !path.exists() {
        return (ProgressFile::default(), Vec::new());
    }
    let parsed = fs::read_to_string(path)
        .with_context(|| format!("read {}", path.display()))
        .and_then(|contents| {
            serde_json::from_str::<ProgressFile>(&contents).context("parse progress")
        });
    match parsed {
        Ok(progress) => (progress, Vec::new()),
        Err(err) => (
            ProgressFile::default(),
            vec![format!("ignoring {}: {err}", path.display())],
        ),
    }
}

/// Atomically write the progress file (temp file + rename).
pub fn save(path: &Path, progress: &ProgressFile) -> Result<()> {
    let mut payload = serde_json::to_string_pretty(progress).context("serialize progress")?;
    payload.push('\n');

    let parent = path
        .parent()
        .with_context(|| format!("progress path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload)
        .with_context(|| format!("write temp progress {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path)
        .with_context(|| format!("replace progress {}", path.display()))?;
    Ok(())
}

/// SHA-256 of a file, hex encoded.
pub fn file_sha256(path: &Path) -> Result<String> {
    let contents = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let mut hasher = Sha256::new();
    hasher.update(contents);
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::CheckOutcome;
    use tempfile::tempdir;

    fn entry(status: Status) -> ProgressEntry {
        ProgressEntry {
            status,
            source_hash: "abc".to_string(),
            verified_at: "2026-01-01T00:00:00Z".to_string(),
            judgment: Judgment {
                checks: vec![CheckOutcome::Compiles {
                    passed: status == Status::Passed,
                    timed_out: false,
                    stderr: String::new(),
                    stderr_truncated: false,
                }],
            },
        }
    }

    #[test]
    fn missing_file_is_empty() {
        let temp = tempdir().expect("tempdir");
        let (progress, warnings) = load(&temp.path().join("missing.json"));
        assert!(progress.entries.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn corrupt_file_warns_and_is_empty() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("progress.json");
        fs::write(&path, "not json").expect("write");
        let (progress, warnings) = load(&path);
        assert!(progress.entries.is_empty());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join(".coach/progress.json");

        let mut progress = ProgressFile::default();
        progress.entries.insert("pizza".to_string(), entry(Status::Passed));
        save(&path, &progress).expect("save");

        let (loaded, warnings) = load(&path);
        assert!(warnings.is_empty());
        assert_eq!(loaded.entries.len(), 1);
        assert_eq!(loaded.entries["pizza"].status, Status::Passed);
    }

    #[test]
    fn file_hash_is_stable() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("file.rs");
        fs::write(&path, "fn main() {}\n").expect("write");
        let first = file_sha256(&path).expect("hash");
        let second = file_sha256(&path).expect("hash");
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
    }
}

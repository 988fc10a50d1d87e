//! Exercise verification orchestration.
//!
//! Coordinates scratch directory creation, check execution, status
//! classification, and progress recording.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use crate::check::{Judgment, run_checks};
use crate::compile::{CommandLimits, Scratch};
use crate::manifest::ExerciseDef;
use crate::outcome::{Status, classify};
use crate::progress::{self, ProgressEntry};

/// Where course content and coach state live.
///
/// Content paths in the manifest are relative to `repo_root`; progress and
/// scratch directories live under `state_dir` so verification of the shipped
/// solutions (tests, CI) never touches a learner's records.
#[derive(Debug, Clone)]
pub struct CoursePaths {
    pub repo_root: PathBuf,
    pub state_dir: PathBuf,
}

impl CoursePaths {
    pub fn new(repo_root: &Path) -> Self {
        Self {
            repo_root: repo_root.to_path_buf(),
            state_dir: repo_root.join(".coach"),
        }
    }

    pub fn progress_path(&self) -> PathBuf {
        self.state_dir.join("progress.json")
    }

    pub fn scratch_base(&self) -> PathBuf {
        self.state_dir.join("scratch")
    }
}

/// Result of verifying a single exercise.
#[derive(Debug)]
pub struct VerifyOutcome {
    pub id: String,
    pub status: Status,
    pub judgment: Judgment,
    /// The file that was verified (learner file or reference solution).
    pub target: PathBuf,
}

/// Verify one exercise end-to-end: scratch creation, checks, classification,
/// progress recording.
///
/// With `solution` set, the reference solution is verified instead of the
/// learner file and the progress file is left untouched. A missing target or
/// checks that could not be executed at all are recorded as [`Status::Error`]
/// rather than aborting the command.
#[instrument(skip_all, fields(id = %def.id, solution))]
pub fn verify_exercise(
    paths: &CoursePaths,
    def: &ExerciseDef,
    solution: bool,
    limits: CommandLimits,
) -> Result<VerifyOutcome> {
    let relative = if solution { &def.solution } else { &def.path };
    let target = paths.repo_root.join(relative);

    let (status, judgment) = if target.is_file() {
        debug!("creating scratch dir");
        let scratch =
            Scratch::create(&paths.scratch_base(), &def.id).context("create scratch dir")?;

        debug!("running checks");
        match run_checks(
            &def.checks,
            &target,
            &paths.repo_root,
            scratch.path(),
            limits,
        ) {
            Ok(judgment) => (classify(&judgment), judgment),
            Err(err) => {
                warn!(err = format!("{err:#}"), "checks could not be executed");
                (Status::Error, Judgment { checks: Vec::new() })
            }
        }
    } else {
        warn!(target = %target.display(), "target file not found");
        (Status::Error, Judgment { checks: Vec::new() })
    };

    if !solution {
        record_progress(paths, def, &target, status, &judgment).context("record progress")?;
    }

    info!(status = status.as_str(), "verification complete");
    Ok(VerifyOutcome {
        id: def.id.clone(),
        status,
        judgment,
        target,
    })
}

fn record_progress(
    paths: &CoursePaths,
    def: &ExerciseDef,
    target: &Path,
    status: Status,
    judgment: &Judgment,
) -> Result<()> {
    let progress_path = paths.progress_path();
    let (mut progress, warnings) = progress::load(&progress_path);
    for warning in warnings {
        tracing::warn!(warning, "progress file problem");
    }

    // The hash is empty when the target could not be read; the entry's Error
    // status already says the verification never ran.
    let entry = ProgressEntry {
        status,
        source_hash: progress::file_sha256(target).unwrap_or_default(),
        verified_at: Utc::now().to_rfc3339(),
        judgment: reparse_judgment(judgment)?,
    };
    progress.entries.insert(def.id.clone(), entry);
    progress::save(&progress_path, &progress)?;
    Ok(())
}

// Judgment is persisted by value; round-trip through serde instead of
// requiring Clone on the captured outputs.
fn reparse_judgment(judgment: &Judgment) -> Result<Judgment> {
    let raw = serde_json::to_string(judgment).context("serialize judgment")?;
    serde_json::from_str(&raw).context("reparse judgment")
}

/// True when the recorded hash no longer matches the file on disk.
pub fn is_stale(entry: &ProgressEntry, target: &Path) -> bool {
    match progress::file_sha256(target) {
        Ok(hash) => hash != entry.source_hash,
        Err(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::Check;
    use std::fs;
    use tempfile::tempdir;

    fn write_course(root: &Path, exercise_body: &str) -> ExerciseDef {
        fs::create_dir_all(root.join("exercises")).expect("exercises dir");
        fs::create_dir_all(root.join("solutions")).expect("solutions dir");
        fs::write(root.join("exercises/unit.rs"), exercise_body).expect("exercise");
        fs::write(
            root.join("solutions/unit.rs"),
            "fn main() { println!(\"done: 3\"); }\n",
        )
        .expect("solution");

        ExerciseDef {
            id: "unit".to_string(),
            topic: "unit test fixture".to_string(),
            path: PathBuf::from("exercises/unit.rs"),
            solution: PathBuf::from("solutions/unit.rs"),
            hint: "complete main".to_string(),
            checks: vec![
                Check::Compiles,
                Check::RunOutputContains {
                    needles: vec!["done: 3".to_string()],
                },
            ],
        }
    }

    #[test]
    fn solution_run_passes_without_touching_progress() {
        let temp = tempdir().expect("tempdir");
        let def = write_course(temp.path(), "fn main() { incomplete\n");
        let paths = CoursePaths::new(temp.path());

        let outcome =
            verify_exercise(&paths, &def, true, CommandLimits::default_limits()).expect("verify");
        assert_eq!(outcome.status, Status::Passed);
        assert!(!paths.progress_path().exists());
    }

    #[test]
    fn learner_run_records_progress_and_staleness() {
        let temp = tempdir().expect("tempdir");
        let def = write_course(temp.path(), "fn main() { println!(\"done: 3\"); }\n");
        let paths = CoursePaths::new(temp.path());

        let outcome =
            verify_exercise(&paths, &def, false, CommandLimits::default_limits()).expect("verify");
        assert_eq!(outcome.status, Status::Passed);

        let (progress, warnings) = progress::load(&paths.progress_path());
        assert!(warnings.is_empty());
        let entry = &progress.entries["unit"];
        assert_eq!(entry.status, Status::Passed);
        assert!(!is_stale(entry, &temp.path().join("exercises/unit.rs")));

        fs::write(
            temp.path().join("exercises/unit.rs"),
            "fn main() { println!(\"edited\"); }\n",
        )
        .expect("edit");
        assert!(is_stale(entry, &temp.path().join("exercises/unit.rs")));
    }

    #[test]
    fn incomplete_exercise_fails() {
        let temp = tempdir().expect("tempdir");
        let def = write_course(temp.path(), "fn main() { let total: f64 = ; }\n");
        let paths = CoursePaths::new(temp.path());

        let outcome =
            verify_exercise(&paths, &def, false, CommandLimits::default_limits()).expect("verify");
        assert_eq!(outcome.status, Status::Failed);
    }

    #[test]
    fn missing_target_records_error_status() {
        let temp = tempdir().expect("tempdir");
        let mut def = write_course(temp.path(), "fn main() {}\n");
        def.path = PathBuf::from("exercises/nope.rs");
        let paths = CoursePaths::new(temp.path());

        let outcome =
            verify_exercise(&paths, &def, false, CommandLimits::default_limits()).expect("verify");
        assert_eq!(outcome.status, Status::Error);
        assert!(outcome.judgment.checks.is_empty());

        let (progress, warnings) = progress::load(&paths.progress_path());
        assert!(warnings.is_empty());
        assert_eq!(progress.entries["unit"].status, Status::Error);
    }
}

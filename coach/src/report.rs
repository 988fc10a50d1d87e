//! Progress aggregation for `coach report` and `coach list`.

use std::collections::BTreeMap;
use std::path::Path;

use crate::manifest::ExerciseDef;
use crate::outcome::Status;
use crate::progress::ProgressFile;
use crate::verify::is_stale;

/// Aggregated view over the whole course.
#[derive(Debug, Default)]
pub struct ReportSummary {
    pub exercises: usize,
    pub passed: usize,
    pub failed: usize,
    pub error: usize,
    /// Verified before, but the file changed since.
    pub stale: usize,
    /// Never verified.
    pub pending: usize,
    /// Per-check-label (passed, total) over the latest judgments.
    pub check_pass_rates: BTreeMap<String, (usize, usize)>,
}

/// Display state of one exercise in `coach list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    Passed,
    Failed,
    Error,
    Stale,
    Pending,
}

impl ListState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListState::Passed => "passed",
            ListState::Failed => "failed",
            ListState::Error => "error",
            ListState::Stale => "stale",
            ListState::Pending => "-",
        }
    }
}

/// Resolve the display state of one exercise.
pub fn list_state(def: &ExerciseDef, progress: &ProgressFile, repo_root: &Path) -> ListState {
    let Some(entry) = progress.entries.get(&def.id) else {
        return ListState::Pending;
    };
    // An errored verification never hashed the file, so staleness is
    // meaningless for it.
    if entry.status == Status::Error {
        return ListState::Error;
    }
    if is_stale(entry, &repo_root.join(&def.path)) {
        return ListState::Stale;
    }
    match entry.status {
        Status::Passed => ListState::Passed,
        Status::Failed => ListState::Failed,
        Status::Error => ListState::Error,
    }
}

/// Aggregate progress records against the manifest.
///
/// Records for ids no longer in the manifest are reported as warnings and
/// skipped.
pub fn aggregate(
    defs: &[ExerciseDef],
    progress: &ProgressFile,
    repo_root: &Path,
) -> (ReportSummary, Vec<String>) {
    let mut summary = ReportSummary {
        exercises: defs.len(),
        ..ReportSummary::default()
    };
    let mut warnings = Vec::new();

    for def in defs {
        match list_state(def, progress, repo_root) {
            ListState::Passed => summary.passed += 1,
            ListState::Failed => summary.failed += 1,
            ListState::Error => summary.error += 1,
            ListState::Stale => summary.stale += 1,
            ListState::Pending => summary.pending += 1,
        }
        if let Some(entry) = progress.entries.get(&def.id) {
            for check in &entry.judgment.checks {
                let rate = summary
                    .check_pass_rates
                    .entry(check.label())
                    .or_insert((0, 0));
                if check.passed() {
                    rate.0 += 1;
                }
                rate.1 += 1;
            }
        }
    }

    for id in progress.entries.keys() {
        if !defs.iter().any(|def| def.id == *id) {
            warnings.push(format!("progress entry {id} has no exercise in the manifest"));
        }
    }

    (summary, warnings)
}

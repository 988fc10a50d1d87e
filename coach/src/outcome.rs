//! Verification status classification.

use serde::{Deserialize, Serialize};

use crate::check::Judgment;

/// Status of one verified exercise.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Every check passed.
    Passed,
    /// The checks ran but at least one failed.
    Failed,
    /// The checks could not be executed (missing file, rustc not found, ...).
    Error,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Passed => "passed",
            Status::Failed => "failed",
            Status::Error => "error",
        }
    }
}

pub fn classify(judgment: &Judgment) -> Status {
    if judgment.all_passed() {
        Status::Passed
    } else {
        Status::Failed
    }
}

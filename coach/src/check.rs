//! Check definitions, execution, and outcome recording.
//!
//! Checks are the executable form of the course's acceptance criteria: a
//! solution compiles, its output contains the expected lines, and each
//! rejects probe still fails to compile (the type error it documents has not
//! been lost).

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::compile::{CommandLimits, compile, run};

/// Verification check declared in the course manifest.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Check {
    /// The target file must compile with plain `rustc`.
    Compiles,
    /// Compile and run the target; stdout must contain every needle.
    RunOutputContains { needles: Vec<String> },
    /// The probe file must FAIL to compile.
    RejectsCompile { path: PathBuf },
}

impl Check {
    pub fn validate(&self) -> Result<()> {
        match self {
            Check::Compiles => {}
            Check::RunOutputContains { needles } => {
                if needles.is_empty() {
                    bail!("run_output_contains.needles must be a non-empty array");
                }
                if needles.iter().any(|needle| needle.is_empty()) {
                    bail!("run_output_contains.needles must not contain empty strings");
                }
            }
            Check::RejectsCompile { path } => {
                if path.as_os_str().is_empty() {
                    bail!("rejects_compile.path must be non-empty");
                }
                if path.is_absolute() {
                    bail!("rejects_compile.path must be relative to the repository root");
                }
                if path.components().any(|c| c.as_os_str() == "..") {
                    bail!("rejects_compile.path must not contain '..'");
                }
            }
        }
        Ok(())
    }
}

/// Collected check outcomes for one verification.
#[derive(Debug, Serialize, Deserialize)]
pub struct Judgment {
    pub checks: Vec<CheckOutcome>,
}

impl Judgment {
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(CheckOutcome::passed)
    }
}

/// Result of running a single check.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CheckOutcome {
    Compiles {
        passed: bool,
        timed_out: bool,
        stderr: String,
        stderr_truncated: bool,
    },
    RunOutputContains {
        passed: bool,
        compiled: bool,
        timed_out: bool,
        exit_code: Option<i32>,
        missing: Vec<String>,
        stdout: String,
        stderr: String,
        stdout_truncated: bool,
        stderr_truncated: bool,
    },
    RejectsCompile {
        path: String,
        passed: bool,
        timed_out: bool,
        stderr: String,
        stderr_truncated: bool,
    },
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        match self {
            CheckOutcome::Compiles { passed, .. } => *passed,
            CheckOutcome::RunOutputContains { passed, .. } => *passed,
            CheckOutcome::RejectsCompile { passed, .. } => *passed,
        }
    }

    /// Stable label for reporting.
    pub fn label(&self) -> String {
        match self {
            CheckOutcome::Compiles { .. } => "compiles".to_string(),
            CheckOutcome::RunOutputContains { .. } => "run_output_contains".to_string(),
            CheckOutcome::RejectsCompile { path, .. } => format!("rejects_compile({path})"),
        }
    }
}

/// Run all checks against `target` and collect outcomes.
///
/// Never short-circuits, so one report shows every failure at once. Probe
/// paths under `rejects_compile` are resolved against `repo_root`.
#[instrument(skip_all, fields(target = %target.display(), check_count = checks.len()))]
pub fn run_checks(
    checks: &[Check],
    target: &Path,
    repo_root: &Path,
    scratch: &Path,
    limits: CommandLimits,
) -> Result<Judgment> {
    let mut outcomes = Vec::with_capacity(checks.len());
    for check in checks {
        match check {
            Check::Compiles => {
                let (output, _binary) = compile(target, scratch, limits)?;
                if output.timed_out {
                    warn!(check = "compiles", "compiler timed out");
                } else {
                    debug!(check = "compiles", passed = output.success, "check result");
                }
                outcomes.push(CheckOutcome::Compiles {
                    passed: output.success,
                    timed_out: output.timed_out,
                    stderr: output.stderr,
                    stderr_truncated: output.stderr_truncated,
                });
            }
            Check::RunOutputContains { needles } => {
                outcomes.push(run_output_check(target, needles, scratch, limits)?);
            }
            Check::RejectsCompile { path } => {
                let probe = repo_root.join(path);
                // A missing probe must fail the check: rustc's "couldn't read
                // file" error would otherwise count as the probe rejecting.
                if !probe.is_file() {
                    warn!(probe = %probe.display(), "rejects probe file missing");
                    outcomes.push(CheckOutcome::RejectsCompile {
                        path: path.display().to_string(),
                        passed: false,
                        timed_out: false,
                        stderr: format!("probe file not found at {}", probe.display()),
                        stderr_truncated: false,
                    });
                    continue;
                }
                let (output, _binary) = compile(&probe, scratch, limits)?;
                // A probe that compiles cleanly is the failure case here.
                let passed = !output.timed_out && !output.success;
                debug!(check = "rejects_compile", probe = %probe.display(), passed, "check result");
                outcomes.push(CheckOutcome::RejectsCompile {
                    path: path.display().to_string(),
                    passed,
                    timed_out: output.timed_out,
                    stderr: output.stderr,
                    stderr_truncated: output.stderr_truncated,
                });
            }
        }
    }
    Ok(Judgment { checks: outcomes })
}

fn run_output_check(
    target: &Path,
    needles: &[String],
    scratch: &Path,
    limits: CommandLimits,
) -> Result<CheckOutcome> {
    let (compiled, binary) = compile(target, scratch, limits)?;
    if !compiled.success {
        debug!(check = "run_output_contains", passed = false, "target did not compile");
        return Ok(CheckOutcome::RunOutputContains {
            passed: false,
            compiled: false,
            timed_out: compiled.timed_out,
            exit_code: None,
            missing: needles.to_vec(),
            stdout: String::new(),
            stderr: compiled.stderr,
            stdout_truncated: false,
            stderr_truncated: compiled.stderr_truncated,
        });
    }

    let ran = run(&binary, limits)?;
    let missing: Vec<String> = needles
        .iter()
        .filter(|needle| !ran.stdout.contains(needle.as_str()))
        .cloned()
        .collect();
    let passed = ran.success && missing.is_empty();
    debug!(check = "run_output_contains", passed, missing = missing.len(), "check result");

    Ok(CheckOutcome::RunOutputContains {
        passed,
        compiled: true,
        timed_out: ran.timed_out,
        exit_code: ran.exit_code,
        missing,
        stdout: ran.stdout,
        stderr: ran.stderr,
        stdout_truncated: ran.stdout_truncated,
        stderr_truncated: ran.stderr_truncated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const GREETER: &str = "fn main() { println!(\"total: 42\"); }\n";
    const BROKEN: &str = "fn main() { let x: u8 = \"nope\"; }\n";

    fn limits() -> CommandLimits {
        CommandLimits::default_limits()
    }

    #[test]
    fn compiles_check_passes_and_fails() {
        let temp = tempdir().expect("tempdir");
        let good = temp.path().join("good.rs");
        let bad = temp.path().join("bad.rs");
        fs::write(&good, GREETER).expect("write good");
        fs::write(&bad, BROKEN).expect("write bad");

        let checks = vec![Check::Compiles];
        let judgment =
            run_checks(&checks, &good, temp.path(), temp.path(), limits()).expect("checks");
        assert!(judgment.all_passed());

        let judgment =
            run_checks(&checks, &bad, temp.path(), temp.path(), limits()).expect("checks");
        assert!(!judgment.all_passed());
        match &judgment.checks[0] {
            CheckOutcome::Compiles { stderr, .. } => {
                assert!(stderr.contains("mismatched types"));
            }
            other => panic!("expected compiles outcome, got {other:?}"),
        }
    }

    #[test]
    fn run_output_check_reports_missing_needles() {
        let temp = tempdir().expect("tempdir");
        let source = temp.path().join("greeter.rs");
        fs::write(&source, GREETER).expect("write source");

        let checks = vec![Check::RunOutputContains {
            needles: vec!["total: 42".to_string(), "absent line".to_string()],
        }];
        let judgment =
            run_checks(&checks, &source, temp.path(), temp.path(), limits()).expect("checks");
        match &judgment.checks[0] {
            CheckOutcome::RunOutputContains { passed, missing, .. } => {
                assert!(!passed);
                assert_eq!(missing, &vec!["absent line".to_string()]);
            }
            other => panic!("expected run outcome, got {other:?}"),
        }
    }

    #[test]
    fn rejects_probe_passes_only_when_compilation_fails() {
        let temp = tempdir().expect("tempdir");
        fs::write(temp.path().join("probe.rs"), BROKEN).expect("write probe");
        fs::write(temp.path().join("clean.rs"), GREETER).expect("write clean");

        let checks = vec![Check::RejectsCompile {
            path: PathBuf::from("probe.rs"),
        }];
        let judgment = run_checks(
            &checks,
            Path::new("unused.rs"),
            temp.path(),
            temp.path(),
            limits(),
        )
        .expect("checks");
        assert!(judgment.all_passed());

        let checks = vec![Check::RejectsCompile {
            path: PathBuf::from("clean.rs"),
        }];
        let judgment = run_checks(
            &checks,
            Path::new("unused.rs"),
            temp.path(),
            temp.path(),
            limits(),
        )
        .expect("checks");
        assert!(!judgment.all_passed());
    }

    #[test]
    fn missing_rejects_probe_fails_the_check() {
        let temp = tempdir().expect("tempdir");
        let checks = vec![Check::RejectsCompile {
            path: PathBuf::from("rejects/gone.rs"),
        }];
        let judgment = run_checks(
            &checks,
            Path::new("unused.rs"),
            temp.path(),
            temp.path(),
            limits(),
        )
        .expect("checks");
        assert!(!judgment.all_passed());
        match &judgment.checks[0] {
            CheckOutcome::RejectsCompile { passed, stderr, .. } => {
                assert!(!passed);
                assert!(stderr.contains("not found"));
            }
            other => panic!("expected rejects outcome, got {other:?}"),
        }
    }

    #[test]
    fn check_validation_rejects_parent_dir_probe_paths() {
        let check = Check::RejectsCompile {
            path: PathBuf::from("../outside/probe.rs"),
        };
        assert!(check.validate().is_err());
    }

    #[test]
    fn check_validation_rejects_empty_needles() {
        let check = Check::RunOutputContains { needles: vec![] };
        assert!(check.validate().is_err());
        let check = Check::RejectsCompile {
            path: PathBuf::new(),
        };
        assert!(check.validate().is_err());
    }
}

//! CLI command implementations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::check::CheckOutcome;
use crate::compile::CommandLimits;
use crate::exit_codes;
use crate::manifest::CourseFile;
use crate::outcome::Status;
use crate::progress;
use crate::report::{aggregate, list_state};
use crate::verify::{CoursePaths, verify_exercise};

pub fn manifest_path(repo_root: &Path) -> PathBuf {
    repo_root.join("course.toml")
}

fn docs_root(repo_root: &Path) -> PathBuf {
    repo_root.join("docs")
}

/// List all exercises with their last-known state.
pub fn list_exercises(repo_root: &Path) -> Result<()> {
    let course = CourseFile::load(&manifest_path(repo_root))?;
    let paths = CoursePaths::new(repo_root);
    let (progress, warnings) = progress::load(&paths.progress_path());

    for def in &course.exercises {
        let state = list_state(def, &progress, repo_root);
        println!("{:<12} {:<8} {}", def.id, state.as_str(), def.topic);
    }
    for warning in warnings {
        eprintln!("warning: {}", warning);
    }
    Ok(())
}

/// Verify one exercise by id, or every exercise when no id is given.
///
/// Returns the exit code: 0 when everything passed, 2 on check failures.
pub fn verify(repo_root: &Path, id: Option<&str>, solution: bool) -> Result<i32> {
    let course = CourseFile::load(&manifest_path(repo_root))?;
    let paths = CoursePaths::new(repo_root);
    let limits = CommandLimits::default_limits();

    let defs: Vec<_> = match id {
        Some(id) => vec![course.exercise(id)?],
        None => course.exercises.iter().collect(),
    };

    info!(count = defs.len(), solution, "starting verification");
    let mut all_passed = true;
    for def in defs {
        debug!(id = %def.id, "verifying");
        let outcome = verify_exercise(&paths, def, solution, limits)
            .with_context(|| format!("verify {}", def.id))?;
        println!(
            "verify: id={} target={} status={}",
            outcome.id,
            outcome.target.display(),
            outcome.status.as_str()
        );
        if outcome.status != Status::Passed {
            all_passed = false;
            print_failures(&outcome.judgment.checks);
        }
    }

    Ok(if all_passed {
        exit_codes::OK
    } else {
        exit_codes::FAILED
    })
}

fn print_failures(checks: &[CheckOutcome]) {
    for check in checks {
        if check.passed() {
            continue;
        }
        println!("  failed: {}", check.label());
        match check {
            CheckOutcome::Compiles { stderr, .. }
            | CheckOutcome::RejectsCompile { stderr, .. } => {
                for line in stderr.lines().take(8) {
                    println!("    {line}");
                }
            }
            CheckOutcome::RunOutputContains {
                compiled, missing, stderr, ..
            } => {
                if !compiled {
                    for line in stderr.lines().take(8) {
                        println!("    {line}");
                    }
                }
                for needle in missing {
                    println!("    missing from stdout: {needle:?}");
                }
            }
        }
    }
}

/// Print the manifest hint for an exercise.
pub fn hint(repo_root: &Path, id: &str) -> Result<()> {
    let course = CourseFile::load(&manifest_path(repo_root))?;
    let def = course.exercise(id)?;
    println!("{}", def.hint.trim());
    Ok(())
}

/// Show aggregated progress over the whole course.
pub fn report(repo_root: &Path) -> Result<()> {
    let course = CourseFile::load(&manifest_path(repo_root))?;
    let paths = CoursePaths::new(repo_root);
    let (progress, mut warnings) = progress::load(&paths.progress_path());
    let (summary, aggregate_warnings) = aggregate(&course.exercises, &progress, repo_root);
    warnings.extend(aggregate_warnings);

    println!("report: exercises={}", summary.exercises);
    println!(
        "report: passed={} failed={} error={} stale={} pending={}",
        summary.passed, summary.failed, summary.error, summary.stale, summary.pending
    );
    for (label, (passed, total)) in summary.check_pass_rates {
        println!("report: check {} {}/{}", label, passed, total);
    }
    for warning in warnings {
        eprintln!("warning: {}", warning);
    }
    Ok(())
}

/// Validate the site section of the manifest against the docs tree.
pub fn site_check(repo_root: &Path) -> Result<i32> {
    let course = CourseFile::load(&manifest_path(repo_root))?;
    let broken = course
        .site
        .validate_routes(&docs_root(repo_root))
        .context("validate site routes")?;
    if broken.is_empty() {
        let links: usize = course
            .site
            .locales
            .iter()
            .map(|locale| locale.links().count())
            .sum();
        println!(
            "site: ok locales={} links={}",
            course.site.locales.len(),
            links
        );
        return Ok(exit_codes::OK);
    }
    for link in &broken {
        println!("site: broken {}", link);
    }
    Ok(exit_codes::FAILED)
}

/// Emit the site configuration as JSON for the documentation generator.
pub fn site_emit(repo_root: &Path, out: Option<&Path>) -> Result<()> {
    let course = CourseFile::load(&manifest_path(repo_root))?;
    let payload = course.site.emit()?;
    match out {
        Some(path) => {
            std::fs::write(path, payload).with_context(|| format!("write {}", path.display()))?;
            println!("site: wrote {}", path.display());
        }
        None => print!("{payload}"),
    }
    Ok(())
}

/// Remove the `.coach/` state directory (progress and scratch space).
pub fn clean(repo_root: &Path) -> Result<()> {
    let paths = CoursePaths::new(repo_root);
    if paths.state_dir.exists() {
        std::fs::remove_dir_all(&paths.state_dir)
            .with_context(|| format!("remove {}", paths.state_dir.display()))?;
        println!("clean: removed {}", paths.state_dir.display());
    } else {
        println!("clean: nothing to remove");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn clean_removes_the_state_dir_and_tolerates_absence() {
        let temp = tempdir().expect("tempdir");
        let state = temp.path().join(".coach");
        fs::create_dir_all(state.join("scratch")).expect("state dir");

        clean(temp.path()).expect("clean");
        assert!(!state.exists());

        // A second run has nothing to remove and must still succeed.
        clean(temp.path()).expect("clean again");
    }
}

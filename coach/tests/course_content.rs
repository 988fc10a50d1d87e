//! Course-level tests against the shipped content.
//!
//! These load the real `course.toml` and run the verification pipeline over
//! the reference solutions and the delivered exercise files, so a broken
//! solution, a stale stdout needle, or a dangling docs route fails CI.

use std::path::{Path, PathBuf};

use coach::compile::CommandLimits;
use coach::manifest::CourseFile;
use coach::outcome::Status;
use coach::verify::{CoursePaths, VerifyOutcome, verify_exercise};
use tempfile::tempdir;

fn repo_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("workspace root")
        .to_path_buf()
}

fn load_course() -> CourseFile {
    CourseFile::load(&repo_root().join("course.toml")).expect("course.toml loads")
}

/// State dir redirected to a tempdir so these tests never write `.coach/`
/// into the repository.
fn isolated_paths(state: &Path) -> CoursePaths {
    CoursePaths {
        repo_root: repo_root(),
        state_dir: state.to_path_buf(),
    }
}

#[test]
fn site_routes_resolve_to_docs_pages() {
    let course = load_course();
    let broken = course
        .site
        .validate_routes(&repo_root().join("docs"))
        .expect("validate routes");
    assert!(broken.is_empty(), "broken site routes: {broken:?}");
}

#[test]
fn every_locale_covers_every_exercise() {
    let course = load_course();
    for locale in &course.site.locales {
        for def in &course.exercises {
            let covered = locale
                .links()
                .any(|item| item.link.ends_with(&format!("/{}", def.id)));
            assert!(
                covered,
                "locale {} has no menu entry for exercise {}",
                locale.lang, def.id
            );
        }
    }
}

#[test]
fn reference_solutions_pass_all_checks() {
    let course = load_course();
    let state = tempdir().expect("tempdir");
    let paths = isolated_paths(state.path());

    for def in &course.exercises {
        let outcome: VerifyOutcome =
            verify_exercise(&paths, def, true, CommandLimits::default_limits())
                .unwrap_or_else(|err| panic!("verify {} errored: {err:#}", def.id));
        assert_eq!(
            outcome.status,
            Status::Passed,
            "solution {} did not pass: {:?}",
            def.id,
            outcome.judgment
        );
    }
    assert!(
        !paths.progress_path().exists(),
        "solution runs must not record progress"
    );
}

#[test]
fn delivered_exercises_start_failed() {
    let course = load_course();
    let state = tempdir().expect("tempdir");
    let paths = isolated_paths(state.path());

    // The shipped exercise files have gaps; the compiles check must fail for
    // each of them, otherwise the drill has nothing left to teach.
    for def in &course.exercises {
        let outcome = verify_exercise(&paths, def, false, CommandLimits::default_limits())
            .unwrap_or_else(|err| panic!("verify {} errored: {err:#}", def.id));
        assert_eq!(
            outcome.status,
            Status::Failed,
            "exercise {} unexpectedly passed in its delivered state",
            def.id
        );
    }
}

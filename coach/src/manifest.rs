//! Course manifest parsing and validation.
//!
//! The whole course is described by a single `course.toml` at the repository
//! root: site metadata for the documentation generator, and one entry per
//! exercise/solution pair with its verification checks.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;

use crate::check::Check;
use crate::site::SiteConfig;

/// A parsed course manifest: course metadata, site config, and exercises.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CourseFile {
    pub course: CourseMeta,
    pub site: SiteConfig,
    #[serde(default)]
    pub exercises: Vec<ExerciseDef>,
}

/// Course metadata: identifier and short description.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CourseMeta {
    /// Unique identifier (slug format: `[a-z0-9_-]+`).
    pub id: String,
    pub title: String,
    pub description: String,
}

/// One exercise/solution pair and how to verify it.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ExerciseDef {
    /// Unique identifier (slug format: `[a-z0-9_-]+`).
    pub id: String,
    /// One-line statement of what the exercise teaches.
    pub topic: String,
    /// Learner file, relative to the repository root.
    pub path: PathBuf,
    /// Reference solution, relative to the repository root.
    pub solution: PathBuf,
    /// Shown by `coach hint`.
    pub hint: String,
    #[serde(default)]
    pub checks: Vec<Check>,
}

impl CourseFile {
    /// Load and validate a course manifest from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("read manifest {}", path.display()))?;
        let course: CourseFile = toml::from_str(&contents)
            .with_context(|| format!("parse manifest {}", path.display()))?;
        course
            .validate()
            .with_context(|| format!("validate manifest {}", path.display()))?;
        Ok(course)
    }

    #[cfg(test)]
    pub fn parse_str(contents: &str) -> Result<Self> {
        let course: CourseFile = toml::from_str(contents).context("parse manifest")?;
        course.validate()?;
        Ok(course)
    }

    /// Find the exercise with the given id.
    pub fn exercise(&self, id: &str) -> Result<&ExerciseDef> {
        self.exercises
            .iter()
            .find(|def| def.id == id)
            .ok_or_else(|| anyhow!("no exercise with id {id}"))
    }

    fn validate(&self) -> Result<()> {
        validate_slug("course.id", &self.course.id)?;
        if self.course.title.trim().is_empty() {
            bail!("course.title must be non-empty");
        }
        if self.course.description.trim().is_empty() {
            bail!("course.description must be non-empty");
        }
        self.site.validate_shape().context("site invalid")?;
        if self.exercises.is_empty() {
            bail!("exercises must be a non-empty array");
        }
        for def in &self.exercises {
            def.validate()
                .with_context(|| format!("exercise {} invalid", def.id))?;
        }
        let mut ids: Vec<&str> = self.exercises.iter().map(|def| def.id.as_str()).collect();
        ids.sort_unstable();
        for pair in ids.windows(2) {
            if pair[0] == pair[1] {
                bail!("duplicate exercise id {}", pair[0]);
            }
        }
        Ok(())
    }
}

impl ExerciseDef {
    fn validate(&self) -> Result<()> {
        validate_slug("exercise id", &self.id)?;
        if self.topic.trim().is_empty() {
            bail!("topic must be non-empty");
        }
        if self.hint.trim().is_empty() {
            bail!("hint must be non-empty");
        }
        validate_relative_path("path", &self.path)?;
        validate_relative_path("solution", &self.solution)?;
        if self.checks.is_empty() {
            bail!("checks must be a non-empty array");
        }
        for (index, check) in self.checks.iter().enumerate() {
            check
                .validate()
                .with_context(|| format!("checks[{}] invalid", index))?;
        }
        Ok(())
    }
}

fn validate_relative_path(label: &str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        bail!("{label} must be non-empty");
    }
    if path.is_absolute() {
        bail!("{label} must be relative to the repository root");
    }
    if path.components().any(|c| c.as_os_str() == "..") {
        bail!("{label} must not contain '..'");
    }
    Ok(())
}

fn validate_slug(label: &str, id: &str) -> Result<()> {
    if id.trim().is_empty() {
        bail!("{label} must be non-empty");
    }
    if id.contains('/') || id.contains('\\') {
        bail!("{label} must not contain path separators");
    }
    if id.contains("..") {
        bail!("{label} must not contain '..'");
    }
    if !id
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' || ch == '_')
    {
        bail!("{label} must use [a-z0-9_-] only");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_manifest(exercise_id: &str) -> String {
        format!(
            r#"
[course]
id = "drills"
title = "Type Drills"
description = "Self-study course"

[site]
title = "Type Drills"
description = "Self-study course"
base = "/drills/"
favicon = "/favicon.ico"
default_locale = "en"

[[site.locales]]
lang = "en"
label = "English"
nav = [{{ text = "Home", link = "/en/" }}]

[[site.locales.sidebar]]
text = "Start"
items = [{{ text = "Welcome", link = "/en/" }}]

[[exercises]]
id = "{exercise_id}"
topic = "structs and enums"
path = "exercises/basics.rs"
solution = "solutions/basics.rs"
hint = "model the role as an enum"

[[exercises.checks]]
type = "compiles"
"#
        )
    }

    #[test]
    fn parses_valid_manifest() {
        let course = CourseFile::parse_str(&minimal_manifest("basics")).expect("manifest parses");
        assert_eq!(course.course.id, "drills");
        assert_eq!(course.exercises.len(), 1);
        assert_eq!(course.exercise("basics").expect("lookup").id, "basics");
    }

    #[test]
    fn rejects_invalid_exercise_id() {
        let err = CourseFile::parse_str(&minimal_manifest("bad/id")).expect_err("invalid id");
        assert!(err.to_string().contains("exercise"));
    }

    #[test]
    fn rejects_duplicate_exercise_ids() {
        let mut manifest = minimal_manifest("basics");
        manifest.push_str(
            r#"
[[exercises]]
id = "basics"
topic = "again"
path = "exercises/basics.rs"
solution = "solutions/basics.rs"
hint = "same"

[[exercises.checks]]
type = "compiles"
"#,
        );
        let err = CourseFile::parse_str(&manifest).expect_err("duplicate id");
        assert!(err.to_string().contains("duplicate exercise id"));
    }

    #[test]
    fn rejects_exercise_without_checks() {
        let manifest = minimal_manifest("basics").replace(
            "[[exercises.checks]]\ntype = \"compiles\"\n",
            "",
        );
        let err = CourseFile::parse_str(&manifest).expect_err("no checks");
        assert!(err.to_string().contains("checks"));
    }

    #[test]
    fn rejects_absolute_paths() {
        let manifest =
            minimal_manifest("basics").replace("exercises/basics.rs", "/etc/basics.rs");
        let err = CourseFile::parse_str(&manifest).expect_err("absolute path");
        assert!(err.to_string().contains("relative"));
    }
}

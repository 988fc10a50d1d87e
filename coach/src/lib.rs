//! Verifying coach for the type-system course.
//!
//! The repository around this crate is teaching material: standalone
//! exercise/solution files and a documentation-site manifest. The coach is the
//! one piece of software the course carries:
//!
//! - **[`manifest`]/[`site`]**: parse and validate `course.toml`, including
//!   the per-locale navigation trees consumed by the documentation generator.
//! - **[`compile`]/[`check`]**: drive `rustc` over exercise files, run the
//!   produced binaries, and compile the rejects probes that must fail.
//! - **[`verify`]/[`outcome`]/[`progress`]/[`report`]**: classify results,
//!   persist learner progress, and aggregate it.

pub mod check;
pub mod cli;
pub mod compile;
pub mod exit_codes;
pub mod logging;
pub mod manifest;
pub mod outcome;
pub mod progress;
pub mod report;
pub mod site;
pub mod verify;

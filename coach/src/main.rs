//! Verifying coach for the type-system course.
//!
//! Compiles exercise files with `rustc`, checks expected program output,
//! compiles the rejects probes that must fail, tracks learner progress under
//! `.coach/`, and validates the documentation-site manifest.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use coach::{cli, exit_codes, logging};

#[derive(Parser)]
#[command(name = "coach", version, about = "Verifying coach for the type-system course")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List exercises with their last-known state.
    List,
    /// Verify one exercise, or all of them when no id is given.
    Verify {
        id: Option<String>,
        /// Verify the reference solution instead of the learner file.
        #[arg(long)]
        solution: bool,
    },
    /// Print the hint for an exercise.
    Hint { id: String },
    /// Show aggregated progress.
    Report,
    /// Validate the site navigation against the docs tree.
    SiteCheck,
    /// Emit the site configuration as JSON for the documentation generator.
    SiteEmit {
        /// Write to a file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Remove the `.coach/` state directory.
    Clean,
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let repo_root = std::env::current_dir()?;
    match cli.command {
        Command::List => cli::list_exercises(&repo_root).map(|()| exit_codes::OK),
        Command::Verify { id, solution } => cli::verify(&repo_root, id.as_deref(), solution),
        Command::Hint { id } => cli::hint(&repo_root, &id).map(|()| exit_codes::OK),
        Command::Report => cli::report(&repo_root).map(|()| exit_codes::OK),
        Command::SiteCheck => cli::site_check(&repo_root),
        Command::SiteEmit { out } => {
            cli::site_emit(&repo_root, out.as_deref()).map(|()| exit_codes::OK)
        }
        Command::Clean => cli::clean(&repo_root).map(|()| exit_codes::OK),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_verify_all() {
        let cli = Cli::parse_from(["coach", "verify"]);
        assert!(matches!(
            cli.command,
            Command::Verify {
                id: None,
                solution: false
            }
        ));
    }

    #[test]
    fn parse_verify_solution() {
        let cli = Cli::parse_from(["coach", "verify", "pizza", "--solution"]);
        match cli.command {
            Command::Verify { id, solution } => {
                assert_eq!(id.as_deref(), Some("pizza"));
                assert!(solution);
            }
            _ => panic!("expected verify"),
        }
    }

    #[test]
    fn parse_site_emit_out() {
        let cli = Cli::parse_from(["coach", "site-emit", "--out", "site.json"]);
        match cli.command {
            Command::SiteEmit { out } => {
                assert_eq!(out, Some(PathBuf::from("site.json")));
            }
            _ => panic!("expected site-emit"),
        }
    }
}

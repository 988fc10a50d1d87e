//! Driving `rustc` over standalone course files.
//!
//! Exercises and solutions are single dependency-free files, so verification
//! is a plain `rustc` invocation into a scratch directory followed by running
//! the produced binary. Commands run with a wall-clock timeout and bounded
//! output capture.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use chrono::Utc;
use rand::{Rng, distributions::Alphanumeric};
use tracing::{debug, warn};
use wait_timeout::ChildExt;

/// Limits for compiler and program execution.
#[derive(Debug, Clone, Copy)]
pub struct CommandLimits {
    /// Maximum time before killing the command.
    pub timeout: Duration,
    /// Maximum bytes to capture from stdout/stderr.
    pub output_limit_bytes: usize,
}

impl CommandLimits {
    /// Default limits: 60s timeout, 50KB output.
    pub fn default_limits() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            output_limit_bytes: 50_000,
        }
    }
}

/// Captured output of a finished command.
#[derive(Debug)]
pub struct CommandOutput {
    pub exit_code: Option<i32>,
    pub success: bool,
    pub timed_out: bool,
    pub stdout: String,
    pub stderr: String,
    pub stdout_truncated: bool,
    pub stderr_truncated: bool,
}

/// A per-verification scratch directory, removed on drop.
#[derive(Debug)]
pub struct Scratch {
    root: PathBuf,
}

impl Scratch {
    /// Create a scratch directory under `base` named `<id>_<timestamp>_<suffix>`.
    pub fn create(base: &Path, id: &str) -> Result<Self> {
        let name = format!("{id}_{}_{}", generate_timestamp(), generate_short_id());
        let root = base.join(name);
        std::fs::create_dir_all(&root)
            .with_context(|| format!("create scratch dir {}", root.display()))?;
        Ok(Self { root })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        if let Err(err) = std::fs::remove_dir_all(&self.root) {
            warn!(scratch = %self.root.display(), err = %err, "failed to remove scratch dir");
        }
    }
}

/// Compile a standalone source file into the scratch directory.
///
/// Returns the command output plus the path the binary was written to (only
/// meaningful when `success` is true).
pub fn compile(source: &Path, scratch: &Path, limits: CommandLimits) -> Result<(CommandOutput, PathBuf)> {
    let stem = source
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| anyhow!("source file has no usable name: {}", source.display()))?;
    let binary = scratch.join(format!("{stem}{}", std::env::consts::EXE_SUFFIX));

    let mut cmd = Command::new("rustc");
    cmd.arg("--edition=2021")
        .arg("-o")
        .arg(&binary)
        .arg(source);

    debug!(source = %source.display(), "compiling");
    let output = run_command(cmd, limits)
        .with_context(|| format!("compile {}", source.display()))?;
    debug!(success = output.success, timed_out = output.timed_out, "compile finished");
    Ok((output, binary))
}

/// Run a compiled binary and capture its output.
pub fn run(binary: &Path, limits: CommandLimits) -> Result<CommandOutput> {
    debug!(binary = %binary.display(), "running");
    let output = run_command(Command::new(binary), limits)
        .with_context(|| format!("run {}", binary.display()))?;
    debug!(exit_code = ?output.exit_code, timed_out = output.timed_out, "run finished");
    Ok(output)
}

/// Run a command with a timeout, draining stdout/stderr concurrently so the
/// child can never block on a full pipe.
fn run_command(mut cmd: Command, limits: CommandLimits) -> Result<CommandOutput> {
    cmd.stdin(Stdio::null()).stdout(Stdio::piped()).stderr(Stdio::piped());

    let mut child = cmd.spawn().context("spawn command")?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| anyhow!("stdout was not piped"))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| anyhow!("stderr was not piped"))?;

    let limit = limits.output_limit_bytes;
    let stdout_handle = thread::spawn(move || read_stream_limited(stdout, limit));
    let stderr_handle = thread::spawn(move || read_stream_limited(stderr, limit));

    let mut timed_out = false;
    let status = match child.wait_timeout(limits.timeout).context("wait for command")? {
        Some(status) => status,
        None => {
            warn!(timeout_secs = limits.timeout.as_secs(), "command timed out, killing");
            timed_out = true;
            child.kill().context("kill command")?;
            child.wait().context("wait command after kill")?
        }
    };

    let (stdout, stdout_truncated) = join_output(stdout_handle).context("join stdout")?;
    let (stderr, stderr_truncated) = join_output(stderr_handle).context("join stderr")?;

    if stdout_truncated || stderr_truncated {
        warn!(stdout_truncated, stderr_truncated, "output truncated");
    }

    Ok(CommandOutput {
        exit_code: status.code(),
        success: !timed_out && status.success(),
        timed_out,
        stdout: String::from_utf8_lossy(&stdout).to_string(),
        stderr: String::from_utf8_lossy(&stderr).to_string(),
        stdout_truncated,
        stderr_truncated,
    })
}

fn join_output(handle: thread::JoinHandle<Result<(Vec<u8>, bool)>>) -> Result<(Vec<u8>, bool)> {
    match handle.join() {
        Ok(result) => result,
        Err(_) => Err(anyhow!("output reader thread panicked")),
    }
}

fn read_stream_limited<R: Read>(mut reader: R, limit: usize) -> Result<(Vec<u8>, bool)> {
    let mut buf = Vec::new();
    let mut truncated = false;
    let mut chunk = [0u8; 8192];

    loop {
        let n = reader.read(&mut chunk).context("read output")?;
        if n == 0 {
            break;
        }
        let remaining = limit.saturating_sub(buf.len());
        if remaining > 0 {
            buf.extend_from_slice(&chunk[..n.min(remaining)]);
        }
        if n > remaining {
            truncated = true;
        }
    }

    Ok((buf, truncated))
}

fn generate_timestamp() -> String {
    Utc::now().format("%Y%m%d_%H%M%S").to_string()
}

fn generate_short_id() -> String {
    let mut rng = rand::thread_rng();
    std::iter::repeat_with(|| rng.sample(Alphanumeric))
        .map(char::from)
        .take(6)
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn scratch_is_removed_on_drop() {
        let temp = tempdir().expect("tempdir");
        let path = {
            let scratch = Scratch::create(temp.path(), "case").expect("scratch");
            assert!(scratch.path().is_dir());
            scratch.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn compiles_and_runs_a_hello_program() {
        let temp = tempdir().expect("tempdir");
        let source = temp.path().join("hello.rs");
        fs::write(&source, "fn main() { println!(\"hi there\"); }\n").expect("write source");

        let limits = CommandLimits::default_limits();
        let (compiled, binary) = compile(&source, temp.path(), limits).expect("compile");
        assert!(compiled.success, "stderr: {}", compiled.stderr);

        let ran = run(&binary, limits).expect("run");
        assert!(ran.success);
        assert!(ran.stdout.contains("hi there"));
    }

    #[test]
    fn reports_compile_failure_with_diagnostics() {
        let temp = tempdir().expect("tempdir");
        let source = temp.path().join("broken.rs");
        fs::write(&source, "fn main() { let x: u8 = \"nope\"; }\n").expect("write source");

        let (compiled, _binary) =
            compile(&source, temp.path(), CommandLimits::default_limits()).expect("compile");
        assert!(!compiled.success);
        assert!(compiled.stderr.contains("mismatched types"));
    }

    #[test]
    fn output_is_truncated_at_the_limit() {
        let temp = tempdir().expect("tempdir");
        let source = temp.path().join("loud.rs");
        fs::write(
            &source,
            "fn main() { for _ in 0..100 { println!(\"aaaaaaaaaaaaaaaa\"); } }\n",
        )
        .expect("write source");

        let limits = CommandLimits {
            timeout: Duration::from_secs(60),
            output_limit_bytes: 32,
        };
        let (compiled, binary) =
            compile(&source, temp.path(), CommandLimits::default_limits()).expect("compile");
        assert!(compiled.success, "stderr: {}", compiled.stderr);

        let ran = run(&binary, limits).expect("run");
        assert!(ran.stdout_truncated);
        assert!(ran.stdout.len() <= 32);
    }
}

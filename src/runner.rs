//! Runs the Solana build toolchain and captures its outcome.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

use crate::model::{BUILD_ARGS, BUILD_PROGRAM, BuildResult, CARGO_FEATURES_ENV, RUSTFLAGS};

/// Fully resolved child invocation: program, argument vector, working
/// directory and extra environment entries. Kept as structured data so
/// nothing is ever interpreted by a shell.
#[derive(Debug)]
pub struct BuildCommand {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub env: Vec<(String, String)>,
}

impl BuildCommand {
    /// The fixed `cargo +solana build-sbf` invocation, with `RUSTFLAGS` set
    /// to the recommended Solana flag list and any extra features exposed to
    /// cargo via `CARGO_FEATURES`.
    pub fn toolchain(project_dir: &Path, features: Option<&[String]>) -> Self {
        let mut env = vec![("RUSTFLAGS".to_string(), RUSTFLAGS.to_string())];
        if let Some(features) = features {
            env.push((CARGO_FEATURES_ENV.to_string(), features.join(" ")));
        }

        BuildCommand {
            program: BUILD_PROGRAM.to_string(),
            args: BUILD_ARGS.iter().map(|a| a.to_string()).collect(),
            cwd: project_dir.to_path_buf(),
            env,
        }
    }
}

/// Directory containing the running executable, canonicalized.
///
/// The tool is dropped into the project it builds, so this doubles as the
/// project directory and as the working directory for the child process.
pub fn project_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Locating current executable")?;
    let dir = exe
        .parent()
        .context("Executable has no parent directory")?;
    std::fs::canonicalize(dir).with_context(|| format!("Resolving {}", dir.display()))
}

/// Run the build command to completion and capture its exit code.
///
/// With `stream_live` the child inherits this process's stdout/stderr and no
/// log files are produced. Otherwise both streams are redirected into two
/// freshly created, uniquely named files that survive the call.
///
/// A non-zero exit code is a reported outcome, not an error; only failure to
/// launch the child at all comes back as `Err`.
pub fn run_build(command: &BuildCommand, stream_live: bool) -> Result<BuildResult> {
    debug!("Running `{} {}`", command.program, command.args.join(" "));

    let mut child = Command::new(&command.program);
    child.args(&command.args).current_dir(&command.cwd);
    for (key, value) in &command.env {
        child.env(key, value);
    }

    if stream_live {
        let status = launch(&mut child, &command.program)?;
        return Ok(BuildResult {
            stdout_log: None,
            stderr_log: None,
            exit_code: status,
        });
    }

    let (stdout_file, stdout_log) = persistent_log_file(".stdout")?;
    let (stderr_file, stderr_log) = persistent_log_file(".stderr")?;
    debug!(
        "Temporary log files located at {} and {}",
        stdout_log.display(),
        stderr_log.display()
    );

    child
        .stdout(Stdio::from(stdout_file))
        .stderr(Stdio::from(stderr_file));
    let status = launch(&mut child, &command.program)?;

    Ok(BuildResult {
        stdout_log: Some(stdout_log),
        stderr_log: Some(stderr_log),
        exit_code: status,
    })
}

/// Spawn the child and wait for it. A child killed by a signal has no exit
/// code and is reported as -1.
fn launch(child: &mut Command, program: &str) -> Result<i32> {
    let status = child
        .status()
        .with_context(|| format!("Launching `{program}`"))?;
    Ok(status.code().unwrap_or(-1))
}

/// Create a uniquely named log file that is kept on disk after this process
/// exits.
fn persistent_log_file(suffix: &str) -> Result<(File, PathBuf)> {
    let file = tempfile::Builder::new()
        .prefix("certora_build_")
        .suffix(suffix)
        .tempfile()
        .with_context(|| format!("Creating {suffix} log file"))?;
    let (file, path) = file
        .keep()
        .with_context(|| format!("Persisting {suffix} log file"))?;
    Ok((file, path))
}

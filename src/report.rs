//! Assembles the JSON document consumed by the prover and renders it.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::model::{BuildResult, EXECUTABLES, SOURCES};

/// One build invocation summarized for the prover.
#[derive(Debug, Serialize)]
pub struct Report {
    pub project_directory: String,
    pub sources: Vec<String>,
    pub executables: String,
    pub success: bool,
    pub return_code: i32,
    pub log: LogFiles,
}

#[derive(Debug, Serialize)]
pub struct LogFiles {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
}

impl Report {
    pub fn new(project_dir: &Path, result: &BuildResult) -> Self {
        Report {
            project_directory: project_dir.display().to_string(),
            sources: SOURCES.iter().map(|s| s.to_string()).collect(),
            executables: EXECUTABLES.to_string(),
            success: result.success(),
            return_code: result.exit_code,
            log: LogFiles {
                stdout: result.stdout_log.as_ref().map(|p| p.display().to_string()),
                stderr: result.stderr_log.as_ref().map(|p| p.display().to_string()),
            },
        }
    }

    /// Pretty-printed JSON, 4-space indented. Both output paths render from
    /// this one string so file and console content never diverge.
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)
            .context("Serializing build report")?;
        String::from_utf8(buf).context("Build report is not valid UTF-8")
    }

    /// Write the report to `path`, replacing any existing content.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)
            .with_context(|| format!("Writing {}", path.display()))?;
        debug!("Output written to {}", path.display());
        Ok(())
    }

    /// Dump the report to standard output.
    pub fn print(&self) -> Result<()> {
        println!("{}", self.to_json()?);
        Ok(())
    }
}

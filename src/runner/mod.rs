// Runner module - builds and executes the external analyzer invocation

pub mod config;

pub use config::ToolConfig;

use crate::error::LakescanError;
use crate::models::{AnalysisOutcome, AnalysisResult};
use std::io;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Executes the analyzer's `analyze` subcommand against a staged workspace
/// and classifies the outcome.
///
/// Tool failures are not errors: a non-zero exit or a missing report comes
/// back as data in the [`AnalysisResult`]. Only a process that cannot be
/// launched at all propagates as [`LakescanError::CommandNotFound`].
pub struct AnalysisRunner {
    config: ToolConfig,
}

impl AnalysisRunner {
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    /// Report location the analyzer is told to write to. Fixed naming
    /// convention; callers may rely on this exact pattern.
    pub fn artifact_path(output_dir: &Path, canonical_id: &str) -> PathBuf {
        output_dir.join(format!("{}-inventory.xlsx", canonical_id))
    }

    /// Full argument vector for one invocation, program excluded.
    pub fn analyze_args(
        &self,
        canonical_id: &str,
        input_dir: &Path,
        artifact_path: &Path,
    ) -> Vec<String> {
        let mut args = self.config.leading_args.clone();
        args.push("analyze".to_string());
        args.push("--source-tech".to_string());
        args.push(canonical_id.to_string());
        args.push("--source-directory".to_string());
        args.push(input_dir.display().to_string());
        args.push("--report-file".to_string());
        args.push(artifact_path.display().to_string());
        args
    }

    /// Rendered command line for display and diagnostics.
    pub fn command_line(&self, canonical_id: &str, input_dir: &Path, output_dir: &Path) -> String {
        let artifact = Self::artifact_path(output_dir, canonical_id);
        self.config
            .render(&self.analyze_args(canonical_id, input_dir, &artifact))
    }

    /// Runs the analyzer synchronously from the caller's point of view: the
    /// future resolves only once the child process has exited. No timeout,
    /// no cancellation.
    pub async fn run(
        &self,
        canonical_id: &str,
        input_dir: &Path,
        output_dir: &Path,
    ) -> Result<AnalysisResult, LakescanError> {
        let artifact = Self::artifact_path(output_dir, canonical_id);
        let args = self.analyze_args(canonical_id, input_dir, &artifact);

        let output = Command::new(&self.config.program)
            .args(&args)
            .output()
            .await
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => LakescanError::CommandNotFound {
                    command: self.config.program.clone(),
                },
                _ => LakescanError::ExecutionFailed(e.to_string()),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Ok(AnalysisResult {
                outcome: AnalysisOutcome::CommandFailed,
                artifact_path: None,
                stdout,
                stderr,
            });
        }

        if !artifact.is_file() {
            return Ok(AnalysisResult {
                outcome: AnalysisOutcome::ArtifactMissing,
                artifact_path: None,
                stdout,
                stderr,
            });
        }

        let outcome = if stderr.is_empty() {
            AnalysisOutcome::Success
        } else {
            AnalysisOutcome::SuccessWithWarnings
        };

        Ok(AnalysisResult {
            outcome,
            artifact_path: Some(artifact),
            stdout,
            stderr,
        })
    }
}

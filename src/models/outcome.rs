use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisOutcome {
    /// Analyzer exited zero, the report exists, stderr was empty.
    Success,
    /// Analyzer exited zero and the report exists, but it emitted warnings.
    SuccessWithWarnings,
    /// Analyzer exited non-zero. The report file is not checked.
    CommandFailed,
    /// Analyzer exited zero but the report file was not written.
    ArtifactMissing,
}

impl AnalysisOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisOutcome::Success => "SUCCESS",
            AnalysisOutcome::SuccessWithWarnings => "SUCCESS_WITH_WARNINGS",
            AnalysisOutcome::CommandFailed => "COMMAND_FAILED",
            AnalysisOutcome::ArtifactMissing => "ARTIFACT_MISSING",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(
            self,
            AnalysisOutcome::Success | AnalysisOutcome::SuccessWithWarnings
        )
    }
}

/// Result of one analyzer invocation. Built once by the runner, immutable
/// afterwards; the presentation layer renders it and discards it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub outcome: AnalysisOutcome,
    /// Set only when the report file exists after a zero exit.
    pub artifact_path: Option<PathBuf>,
    pub stdout: String,
    pub stderr: String,
}

impl AnalysisResult {
    pub fn has_warnings(&self) -> bool {
        !self.stderr.is_empty()
    }
}

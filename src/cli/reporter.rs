use crate::cli::args::Cli;
use crate::error::LakescanError;
use crate::models::{AnalysisOutcome, AnalysisResult};

pub struct ReportFormatter {
    json: bool,
    verbose: bool,
}

impl ReportFormatter {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.json,
            verbose: cli.is_verbose(),
        }
    }

    pub fn format_result(
        &self,
        result: &AnalysisResult,
        command_line: &str,
    ) -> Result<String, LakescanError> {
        if self.json {
            return Ok(serde_json::to_string_pretty(result)?);
        }

        let mut output = String::new();

        if self.verbose {
            output.push_str(&format!("Running command: {}\n\n", command_line));
        }

        if !result.stdout.is_empty() {
            output.push_str("📄 CLI Output:\n");
            output.push_str(result.stdout.trim_end());
            output.push_str("\n\n");
        }

        if result.has_warnings() {
            output.push_str("⚠️ CLI Warnings:\n");
            output.push_str(result.stderr.trim_end());
            output.push_str("\n\n");
        }

        output.push_str(&self.format_outcome(result));

        Ok(output)
    }

    fn format_outcome(&self, result: &AnalysisResult) -> String {
        match result.outcome {
            AnalysisOutcome::Success => {
                format!("✅ Analysis completed!\n{}", self.format_artifact(result))
            }
            AnalysisOutcome::SuccessWithWarnings => format!(
                "✅ Analysis completed with warnings.\n{}",
                self.format_artifact(result)
            ),
            AnalysisOutcome::CommandFailed => "❌ Analyzer exited with an error.".to_string(),
            AnalysisOutcome::ArtifactMissing => {
                "❌ Report file not found after analyzer run.".to_string()
            }
        }
    }

    fn format_artifact(&self, result: &AnalysisResult) -> String {
        match result.artifact_path {
            Some(ref path) => format!("📥 Report: {}", path.display()),
            None => String::new(),
        }
    }
}

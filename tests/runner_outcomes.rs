use lakescan::error::LakescanError;
use lakescan::models::AnalysisOutcome;
use lakescan::runner::{AnalysisRunner, ToolConfig};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Stand-in for the analyzer CLI. Invoked as
/// `sh <script> analyze --source-tech <id> --source-directory <dir>
/// --report-file <file>`, so `$7` is the report path.
fn fake_analyzer(dir: &Path, body: &str) -> ToolConfig {
    let script = dir.join("fake-analyzer.sh");
    fs::write(&script, format!("#!/bin/sh\n{}\n", body)).unwrap();
    ToolConfig {
        program: "sh".to_string(),
        leading_args: vec![script.display().to_string()],
    }
}

fn dirs(base: &TempDir) -> (std::path::PathBuf, std::path::PathBuf) {
    let input = base.path().join("input");
    let output = base.path().join("analysis");
    fs::create_dir_all(&input).unwrap();
    fs::create_dir_all(&output).unwrap();
    (input, output)
}

#[tokio::test]
async fn zero_exit_with_artifact_and_clean_stderr_is_success() {
    let base = TempDir::new().unwrap();
    let (input, output) = dirs(&base);
    let tool = fake_analyzer(base.path(), "touch \"$7\"\necho \"inventory written\"");

    let result = AnalysisRunner::new(tool)
        .run("Oracle", &input, &output)
        .await
        .unwrap();

    assert_eq!(result.outcome, AnalysisOutcome::Success);
    assert_eq!(
        result.artifact_path.as_deref(),
        Some(output.join("Oracle-inventory.xlsx").as_path())
    );
    assert!(result.stdout.contains("inventory written"));
    assert!(result.stderr.is_empty());
}

#[tokio::test]
async fn zero_exit_with_artifact_and_stderr_is_success_with_warnings() {
    let base = TempDir::new().unwrap();
    let (input, output) = dirs(&base);
    let tool = fake_analyzer(base.path(), "touch \"$7\"\necho \"deprecated construct\" >&2");

    let result = AnalysisRunner::new(tool)
        .run("Hive", &input, &output)
        .await
        .unwrap();

    assert_eq!(result.outcome, AnalysisOutcome::SuccessWithWarnings);
    assert!(result.artifact_path.is_some());
    assert!(result.stderr.contains("deprecated construct"));
}

#[tokio::test]
async fn zero_exit_without_artifact_is_artifact_missing() {
    let base = TempDir::new().unwrap();
    let (input, output) = dirs(&base);
    let tool = fake_analyzer(base.path(), "echo \"nothing to report\"");

    let result = AnalysisRunner::new(tool)
        .run("Netezza", &input, &output)
        .await
        .unwrap();

    assert_eq!(result.outcome, AnalysisOutcome::ArtifactMissing);
    assert!(result.artifact_path.is_none());
}

#[tokio::test]
async fn zero_exit_without_artifact_is_missing_even_with_stderr() {
    let base = TempDir::new().unwrap();
    let (input, output) = dirs(&base);
    let tool = fake_analyzer(base.path(), "echo \"grumbling\" >&2");

    let result = AnalysisRunner::new(tool)
        .run("Netezza", &input, &output)
        .await
        .unwrap();

    assert_eq!(result.outcome, AnalysisOutcome::ArtifactMissing);
}

#[tokio::test]
async fn nonzero_exit_is_command_failed_and_artifact_is_not_checked() {
    let base = TempDir::new().unwrap();
    let (input, output) = dirs(&base);
    // Script writes the report anyway; a failed run must still not claim it
    let tool = fake_analyzer(
        base.path(),
        "touch \"$7\"\nprintf \"unsupported syntax\" >&2\nexit 1",
    );

    let result = AnalysisRunner::new(tool)
        .run("SAS", &input, &output)
        .await
        .unwrap();

    assert_eq!(result.outcome, AnalysisOutcome::CommandFailed);
    assert_eq!(result.stderr, "unsupported syntax");
    assert!(result.artifact_path.is_none());
}

#[tokio::test]
async fn unlaunchable_analyzer_is_a_fatal_error() {
    let base = TempDir::new().unwrap();
    let (input, output) = dirs(&base);
    let tool = ToolConfig {
        program: "definitely-not-a-real-analyzer".to_string(),
        leading_args: vec![],
    };

    let err = AnalysisRunner::new(tool)
        .run("Oracle", &input, &output)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        LakescanError::CommandNotFound { ref command } if command == "definitely-not-a-real-analyzer"
    ));
}

#[tokio::test]
async fn runner_passes_staged_paths_through_verbatim() {
    let base = TempDir::new().unwrap();
    let (input, output) = dirs(&base);
    fs::write(input.join("a.sql"), b"select 1;").unwrap();
    // Echo back the directory argument and copy its listing into the report
    let tool = fake_analyzer(base.path(), "ls \"$5\" > \"$7\"\necho \"scanned $5\"");

    let result = AnalysisRunner::new(tool)
        .run("Oracle", &input, &output)
        .await
        .unwrap();

    assert_eq!(result.outcome, AnalysisOutcome::Success);
    assert!(result.stdout.contains(&input.display().to_string()));
    let report = fs::read_to_string(result.artifact_path.unwrap()).unwrap();
    assert!(report.contains("a.sql"));
}

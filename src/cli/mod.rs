pub mod args;
pub mod reporter;

pub use args::Cli;
pub use reporter::ReportFormatter;

use crate::catalog::TechnologyCatalog;
use crate::error::LakescanError;
use crate::models::{AnalysisOutcome, InputSelection, UploadedFile};
use crate::runner::{AnalysisRunner, ToolConfig};
use crate::workspace::WorkspaceResolver;
use std::fs;

pub struct CliHandler {
    cli: Cli,
}

impl CliHandler {
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    pub async fn run(&self) -> Result<i32, LakescanError> {
        let catalog = TechnologyCatalog::new();

        if self.cli.list_technologies {
            for label in catalog.labels() {
                println!("{}", label);
            }
            return Ok(0);
        }

        // Step 1: Resolve the technology label. Unknown labels silently fall
        // back to the generic identifier; surface that in verbose mode only.
        let label = self
            .cli
            .source_tech
            .as_deref()
            .ok_or_else(|| LakescanError::InvalidArguments("--source-tech is required".to_string()))?;
        let canonical_id = catalog.resolve(label);

        if self.cli.is_verbose() {
            if catalog.contains(label) {
                eprintln!("🔎 Source technology: {} -> {}", label, canonical_id);
            } else {
                eprintln!(
                    "⚠️ Unknown technology label '{}', falling back to {}",
                    label, canonical_id
                );
            }
        }

        // Step 2: Build the input selection from the CLI flags
        let selection = self.build_selection()?;

        // Step 3: Stage the workspace
        let resolver = WorkspaceResolver::new(self.cli.get_base_dir());

        if self.cli.is_debug() {
            eprintln!("🗂 Workspace base: {}", resolver.base_dir().display());
        }

        let workspace = resolver.stage(canonical_id, &selection)?;

        if self.cli.is_verbose() {
            match selection {
                InputSelection::UploadedSet(ref files) => {
                    eprintln!(
                        "✅ Saved {} file(s) to {}",
                        files.len(),
                        workspace.input_dir.display()
                    );
                }
                InputSelection::FolderReference(_) => {
                    eprintln!("📂 Using folder: {}", workspace.input_dir.display());
                }
            }
        }

        // Step 4: Run the analyzer
        let tool = ToolConfig::resolve(self.cli.analyzer.as_deref())?;
        let runner = AnalysisRunner::new(tool);
        let command_line =
            runner.command_line(canonical_id, &workspace.input_dir, &workspace.output_dir);

        if self.cli.is_debug() {
            eprintln!("🔧 Executing: {}", command_line);
        }

        let result = runner
            .run(canonical_id, &workspace.input_dir, &workspace.output_dir)
            .await?;

        // Step 5: Render the result
        let formatter = ReportFormatter::new(&self.cli);
        println!("{}", formatter.format_result(&result, &command_line)?);

        Ok(match result.outcome {
            AnalysisOutcome::Success | AnalysisOutcome::SuccessWithWarnings => 0,
            AnalysisOutcome::CommandFailed => 3,
            AnalysisOutcome::ArtifactMissing => 4,
        })
    }

    /// Maps the raw --file/--folder flags onto the two input modes. Both or
    /// neither is an invalid mode; the core only ever sees a well-formed
    /// selection.
    fn build_selection(&self) -> Result<InputSelection, LakescanError> {
        match (self.cli.files.is_empty(), self.cli.folder.as_deref()) {
            (false, None) => {
                let mut files = Vec::with_capacity(self.cli.files.len());
                for path in &self.cli.files {
                    let name = path
                        .file_name()
                        .ok_or_else(|| {
                            LakescanError::InvalidArguments(format!(
                                "Not a file path: {}",
                                path.display()
                            ))
                        })?
                        .to_string_lossy()
                        .into_owned();
                    files.push(UploadedFile::new(name, fs::read(path)?));
                }
                Ok(InputSelection::UploadedSet(files))
            }
            (true, Some(folder)) => Ok(InputSelection::folder(folder)),
            _ => Err(LakescanError::InvalidMode),
        }
    }
}

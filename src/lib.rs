pub mod catalog;
pub mod cli;
pub mod error;
pub mod models;
pub mod runner;
pub mod workspace;

pub use error::LakescanError;

// Re-export commonly used types
pub use models::{AnalysisOutcome, AnalysisResult, InputSelection, UploadedFile, Workspace};

pub use catalog::TechnologyCatalog;
pub use runner::{AnalysisRunner, ToolConfig};
pub use workspace::WorkspaceResolver;

pub use cli::CliHandler;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LakescanError {
    #[error("No files were provided for upload staging")]
    EmptyUpload,

    #[error("Invalid source folder: {} is not an existing directory", path.display())]
    InvalidFolder { path: PathBuf },

    #[error("Invalid input selection: provide either uploaded files or a folder path, not both")]
    InvalidMode,

    #[error("Analyzer executable not found: {command}")]
    CommandNotFound { command: String },

    #[error("Analyzer execution failed: {0}")]
    ExecutionFailed(String),

    #[error("Invalid command line arguments: {0}")]
    InvalidArguments(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl LakescanError {
    /// Process exit code for errors that abort the invocation. Tool-level
    /// failures never reach this; they come back as an `AnalysisResult`.
    pub fn exit_code(&self) -> i32 {
        match self {
            LakescanError::InvalidArguments(_) => 2,    // Bad invocation
            LakescanError::EmptyUpload => 5,            // Upload mode with no files
            LakescanError::InvalidFolder { .. } => 6,   // Folder path not a directory
            LakescanError::InvalidMode => 6,            // Neither or both input modes
            LakescanError::CommandNotFound { .. } => 7, // Analyzer not on PATH
            _ => 1,                                     // General error
        }
    }
}

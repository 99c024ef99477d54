use crate::error::LakescanError;
use clap::Parser;
use std::path::PathBuf;

/// Environment variable overriding the workspace base directory.
pub const BASE_DIR_ENV_VAR: &str = "LAKESCAN_BASE_DIR";

const DEFAULT_BASE_DIR: &str = "/tmp/lakebridge-testing-files";

#[derive(Parser, Debug)]
#[command(name = "lakescan")]
#[command(about = "Stage source artifacts and run the LakeBridge analyzer against them")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    /// Source technology display label, e.g. "Oracle" or "Cloudera (Impala)"
    #[arg(short = 's', long)]
    pub source_tech: Option<String>,

    /// File to upload into the technology workspace (repeatable)
    #[arg(short = 'f', long = "file")]
    pub files: Vec<PathBuf>,

    /// Analyze an existing folder instead of uploading files.
    /// Relative paths resolve against the base directory
    #[arg(short = 'F', long)]
    pub folder: Option<String>,

    /// Base directory for per-technology workspaces
    #[arg(short = 'b', long)]
    pub base_dir: Option<PathBuf>,

    /// Analyzer command line, e.g. "databricks labs lakebridge"
    #[arg(short = 'a', long)]
    pub analyzer: Option<String>,

    /// Print the analysis result as JSON instead of formatted text
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Enable debug output including the full analyzer command line
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// List supported source technology labels and exit
    #[arg(long)]
    pub list_technologies: bool,
}

impl Cli {
    pub fn parse_args() -> Result<Self, LakescanError> {
        let cli = Self::try_parse().map_err(|e| LakescanError::InvalidArguments(e.to_string()))?;

        // Additional validation
        cli.validate()?;

        Ok(cli)
    }

    pub fn validate(&self) -> Result<(), LakescanError> {
        if self.list_technologies {
            return Ok(());
        }

        if self.source_tech.is_none() {
            return Err(LakescanError::InvalidArguments(
                "--source-tech is required".to_string(),
            ));
        }

        Ok(())
    }

    /// Priority: explicit --base-dir, then LAKESCAN_BASE_DIR, then the
    /// built-in default.
    pub fn get_base_dir(&self) -> PathBuf {
        if let Some(ref dir) = self.base_dir {
            return dir.clone();
        }
        if let Ok(dir) = std::env::var(BASE_DIR_ENV_VAR) {
            if !dir.is_empty() {
                return PathBuf::from(dir);
            }
        }
        PathBuf::from(DEFAULT_BASE_DIR)
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose || self.debug
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }
}

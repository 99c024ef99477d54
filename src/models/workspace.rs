use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Per-technology directory pair under the base directory.
///
/// `input_dir` is `<root>/input` when an upload was staged, or the caller's
/// own folder when a folder reference was used. `output_dir` is always
/// `<root>/analysis` and is where the analyzer writes its report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub root: PathBuf,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

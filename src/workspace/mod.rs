// Workspace module - stages input artifacts into per-technology directories

use crate::error::LakescanError;
use crate::models::{InputSelection, Workspace};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolves an [`InputSelection`] into a concrete [`Workspace`] under a
/// single base directory.
///
/// Workspaces are keyed by canonical identifier and reused across
/// invocations: directories are created once and kept, and only the contents
/// of `input/` are replaced when a fresh upload is staged. No locking is
/// applied; at most one active invocation per identifier is assumed.
pub struct WorkspaceResolver {
    base_dir: PathBuf,
}

impl WorkspaceResolver {
    pub fn new<P: Into<PathBuf>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Materializes `<base>/<id>/input` and `<base>/<id>/analysis` and stages
    /// the selection.
    ///
    /// Upload mode clears previously staged files and writes each upload
    /// under its verbatim filename (last write wins on duplicates). Folder
    /// mode bypasses the staged `input/` entirely and returns the caller's
    /// folder as the input directory, untouched.
    pub fn stage(
        &self,
        canonical_id: &str,
        selection: &InputSelection,
    ) -> Result<Workspace, LakescanError> {
        // Reject an empty upload before touching the filesystem
        if let InputSelection::UploadedSet(files) = selection {
            if files.is_empty() {
                return Err(LakescanError::EmptyUpload);
            }
        }

        let root = self.base_dir.join(canonical_id);
        let staged_input = root.join("input");
        let output_dir = root.join("analysis");
        fs::create_dir_all(&staged_input)?;
        fs::create_dir_all(&output_dir)?;

        let input_dir = match selection {
            InputSelection::UploadedSet(files) => {
                clear_staged_files(&staged_input)?;
                for file in files {
                    fs::write(staged_input.join(&file.name), &file.content)?;
                }
                staged_input
            }
            InputSelection::FolderReference(path) => {
                let resolved = if path.is_absolute() {
                    path.clone()
                } else {
                    self.base_dir.join(path)
                };
                if !resolved.is_dir() {
                    return Err(LakescanError::InvalidFolder { path: resolved });
                }
                resolved
            }
        };

        Ok(Workspace {
            root,
            input_dir,
            output_dir,
        })
    }
}

/// Flat, non-recursive clear: every non-directory entry directly inside the
/// staged input dir is removed, symlinks included. Subdirectories are left
/// alone; the directory is expected to hold only flat files.
fn clear_staged_files(dir: &Path) -> Result<(), LakescanError> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            fs::remove_file(entry.path())?;
        }
    }
    Ok(())
}

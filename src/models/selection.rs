use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One artifact submitted for staging. The name is used verbatim as the
/// filename inside the workspace input directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub name: String,
    pub content: Vec<u8>,
}

impl UploadedFile {
    pub fn new<N: Into<String>, C: Into<Vec<u8>>>(name: N, content: C) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// The two mutually-exclusive input modes. Exactly one is active per
/// invocation; the CLI boundary rejects any other combination before the
/// core sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputSelection {
    /// Uploaded file blobs, staged into the workspace input directory.
    UploadedSet(Vec<UploadedFile>),
    /// A caller-supplied folder, used in place of the staged input directory.
    /// Relative paths resolve against the workspace base directory.
    FolderReference(PathBuf),
}

impl InputSelection {
    pub fn uploaded<I>(files: I) -> Self
    where
        I: IntoIterator<Item = UploadedFile>,
    {
        InputSelection::UploadedSet(files.into_iter().collect())
    }

    pub fn folder<P: Into<PathBuf>>(path: P) -> Self {
        InputSelection::FolderReference(path.into())
    }
}

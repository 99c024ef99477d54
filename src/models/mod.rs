pub mod outcome;
pub mod selection;
pub mod workspace;

pub use outcome::{AnalysisOutcome, AnalysisResult};
pub use selection::{InputSelection, UploadedFile};
pub use workspace::Workspace;

use crate::domain::model::{SourceText, TransformedText};
use crate::utils::error::Result;

/// Reader and writer for whole text files.
///
/// Paths are passed through unvalidated. Implementations map failures onto
/// `NotFound`, `PermissionDenied` or `IoFailure` and never retry.
pub trait Storage {
    fn read_text(&self, path: &str) -> Result<SourceText>;

    /// Creates or truncates `path`. A failed write may leave a partial file.
    fn write_text(&self, path: &str, content: &TransformedText) -> Result<()>;
}

pub trait Pipeline {
    fn extract(&self, source: &str) -> Result<SourceText>;
    fn transform(&self, text: SourceText) -> TransformedText;
    fn load(&self, destination: &str, text: TransformedText) -> Result<()>;
}

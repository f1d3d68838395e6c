use crate::domain::model::{SourceText, TransformedText};
use crate::domain::ports::Storage;
use crate::utils::error::{FileOperation, ModifierError, Result};
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Filesystem-backed `Storage`.
///
/// Relative paths resolve against `base_path` when one is set, otherwise
/// against the process working directory. Errors always report the path as
/// the caller gave it.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    base_path: Option<PathBuf>,
}

impl LocalStorage {
    pub fn new() -> Self {
        Self { base_path: None }
    }

    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: Some(base_path.into()),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        match &self.base_path {
            Some(base) => base.join(path),
            None => Path::new(path).to_path_buf(),
        }
    }
}

impl Storage for LocalStorage {
    fn read_text(&self, path: &str) -> Result<SourceText> {
        let full_path = self.resolve(path);
        tracing::debug!("Reading {}", full_path.display());

        let mut file = File::open(&full_path)
            .map_err(|e| ModifierError::from_io(path, FileOperation::Read, e))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| ModifierError::from_io(path, FileOperation::Read, e))?;

        Ok(SourceText::new(content))
    }

    fn write_text(&self, path: &str, content: &TransformedText) -> Result<()> {
        let full_path = self.resolve(path);
        tracing::debug!(
            "Writing {} bytes to {}",
            content.as_str().len(),
            full_path.display()
        );

        let mut file = File::create(&full_path)
            .map_err(|e| ModifierError::from_io(path, FileOperation::Write, e))?;
        file.write_all(content.as_str().as_bytes())
            .map_err(|e| ModifierError::from_io(path, FileOperation::Write, e))?;

        Ok(())
    }
}

use crate::core::transform::modify_content;
use crate::core::{Pipeline, SourceText, Storage, TransformedText};
use crate::utils::error::Result;

/// Reader → Transformer → Writer over a `Storage`.
pub struct FileModifierPipeline<S: Storage> {
    storage: S,
}

impl<S: Storage> FileModifierPipeline<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

impl<S: Storage> Pipeline for FileModifierPipeline<S> {
    fn extract(&self, source: &str) -> Result<SourceText> {
        tracing::debug!("Extracting text from: {}", source);
        let text = self.storage.read_text(source)?;
        tracing::debug!("Read {} characters from {}", text.char_count(), source);
        Ok(text)
    }

    fn transform(&self, text: SourceText) -> TransformedText {
        TransformedText::new(modify_content(text.as_str()))
    }

    fn load(&self, destination: &str, text: TransformedText) -> Result<()> {
        tracing::debug!("Loading {} characters into: {}", text.char_count(), destination);
        self.storage.write_text(destination, &text)
    }
}

/// Full content of an input file, as loaded by a `Storage` reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText(String);

impl SourceText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of Unicode scalar values, not bytes.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

/// Output of the transformer, handed once to a `Storage` writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedText(String);

impl TransformedText {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub input_path: String,
    pub output_path: String,
    pub chars_read: usize,
    pub chars_written: usize,
}

use crate::core::{Pipeline, RunSummary};
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// One full read → transform → write invocation. Errors surface
    /// unchanged from the stage that raised them.
    pub fn run(&self, input_path: &str, output_path: &str) -> Result<RunSummary> {
        tracing::info!("Processing {} -> {}", input_path, output_path);

        // Extract
        tracing::debug!("Extracting text...");
        let source = self.pipeline.extract(input_path)?;
        let chars_read = source.char_count();

        // Transform
        tracing::debug!("Transforming text...");
        let transformed = self.pipeline.transform(source);
        let chars_written = transformed.char_count();

        // Load
        tracing::debug!("Loading text...");
        self.pipeline.load(output_path, transformed)?;

        tracing::info!(
            "Wrote {} characters to {} (read {})",
            chars_written,
            output_path,
            chars_read
        );

        Ok(RunSummary {
            input_path: input_path.to_string(),
            output_path: output_path.to_string(),
            chars_read,
            chars_written,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pipeline::tests::MockStorage;
    use crate::core::pipeline::FileModifierPipeline;
    use crate::core::transform::{FOOTER, HEADER};
    use crate::utils::error::ErrorKind;

    #[test]
    fn test_run_reads_transforms_and_writes() {
        let storage = MockStorage::new().with_file("in.txt", "hello\nworld");
        let engine = EtlEngine::new(FileModifierPipeline::new(storage.clone()));

        let summary = engine.run("in.txt", "out.txt").unwrap();

        let expected = format!("{}1. HELLO\n2. WORLD{}", HEADER, FOOTER);
        assert_eq!(storage.get_file("out.txt").unwrap(), expected);
        assert_eq!(summary.input_path, "in.txt");
        assert_eq!(summary.output_path, "out.txt");
        assert_eq!(summary.chars_read, 11);
        assert_eq!(summary.chars_written, expected.chars().count());
    }

    #[test]
    fn test_run_stops_before_writing_when_read_fails() {
        let storage = MockStorage::new();
        let engine = EtlEngine::new(FileModifierPipeline::new(storage.clone()));

        let err = engine.run("missing.txt", "out.txt").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(storage.get_file("out.txt").is_none());
    }

    #[test]
    fn test_run_surfaces_write_failure() {
        let storage = MockStorage::new()
            .with_file("in.txt", "data")
            .deny("out.txt");
        let engine = EtlEngine::new(FileModifierPipeline::new(storage));

        let err = engine.run("in.txt", "out.txt").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::PermissionDenied);
        assert_eq!(err.path(), Some("out.txt"));
    }

    #[test]
    fn test_same_path_for_input_and_output_overwrites_source() {
        let storage = MockStorage::new().with_file("notes.txt", "x");
        let engine = EtlEngine::new(FileModifierPipeline::new(storage.clone()));

        engine.run("notes.txt", "notes.txt").unwrap();

        assert_eq!(
            storage.get_file("notes.txt").unwrap(),
            format!("{}1. X{}", HEADER, FOOTER)
        );
    }
}

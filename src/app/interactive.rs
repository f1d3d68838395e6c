use crate::core::Pipeline;
use crate::utils::error::ModifierError;
use anyhow::Context;
use std::io::{BufRead, Write};

const BANNER: &str = "File Modifier Program\n\
---------------------\n\
This program reads a text file, modifies its content, and writes the result to a new file.\n";

const INPUT_PROMPT: &str = "Enter the name of the file to read (or 'exit' to quit): ";
const OUTPUT_PROMPT: &str = "Enter the name for the modified file: ";
const CONTINUE_PROMPT: &str = "\nWould you like to process another file? (y/n): ";
const GOODBYE: &str = "Exiting program. Goodbye!";

/// Prompt-driven loop over a `Pipeline`.
///
/// File errors from the pipeline are shown and the loop starts over; only
/// console I/O failures end the session with an error. End of input at any
/// prompt ends the session like `exit` does.
pub struct InteractiveSession<P: Pipeline, R: BufRead, W: Write> {
    pipeline: P,
    input: R,
    output: W,
}

impl<P: Pipeline, R: BufRead, W: Write> InteractiveSession<P, R, W> {
    pub fn new(pipeline: P, input: R, output: W) -> Self {
        Self {
            pipeline,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "{}", BANNER).context("failed to write to the console")?;

        loop {
            let Some(input_file) = self.prompt(INPUT_PROMPT)? else {
                return self.say_goodbye();
            };
            if input_file.to_lowercase() == "exit" {
                return self.say_goodbye();
            }

            let content = match self.pipeline.extract(&input_file) {
                Ok(content) => content,
                Err(e) => {
                    self.report(&e)?;
                    continue;
                }
            };
            self.say(&format!(
                "Successfully read file '{}' ({} characters)",
                input_file,
                content.char_count()
            ))?;

            let modified = self.pipeline.transform(content);
            self.say(&format!(
                "Content modified ({} characters)",
                modified.char_count()
            ))?;

            let Some(output_file) = self.prompt(OUTPUT_PROMPT)? else {
                return self.say_goodbye();
            };
            if let Err(e) = self.pipeline.load(&output_file, modified) {
                self.report(&e)?;
                continue;
            }
            tracing::info!("Processed {} -> {}", input_file, output_file);
            self.say(&format!(
                "Successfully wrote modified content to '{}'",
                output_file
            ))?;

            let Some(another) = self.prompt(CONTINUE_PROMPT)? else {
                return self.say_goodbye();
            };
            if another.to_lowercase() != "y" {
                return self.say_goodbye();
            }
        }
    }

    /// `None` on end of input.
    fn prompt(&mut self, text: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{}", text).context("failed to write to the console")?;
        self.output.flush().context("failed to flush the console")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from the console")?;
        if read == 0 {
            tracing::debug!("End of input reached");
            writeln!(self.output).context("failed to write to the console")?;
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn say(&mut self, message: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{}", message).context("failed to write to the console")
    }

    fn report(&mut self, error: &ModifierError) -> anyhow::Result<()> {
        tracing::debug!("{} ({:?})", error, error.kind());
        self.say(&error.to_string())?;
        self.say("Please try again with a different file.\n")
    }

    fn say_goodbye(&mut self) -> anyhow::Result<()> {
        self.say(GOODBYE)
    }
}

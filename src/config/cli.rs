use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_path, validate_required_field, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "file-modifier")]
#[command(about = "Uppercase, number and frame the lines of a text file")]
pub struct CliConfig {
    /// File to read; runs a single pass without prompting
    #[arg(short, long, requires = "output")]
    pub input: Option<String>,

    /// File to write the modified content to
    #[arg(short, long, requires = "input")]
    pub output: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl CliConfig {
    /// Input and output paths when both were given on the command line.
    pub fn one_shot(&self) -> Option<(&str, &str)> {
        match (&self.input, &self.output) {
            (Some(input), Some(output)) => Some((input.as_str(), output.as_str())),
            _ => None,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            validate_path("input", input)?;
            let output = validate_required_field("output", &self.output)?;
            validate_path("output", output)?;
        }
        Ok(())
    }
}

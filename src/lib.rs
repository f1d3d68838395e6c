pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::storage::LocalStorage;
pub use app::interactive::InteractiveSession;
pub use core::{etl::EtlEngine, pipeline::FileModifierPipeline, transform::modify_content};
pub use domain::model::{RunSummary, SourceText, TransformedText};
pub use utils::error::{ErrorKind, ModifierError, Result};

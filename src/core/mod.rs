pub mod etl;
pub mod pipeline;
pub mod transform;

pub use crate::domain::model::{RunSummary, SourceText, TransformedText};
pub use crate::domain::ports::{Pipeline, Storage};
pub use crate::utils::error::Result;

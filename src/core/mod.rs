pub mod engine;
pub mod extractor;
pub mod pipeline;
pub mod schema;

pub use crate::domain::model::{CompanyRecord, ExtractionReport, RunOutput, TableOutcome};
pub use crate::domain::ports::{ConfigProvider, MarkdownSource, Pipeline, Storage};
pub use crate::utils::error::Result;

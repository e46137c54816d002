pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{LocalStorage, UriFetcher};
#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{resolve_schema, SchemaFile};
pub use core::engine::ExtractEngine;
pub use core::extractor::TableRecordExtractor;
pub use core::pipeline::ExtractionPipeline;
pub use core::schema::{ColumnField, ColumnSpec, TableSchema};
pub use domain::model::{CompanyRecord, ExtractionReport, RunOutput, TableOutcome};
pub use utils::error::{ExtractError, Result};

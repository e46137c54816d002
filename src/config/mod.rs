#[cfg(feature = "cli")]
pub mod cli;
pub mod schema_file;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use schema_file::{resolve_schema, SchemaFile};

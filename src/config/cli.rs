use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, validate_uri, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "mdtable-extract")]
#[command(about = "Convert a URI to Markdown and extract company table rows into JSON")]
pub struct CliConfig {
    /// URI to convert (http:, https:, file:, data: or a local absolute path).
    /// Without it the tool enters an interactive prompt loop.
    #[arg(long)]
    pub uri: Option<String>,

    #[arg(long, default_value = ".")]
    pub output_path: String,

    #[arg(long, default_value = "companies_output.json")]
    pub output_file: String,

    /// Optional TOML file overriding the table schema (header names, field
    /// mapping, tag delimiter, case sensitivity).
    #[arg(long)]
    pub schema: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU/memory usage per phase")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)?;
        validate_non_empty_string("output_file", &self.output_file)?;

        if let Some(uri) = &self.uri {
            validate_uri("uri", uri)?;
        }

        if let Some(schema) = &self.schema {
            validate_path("schema", schema)?;
            validate_file_extension("schema", schema, "toml")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            uri: None,
            output_path: ".".to_string(),
            output_file: "companies_output.json".to_string(),
            schema: None,
            verbose: false,
            monitor: false,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_uri_scheme() {
        let config = CliConfig {
            uri: Some("ftp://example.com".to_string()),
            ..base_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_non_toml_schema_file() {
        let config = CliConfig {
            schema: Some("schema.yaml".to_string()),
            ..base_config()
        };
        assert!(config.validate().is_err());
    }
}

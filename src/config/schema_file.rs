use crate::core::schema::{ColumnSpec, TableSchema};
use crate::utils::error::{ExtractError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk form of a table schema:
///
/// ```toml
/// [table]
/// tag_delimiter = ","
/// case_insensitive = true
///
/// [[table.columns]]
/// header = "Company"
/// field = "name"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaFile {
    pub table: TableSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSection {
    pub tag_delimiter: Option<String>,
    pub case_insensitive: Option<bool>,
    pub columns: Vec<ColumnSpec>,
}

impl SchemaFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ExtractError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ExtractError::ConfigValidationError {
            field: "schema".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn into_schema(self) -> Result<TableSchema> {
        let defaults = TableSchema::default();

        let tag_delimiter = match self.table.tag_delimiter {
            None => defaults.tag_delimiter,
            Some(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => c,
                    _ => {
                        return Err(ExtractError::InvalidConfigValueError {
                            field: "table.tag_delimiter".to_string(),
                            value: s,
                            reason: "Delimiter must be a single character".to_string(),
                        })
                    }
                }
            }
        };

        let schema = TableSchema {
            columns: self.table.columns,
            tag_delimiter,
            case_insensitive: self.table.case_insensitive.unwrap_or(defaults.case_insensitive),
        };
        schema.validate()?;
        Ok(schema)
    }
}

/// Loads the schema from `path` when given, falling back to the built-in
/// default table shape.
pub fn resolve_schema(path: Option<&str>) -> Result<TableSchema> {
    match path {
        Some(path) => {
            tracing::debug!("Loading table schema from {}", path);
            SchemaFile::from_file(path)?.into_schema()
        }
        None => Ok(TableSchema::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schema::ColumnField;

    const MINIMAL: &str = r#"
[table]
tag_delimiter = ";"
case_insensitive = false

[[table.columns]]
header = "Startup"
field = "name"

[[table.columns]]
header = "Keywords"
field = "tags"
"#;

    #[test]
    fn test_parse_minimal_schema() {
        let schema = SchemaFile::from_toml_str(MINIMAL)
            .unwrap()
            .into_schema()
            .unwrap();
        assert_eq!(schema.columns.len(), 2);
        assert_eq!(schema.leading_column(), "Startup");
        assert_eq!(schema.columns[1].field, ColumnField::Tags);
        assert_eq!(schema.tag_delimiter, ';');
        assert!(!schema.case_insensitive);
    }

    #[test]
    fn test_defaults_apply_when_options_absent() {
        let toml = r#"
[table]
[[table.columns]]
header = "Company"
field = "name"
"#;
        let schema = SchemaFile::from_toml_str(toml)
            .unwrap()
            .into_schema()
            .unwrap();
        assert_eq!(schema.tag_delimiter, ',');
        assert!(schema.case_insensitive);
    }

    #[test]
    fn test_rejects_multi_char_delimiter() {
        let toml = r#"
[table]
tag_delimiter = ",,"
[[table.columns]]
header = "Company"
field = "name"
"#;
        assert!(SchemaFile::from_toml_str(toml).unwrap().into_schema().is_err());
    }

    #[test]
    fn test_rejects_schema_without_name_column() {
        let toml = r#"
[table]
[[table.columns]]
header = "Tags"
field = "tags"
"#;
        assert!(SchemaFile::from_toml_str(toml).unwrap().into_schema().is_err());
    }

    #[test]
    fn test_rejects_invalid_toml() {
        assert!(SchemaFile::from_toml_str("not toml at all [").is_err());
    }

    #[test]
    fn test_resolve_schema_default() {
        let schema = resolve_schema(None).unwrap();
        assert_eq!(schema.leading_column(), "Company");
    }
}

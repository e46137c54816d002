use crate::utils::error::{ExtractError, Result};
use serde::{Deserialize, Serialize};

/// Which record field a table column feeds. `FounderLink` may appear on any
/// number of columns; each non-empty cell appends one link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnField {
    Name,
    Website,
    SourceLink,
    Description,
    Tags,
    Location,
    FounderLink,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Header text as it appears in the table, e.g. "Company Website".
    pub header: String,
    pub field: ColumnField,
}

impl ColumnSpec {
    pub fn new(header: impl Into<String>, field: ColumnField) -> Self {
        Self {
            header: header.into(),
            field,
        }
    }
}

/// Header-matching rules and column order for one table shape.
///
/// Matching tolerance is deliberately configuration, not code: the exact rules
/// (case sensitivity, synonyms) are a product decision, so callers can swap in
/// a schema loaded from a file instead of recompiling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub columns: Vec<ColumnSpec>,
    pub tag_delimiter: char,
    pub case_insensitive: bool,
}

impl TableSchema {
    /// Header text of the leading column; a table is detected by this cell.
    pub fn leading_column(&self) -> &str {
        self.columns.first().map(|c| c.header.as_str()).unwrap_or("")
    }

    /// Whitespace is always trimmed; case folding is schema-controlled.
    pub fn matches_leading(&self, cell: &str) -> bool {
        let expected = self.leading_column().trim();
        let cell = cell.trim();
        if expected.is_empty() {
            return false;
        }
        if self.case_insensitive {
            cell.eq_ignore_ascii_case(expected)
        } else {
            cell == expected
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(ExtractError::ConfigValidationError {
                field: "table.columns".to_string(),
                message: "Schema must declare at least one column".to_string(),
            });
        }
        for (i, column) in self.columns.iter().enumerate() {
            if column.header.trim().is_empty() {
                return Err(ExtractError::ConfigValidationError {
                    field: format!("table.columns[{}].header", i),
                    message: "Column header cannot be empty".to_string(),
                });
            }
        }
        if !self.columns.iter().any(|c| c.field == ColumnField::Name) {
            return Err(ExtractError::ConfigValidationError {
                field: "table.columns".to_string(),
                message: "Schema must map one column to the 'name' field".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for TableSchema {
    /// The YC company listing shape the original tables used.
    fn default() -> Self {
        Self {
            columns: vec![
                ColumnSpec::new("Company", ColumnField::Name),
                ColumnSpec::new("Company Website", ColumnField::Website),
                ColumnSpec::new("YC Link", ColumnField::SourceLink),
                ColumnSpec::new("Short Description", ColumnField::Description),
                ColumnSpec::new("Tags", ColumnField::Tags),
                ColumnSpec::new("Location", ColumnField::Location),
                ColumnSpec::new("Founder Link 1", ColumnField::FounderLink),
                ColumnSpec::new("Founder Link 2", ColumnField::FounderLink),
                ColumnSpec::new("Founder Link 3", ColumnField::FounderLink),
            ],
            tag_delimiter: ',',
            case_insensitive: true,
        }
    }
}

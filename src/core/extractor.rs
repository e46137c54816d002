use crate::core::schema::{ColumnField, TableSchema};
use crate::domain::model::{CompanyRecord, TableOutcome};

/// Single-pass Markdown table classifier and row parser.
///
/// Pure function of its input: no I/O, no state between calls, safe to share
/// across threads. Malformed input never errors; it degrades to `NotATable`
/// or to records with empty trailing fields.
#[derive(Debug, Clone, Default)]
pub struct TableRecordExtractor {
    schema: TableSchema,
}

impl TableRecordExtractor {
    pub fn new(schema: TableSchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// Scan for a header row whose first non-empty cell matches the schema's
    /// leading column, then parse every following table row until a blank line
    /// or end of input. If the header is found the result is `Records`, even
    /// with zero data rows; otherwise `NotATable`.
    pub fn extract(&self, markdown: &str) -> TableOutcome {
        let mut lines = markdown.lines();

        // Scanning: titles like "## W24" or prose before the table are skipped.
        let header_found = lines.by_ref().any(|line| {
            split_cells(line)
                .and_then(|cells| cells.iter().find(|c| !c.is_empty()).copied())
                .is_some_and(|cell| self.schema.matches_leading(cell))
        });
        if !header_found {
            return TableOutcome::NotATable;
        }

        let mut rest = lines.peekable();

        // The dash separator carries no data. Tolerate its absence.
        if rest.peek().copied().map(is_separator_row).unwrap_or(false) {
            rest.next();
        }

        let mut records = Vec::new();
        for line in rest {
            if line.trim().is_empty() {
                break;
            }
            let Some(cells) = split_cells(line) else {
                // Stray non-table line inside the block, e.g. a footnote.
                tracing::debug!("Skipping non-table line inside table block: {:?}", line);
                continue;
            };
            if let Some(record) = self.parse_row(&cells) {
                records.push(record);
            }
        }

        TableOutcome::Records(records)
    }

    /// Cells map positionally onto the schema's column order; missing trailing
    /// cells become empty fields and surplus cells are ignored.
    fn parse_row(&self, cells: &[&str]) -> Option<CompanyRecord> {
        let mut record = CompanyRecord::default();

        for (spec, cell) in self.schema.columns.iter().zip(cells.iter()) {
            let value = normalize_cell(cell);
            match spec.field {
                ColumnField::Name => record.name = value,
                ColumnField::Website => record.website = value,
                ColumnField::SourceLink => record.source_link = value,
                ColumnField::Description => record.description = value,
                ColumnField::Location => record.location = value,
                ColumnField::Tags => {
                    record.tags = value
                        .split(self.schema.tag_delimiter)
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .map(str::to_string)
                        .collect();
                }
                ColumnField::FounderLink => {
                    if !value.is_empty() {
                        record.founder_links.push(value);
                    }
                }
            }
        }

        // Name is the one required field; a row without it is noise.
        if record.name.is_empty() {
            tracing::debug!("Skipping row with empty name cell");
            return None;
        }
        Some(record)
    }
}

/// Splits a `| a | b |` line into trimmed cells, or `None` for lines that are
/// not pipe-delimited table rows.
fn split_cells(line: &str) -> Option<Vec<&str>> {
    let trimmed = line.trim();
    let inner = trimmed.strip_prefix('|')?;
    // A trailing pipe is usual but optional in practice.
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    Some(inner.split('|').map(str::trim).collect())
}

/// `| --- | :--: |` style separator rows.
fn is_separator_row(line: &str) -> bool {
    match split_cells(line) {
        Some(cells) => {
            !cells.is_empty()
                && cells.iter().any(|c| c.contains('-'))
                && cells
                    .iter()
                    .all(|c| c.chars().all(|ch| matches!(ch, '-' | ':' | ' ')))
        }
        None => false,
    }
}

/// Trims a cell and treats pandas-style `nan` markers as absent.
fn normalize_cell(cell: &str) -> String {
    let trimmed = cell.trim();
    if trimmed.eq_ignore_ascii_case("nan") {
        String::new()
    } else {
        trimmed.to_string()
    }
}

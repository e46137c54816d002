use serde::{Deserialize, Serialize};

/// One structured entity parsed from a single Markdown table row.
///
/// Absent scalar fields are kept as empty strings and absent list fields as
/// empty vectors, so the serialized form is stable regardless of how sparse
/// the source row was.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub name: String,
    pub website: String,
    pub source_link: String,
    pub description: String,
    pub tags: Vec<String>,
    pub location: String,
    pub founder_links: Vec<String>,
}

/// Tagged outcome of running the extractor over a piece of Markdown.
///
/// `NotATable` is an expected, first-class outcome, not an error: callers
/// branch on it instead of catching anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableOutcome {
    NotATable,
    Records(Vec<CompanyRecord>),
}

impl TableOutcome {
    pub fn is_table(&self) -> bool {
        matches!(self, TableOutcome::Records(_))
    }
}

/// Result of the transform phase: the raw Markdown, the classification, and
/// the pre-rendered JSON artifact when records were recognized.
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    pub markdown: String,
    pub outcome: TableOutcome,
    pub json_artifact: Option<String>,
}

/// What a single pipeline run produced, for the invocation surface to present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutput {
    /// Records were extracted and written to `path`.
    Json { path: String, records: usize },
    /// No recognizable table; the raw Markdown is handed back for display.
    Markdown(String),
}

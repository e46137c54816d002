use crate::core::extractor::TableRecordExtractor;
use crate::domain::model::{ExtractionReport, RunOutput, TableOutcome};
use crate::domain::ports::{ConfigProvider, MarkdownSource, Pipeline, Storage};
use crate::utils::error::Result;

/// Glue between the conversion engine, the extractor and the output storage,
/// in the usual extract/transform/load shape.
pub struct ExtractionPipeline<M: MarkdownSource, S: Storage, C: ConfigProvider> {
    source: M,
    storage: S,
    config: C,
    extractor: TableRecordExtractor,
}

impl<M: MarkdownSource, S: Storage, C: ConfigProvider> ExtractionPipeline<M, S, C> {
    pub fn new(source: M, storage: S, config: C, extractor: TableRecordExtractor) -> Self {
        Self {
            source,
            storage,
            config,
            extractor,
        }
    }
}

#[async_trait::async_trait]
impl<M: MarkdownSource, S: Storage, C: ConfigProvider> Pipeline for ExtractionPipeline<M, S, C> {
    async fn extract(&self, uri: &str) -> Result<String> {
        tracing::debug!("Requesting Markdown for URI: {}", uri);
        let markdown = self.source.convert(uri).await?;
        tracing::debug!("Received {} bytes of Markdown", markdown.len());
        Ok(markdown)
    }

    async fn transform(&self, markdown: String) -> Result<ExtractionReport> {
        let outcome = self.extractor.extract(&markdown);

        let json_artifact = match &outcome {
            TableOutcome::Records(records) => {
                tracing::debug!("Recognized table with {} data rows", records.len());
                Some(serde_json::to_string_pretty(records)?)
            }
            TableOutcome::NotATable => {
                tracing::debug!("No recognizable table header in the Markdown");
                None
            }
        };

        Ok(ExtractionReport {
            markdown,
            outcome,
            json_artifact,
        })
    }

    async fn load(&self, report: ExtractionReport) -> Result<RunOutput> {
        let ExtractionReport {
            markdown,
            outcome,
            json_artifact,
        } = report;

        match (outcome, json_artifact) {
            (TableOutcome::Records(records), Some(json)) => {
                let file = self.config.output_file();
                self.storage.write_file(file, json.as_bytes()).await?;

                let path = format!("{}/{}", self.config.output_path(), file);
                tracing::debug!("Wrote {} records to {}", records.len(), path);
                Ok(RunOutput::Json {
                    path,
                    records: records.len(),
                })
            }
            // Markdown passthrough; nothing is written.
            _ => Ok(RunOutput::Markdown(markdown)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schema::TableSchema;
    use crate::utils::error::ExtractError;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    struct StaticSource {
        markdown: String,
    }

    impl MarkdownSource for StaticSource {
        async fn convert(&self, _uri: &str) -> Result<String> {
            Ok(self.markdown.clone())
        }
    }

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct TestConfig;

    impl ConfigProvider for TestConfig {
        fn output_path(&self) -> &str {
            "./out"
        }

        fn output_file(&self) -> &str {
            "companies_output.json"
        }
    }

    fn pipeline(
        markdown: &str,
        storage: MockStorage,
    ) -> ExtractionPipeline<StaticSource, MockStorage, TestConfig> {
        ExtractionPipeline::new(
            StaticSource {
                markdown: markdown.to_string(),
            },
            storage,
            TestConfig,
            TableRecordExtractor::new(TableSchema::default()),
        )
    }

    const TABLE: &str = "\
| Company | Company Website | YC Link | Short Description | Tags | Location | Founder Link 1 | Founder Link 2 | Founder Link 3 |
| --- | --- | --- | --- | --- | --- | --- | --- | --- |
| Acme | https://acme.com | https://yc.com/acme | Rockets | ai, saas | SF | https://x.com/a | nan | nan |
";

    #[tokio::test]
    async fn test_table_markdown_writes_json_artifact() {
        let storage = MockStorage::new();
        let pipeline = pipeline(TABLE, storage.clone());

        let markdown = pipeline.extract("https://example.com/w24").await.unwrap();
        let report = pipeline.transform(markdown).await.unwrap();
        let output = pipeline.load(report).await.unwrap();

        assert_eq!(
            output,
            RunOutput::Json {
                path: "./out/companies_output.json".to_string(),
                records: 1,
            }
        );

        let written = storage.get_file("companies_output.json").await.unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&written).unwrap();
        assert_eq!(parsed[0]["name"], "Acme");
        assert_eq!(parsed[0]["tags"], serde_json::json!(["ai", "saas"]));
        assert_eq!(parsed[0]["founder_links"], serde_json::json!(["https://x.com/a"]));
    }

    #[tokio::test]
    async fn test_non_table_markdown_passes_through() {
        let storage = MockStorage::new();
        let pipeline = pipeline("# Just a heading\n\nSome prose.\n", storage.clone());

        let markdown = pipeline.extract("https://example.com/page").await.unwrap();
        let report = pipeline.transform(markdown).await.unwrap();
        let output = pipeline.load(report).await.unwrap();

        match output {
            RunOutput::Markdown(md) => assert!(md.contains("Just a heading")),
            other => panic!("Expected markdown passthrough, got {:?}", other),
        }
        assert!(storage.get_file("companies_output.json").await.is_none());
    }

    #[tokio::test]
    async fn test_source_failure_propagates() {
        struct FailingSource;

        impl MarkdownSource for FailingSource {
            async fn convert(&self, uri: &str) -> Result<String> {
                Err(ExtractError::InvalidUriError {
                    uri: uri.to_string(),
                    reason: "unreachable".to_string(),
                })
            }
        }

        let pipeline = ExtractionPipeline::new(
            FailingSource,
            MockStorage::new(),
            TestConfig,
            TableRecordExtractor::default(),
        );
        assert!(pipeline.extract("https://example.com").await.is_err());
    }
}

use crate::domain::model::{ExtractionReport, RunOutput};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Client side of the external conversion engine: URI in, Markdown text out.
/// The extractor itself never sees URIs, files, or transports.
pub trait MarkdownSource: Send + Sync {
    fn convert(&self, uri: &str) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    fn output_file(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self, uri: &str) -> Result<String>;
    async fn transform(&self, markdown: String) -> Result<ExtractionReport>;
    async fn load(&self, report: ExtractionReport) -> Result<RunOutput>;
}

use crate::domain::model::RunOutput;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Drives one URI through the fetch/extract/write phases of a pipeline.
pub struct ExtractEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> ExtractEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitoring_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitoring_enabled),
        }
    }

    pub async fn run(&self, uri: &str) -> Result<RunOutput> {
        tracing::info!("Fetching Markdown for: {}", uri);
        let markdown = self.pipeline.extract(uri).await?;
        self.monitor.log_stats("Fetch");

        tracing::info!("Extracting table records...");
        let report = self.pipeline.transform(markdown).await?;
        self.monitor.log_stats("Extract");

        let output = self.pipeline.load(report).await?;
        self.monitor.log_stats("Write");

        match &output {
            RunOutput::Json { path, records } => {
                tracing::info!("Extracted {} records to {}", records, path);
            }
            RunOutput::Markdown(_) => {
                tracing::info!("No record table found; passing raw Markdown through");
            }
        }

        Ok(output)
    }
}

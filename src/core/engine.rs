use crate::core::Pipeline;
use crate::domain::model::BatchSummary;
use crate::utils::error::Result;

pub struct BatchEngine<P: Pipeline> {
    pipeline: P,
}

/// Where a finished run wrote its report and what it found.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub output_path: String,
    pub summary: BatchSummary,
}

impl<P: Pipeline> BatchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<BatchOutcome> {
        tracing::info!("Starting batch validation...");

        // Extract
        let rows = self.pipeline.extract().await?;
        tracing::info!("Read {} account rows", rows.len());

        // Transform
        let report = self.pipeline.transform(rows).await?;
        let summary = report.summary.clone();
        tracing::info!(
            "Validated {} accounts: {} valid, {} invalid, {} rejected",
            summary.total,
            summary.valid,
            summary.invalid,
            summary.rejected
        );

        // Load
        let output_path = self.pipeline.load(report).await?;
        tracing::info!("Report saved to: {}", output_path);

        Ok(BatchOutcome {
            output_path,
            summary,
        })
    }
}

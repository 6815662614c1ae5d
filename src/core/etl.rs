use crate::domain::store::SeedReport;
use crate::core::Pipeline;
use crate::utils::error::Result;

/// Runs a seed pipeline through extract, transform and load.
pub struct SeedEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SeedEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<SeedReport> {
        tracing::info!("Starting seed process");

        let raw_data = self.pipeline.extract().await?;
        tracing::info!("Extracted {} restaurants", raw_data.len());

        let transformed = self.pipeline.transform(raw_data).await?;
        tracing::info!(
            "Parsed opening hours for {} restaurants ({} rejected)",
            transformed
                .restaurants
                .len()
                .saturating_sub(transformed.rejected.len()),
            transformed.rejected.len()
        );

        let report = self.pipeline.load(transformed).await?;
        tracing::info!(
            "Stored {} restaurants with {} schedule rows",
            report.store.restaurants().len(),
            report.store.schedule_count()
        );
        tracing::info!("Snapshot saved to: {}", report.output_path);

        Ok(report)
    }
}

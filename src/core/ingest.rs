use crate::adapters::http::HttpFetcher;
use crate::adapters::storage::LocalStorage;
use crate::core::landing::LandingWriter;
use crate::domain::model::{ExecutionDate, IngestionReport};
use crate::domain::ports::{BrewerySource, ConfigProvider, Storage};
use crate::utils::error::Result;
use crate::utils::monitor::RunMonitor;

/// Fetch-then-write for one execution date. Either both steps succeed or
/// the error from the failing step is returned; nothing is retried here.
pub struct IngestionJob<F: BrewerySource, S: Storage> {
    source: F,
    writer: LandingWriter<S>,
    monitor: RunMonitor,
}

impl<F: BrewerySource, S: Storage> IngestionJob<F, S> {
    pub fn new(source: F, writer: LandingWriter<S>) -> Self {
        Self::new_with_monitoring(source, writer, false)
    }

    pub fn new_with_monitoring(source: F, writer: LandingWriter<S>, monitor_enabled: bool) -> Self {
        Self {
            source,
            writer,
            monitor: RunMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self, execution_date: &ExecutionDate, page_size: u32) -> Result<IngestionReport> {
        tracing::info!(
            "🚀 Starting ingestion for execution_date={} (page_size={})",
            execution_date,
            page_size
        );

        let batch = self.source.fetch(page_size).await?;
        self.monitor.log_phase("fetch");

        let landing_path = self.writer.write(&batch, execution_date).await?;
        self.monitor.log_phase("write");

        tracing::info!("🎉 Ingestion completed successfully");
        self.monitor.log_final_stats();

        Ok(IngestionReport {
            execution_date: *execution_date,
            record_count: batch.len(),
            landing_path,
        })
    }
}

impl IngestionJob<HttpFetcher, LocalStorage> {
    /// Wires the HTTP fetcher and local landing storage from configuration.
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C, monitor_enabled: bool) -> Result<Self> {
        let fetcher = HttpFetcher::new(config)?;
        let writer = LandingWriter::new(LocalStorage::new(config.base_path()));
        Ok(Self::new_with_monitoring(fetcher, writer, monitor_enabled))
    }
}

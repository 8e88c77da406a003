use brewery_ingest::domain::ports::ConfigProvider;
use brewery_ingest::utils::{logger, validation::Validate};
use brewery_ingest::{CliConfig, IngestConfig, IngestionError, IngestionJob};
use clap::Parser;

fn report_failure(stage: &str, e: &IngestionError) -> ! {
    tracing::error!(
        "❌ {} failed: {} (Category: {:?}, Severity: {:?}, retryable: {})",
        stage,
        e,
        e.category(),
        e.severity(),
        e.is_retryable()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

fn display_config_summary(config: &IngestConfig, execution_date: &str) {
    tracing::info!("📋 Endpoint: {}", config.api_endpoint);
    tracing::info!("📋 Page size: {}", config.page_size());
    tracing::info!("📋 Timeout: {}s", config.timeout_seconds);
    tracing::info!(
        "📋 Landing file: {}/{}/{}",
        config.base_path,
        execution_date,
        brewery_ingest::core::landing::LANDING_FILE_NAME
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_logger(cli.log_format, cli.verbose);

    tracing::info!("Starting brewery-ingest");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => report_failure("Loading configuration", &e),
    };
    if let Err(e) = config.validate() {
        report_failure("Configuration validation", &e);
    }
    let execution_date = match cli.execution_date() {
        Ok(date) => date,
        Err(e) => report_failure("Execution date validation", &e),
    };

    display_config_summary(&config, &execution_date.to_string());

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing fetched, nothing written");
        return Ok(());
    }

    if cli.monitor {
        tracing::info!("🔍 Run monitoring enabled");
    }

    let job = match IngestionJob::from_config(&config, cli.monitor) {
        Ok(job) => job,
        Err(e) => report_failure("Initialisation", &e),
    };

    match job.run(&execution_date, config.page_size()).await {
        Ok(report) => {
            tracing::info!("📁 Output saved to: {}", report.landing_path.display());
            println!("{}", serde_json::to_string(&report)?);
        }
        Err(e) => report_failure("Ingestion", &e),
    }

    Ok(())
}

use buying_frenzy::utils::error::ErrorSeverity;
use buying_frenzy::utils::{logger, validation::Validate};
use buying_frenzy::{CliConfig, LocalStorage, SeedEngine, SeedPipeline};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting buying-frenzy seed");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let open_at = config.open_at;
    let storage = LocalStorage::new(config.output_path.clone());
    let engine = SeedEngine::new(SeedPipeline::new(storage, config));

    match engine.run().await {
        Ok(report) => {
            println!(
                "✅ Loaded {} restaurants ({} with unreadable opening hours)",
                report.store.restaurants().len(),
                report.rejected
            );
            println!("📁 Snapshot saved to: {}", report.output_path);

            if let Some(at) = open_at {
                let open = report.store.query_open_at(at);
                println!("🕒 {} restaurants open at {}", open.len(), at);
                for restaurant in open {
                    println!("  {}", restaurant.name);
                }
            }
        }
        Err(e) => {
            tracing::error!(
                "Seed failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

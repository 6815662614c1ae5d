use buying_frenzy::config::toml_config::TomlConfig;
use buying_frenzy::config::toml_config::TransformConfig;
use buying_frenzy::core::{ConfigProvider, Pipeline};
use buying_frenzy::utils::error::ErrorSeverity;
use buying_frenzy::utils::{logger, validation::Validate};
use buying_frenzy::{LocalStorage, SeedEngine, SeedPipeline};
use clap::Parser;

#[derive(Parser)]
#[command(name = "toml-seed")]
#[command(about = "Seed restaurant schedules from a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "frenzy.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override transform.skip_invalid_hours from the config
    #[arg(long)]
    skip_invalid_hours: Option<bool>,

    /// Parse the feed and print the schedules without writing anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if config.json_logs() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose || config.verbose());
    }
    tracing::info!("Loaded configuration from: {}", args.config);

    if let Some(skip) = args.skip_invalid_hours {
        config
            .transform
            .get_or_insert(TransformConfig {
                skip_invalid_hours: None,
            })
            .skip_invalid_hours = Some(skip);
        tracing::info!("skip_invalid_hours overridden to: {}", skip);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let open_at = config.open_at_instants()?;
    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = SeedPipeline::new(storage, config);

    if args.dry_run {
        tracing::info!("DRY RUN MODE - nothing will be written");
        let records = pipeline.extract().await?;
        let result = pipeline.transform(records).await?;
        for parsed in &result.restaurants {
            println!("{}", parsed.record.restaurant_name);
            match &parsed.schedule {
                Some(schedule) => {
                    for day in schedule.iter() {
                        println!(
                            "  {} {}-{}{}",
                            day.weekday(),
                            day.opens_at(),
                            day.closes_at(),
                            if day.overnight() { " (overnight)" } else { "" }
                        );
                    }
                }
                None => println!("  closed (unreadable opening hours)"),
            }
        }
        return Ok(());
    }

    let engine = SeedEngine::new(pipeline);
    match engine.run().await {
        Ok(report) => {
            println!("✅ Seed completed: {}", report.output_path);
            for at in open_at {
                let names: Vec<&str> = report
                    .store
                    .query_open_at(at)
                    .into_iter()
                    .map(|r| r.name.as_str())
                    .collect();
                println!("🕒 {}: {}", at, names.join(", "));
            }
        }
        Err(e) => {
            tracing::error!("Seed failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

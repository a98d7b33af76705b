use anyhow::Context;
use clap::Parser;
use std::process;
use tracing::debug;
use typhoon_processor::cli::Args;
use typhoon_processor::constants::LOG_TARGET;
use typhoon_processor::{BulletinError, BulletinProcessor, ProcessingStats};

fn main() {
    let args = Args::parse();
    setup_logging(&args);

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = run(&args) => result,
            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    return Err(anyhow::Error::new(e).context("Failed to install CTRL+C signal handler"));
                }
                eprintln!("\nReceived CTRL+C, shutting down gracefully...");
                Err(BulletinError::processing_interrupted("Processing interrupted by user").into())
            }
        }
    });

    match result {
        Ok(stats) if stats.files_failed > 0 => process::exit(2),
        Ok(_) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

async fn run(args: &Args) -> anyhow::Result<ProcessingStats> {
    let config = args
        .load_config()
        .context("Failed to load configuration")?;
    debug!("Effective configuration: {:?}", config);

    let mut processor = BulletinProcessor::new(args.input_dir.clone(), args.output_path.clone())?
        .with_config(config);
    if args.quiet {
        processor = processor.quiet();
    }

    let stats = processor
        .process()
        .await
        .with_context(|| format!("Failed to process {}", args.input_dir.display()))?;
    Ok(stats)
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

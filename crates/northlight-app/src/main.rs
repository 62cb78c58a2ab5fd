mod cli;
mod frontend;

use std::process::ExitCode;

use northlight_config::NorthlightConfig;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn load_config(args: &cli::Args) -> (NorthlightConfig, Option<String>) {
    let loaded = match args.config {
        Some(ref path) => northlight_config::load_config_from(path),
        None => northlight_config::load_config(),
    };
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (NorthlightConfig::default(), Some(e.to_string())),
    }
}

fn init_logging(directive: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| LevelFilter::INFO.into()),
            ),
        )
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    // Config comes first so its log level can drive the subscriber.
    let (config, config_error) = load_config(&args);

    let directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.as_filter().to_string());
    init_logging(&directive);

    tracing::info!(
        schema = northlight_config::CONFIG_SCHEMA_VERSION,
        "North Light v{} starting...",
        env!("CARGO_PKG_VERSION")
    );
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    if args.print_config {
        println!("{}", northlight_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    tracing::info!(mode = ?args.mode, "Starting session");
    match frontend::run(&args, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Session error: {e}");
            ExitCode::FAILURE
        }
    }
}

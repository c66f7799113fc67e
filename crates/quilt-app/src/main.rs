mod cli;
mod scenario;

use std::path::Path;

use quilt_common::ConfigError;
use quilt_config::QuiltConfig;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVE: &str = "quilt=info";

fn load_config(path: Option<&str>) -> Result<QuiltConfig, ConfigError> {
    match path {
        Some(path) => quilt_config::load_from_path(Path::new(path)),
        None => quilt_config::load_config(),
    }
}

fn init_logging(directive: &str) {
    let directive = directive.parse().unwrap_or_else(|_| {
        eprintln!("Ignoring invalid log directive '{directive}'");
        DEFAULT_LOG_DIRECTIVE
            .parse()
            .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into())
    });
    // Logs go to stderr so the layout report on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

fn run(args: cli::Args, loaded: Result<QuiltConfig, ConfigError>) -> quilt_common::Result<()> {
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            QuiltConfig::default()
        }
    };

    let options = scenario::tiling_options(&config.layout);
    tracing::debug!(?options, "Tiling options");

    let report = scenario::run(args.output, options, &args.steps)?;
    report.write_json(std::io::stdout().lock())
}

fn main() {
    let args = cli::parse();

    // Config is read before logging starts so its level can apply.
    let loaded = load_config(args.config.as_deref());
    let directive = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.level.directive().to_string(),
        (None, Err(_)) => DEFAULT_LOG_DIRECTIVE.to_string(),
    };
    init_logging(&directive);
    tracing::info!("quilt v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(args, loaded) {
        tracing::error!("quilt failed: {e}");
        std::process::exit(1);
    }
}

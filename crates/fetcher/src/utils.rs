use buoy_map_core::{
    find_config_file, load_config, ConfigSource, MalformedPolicy, DEFAULT_FEED_PATH,
    LATEST_OBS_URL,
};
use clap::Parser;
use slog::{o, Drain, Level, Logger};
use std::env;

#[derive(Parser, Clone, Debug, serde::Deserialize, Default)]
#[command(
    author,
    version,
    about = "Buoy Fetcher - Downloads the latest NDBC observation snapshot"
)]
pub struct Cli {
    /// Path to config file (TOML format)
    /// Searched in order: this flag, $BUOY_FETCHER_CONFIG, ./fetcher.toml,
    /// $XDG_CONFIG_HOME/buoy-map/fetcher.toml, /etc/buoy-map/fetcher.toml
    #[arg(short, long)]
    #[serde(skip)]
    pub config: Option<String>,

    /// Log level: trace, debug, info, warn, error
    #[arg(short, long, env = "BUOY_FETCHER_LEVEL")]
    pub level: Option<String>,

    /// Snapshot URL to download
    #[arg(short, long, env = "BUOY_FETCHER_SOURCE_URL")]
    pub source_url: Option<String>,

    /// Where to write the snapshot, the map server reads the same path
    #[arg(short, long, env = "BUOY_FETCHER_FEED_PATH")]
    pub feed_path: Option<String>,

    /// Request timeout in seconds
    #[arg(short, long, env = "BUOY_FETCHER_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Retries for transient HTTP failures
    #[arg(short, long, env = "BUOY_FETCHER_MAX_RETRIES")]
    pub max_retries: Option<u32>,

    /// HTTP User-Agent header for NDBC requests
    #[arg(short, long, env = "BUOY_FETCHER_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Malformed line handling when validating the download: skip or abort
    #[arg(short, long, env = "BUOY_FETCHER_ON_MALFORMED")]
    pub on_malformed: Option<String>,
}

impl Cli {
    pub fn source_url(&self) -> String {
        self.source_url
            .clone()
            .unwrap_or_else(|| LATEST_OBS_URL.to_string())
    }

    pub fn feed_path(&self) -> String {
        self.feed_path
            .clone()
            .unwrap_or_else(|| DEFAULT_FEED_PATH.to_string())
    }

    pub fn timeout(&self) -> u64 {
        self.timeout.unwrap_or(30)
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries.unwrap_or(3)
    }

    pub fn user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("buoy-map-fetcher/{}", env!("CARGO_PKG_VERSION")))
    }

    /// Unknown values fall back to skipping malformed lines
    pub fn malformed_policy(&self) -> MalformedPolicy {
        self.on_malformed
            .as_deref()
            .and_then(|policy| policy.parse().ok())
            .unwrap_or_default()
    }
}

/// Load configuration from CLI args, config file, and environment
pub fn get_config_info() -> Cli {
    let cli_args = Cli::parse();

    let source = if let Some(ref path) = cli_args.config {
        ConfigSource::Explicit(path.into())
    } else {
        find_config_file("BUOY_FETCHER_CONFIG", "fetcher.toml")
    };

    let file_config: Cli = load_config(&source).unwrap_or_default();

    // CLI args override file config (env vars are handled by clap)
    Cli {
        config: cli_args.config,
        level: cli_args.level.or(file_config.level),
        source_url: cli_args.source_url.or(file_config.source_url),
        feed_path: cli_args.feed_path.or(file_config.feed_path),
        timeout: cli_args.timeout.or(file_config.timeout),
        max_retries: cli_args.max_retries.or(file_config.max_retries),
        user_agent: cli_args.user_agent.or(file_config.user_agent),
        on_malformed: cli_args.on_malformed.or(file_config.on_malformed),
    }
}

fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::Trace,
        "debug" => Level::Debug,
        "warn" => Level::Warning,
        "error" => Level::Error,
        _ => Level::Info,
    }
}

pub fn setup_logger(cli: &Cli) -> Logger {
    let log_level = match cli.level.as_ref() {
        Some(level) => parse_level(level),
        None => parse_level(&env::var("RUST_LOG").unwrap_or_default()),
    };

    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::CompactFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    let drain = drain.filter_level(log_level).fuse();
    slog::Logger::root(drain, o!("version" => env!("CARGO_PKG_VERSION")))
}

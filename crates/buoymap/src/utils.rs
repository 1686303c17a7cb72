use buoy_map_core::{
    find_config_file, load_config, Column, ConfigSource, MalformedPolicy, DEFAULT_FEED_PATH,
    DEFAULT_MAP_PORT,
};
use clap::Parser;
use fern::{
    colors::{Color, ColoredLevelConfig},
    Dispatch,
};
use log::{warn, LevelFilter};
use std::env;
use time::{format_description::well_known::Iso8601, OffsetDateTime};

#[derive(Parser, Clone, Debug, serde::Deserialize, Default)]
#[command(
    author,
    version,
    about = "Buoy Map - Interactive map of NDBC buoy observations"
)]
pub struct Cli {
    /// Path to config file (TOML format)
    /// Searched in order: this flag, $BUOY_MAP_CONFIG, ./buoymap.toml,
    /// $XDG_CONFIG_HOME/buoy-map/buoymap.toml, /etc/buoy-map/buoymap.toml
    #[arg(short, long)]
    #[serde(skip)]
    pub config: Option<String>,

    /// Log level: trace, debug, info, warn, error
    #[arg(short, long, env = "BUOY_MAP_LEVEL")]
    pub level: Option<String>,

    /// Host to listen on (use 0.0.0.0 for all interfaces)
    #[arg(short, long, env = "BUOY_MAP_HOST")]
    #[serde(alias = "host")]
    pub domain: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "BUOY_MAP_PORT")]
    pub port: Option<String>,

    /// Public URL for the UI
    #[arg(short, long, env = "BUOY_MAP_REMOTE_URL")]
    pub remote_url: Option<String>,

    /// Fixed-width observation snapshot to load at startup
    #[arg(short, long, env = "BUOY_MAP_FEED_PATH")]
    pub feed_path: Option<String>,

    /// Directory containing UI static files
    #[arg(short, long, env = "BUOY_MAP_UI_DIR")]
    pub ui_dir: Option<String>,

    /// Comma separated columns offered by the color and size selectors
    #[arg(long, env = "BUOY_MAP_COLUMNS")]
    pub columns: Option<String>,

    /// Malformed feed line handling: skip or abort
    #[arg(short, long, env = "BUOY_MAP_ON_MALFORMED")]
    pub on_malformed: Option<String>,
}

impl Cli {
    /// Get the effective configuration value with defaults
    pub fn host(&self) -> String {
        self.domain
            .clone()
            .unwrap_or_else(|| "127.0.0.1".to_string())
    }

    pub fn port(&self) -> String {
        self.port
            .clone()
            .unwrap_or_else(|| DEFAULT_MAP_PORT.to_string())
    }

    pub fn remote_url(&self) -> String {
        self.remote_url
            .clone()
            .unwrap_or_else(|| format!("http://{}:{}", self.host(), self.port()))
    }

    pub fn feed_path(&self) -> String {
        self.feed_path
            .clone()
            .unwrap_or_else(|| DEFAULT_FEED_PATH.to_string())
    }

    pub fn static_dir(&self) -> String {
        self.ui_dir
            .clone()
            .unwrap_or_else(|| "./static".to_string())
    }

    /// Selector columns, every numeric column when unset
    pub fn columns(&self) -> Vec<Column> {
        let Some(columns) = self.columns.as_ref() else {
            return Column::ALL.to_vec();
        };

        let mut selected = Vec::new();
        for name in columns.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            match name.parse::<Column>() {
                Ok(column) if !selected.contains(&column) => selected.push(column),
                Ok(_) => {}
                Err(e) => warn!("dropping selector column: {}", e),
            }
        }

        if selected.is_empty() {
            Column::ALL.to_vec()
        } else {
            selected
        }
    }

    pub fn malformed_policy(&self) -> MalformedPolicy {
        match self.on_malformed.as_deref().map(str::parse::<MalformedPolicy>) {
            Some(Ok(policy)) => policy,
            Some(Err(e)) => {
                warn!("{}, skipping malformed lines", e);
                MalformedPolicy::Skip
            }
            None => MalformedPolicy::Skip,
        }
    }
}

/// Load configuration from CLI args, config file, and environment
pub fn get_config_info() -> Cli {
    let cli_args = Cli::parse();

    let source = if let Some(ref path) = cli_args.config {
        ConfigSource::Explicit(path.into())
    } else {
        find_config_file("BUOY_MAP_CONFIG", "buoymap.toml")
    };

    if let Some(path) = source.path() {
        log::info!("Loading config from: {}", path.display());
    }

    let file_config: Cli = load_config(&source).unwrap_or_default();

    // CLI args override file config (env vars are handled by clap)
    Cli {
        config: cli_args.config,
        level: cli_args.level.or(file_config.level),
        domain: cli_args.domain.or(file_config.domain),
        port: cli_args.port.or(file_config.port),
        remote_url: cli_args.remote_url.or(file_config.remote_url),
        feed_path: cli_args.feed_path.or(file_config.feed_path),
        ui_dir: cli_args.ui_dir.or(file_config.ui_dir),
        columns: cli_args.columns.or(file_config.columns),
        on_malformed: cli_args.on_malformed.or(file_config.on_malformed),
    }
}

pub fn get_log_level(cli: &Cli) -> LevelFilter {
    let level_str = cli
        .level
        .clone()
        .or_else(|| env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "info".to_string());

    match level_str.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

pub fn setup_logger() -> Dispatch {
    let colors = ColoredLevelConfig::new()
        .trace(Color::White)
        .debug(Color::Cyan)
        .info(Color::Blue)
        .warn(Color::Yellow)
        .error(Color::Magenta);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}: {}",
                OffsetDateTime::now_utc()
                    .format(&Iso8601::DEFAULT)
                    .unwrap_or_default(),
                colors.color(record.level()),
                record.target(),
                message
            ));
        })
        .chain(std::io::stdout())
}

use fetcher::{get_config_info, setup_logger, validate_snapshot, write_snapshot, SnapshotFetcher};
use slog::{error, info};
use std::{path::Path, time::Duration};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let cli = get_config_info();
    let logger = setup_logger(&cli);

    let source_url = cli.source_url();
    let feed_path = cli.feed_path();

    info!(logger, "Buoy Fetcher starting...");
    info!(logger, "  Source: {}", source_url);
    info!(logger, "  Feed path: {}", feed_path);

    let fetcher = SnapshotFetcher::new(
        logger.clone(),
        cli.user_agent(),
        Duration::from_secs(cli.timeout()),
        cli.max_retries(),
    );

    let contents = fetcher.fetch_text(&source_url).await.map_err(|e| {
        error!(logger, "error downloading snapshot: {}", e);
        e
    })?;

    validate_snapshot(&logger, &contents, cli.malformed_policy())?;
    write_snapshot(&logger, Path::new(&feed_path), &contents)?;

    info!(logger, "Finished fetching snapshot");
    Ok(())
}

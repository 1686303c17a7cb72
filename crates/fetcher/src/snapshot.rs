use anyhow::{anyhow, Context, Error};
use buoy_map_core::{ensure_dir_exists, parse_str, Dataset, MalformedPolicy};
use reqwest::Client;
use reqwest_middleware::ClientBuilder;
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use slog::{debug, info, warn, Logger};
use std::{fs, path::Path, time::Duration};
use time::format_description::well_known::Rfc3339;

pub struct SnapshotFetcher {
    logger: Logger,
    user_agent: String,
    timeout: Duration,
    max_retries: u32,
}

impl SnapshotFetcher {
    pub fn new(logger: Logger, user_agent: String, timeout: Duration, max_retries: u32) -> Self {
        Self {
            logger,
            user_agent,
            timeout,
            max_retries,
        }
    }

    pub async fn fetch_text(&self, url: &str) -> Result<String, Error> {
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(self.max_retries);
        let client = ClientBuilder::new(Client::builder().user_agent(&self.user_agent).build()?)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        debug!(self.logger, "requesting: {}", url);
        let response = client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| anyhow!("error sending request: {}", e))?;
        if !response.status().is_success() {
            return Err(anyhow!(
                "error response from {}: {}",
                url,
                response.status()
            ));
        }

        response
            .text()
            .await
            .map_err(|e| anyhow!("error reading body of request: {}", e))
    }
}

/// Parse a downloaded snapshot before it replaces the one on disk
pub fn validate_snapshot(
    logger: &Logger,
    contents: &str,
    policy: MalformedPolicy,
) -> Result<Dataset, Error> {
    let dataset = parse_str(contents, policy).context("downloaded snapshot is malformed")?;
    if dataset.is_empty() {
        return Err(anyhow!("downloaded snapshot holds no observations"));
    }

    let report = dataset.report();
    for rejected in &report.rejected {
        warn!(logger, "line {} rejected: {}", rejected.line, rejected.reason);
    }
    let latest = dataset
        .latest_timestamp()
        .and_then(|t| t.format(&Rfc3339).ok())
        .unwrap_or_default();
    info!(
        logger,
        "snapshot holds {} observations ({} rejected), latest at {}",
        dataset.len(),
        report.rejected.len(),
        latest
    );
    Ok(dataset)
}

/// Write through a sibling temp file so readers never see a partial snapshot
pub fn write_snapshot(logger: &Logger, path: &Path, contents: &str) -> Result<(), Error> {
    if !ensure_dir_exists(path) {
        return Err(anyhow!("unable to create folder for {}", path.display()));
    }

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".part");
    let tmp_path = Path::new(&tmp_name);

    fs::write(tmp_path, contents)
        .with_context(|| format!("error writing {}", tmp_path.display()))?;
    fs::rename(tmp_path, path)
        .with_context(|| format!("error moving snapshot into {}", path.display()))?;

    info!(logger, "snapshot written to {}", path.display());
    Ok(())
}

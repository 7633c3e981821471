//! Service config resolution for the CLI.
//!
//! Precedence, lowest first: built-in defaults, config file, `--url`
//! (which clap also fills from `MOODLETREE_URL`).

use anyhow::{Context, Result};
use moodletree_fetch::config::default_config_path;
use moodletree_fetch::ServiceConfig;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Overrides taken from the command line.
#[derive(Debug, Default)]
pub struct Overrides<'a> {
    pub config_path: Option<&'a Path>,
    pub base_url: Option<&'a str>,
    pub timeout_secs: Option<u64>,
    pub max_concurrency: Option<usize>,
}

/// Builds the service config from defaults, the config file, and overrides.
pub async fn resolve(overrides: &Overrides<'_>) -> Result<ServiceConfig> {
    let path = overrides
        .config_path
        .map_or_else(default_config_path, Path::to_path_buf);

    let mut config = ServiceConfig::load(&path)
        .await
        .with_context(|| format!("loading config from {}", path.display()))?;

    if let Some(url) = overrides.base_url {
        config = config.with_base_url(url).context("invalid --url")?;
    }
    if let Some(secs) = overrides.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    if let Some(limit) = overrides.max_concurrency {
        config = config.with_max_concurrency(limit);
    }

    debug!(base_url = %config.base_url, "Resolved service config");
    Ok(config)
}

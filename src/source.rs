use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use crate::config::{self, AppConfig};
use crate::feed::fetch::{FeedFetcher, FileFetcher, HttpFetcher};

/// Where the feed comes from. Falls back to EVENTS_FEED_URL when neither flag is given.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// RSS feed URL
    #[arg(long, conflicts_with = "file")]
    pub url: Option<String>,
    /// Read a saved RSS document instead of fetching
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// IANA zone for start times, e.g. Australia/Sydney
    #[arg(long)]
    pub zone: Option<String>,
}

impl SourceArgs {
    /// Apply `--zone` on top of the environment configuration.
    pub fn apply(&self, mut cfg: AppConfig) -> Result<AppConfig> {
        if let Some(zone) = &self.zone { cfg.zone = config::parse_zone(zone)?; }
        Ok(cfg)
    }

    /// The fetcher to use and the location it will be asked for.
    pub fn fetcher(&self, cfg: &AppConfig) -> Result<(Box<dyn FeedFetcher>, String)> {
        if let Some(path) = &self.file {
            return Ok((Box::new(FileFetcher::new(path.clone())), path.display().to_string()));
        }
        let url = match self.url.as_deref().or(cfg.feed_url.as_deref()) {
            Some(u) => config::validate_url(u)?,
            None => bail!("Please provide --url, --file or set EVENTS_FEED_URL in .env"),
        };
        Ok((Box::new(HttpFetcher::new(cfg.http_timeout)?), url))
    }
}

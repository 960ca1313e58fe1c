//! Proxy fetcher module for downloading raw proxy lists
//!
//! A download either completes and overwrites the destination file, or
//! fails before anything is written.

use crate::Result;
use anyhow::Context;
use reqwest::Client;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for proxy fetcher
#[derive(Debug, Clone, Default)]
pub struct FetcherConfig {
    /// Timeout for HTTP requests, client default when unset
    pub timeout: Option<Duration>,
    /// User agent for HTTP requests, client default when unset
    pub user_agent: Option<String>,
}

impl FetcherConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = Some(user_agent);
        self
    }
}

/// Proxy fetcher for downloading proxy lists to disk
pub struct ProxyFetcher {
    client: Client,
}

impl ProxyFetcher {
    /// Create a new proxy fetcher with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(FetcherConfig::default())
    }

    /// Create a new proxy fetcher with custom configuration
    pub fn with_config(config: FetcherConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Fetch the body of `url`, failing on network errors and non-2xx statuses
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("failed to fetch {url}"))?
            .error_for_status()
            .with_context(|| format!("bad response from {url}"))?;

        let body = response
            .text()
            .await
            .with_context(|| format!("failed to read body from {url}"))?;
        Ok(body)
    }

    /// Download `url` into `dest`, trimming surrounding whitespace
    pub async fn download<P: AsRef<Path>>(&self, url: &str, dest: P) -> Result<PathBuf> {
        let dest = dest.as_ref();
        log::info!("Downloading proxies from {url}...");

        let body = self.fetch(url).await?;

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(dest, body.trim())
            .with_context(|| format!("failed to write {}", dest.display()))?;

        log::info!("Proxies saved to {}.", dest.display());
        Ok(dest.to_path_buf())
    }
}

//! Proxy Harvest - SOCKS proxy list fetcher and filter
//!
//! Downloads public SOCKS4/SOCKS5 proxy lists, keeps the entries that look
//! like `IP:PORT`, formats them as `scheme://IP:PORT` and hands them to an
//! external liveness checker.

pub mod error;
pub mod pipeline;
pub mod proxy;

#[cfg(test)]
mod test_util;

pub use error::CheckerError;
pub use pipeline::{LiveOutcome, Pipeline, PipelineReport, ProtocolReport};
pub use proxy::*;

use std::path::PathBuf;

/// Application result type
pub type Result<T> = anyhow::Result<T>;

/// Default SOCKS4 list source
pub const DEFAULT_SOCKS4_URL: &str = "https://vakhov.github.io/fresh-proxy-list/socks4.txt";

/// Default SOCKS5 list source
pub const DEFAULT_SOCKS5_URL: &str = "https://vakhov.github.io/fresh-proxy-list/socks5.txt";

/// Default directory for all list files
pub const DEFAULT_OUTPUT_DIR: &str = "proxy_lists";

/// Default concurrency passed to the liveness checker
pub const DEFAULT_CONCURRENCY: usize = 5;

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Source URL of the raw SOCKS4 list
    pub socks4_url: String,
    /// Source URL of the raw SOCKS5 list
    pub socks5_url: String,
    /// Directory receiving raw, filtered and live lists
    pub output_dir: PathBuf,
    /// Concurrency passed to the liveness checker
    pub concurrency: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            socks4_url: DEFAULT_SOCKS4_URL.to_string(),
            socks5_url: DEFAULT_SOCKS5_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_socks4_url(mut self, url: String) -> Self {
        self.socks4_url = url;
        self
    }

    pub fn with_socks5_url(mut self, url: String) -> Self {
        self.socks5_url = url;
        self
    }

    pub fn with_output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = dir;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Source URL for a protocol
    pub fn source_url(&self, protocol: ProxyProtocol) -> &str {
        match protocol {
            ProxyProtocol::Socks4 => &self.socks4_url,
            ProxyProtocol::Socks5 => &self.socks5_url,
        }
    }

    /// Raw, filtered and live file paths for a protocol
    pub fn paths(&self, protocol: ProxyProtocol) -> ProxyListPaths {
        ProxyListPaths::new(&self.output_dir, protocol)
    }
}

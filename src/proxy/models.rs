//! Proxy list data models

use std::fmt;
use std::path::{Path, PathBuf};

/// Proxy protocol enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProxyProtocol {
    Socks4,
    Socks5,
}

impl ProxyProtocol {
    /// All protocols handled by the pipeline, in processing order
    pub const ALL: [ProxyProtocol; 2] = [ProxyProtocol::Socks4, ProxyProtocol::Socks5];

    /// URI scheme used when formatting proxies of this protocol
    pub fn scheme(&self) -> &'static str {
        match self {
            ProxyProtocol::Socks4 => "socks4",
            ProxyProtocol::Socks5 => "socks5",
        }
    }

    /// Format a bare `ip:port` entry as `scheme://ip:port`
    pub fn format_entry(&self, entry: &str) -> String {
        format!("{}://{}", self.scheme(), entry)
    }
}

impl fmt::Display for ProxyProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scheme())
    }
}

/// Files produced for a single protocol inside the output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyListPaths {
    /// Raw list as downloaded
    pub raw: PathBuf,
    /// Entries that passed validation, prefixed with the scheme
    pub filtered: PathBuf,
    /// Entries confirmed reachable by the liveness checker
    pub live: PathBuf,
}

impl ProxyListPaths {
    pub fn new<P: AsRef<Path>>(dir: P, protocol: ProxyProtocol) -> Self {
        let dir = dir.as_ref();
        let scheme = protocol.scheme();
        Self {
            raw: dir.join(format!("{scheme}.txt")),
            filtered: dir.join(format!("{scheme}_filtered.txt")),
            live: dir.join(format!("{scheme}-live.txt")),
        }
    }
}

/// Counts reported after filtering a raw list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSummary {
    /// Number of lines read from the raw list
    pub total_lines: usize,
    /// Number of lines written to the filtered list
    pub kept: usize,
}

impl FilterSummary {
    pub fn dropped(&self) -> usize {
        self.total_lines - self.kept
    }
}

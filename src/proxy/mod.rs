//! Proxy module for fetching, filtering and checking proxy lists
//!
//! This module provides functionality for:
//! - Downloading raw `IP:PORT` lists over HTTP(S)
//! - Filtering lists down to well-formed entries with a scheme prefix
//! - Delegating liveness checks to an external program

pub mod checker;
pub mod fetcher;
pub mod filter;
pub mod models;

pub use checker::{LivenessChecker, MubengChecker, DEFAULT_CHECKER_PROGRAM};
pub use fetcher::{FetcherConfig, ProxyFetcher};
pub use filter::ProxyFilter;
pub use models::{FilterSummary, ProxyListPaths, ProxyProtocol};

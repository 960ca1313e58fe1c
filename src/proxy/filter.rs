//! Proxy filter module for validating and formatting raw proxy lists

use crate::proxy::models::{FilterSummary, ProxyProtocol};
use crate::Result;
use anyhow::Context;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Regex matching a whole `IP:PORT` line. Checks shape only, octet and
/// port ranges are not validated.
static IP_PORT_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{1,3}(\.\d{1,3}){3}:\d{1,5}$").expect("Invalid IP:PORT line regex")
});

/// Split on `\n`, `\r\n` and lone `\r`. A trailing terminator does not
/// start an extra empty line.
fn split_lines(content: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(&['\r', '\n'][..]) {
            Some(i) => {
                let line = &rest[..i];
                let skip = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + skip..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

/// Filter for turning raw `ip:port` lists into scheme-prefixed lists
pub struct ProxyFilter;

impl ProxyFilter {
    /// Check whether a line is a syntactic `IP:PORT` entry
    pub fn is_valid(line: &str) -> bool {
        IP_PORT_LINE_REGEX.is_match(line.trim())
    }

    /// Keep valid lines from `content` and prefix them with the protocol scheme
    ///
    /// Input order is preserved and duplicates are kept.
    pub fn format_lines(content: &str, protocol: ProxyProtocol) -> Vec<String> {
        split_lines(content)
            .map(str::trim)
            .filter(|line| Self::is_valid(line))
            .map(|line| protocol.format_entry(line))
            .collect()
    }

    /// Filter a raw list file into `output`, one formatted entry per line
    pub fn filter_file<P: AsRef<Path>, Q: AsRef<Path>>(
        input: P,
        output: Q,
        protocol: ProxyProtocol,
    ) -> Result<FilterSummary> {
        let input = input.as_ref();
        let output = output.as_ref();

        log::info!(
            "Filtering and formatting {} proxies from {}...",
            protocol.scheme().to_uppercase(),
            input.display()
        );

        let content = fs::read_to_string(input)
            .with_context(|| format!("failed to read {}", input.display()))?;
        let proxies = Self::format_lines(&content, protocol);

        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(output, proxies.join("\n"))
            .with_context(|| format!("failed to write {}", output.display()))?;

        let summary = FilterSummary {
            total_lines: split_lines(&content).count(),
            kept: proxies.len(),
        };

        log::info!(
            "Formatted {} {} proxies saved to {} ({} malformed lines dropped).",
            summary.kept,
            protocol.scheme().to_uppercase(),
            output.display(),
            summary.dropped()
        );

        Ok(summary)
    }
}

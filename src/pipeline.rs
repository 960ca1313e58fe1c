//! Pipeline orchestrating download, filter and liveness check
//!
//! Stages run strictly in order: both downloads, then both filters, then
//! both liveness checks. Download and filter failures abort the run, as does
//! a checker that cannot be started. A checker exiting unsuccessfully is
//! logged and the run carries on.

use crate::error::CheckerError;
use crate::proxy::{FilterSummary, LivenessChecker, ProxyFetcher, ProxyFilter, ProxyProtocol};
use crate::{PipelineConfig, Result};
use anyhow::Context;
use std::fs;
use std::path::PathBuf;

/// Outcome of the liveness check for one protocol
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiveOutcome {
    /// The checker succeeded and wrote this file
    Saved(PathBuf),
    /// The checker failed with this message
    Failed(String),
}

impl LiveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, LiveOutcome::Saved(_))
    }
}

/// Per-protocol result of a pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolReport {
    pub protocol: ProxyProtocol,
    pub filter: FilterSummary,
    pub live: LiveOutcome,
}

/// Result of a complete pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    pub protocols: Vec<ProtocolReport>,
}

impl PipelineReport {
    /// Report for a single protocol, if it was processed
    pub fn get(&self, protocol: ProxyProtocol) -> Option<&ProtocolReport> {
        self.protocols.iter().find(|r| r.protocol == protocol)
    }

    /// Whether any liveness check failed
    pub fn has_check_failures(&self) -> bool {
        self.protocols.iter().any(|r| !r.live.is_saved())
    }
}

/// Sequential proxy list pipeline
pub struct Pipeline<C: LivenessChecker> {
    config: PipelineConfig,
    fetcher: ProxyFetcher,
    checker: C,
}

impl<C: LivenessChecker> Pipeline<C> {
    pub fn new(config: PipelineConfig, fetcher: ProxyFetcher, checker: C) -> Self {
        Self {
            config,
            fetcher,
            checker,
        }
    }

    /// Run every stage for both protocols
    pub async fn run(&self) -> Result<PipelineReport> {
        fs::create_dir_all(&self.config.output_dir).with_context(|| {
            format!("failed to create {}", self.config.output_dir.display())
        })?;

        for protocol in ProxyProtocol::ALL {
            self.fetcher
                .download(self.config.source_url(protocol), &self.config.paths(protocol).raw)
                .await?;
        }

        let mut summaries = Vec::with_capacity(ProxyProtocol::ALL.len());
        for protocol in ProxyProtocol::ALL {
            let paths = self.config.paths(protocol);
            let summary = ProxyFilter::filter_file(&paths.raw, &paths.filtered, protocol)?;
            summaries.push((protocol, summary));
        }

        let mut report = PipelineReport::default();
        for (protocol, filter) in summaries {
            let live = self.check(protocol).await?;
            report.protocols.push(ProtocolReport {
                protocol,
                filter,
                live,
            });
        }

        Ok(report)
    }

    /// A checker that ran and failed is recorded; one that could not be
    /// started aborts the run.
    async fn check(&self, protocol: ProxyProtocol) -> Result<LiveOutcome> {
        let paths = self.config.paths(protocol);
        match self
            .checker
            .check(&paths.filtered, &paths.live, self.config.concurrency)
            .await
        {
            Ok(()) => Ok(LiveOutcome::Saved(paths.live)),
            Err(e @ CheckerError::Failed { .. }) => {
                log::error!("Error while checking {protocol} proxies: {e}");
                Ok(LiveOutcome::Failed(e.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

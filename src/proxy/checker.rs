//! Liveness checker module
//!
//! Checking whether a proxy actually forwards traffic is delegated to an
//! external program. The pipeline only sees the [`LivenessChecker`] trait.

use crate::error::CheckerError;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Default external program used to check proxies
pub const DEFAULT_CHECKER_PROGRAM: &str = "mubeng";

/// Something that reads a filtered proxy list and writes the live subset
#[async_trait]
pub trait LivenessChecker: Send + Sync {
    async fn check(
        &self,
        input: &Path,
        output: &Path,
        concurrency: usize,
    ) -> Result<(), CheckerError>;
}

/// Liveness checker backed by the `mubeng` command line tool
#[derive(Debug, Clone)]
pub struct MubengChecker {
    program: String,
}

impl MubengChecker {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_CHECKER_PROGRAM)
    }

    /// Use a different executable name or path
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for MubengChecker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LivenessChecker for MubengChecker {
    async fn check(
        &self,
        input: &Path,
        output: &Path,
        concurrency: usize,
    ) -> Result<(), CheckerError> {
        log::info!("Checking live proxies from {}...", input.display());

        let result = Command::new(&self.program)
            .arg("-f")
            .arg(input)
            .arg("-o")
            .arg(output)
            .arg("-c")
            .arg(concurrency.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| CheckerError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !result.status.success() {
            return Err(CheckerError::Failed {
                program: self.program.clone(),
                status: result.status.to_string(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        log::info!("Live proxies saved to {}.", output.display());
        Ok(())
    }
}

//! Error types for the liveness checker boundary

use thiserror::Error;

/// Error returned when the external liveness checker does not succeed
#[derive(Debug, Error)]
pub enum CheckerError {
    /// The checker program could not be started
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    /// The checker program ran but exited unsuccessfully
    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },
}

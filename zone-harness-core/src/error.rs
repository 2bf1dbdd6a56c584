//! Unified error types for the harness.

use thiserror::Error;

// Re-export library error type
pub use zone_harness_provider::ProviderError;

/// Fatal harness error: the run cannot meaningfully continue.
///
/// Provider failures during setup or state inspection land here; an unusable
/// provider connection cannot be recovered from within a single step.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// Provider error (converted from the provider library).
    #[error("{0}")]
    Provider(#[from] ProviderError),

    /// A scenario referenced a step the library does not define.
    #[error("Unrecognized step: {0:?}")]
    UnknownStep(String),

    /// I/O error (reference files, subprocess plumbing).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Harness-level `Result` alias.
pub type HarnessResult<T> = std::result::Result<T, HarnessError>;

/// Outcome of a single step.
///
/// `Failed` is an assertion failure: it is collected into the scenario's
/// report and later steps still run. `Fatal` aborts the whole run (after
/// teardown).
#[derive(Error, Debug)]
pub enum StepError {
    /// Assertion failure, reported per scenario.
    #[error("{0}")]
    Failed(String),

    /// Fatal error, aborts the run.
    #[error(transparent)]
    Fatal(#[from] HarnessError),
}

impl StepError {
    /// Builds an assertion failure from any displayable message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

impl From<ProviderError> for StepError {
    fn from(e: ProviderError) -> Self {
        Self::Fatal(HarnessError::Provider(e))
    }
}

//! Workspace base error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]` where they surface core failures.

use thiserror::Error;

/// Errors raised by `ix-core` itself.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `ix-core`.
pub type CoreResult<T> = Result<T, CoreError>;

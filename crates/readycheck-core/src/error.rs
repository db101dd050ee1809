//! Session error types.
//!
//! The scoring engine itself never fails; errors only arise when a caller
//! drives the assessment session out of order.

use thiserror::Error;

/// Errors from misusing an [`crate::session::Session`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// An answer was submitted before the assessment was started.
    #[error("assessment has not been started")]
    NotStarted,

    /// An answer was submitted after every question had been answered.
    #[error("assessment is already complete")]
    AlreadyComplete,
}

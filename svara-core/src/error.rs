//! Error types for Svara.
//!
//! Dispatch itself is infallible by contract: an unsupported or absent
//! method is a routing outcome, not an error, and downstream handler
//! failures propagate to the caller untouched. The only error surface is
//! the strict [`Method`] parser.
//!
//! [`Method`]: crate::Method

use thiserror::Error;

/// Error returned by the strict `Method` parser (`FromStr`).
///
/// Carries the offending token verbatim, casing included.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown HTTP method token: {0:?}")]
pub struct UnknownMethod(
    /// The token that failed to parse.
    pub String,
);

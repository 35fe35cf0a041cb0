//! Pipeline error types.

use derive_more::{Display, Error};

/// A pipeline error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure stages of the relocation pipeline.
///
/// Any failure aborts the whole transformation; partially rewritten text is
/// never returned, so the input stays untouched and safe to retry.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// Download of a source URL failed
    #[display("failed to fetch {_0}")]
    Fetch(#[error(not(source))] String),
    /// Upload to permanent storage failed
    #[display("failed to store media fetched from {_0}")]
    Store(#[error(not(source))] String),
}

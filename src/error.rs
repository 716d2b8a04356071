//! Error type for sponge construction and application.

use thiserror::Error;

/// Everything that can go wrong while building or applying a Keccak sponge.
///
/// All validation happens when a sponge is constructed or at the entry of an
/// `apply` call; the permutation itself is infallible once the configuration
/// has been accepted.
#[derive(Debug, Error)]
pub enum KeccakError {
    /// A configuration or message parameter is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// The configuration is valid Keccak but outside what this
    /// implementation supports.
    #[error("unsupported configuration: {0}")]
    Unsupported(&'static str),

    /// The byte source handed to [`apply_reader`](crate::KeccakSponge::apply_reader)
    /// failed.
    #[error("byte source read failed")]
    Io(#[from] std::io::Error),
}

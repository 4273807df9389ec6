//! Error types for the lock value derivation chain.
//!
//! Every stage validates its own input before computing. Failures are
//! terminal for the invocation: there is no retry path, and no stage
//! catches or rewrites an error raised by an earlier stage.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Private key is malformed or out of range for the curve
    /// (wrong length, zero, or not below the curve order).
    #[error("invalid private key: {0}")]
    InvalidKey(String),

    /// Lock script field is malformed: unrecognized hash type tag,
    /// or wrong-length code hash / args.
    #[error("invalid lock script: {0}")]
    InvalidScript(String),

    /// Address failed to decode: bad checksum, wrong encoding variant,
    /// unknown network prefix, or malformed payload.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

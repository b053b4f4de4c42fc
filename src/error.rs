//! Error type for key management operations.
//!
//! Field arithmetic and the X25519 ladder are total functions and never
//! fail; all fallible operations are on `curve25519::KeyPair`.

/// Key management errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Unsupported key size, malformed import data, bad format tag, or
    /// a peer public point rejected by the high-bit policy.
    #[error("invalid argument")]
    InvalidArgument,

    /// Output buffer is too small; nothing was written.
    #[error("buffer too small: need {need}, got {got}")]
    BufferTooSmall { need: usize, got: usize },

    /// The random source failed; its error is passed through unchanged.
    #[error("random source failure: {0}")]
    RandomSource(rand_core::Error),
}

pub type Result<T> = core::result::Result<T, Error>;

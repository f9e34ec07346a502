use thiserror::Error;

/// Errors returned by the generation core.
///
/// Scoring never fails; only generation can be rejected or interrupted.
#[derive(Debug, Error)]
pub enum Error {
    /// The request cannot be served; the caller should ask again.
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] InvalidRequest),

    /// The secure random source could not supply bytes.
    #[error("Secure random source failed: {0}")]
    EntropySource(#[from] rand_core::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidRequest {
    #[error("no character classes selected")]
    EmptyAlphabet,

    #[error("password length must be a positive number")]
    ZeroLength,

    #[error("alphabet has {0} characters, at most 256 can be indexed by a byte")]
    AlphabetTooLarge(usize),
}

pub type Result<T> = std::result::Result<T, Error>;

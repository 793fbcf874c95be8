//! Error types for alphaid.
//!
//! Every failure is reported to the caller as a typed error. Nothing is
//! retried internally and no partial identifier is ever returned.

/// Errors produced while validating a request or generating an identifier.
#[derive(Debug, thiserror::Error)]
pub enum IdError {
    #[error("Invalid length: {0} (must be greater than zero)")]
    InvalidLength(i64),

    #[error("Alphabet is empty")]
    EmptyAlphabet,

    #[error("Alphabet too large: {0} symbols (maximum is 255)")]
    AlphabetTooLarge(usize),

    #[error("Unknown alphabet: {0}")]
    UnknownAlphabet(String),

    #[error("Random source failure: {0}")]
    RandomSourceFailure(#[from] rand::Error),
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, IdError>;

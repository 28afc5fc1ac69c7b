//! Error types for cipher and key-recovery operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VigenereError {
    #[error("Key must contain at least one letter")]
    EmptyKey,

    #[error("Key may only contain ASCII letters, found {0:?}")]
    InvalidKeyChar(char),

    #[error("No candidate keys to rank")]
    NoCandidates,
}

pub type Result<T> = std::result::Result<T, VigenereError>;

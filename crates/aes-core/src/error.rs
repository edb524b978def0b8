//! Error type shared by the block engine and the modes of operation.

use thiserror::Error;

/// Errors reported by the AES engine and its modes of operation.
///
/// Every variant is raised before any output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A block primitive was handed something other than 16 bytes.
    #[error("invalid block size: expected 16 bytes, got {got}")]
    InvalidBlockSize {
        /// Length that was supplied.
        got: usize,
    },

    /// An IV or counter block was not 16 bytes.
    #[error("invalid IV length: expected 16 bytes, got {got}")]
    InvalidIvLength {
        /// Length that was supplied.
        got: usize,
    },

    /// A chunk or segment size was out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// ECB/CBC ciphertext whose length is not a multiple of 16.
    #[error("ciphertext length {len} is not a multiple of the block size")]
    MisalignedCiphertext {
        /// Ciphertext length in bytes.
        len: usize,
    },

    /// A partial AES block turned up before the end of the final chunk.
    #[error("unexpected partial AES block at offset {offset} in a non-final chunk")]
    InternalConsistency {
        /// Byte offset of the partial block in the message.
        offset: usize,
    },

    /// S-box or round-key material is missing or malformed.
    #[error("configuration incomplete: {0}")]
    ConfigurationIncomplete(String),
}

/// Result alias used throughout the workspace libraries.
pub type Result<T> = core::result::Result<T, Error>;

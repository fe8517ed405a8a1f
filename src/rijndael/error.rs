use thiserror::Error;

/// AES Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// AES Error type.
///
/// Only key setup can fail. Field arithmetic, substitution and the round transforms
/// are total over their byte-level domain.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to instantiate an AES key with an input size that is not 128, 192, or 256 bits.
    #[error("invalid key length: {len} bytes (expected 16, 24, or 32)")]
    InvalidKeyLength { len: usize },
}

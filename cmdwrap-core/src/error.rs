//! Error types for command type parsing and decoding.

use thiserror::Error;

use crate::encoding::EncodeType;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures reported by the strict entry points of this crate.
///
/// [`wrap`](crate::wrap), [`encode`](crate::encode) and [`format`](crate::format)
/// never fail; only name parsing and [`try_decode`](crate::try_decode) do.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Name does not match any [`CommandType`](crate::CommandType).
    #[error("unknown command type '{0}' (expected one of: bash, sh, powershell, python, perl, cmd, raw)")]
    UnknownCommandType(String),

    /// Name does not match any [`EncodeType`].
    #[error("unknown encoding '{0}' (expected one of: none, url, base64, double_url)")]
    UnknownEncodeType(String),

    /// Input could not be decoded with the requested encoding.
    #[error("{encoding} decoding failed: {message}")]
    Decode {
        /// Encoding that was being reversed
        encoding: EncodeType,
        /// Description of the underlying failure
        message: String,
    },
}

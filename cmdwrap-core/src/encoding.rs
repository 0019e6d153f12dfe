//! Post-wrap encodings and their inverses.
//!
//! Encoding is total: every `&str` has a URL and base64 form, so [`encode`]
//! cannot fail. Decoding can (bad base64, bytes that are not UTF-8), and
//! comes in two flavours: [`try_decode`] reports the failure, [`decode`]
//! hands the input back unchanged.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{Error, Result};

/// Transformation applied to the wrapped command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EncodeType {
    /// Leave the command as-is.
    #[default]
    None,
    /// Percent-encode everything outside [`URI_COMPONENT`].
    Url,
    /// Standard, padded base64 of the UTF-8 bytes.
    Base64,
    /// [`EncodeType::Url`] applied twice.
    DoubleUrl,
}

impl EncodeType {
    /// All variants in presentation order.
    pub const ALL: [EncodeType; 4] = [
        EncodeType::None,
        EncodeType::Url,
        EncodeType::Base64,
        EncodeType::DoubleUrl,
    ];

    /// Stable machine name used on the command line and in the environment.
    pub const fn name(self) -> &'static str {
        match self {
            EncodeType::None => "none",
            EncodeType::Url => "url",
            EncodeType::Base64 => "base64",
            EncodeType::DoubleUrl => "double_url",
        }
    }

    /// Human readable label used in status messages.
    pub const fn label(self) -> &'static str {
        match self {
            EncodeType::None => "None",
            EncodeType::Url => "URL",
            EncodeType::Base64 => "Base64",
            EncodeType::DoubleUrl => "Double URL",
        }
    }

    /// Looks up an encoding by name, treating anything unrecognized as [`EncodeType::None`].
    pub fn from_name_lossy(name: &str) -> Self {
        name.parse().unwrap_or(EncodeType::None)
    }
}

impl fmt::Display for EncodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EncodeType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().replace('-', "_");
        EncodeType::ALL
            .into_iter()
            .find(|ty| ty.name().eq_ignore_ascii_case(&needle))
            .ok_or_else(|| Error::UnknownEncodeType(s.to_string()))
    }
}

/// Bytes escaped by [`url_encode`]: everything except ASCII alphanumerics
/// and `- _ . ! ~ * ' ( )`, the set a browser's `encodeURIComponent` keeps.
pub const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes the UTF-8 bytes of `input` outside [`URI_COMPONENT`],
/// with uppercase hex digits.
pub fn url_encode(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Reverses [`url_encode`].
///
/// Malformed `%` sequences are kept literally; the only failure is a decoded
/// byte sequence that is not valid UTF-8.
///
/// # Errors
///
/// Returns [`Error::Decode`] when the decoded bytes are not UTF-8.
pub fn url_decode(input: &str) -> Result<String> {
    urlencoding::decode(input)
        .map(|decoded| decoded.into_owned())
        .map_err(|err| Error::Decode {
            encoding: EncodeType::Url,
            message: err.to_string(),
        })
}

/// Encodes the UTF-8 bytes of `input` as standard, padded base64.
pub fn base64_encode(input: &str) -> String {
    STANDARD.encode(input.as_bytes())
}

/// Reverses [`base64_encode`]. Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`Error::Decode`] when the input is not valid base64 or the decoded
/// bytes are not UTF-8.
pub fn base64_decode(input: &str) -> Result<String> {
    let bytes = STANDARD.decode(input.trim()).map_err(|err| Error::Decode {
        encoding: EncodeType::Base64,
        message: err.to_string(),
    })?;

    String::from_utf8(bytes).map_err(|err| Error::Decode {
        encoding: EncodeType::Base64,
        message: err.to_string(),
    })
}

/// Applies `ty` to `input`. Empty input stays empty for every encoding.
pub fn encode(input: &str, ty: EncodeType) -> String {
    if input.is_empty() {
        return String::new();
    }

    match ty {
        EncodeType::None => input.to_string(),
        EncodeType::Url => url_encode(input),
        EncodeType::Base64 => base64_encode(input),
        EncodeType::DoubleUrl => url_encode(&url_encode(input)),
    }
}

/// Reverses `ty`, reporting why the input could not be decoded.
///
/// # Errors
///
/// Returns [`Error::Decode`] when `input` is not a valid encoding of UTF-8 text
/// under `ty`.
pub fn try_decode(input: &str, ty: EncodeType) -> Result<String> {
    if input.is_empty() {
        return Ok(String::new());
    }

    match ty {
        EncodeType::None => Ok(input.to_string()),
        EncodeType::Url => url_decode(input),
        EncodeType::Base64 => base64_decode(input),
        EncodeType::DoubleUrl => url_decode(input)
            .and_then(|once| url_decode(&once))
            .map_err(|err| match err {
                Error::Decode { message, .. } => Error::Decode {
                    encoding: EncodeType::DoubleUrl,
                    message,
                },
                other => other,
            }),
    }
}

/// Reverses `ty`, returning `input` unchanged when it cannot be decoded.
///
/// The result is meant for a human to review, so a failed decode shows the
/// original text rather than an error.
pub fn decode(input: &str, ty: EncodeType) -> String {
    try_decode(input, ty).unwrap_or_else(|err| {
        tracing::debug!(encoding = ty.name(), error = %err, "decode failed, keeping input");
        input.to_string()
    })
}

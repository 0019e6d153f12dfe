//! Wrap-then-encode composition.

use crate::command::{wrap, CommandType};
use crate::encoding::{encode, EncodeType};

/// Intermediate and final result of [`format`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Formatted {
    /// Command embedded in the interpreter template.
    pub wrapped: String,
    /// `wrapped` after the selected encoding.
    pub encoded: String,
}

impl Formatted {
    /// Returns `true` when there is nothing to show or copy.
    pub fn is_empty(&self) -> bool {
        self.encoded.is_empty()
    }
}

/// Wraps `raw` for `command_type`, then applies `encode_type` to the result.
///
/// Stateless: the same three inputs always produce the same output.
pub fn format(raw: &str, command_type: CommandType, encode_type: EncodeType) -> Formatted {
    let wrapped = wrap(command_type, raw);
    let encoded = encode(&wrapped, encode_type);

    tracing::trace!(
        command_type = command_type.name(),
        encode_type = encode_type.name(),
        raw_len = raw.len(),
        encoded_len = encoded.len(),
        "formatted command"
    );

    Formatted { wrapped, encoded }
}

//! Configuration types and constants for cmdwrap CLI operations.

use cmdwrap_core::{CommandType, EncodeType};

use crate::clipboard::ClipboardChoice;
use crate::error::Error;

/// Environment variable supplying the default command type
pub const TYPE_ENV: &str = "CMDWRAP_TYPE";

/// Environment variable supplying the default encoding
pub const ENCODING_ENV: &str = "CMDWRAP_ENCODING";

/// Environment variable supplying the clipboard choice
pub const CLIPBOARD_ENV: &str = "CMDWRAP_CLIPBOARD";

/// Represents different modes of operation for CLI utilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperationMode {
    /// Wrap and encode one command
    #[default]
    Format,
    /// Reverse an encoding
    Decode,
    /// Read commands and directives line by line
    Interactive,
}

/// Configuration for CLI operations
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Operation mode
    pub mode: OperationMode,
    /// Interpreter template to wrap the command in
    pub command_type: CommandType,
    /// Encoding applied after wrapping (or reversed in decode mode)
    pub encode_type: EncodeType,
    /// Print the wrapped command before the final one
    pub show_wrapped: bool,
    /// Copy the final command to the clipboard
    pub copy: bool,
    /// Clipboard to copy to
    pub clipboard: ClipboardChoice,
    /// Verbose output
    pub verbose: bool,
    /// Quiet level (`-q` suppresses status lines, `-qq` errors too)
    pub quiet: u8,
}

/// Parses a command type name for clap.
///
/// # Errors
///
/// Returns an error naming the valid types when `s` is not one of them.
pub fn parse_command_type(s: &str) -> Result<CommandType, Error> {
    Ok(s.parse()?)
}

/// Parses an encoding name for clap.
///
/// # Errors
///
/// Returns an error naming the valid encodings when `s` is not one of them.
pub fn parse_encode_type(s: &str) -> Result<EncodeType, Error> {
    Ok(s.parse()?)
}

/// Parses a clipboard choice for clap.
///
/// # Errors
///
/// Returns an error for an empty value.
pub fn parse_clipboard_choice(s: &str) -> Result<ClipboardChoice, Error> {
    s.parse()
}

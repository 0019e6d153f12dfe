//! Terminal front end for `cmdwrap-core`.
//!
//! The formatter itself is stateless. This crate adds everything around it
//! that a user interacts with: a [`Session`] that owns the current selections
//! and recomputes the output on every change, the status messages shown after
//! each action, an injected [`Clipboard`] capability, the command-line
//! configuration, and the two front ends (one-shot and interactive) used by
//! the `cmdwrap` and `cmddecode` binaries.

pub mod clipboard;
pub mod config;
pub mod error;
pub mod interactive;
pub mod logging;
pub mod process;
pub mod session;
pub mod status;


pub use clipboard::{
    detect_clipboard, open_clipboard, try_open_clipboard, Clipboard, ClipboardChoice,
    CommandClipboard, Osc52Clipboard, UnavailableClipboard,
};
pub use config::{
    parse_clipboard_choice, parse_command_type, parse_encode_type, CliConfig, OperationMode,
};
pub use error::{format_error_for_stderr, Error, InvocationError, Result};
pub use interactive::{parse_line, run_interactive, Directive, Line};
pub use logging::init_logging;
pub use process::{process_command, read_command, run_cli};
pub use session::Session;
pub use status::{Status, StatusLevel};

pub use cmdwrap_core::{CommandType, EncodeType, Formatted};

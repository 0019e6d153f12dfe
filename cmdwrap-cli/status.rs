//! Status messages shown after each user action.

use std::fmt;

use cmdwrap_core::{CommandType, EncodeType};

/// Severity of a [`Status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Neutral feedback
    Info,
    /// An action completed
    Success,
    /// Nothing was done, but nothing failed either
    Warning,
    /// An action failed
    Error,
}

impl StatusLevel {
    /// Short lowercase tag used when printing a status line.
    pub const fn tag(self) -> &'static str {
        match self {
            StatusLevel::Info => "info",
            StatusLevel::Success => "ok",
            StatusLevel::Warning => "warning",
            StatusLevel::Error => "error",
        }
    }
}

/// A human readable message describing the outcome of the last action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    /// Severity
    pub level: StatusLevel,
    /// Message text
    pub message: String,
}

impl Status {
    /// Creates a status with an arbitrary message.
    pub fn new(level: StatusLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    /// Initial status of a fresh session.
    pub fn ready() -> Self {
        Self::new(StatusLevel::Info, "Ready")
    }

    /// Reported after every input change.
    pub fn char_count(count: usize) -> Self {
        let noun = if count == 1 { "character" } else { "characters" };
        Self::new(StatusLevel::Info, format!("{count} {noun}"))
    }

    pub fn command_type_selected(ty: CommandType) -> Self {
        Self::new(
            StatusLevel::Info,
            format!("Selected command type: {}", ty.label()),
        )
    }

    pub fn encode_type_selected(ty: EncodeType) -> Self {
        Self::new(StatusLevel::Info, format!("Selected encoding: {}", ty.label()))
    }

    pub fn encoding_complete() -> Self {
        Self::new(StatusLevel::Success, "Encoding complete")
    }

    pub fn nothing_to_copy() -> Self {
        Self::new(StatusLevel::Warning, "Nothing to copy")
    }

    pub fn copied() -> Self {
        Self::new(StatusLevel::Success, "Copied to clipboard")
    }

    pub fn copy_failed(reason: impl fmt::Display) -> Self {
        Self::new(StatusLevel::Error, format!("Copy failed: {reason}"))
    }

    /// Returns `true` for [`StatusLevel::Error`].
    pub fn is_error(&self) -> bool {
        self.level == StatusLevel::Error
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level.tag(), self.message)
    }
}

//! Error types for cmdwrap CLI operations.

use std::io;
use std::process::ExitStatus;

use thiserror::Error;

/// An [`Error`] together with the binary that hit it.
///
/// [`run_cli`](crate::run_cli) returns it inside an [`io::Error`]; `main`
/// recovers it with [`format_error_for_stderr`].
#[derive(Debug, Error)]
#[error("{program}: {source}")]
pub struct InvocationError {
    /// `cmdwrap` or `cmddecode`
    pub program: String,
    pub source: Error,
}

impl From<InvocationError> for io::Error {
    fn from(err: InvocationError) -> Self {
        io::Error::new(err.source.kind(), err)
    }
}

/// Renders `err` as the single line `main` prints before exiting.
///
/// `-qq` (`quiet >= 2`) silences it entirely. An [`InvocationError`] already
/// names its program; any other error is prefixed with `program`.
pub fn format_error_for_stderr(program: &str, quiet: u8, err: &io::Error) -> Option<String> {
    if quiet > 1 {
        return None;
    }

    let invocation = err
        .get_ref()
        .and_then(|inner| inner.downcast_ref::<InvocationError>());
    Some(match invocation {
        Some(invocation) => invocation.to_string(),
        None => format!("{program}: {err}"),
    })
}

/// Everything that can go wrong between reading a command and copying it.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read the command from stdin
    #[error("(stdin): {source}")]
    ReadInput {
        #[source]
        source: io::Error,
    },

    /// Failed to write results
    #[error("(stdout): {source}")]
    WriteOutput {
        #[source]
        source: io::Error,
    },

    /// Type parsing or decoding failed in the formatter
    #[error(transparent)]
    Format(#[from] cmdwrap_core::Error),

    /// Clipboard specification could not be parsed
    #[error("invalid clipboard '{0}' (expected auto, osc52 or a program with arguments)")]
    InvalidClipboard(String),

    /// Clipboard program is not installed
    #[error("{program}: clipboard program not found")]
    ClipboardNotFound {
        /// Program that was looked up in PATH
        program: String,
    },

    /// No clipboard could be opened
    #[error("no clipboard available: {reason}")]
    ClipboardUnavailable {
        /// Why the clipboard could not be opened
        reason: String,
    },

    /// Clipboard program could not be started
    #[error("{program}: {source}")]
    ClipboardSpawn {
        /// Program that failed to start
        program: String,
        #[source]
        source: io::Error,
    },

    /// Writing the text to the clipboard failed
    #[error("{program}: {source}")]
    ClipboardWrite {
        /// Clipboard the text was sent to
        program: String,
        #[source]
        source: io::Error,
    },

    /// Clipboard program exited unsuccessfully
    #[error("{program}: exited with {status}{}", fmt_stderr(.stderr))]
    ClipboardExit {
        /// Program that failed
        program: String,
        /// Exit status reported by the program
        status: ExitStatus,
        /// Trimmed stderr of the program
        stderr: String,
    },
}

fn fmt_stderr(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

impl Error {
    /// The [`io::ErrorKind`] used when this error crosses into [`io::Error`].
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Error::Format(_) | Error::InvalidClipboard(_) => io::ErrorKind::InvalidInput,
            Error::ClipboardNotFound { .. } | Error::ClipboardUnavailable { .. } => {
                io::ErrorKind::NotFound
            }
            Error::ClipboardExit { .. } => io::ErrorKind::Other,
            Error::ReadInput { source }
            | Error::WriteOutput { source }
            | Error::ClipboardSpawn { source, .. }
            | Error::ClipboardWrite { source, .. } => source.kind(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<Error> for io::Error {
    fn from(error: Error) -> Self {
        io::Error::new(error.kind(), error)
    }
}

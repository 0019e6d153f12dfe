//! Clipboard capability injected into a [`Session`](crate::Session).
//!
//! A host clipboard program (`pbcopy`, `wl-copy`, `xclip`, ...) is preferred
//! when one is installed. Otherwise the text is handed to the terminal with an
//! OSC 52 escape sequence, which most modern terminal emulators forward to
//! the system clipboard.

use std::env;
use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::str::FromStr;

use cmdwrap_core::base64_encode;

use crate::error::{Error, Result};

/// Something that can receive text for the system clipboard.
pub trait Clipboard {
    /// Name shown in logs and error messages.
    fn name(&self) -> &str;

    /// Places `text` on the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the text could not be delivered. Callers report it
    /// and move on; a copy is never retried.
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// Host clipboard programs probed by [`detect_clipboard`], in order.
///
/// The third field names an environment variable that must be set for the
/// program to be usable (a Wayland or X11 session).
const HOST_BRIDGES: &[(&str, &[&str], Option<&str>)] = &[
    ("pbcopy", &[], None),
    ("wl-copy", &[], Some("WAYLAND_DISPLAY")),
    ("xclip", &["-selection", "clipboard"], Some("DISPLAY")),
    ("xsel", &["--clipboard", "--input"], Some("DISPLAY")),
    ("clip.exe", &[], None),
];

/// Pipes the text into an external clipboard program.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: PathBuf,
    args: Vec<String>,
    display: String,
}

impl CommandClipboard {
    /// Creates a clipboard that runs `program` with `args`.
    ///
    /// The program is not checked until the first copy.
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        let program = program.into();
        let display = program
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| program.display().to_string());
        Self {
            program,
            args,
            display,
        }
    }

    /// Resolves the first word of `command_line` in `PATH`.
    ///
    /// The remaining whitespace-separated words become arguments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidClipboard`] for an empty command line and
    /// [`Error::ClipboardNotFound`] when the program is not installed.
    pub fn locate(command_line: &str) -> Result<Self> {
        let mut words = command_line.split_whitespace();
        let program = words
            .next()
            .ok_or_else(|| Error::InvalidClipboard(command_line.to_string()))?;
        let path = which::which(program).map_err(|_| Error::ClipboardNotFound {
            program: program.to_string(),
        })?;
        Ok(Self::new(path, words.map(str::to_string).collect()))
    }
}

impl Clipboard for CommandClipboard {
    fn name(&self) -> &str {
        &self.display
    }

    fn copy(&mut self, text: &str) -> Result<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| Error::ClipboardSpawn {
                program: self.display.clone(),
                source,
            })?;

        // The child is reaped even when the write fails, e.g. with a broken
        // pipe from a program that exits without reading
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        let output = child
            .wait_with_output()
            .map_err(|source| Error::ClipboardSpawn {
                program: self.display.clone(),
                source,
            })?;

        written.map_err(|source| Error::ClipboardWrite {
            program: self.display.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(Error::ClipboardExit {
                program: self.display.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        tracing::debug!(clipboard = %self.display, bytes = text.len(), "copied via host program");
        Ok(())
    }
}

/// Sends the text to the terminal as an OSC 52 clipboard request.
pub struct Osc52Clipboard<W> {
    writer: W,
}

impl<W: Write> Osc52Clipboard<W> {
    /// Writes escape sequences to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the clipboard and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl Osc52Clipboard<io::Stderr> {
    /// Writes escape sequences to stderr, which stays attached to the
    /// terminal when stdout is piped.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn name(&self) -> &str {
        "osc52"
    }

    fn copy(&mut self, text: &str) -> Result<()> {
        let payload = base64_encode(text);
        write!(self.writer, "\x1b]52;c;{payload}\x07")
            .and_then(|()| self.writer.flush())
            .map_err(|source| Error::ClipboardWrite {
                program: "osc52".to_string(),
                source,
            })
    }
}

/// A clipboard that could not be opened. Every copy reports why.
#[derive(Debug, Clone)]
pub struct UnavailableClipboard {
    reason: String,
}

impl UnavailableClipboard {
    pub fn new(reason: impl fmt::Display) -> Self {
        Self {
            reason: reason.to_string(),
        }
    }
}

impl Clipboard for UnavailableClipboard {
    fn name(&self) -> &str {
        "unavailable"
    }

    fn copy(&mut self, _text: &str) -> Result<()> {
        Err(Error::ClipboardUnavailable {
            reason: self.reason.clone(),
        })
    }
}

/// Which clipboard the user asked for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClipboardChoice {
    /// First installed host program, else OSC 52
    #[default]
    Auto,
    /// Always use the OSC 52 escape sequence
    Osc52,
    /// A specific program and its arguments, e.g. `xclip -selection clipboard`
    Command(String),
}

impl FromStr for ClipboardChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "" => Err(Error::InvalidClipboard(s.to_string())),
            "auto" => Ok(ClipboardChoice::Auto),
            "osc52" => Ok(ClipboardChoice::Osc52),
            _ => Ok(ClipboardChoice::Command(s.to_string())),
        }
    }
}

impl fmt::Display for ClipboardChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardChoice::Auto => f.write_str("auto"),
            ClipboardChoice::Osc52 => f.write_str("osc52"),
            ClipboardChoice::Command(line) => f.write_str(line),
        }
    }
}

fn bridge_usable(required_env: Option<&str>) -> bool {
    required_env.is_none_or(|var| env::var_os(var).is_some_and(|value| !value.is_empty()))
}

/// Returns the first usable host clipboard program, or the OSC 52 fallback.
pub fn detect_clipboard() -> Box<dyn Clipboard> {
    for (program, args, required_env) in HOST_BRIDGES {
        if !bridge_usable(*required_env) {
            continue;
        }
        if let Ok(path) = which::which(program) {
            tracing::debug!(clipboard = program, path = %path.display(), "using host clipboard");
            let args = args.iter().map(|arg| (*arg).to_string()).collect();
            return Box::new(CommandClipboard::new(path, args));
        }
    }

    tracing::debug!("no host clipboard found, falling back to osc52");
    Box::new(Osc52Clipboard::stderr())
}

/// Opens the clipboard described by `choice`.
///
/// # Errors
///
/// Returns an error when an explicitly requested program is not installed.
pub fn try_open_clipboard(choice: &ClipboardChoice) -> Result<Box<dyn Clipboard>> {
    match choice {
        ClipboardChoice::Auto => Ok(detect_clipboard()),
        ClipboardChoice::Osc52 => Ok(Box::new(Osc52Clipboard::stderr())),
        ClipboardChoice::Command(line) => Ok(Box::new(CommandClipboard::locate(line)?)),
    }
}

/// Like [`try_open_clipboard`], but a failure becomes an
/// [`UnavailableClipboard`] so it surfaces as a copy failure.
pub fn open_clipboard(choice: &ClipboardChoice) -> Box<dyn Clipboard> {
    try_open_clipboard(choice).unwrap_or_else(|err| {
        tracing::warn!(clipboard = %choice, error = %err, "clipboard unavailable");
        Box::new(UnavailableClipboard::new(err))
    })
}

//! Line-oriented front end.
//!
//! Each plain line replaces the current command and prints both the wrapped
//! and the final form. Lines starting with `:` are directives that change a
//! selector or act on the current output. A leading `::` escapes a command
//! that really starts with a colon.

use std::io::{BufRead, Write};

use cmdwrap_core::{CommandType, EncodeType};

use crate::clipboard::Clipboard;
use crate::config::CliConfig;
use crate::error::{Error, Result};
use crate::session::Session;
use crate::status::{Status, StatusLevel};

const HELP: &str = "\
Type a command to wrap it. Directives:
  :type <name>     bash, sh, powershell, python, perl, cmd, raw
  :encode <name>   none, url, base64, double_url
  :go              re-run the encoding for the current command
  :show            print the current output again
  :copy            copy the final command to the clipboard
  :help            show this help
  :quit            leave (so does end of input)
Start a line with '::' to enter a command beginning with ':'.";

/// A directive typed after `:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Select the command type by name
    Type(String),
    /// Select the encoding by name
    Encode(String),
    /// Re-run the encoding
    EncodeNow,
    /// Print the current output
    Show,
    /// Copy the final output
    Copy,
    /// Print the directive list
    Help,
    /// Stop reading input
    Quit,
    /// Anything else
    Unknown(String),
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// A command to format
    Input(&'a str),
    /// A directive
    Directive(Directive),
}

/// Splits a line into a command or a directive.
///
/// A directive is a `:` immediately followed by a letter, so shell lines such
/// as `: > log` stay commands.
pub fn parse_line(line: &str) -> Line<'_> {
    let line = line.trim_end_matches(['\r', '\n']);

    if line.starts_with("::") {
        return Line::Input(&line[1..]);
    }

    let Some(rest) = line
        .strip_prefix(':')
        .filter(|rest| rest.starts_with(|c: char| c.is_ascii_alphabetic()))
    else {
        return Line::Input(line);
    };

    let (name, arg) = rest
        .split_once(char::is_whitespace)
        .map_or((rest, ""), |(name, arg)| (name, arg.trim()));

    let directive = match name.to_ascii_lowercase().as_str() {
        "type" | "t" => Directive::Type(arg.to_string()),
        "encode" | "e" => Directive::Encode(arg.to_string()),
        "go" | "encode-now" => Directive::EncodeNow,
        "show" | "s" => Directive::Show,
        "copy" | "c" => Directive::Copy,
        "help" | "h" => Directive::Help,
        "quit" | "q" | "exit" => Directive::Quit,
        _ => Directive::Unknown(name.to_string()),
    };
    Line::Directive(directive)
}

fn write_output(output: &mut impl Write, session: &Session) -> Result<()> {
    writeln!(output, "wrapped: {}", session.wrapped())
        .and_then(|()| writeln!(output, "final: {}", session.encoded()))
        .map_err(|source| Error::WriteOutput { source })
}

fn error_status(message: impl Into<String>) -> Status {
    Status::new(StatusLevel::Error, message)
}

/// Drives a [`Session`] from `input` until `:quit` or end of input.
///
/// Results go to `output`, followed by the status of each action. `-q`
/// hides non-error statuses, `-qq` hides all of them.
///
/// # Errors
///
/// Returns an error when reading `input` or writing `output` fails. Bad
/// directives and failed copies are reported as statuses.
pub fn run_interactive<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    config: &CliConfig,
    clipboard: &mut dyn Clipboard,
) -> Result<()> {
    let mut session = Session::new(config.command_type, config.encode_type);
    let show_status = |status: &Status| {
        config.quiet == 0 || (status.is_error() && config.quiet < 2)
    };

    if show_status(session.status()) {
        writeln!(output, "{}", session.status()).map_err(|source| Error::WriteOutput { source })?;
    }

    for line in input.lines() {
        let line = line.map_err(|source| Error::ReadInput { source })?;

        let (status, refreshed) = match parse_line(&line) {
            Line::Input(raw) => (session.set_input(raw).clone(), true),
            Line::Directive(Directive::Type(name)) => match name.parse::<CommandType>() {
                Ok(ty) => (session.select_command_type(ty).clone(), true),
                Err(err) => (error_status(err.to_string()), false),
            },
            Line::Directive(Directive::Encode(name)) => match name.parse::<EncodeType>() {
                Ok(ty) => (session.select_encode_type(ty).clone(), true),
                Err(err) => (error_status(err.to_string()), false),
            },
            Line::Directive(Directive::EncodeNow) => (session.encode_now().clone(), true),
            Line::Directive(Directive::Show) => (session.status().clone(), true),
            Line::Directive(Directive::Copy) => (session.copy(clipboard).clone(), false),
            Line::Directive(Directive::Help) => {
                writeln!(output, "{HELP}").map_err(|source| Error::WriteOutput { source })?;
                continue;
            }
            Line::Directive(Directive::Quit) => break,
            Line::Directive(Directive::Unknown(name)) => (
                error_status(format!("Unknown directive ':{name}' (try :help)")),
                false,
            ),
        };

        if refreshed {
            write_output(&mut output, &session)?;
        }
        if show_status(&status) {
            writeln!(output, "{status}").map_err(|source| Error::WriteOutput { source })?;
        }
        output
            .flush()
            .map_err(|source| Error::WriteOutput { source })?;
    }

    tracing::debug!("interactive session finished");
    Ok(())
}

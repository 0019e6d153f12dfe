//! One-shot command processing and CLI orchestration.

use std::io::{self, Read, Write};

use cmdwrap_core::try_decode;

use crate::clipboard::{open_clipboard, Clipboard};
use crate::config::{CliConfig, OperationMode};
use crate::error::{Error, InvocationError, Result};
use crate::interactive::run_interactive;
use crate::session::{copy_to, Session};

/// Assembles the raw command from positional arguments or `input`.
///
/// Arguments are joined with single spaces. Without arguments the whole of
/// `input` is read and one trailing line break is dropped.
///
/// # Errors
///
/// Returns [`Error::ReadInput`] when `input` cannot be read or is not UTF-8.
pub fn read_command(args: &[String], mut input: impl Read) -> Result<String> {
    if !args.is_empty() {
        return Ok(args.join(" "));
    }

    let mut raw = String::new();
    input
        .read_to_string(&mut raw)
        .map_err(|source| Error::ReadInput { source })?;

    if raw.ends_with('\n') {
        raw.pop();
        if raw.ends_with('\r') {
            raw.pop();
        }
    }
    Ok(raw)
}

/// Processes a single command according to the CLI configuration.
///
/// # Parameters
///
/// * `raw` - The command as typed by the user
/// * `config` - CLI configuration (mode, selectors, output flags)
/// * `clipboard` - Clipboard to copy to when `config.copy` is set
/// * `output` - Receives the results
/// * `status_out` - Receives status lines (suppressed by `-q`)
///
/// # Operation Modes
///
/// - **Format**: Prints the final command, preceded by the wrapped one with `--show-wrapped`
/// - **Decode**: Prints the input with `config.encode_type` reversed
/// - **Interactive**: Not handled here, see [`run_interactive`]
///
/// # Errors
///
/// Returns an error in these cases:
///
/// - Decode mode: the input is not valid under the selected encoding
/// - Writing to `output` fails
///
/// A failed copy is reported on `status_out` and is not an error.
pub fn process_command(
    raw: &str,
    config: &CliConfig,
    clipboard: Option<&mut dyn Clipboard>,
    mut output: impl Write,
    mut status_out: impl Write,
) -> Result<()> {
    let write_err = |source| Error::WriteOutput { source };

    let copy_text = match config.mode {
        OperationMode::Decode => {
            let decoded = try_decode(raw, config.encode_type)?;
            writeln!(output, "{decoded}").map_err(write_err)?;
            decoded
        }
        OperationMode::Format | OperationMode::Interactive => {
            let mut session = Session::new(config.command_type, config.encode_type);
            session.set_input(raw);
            session.encode_now();

            if config.show_wrapped {
                writeln!(output, "wrapped: {}", session.wrapped()).map_err(write_err)?;
                writeln!(output, "final: {}", session.encoded()).map_err(write_err)?;
            } else {
                writeln!(output, "{}", session.encoded()).map_err(write_err)?;
            }
            session.encoded().to_string()
        }
    };
    output.flush().map_err(write_err)?;

    if let (true, Some(clipboard)) = (config.copy, clipboard) {
        // Decoded text goes out as printed, surrounding whitespace included
        let status = copy_to(clipboard, &copy_text);
        if config.quiet == 0 || (status.is_error() && config.quiet < 2) {
            // Status lines are best effort
            let _ = writeln!(status_out, "{status}");
        }
    }

    Ok(())
}

/// Runs the CLI with program name context on errors.
///
/// # Parameters
///
/// * `args` - Positional words forming the command. Empty reads stdin.
/// * `config` - CLI configuration specifying mode and options.
/// * `program` - Program name to include in error messages (e.g. "cmdwrap").
///
/// # Errors
///
/// Returns an [`io::Error`] wrapping an [`InvocationError`] when processing
/// fails.
pub fn run_cli(args: &[String], config: &CliConfig, program: &str) -> io::Result<()> {
    let result = match config.mode {
        OperationMode::Interactive => {
            let mut clipboard = open_clipboard(&config.clipboard);
            run_interactive(
                io::stdin().lock(),
                io::stdout().lock(),
                config,
                &mut *clipboard,
            )
        }
        OperationMode::Format | OperationMode::Decode => {
            let mut clipboard = config.copy.then(|| open_clipboard(&config.clipboard));
            read_command(args, io::stdin().lock()).and_then(|raw| {
                process_command(
                    &raw,
                    config,
                    clipboard.as_mut().map(|c| &mut **c as &mut dyn Clipboard),
                    io::stdout().lock(),
                    io::stderr().lock(),
                )
            })
        }
    };

    result.map_err(|source| {
        io::Error::from(InvocationError {
            program: program.to_string(),
            source,
        })
    })
}

//! Shell command wrapping and encoding utility
//!
//! Wraps a command for bash, sh, PowerShell, Python, Perl or cmd.exe and
//! optionally encodes the result for transport.

use std::process;

mod opts;

use opts::CmdWrapOpts;

use cmdwrap_cli::{format_error_for_stderr, init_logging, run_cli};

const PROGRAM_NAME: &str = "cmdwrap";

fn main() -> std::io::Result<()> {
    let opts = CmdWrapOpts::parse();
    let config = opts.config();

    init_logging(config.verbose, config.quiet);

    if let Err(err) = run_cli(&opts.command, &config, PROGRAM_NAME) {
        if let Some(msg) = format_error_for_stderr(PROGRAM_NAME, config.quiet, &err) {
            eprintln!("{msg}");
        }
        process::exit(1);
    }

    Ok(())
}

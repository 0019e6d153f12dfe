//! Encoded command decoder
//!
//! Reverses the encoding step of cmdwrap and prints the wrapped command,
//! similar to 'cmdwrap --decode'.

use std::process;

mod opts;

use opts::CmdDecodeOpts;

use cmdwrap_cli::{format_error_for_stderr, init_logging, run_cli};

const PROGRAM_NAME: &str = "cmddecode";

fn main() -> std::io::Result<()> {
    let opts = CmdDecodeOpts::parse();
    let config = opts.config();

    init_logging(config.verbose, config.quiet);

    if let Err(err) = run_cli(opts.text(), &config, PROGRAM_NAME) {
        if let Some(msg) = format_error_for_stderr(PROGRAM_NAME, config.quiet, &err) {
            eprintln!("{msg}");
        }
        process::exit(1);
    }

    Ok(())
}

//! Command line argument parsing for the cmdwrap utility.

use clap::Parser;

use cmdwrap_cli::config::{CLIPBOARD_ENV, ENCODING_ENV, TYPE_ENV};
use cmdwrap_cli::{
    parse_clipboard_choice, parse_command_type, parse_encode_type, CliConfig, ClipboardChoice,
    CommandType, EncodeType, OperationMode,
};

/// Shell command wrapping and encoding utility
///
/// Wraps a command for an interpreter and optionally encodes the result.
#[derive(Debug, Parser)]
#[command(
    name = "cmdwrap",
    version = "0.1.1",
    about = "Wrap a shell command for an interpreter and encode it",
    long_about = "cmdwrap escapes COMMAND for the selected interpreter, embeds it in the \
                 interpreter's invocation (for example `bash -c \"...\"`) and optionally \
                 encodes the result as URL, double URL or base64. Without COMMAND the \
                 command is read from standard input."
)]
#[allow(clippy::struct_excessive_bools)]
pub struct CmdWrapOpts {
    /// Command to wrap; all remaining words are joined with spaces
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        conflicts_with = "interactive"
    )]
    pub command: Vec<String>,

    /// Interpreter: bash, sh, powershell, python, perl, cmd or raw
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        env = TYPE_ENV,
        default_value = "bash",
        value_parser = parse_command_type
    )]
    pub command_type: CommandType,

    /// Encoding: none, url, base64 or double_url
    #[arg(
        short = 'e',
        long = "encode",
        value_name = "ENCODING",
        env = ENCODING_ENV,
        default_value = "none",
        value_parser = parse_encode_type
    )]
    pub encode: EncodeType,

    /// Decode COMMAND with the selected encoding instead of wrapping it
    #[arg(short = 'd', long = "decode", conflicts_with = "interactive")]
    pub decode: bool,

    /// Read commands and directives line by line
    #[arg(short = 'i', long = "interactive")]
    pub interactive: bool,

    /// Print the wrapped command before the final one
    #[arg(short = 'w', long = "show-wrapped")]
    pub show_wrapped: bool,

    /// Copy the final command to the clipboard
    #[arg(short = 'c', long = "copy")]
    pub copy: bool,

    /// Clipboard to use: auto, osc52, or a program with arguments
    #[arg(
        long = "clipboard",
        value_name = "CLIPBOARD",
        env = CLIPBOARD_ENV,
        default_value = "auto",
        value_parser = parse_clipboard_choice
    )]
    pub clipboard: ClipboardChoice,

    /// Verbose mode
    #[arg(short = 'v', long = "verbose", conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet mode (suppress status lines). Use twice to suppress errors too.
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose", action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl CmdWrapOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Determine operation mode from flags
    pub fn operation_mode(&self) -> OperationMode {
        if self.interactive {
            OperationMode::Interactive
        } else if self.decode {
            OperationMode::Decode
        } else {
            OperationMode::Format
        }
    }

    /// Build CLI configuration from the parsed options
    pub fn config(&self) -> CliConfig {
        CliConfig {
            mode: self.operation_mode(),
            command_type: self.command_type,
            encode_type: self.encode,
            show_wrapped: self.show_wrapped,
            copy: self.copy,
            clipboard: self.clipboard.clone(),
            verbose: self.verbose,
            quiet: self.quiet,
        }
    }
}

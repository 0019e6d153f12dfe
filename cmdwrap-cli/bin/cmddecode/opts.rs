//! Command line argument parsing for the cmddecode utility.

use clap::Parser;

use cmdwrap_cli::config::CLIPBOARD_ENV;
use cmdwrap_cli::{
    parse_clipboard_choice, parse_encode_type, CliConfig, ClipboardChoice, EncodeType,
    OperationMode,
};

/// Reverse the encoding of a wrapped command
///
/// This utility is equivalent to 'cmdwrap --decode'.
#[derive(Debug, Parser)]
#[command(
    name = "cmddecode",
    version = "0.1.1",
    about = "Decode an encoded command",
    long_about = "cmddecode reverses the URL, double URL or base64 encoding applied by \
                 cmdwrap and prints the command. It is equivalent to 'cmdwrap --decode'. \
                 Without TEXT the encoded text is read from standard input."
)]
pub struct CmdDecodeOpts {
    /// Encoded text; all remaining words are joined with spaces
    #[arg(value_name = "TEXT", trailing_var_arg = true, allow_hyphen_values = true)]
    text: Vec<String>,

    /// Encoding to reverse: none, url, base64 or double_url
    #[arg(
        short = 'e',
        long = "encode",
        value_name = "ENCODING",
        default_value = "base64",
        value_parser = parse_encode_type
    )]
    encode: EncodeType,

    /// Copy the decoded command to the clipboard
    #[arg(short = 'c', long = "copy")]
    copy: bool,

    /// Clipboard to use: auto, osc52, or a program with arguments
    #[arg(
        long = "clipboard",
        value_name = "CLIPBOARD",
        env = CLIPBOARD_ENV,
        default_value = "auto",
        value_parser = parse_clipboard_choice
    )]
    clipboard: ClipboardChoice,

    /// Verbose mode
    #[arg(short = 'v', long = "verbose", conflicts_with = "quiet")]
    verbose: bool,

    /// Quiet mode (suppress status lines). Use twice to suppress errors too.
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose", action = clap::ArgAction::Count)]
    quiet: u8,
}

impl CmdDecodeOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build CLI configuration from the parsed options
    pub fn config(&self) -> CliConfig {
        CliConfig {
            mode: OperationMode::Decode,
            encode_type: self.encode,
            copy: self.copy,
            clipboard: self.clipboard.clone(),
            verbose: self.verbose,
            quiet: self.quiet,
            ..CliConfig::default()
        }
    }

    /// Encoded words supplied on the command line
    pub fn text(&self) -> &[String] {
        &self.text
    }
}

//! Interpreter selection and command wrapping.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Interpreter whose invocation template wraps the raw command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CommandType {
    /// `bash -c "<cmd>"`
    #[default]
    Bash,
    /// `sh -c "<cmd>"`
    Sh,
    /// `powershell -Command "<cmd>"`
    PowerShell,
    /// `python -c "<cmd>"`
    Python,
    /// `perl -e "<cmd>"`
    Perl,
    /// `cmd /c "<cmd>"`
    Cmd,
    /// The command is passed through untouched.
    Raw,
}

impl CommandType {
    /// All variants in presentation order.
    pub const ALL: [CommandType; 7] = [
        CommandType::Bash,
        CommandType::Sh,
        CommandType::PowerShell,
        CommandType::Python,
        CommandType::Perl,
        CommandType::Cmd,
        CommandType::Raw,
    ];

    /// Stable machine name used on the command line and in the environment.
    pub const fn name(self) -> &'static str {
        match self {
            CommandType::Bash => "bash",
            CommandType::Sh => "sh",
            CommandType::PowerShell => "powershell",
            CommandType::Python => "python",
            CommandType::Perl => "perl",
            CommandType::Cmd => "cmd",
            CommandType::Raw => "raw",
        }
    }

    /// Human readable label used in status messages.
    pub const fn label(self) -> &'static str {
        match self {
            CommandType::Bash => "Bash",
            CommandType::Sh => "sh",
            CommandType::PowerShell => "PowerShell",
            CommandType::Python => "Python",
            CommandType::Perl => "Perl",
            CommandType::Cmd => "CMD",
            CommandType::Raw => "Raw",
        }
    }

    /// Looks up a type by name, treating anything unrecognized as [`CommandType::Raw`].
    pub fn from_name_lossy(name: &str) -> Self {
        name.parse().unwrap_or(CommandType::Raw)
    }
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CommandType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        CommandType::ALL
            .into_iter()
            .find(|ty| ty.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| Error::UnknownCommandType(s.to_string()))
    }
}

/// Escapes a command for a double-quoted POSIX shell, Python or Perl string.
///
/// `"` becomes `\"` and `$` becomes `\$`. Backslashes are left alone.
pub fn escape_posix(input: &str) -> String {
    escape_with(input, |c| match c {
        '"' => Some("\\\""),
        '$' => Some("\\$"),
        _ => None,
    })
}

/// Escapes a command for a double-quoted PowerShell string.
///
/// `"` becomes `` `" `` and `$` becomes `` `$ ``.
pub fn escape_powershell(input: &str) -> String {
    escape_with(input, |c| match c {
        '"' => Some("`\""),
        '$' => Some("`$"),
        _ => None,
    })
}

/// Escapes a command for `cmd.exe`.
///
/// `"` becomes `""` and every `%` is doubled, unconditionally. This does not
/// cover the remaining `cmd` metacharacters.
pub fn escape_cmd(input: &str) -> String {
    escape_with(input, |c| match c {
        '"' => Some("\"\""),
        '%' => Some("%%"),
        _ => None,
    })
}

// Single pass, so a replacement is never fed back into another rule.
fn escape_with(input: &str, replace: impl Fn(char) -> Option<&'static str>) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 8);
    for c in input.chars() {
        match replace(c) {
            Some(rep) => out.push_str(rep),
            None => out.push(c),
        }
    }
    out
}

/// Wraps `raw` in the invocation template of `ty`.
///
/// Blank input (empty or whitespace only) yields an empty string. Otherwise
/// the command is escaped for the target interpreter and embedded as-is,
/// surrounding whitespace included.
///
/// ```rust
/// use cmdwrap_core::{wrap, CommandType};
///
/// assert_eq!(wrap(CommandType::Cmd, "echo 100%"), "cmd /c \"echo 100%%\"");
/// assert_eq!(wrap(CommandType::Raw, "id"), "id");
/// assert_eq!(wrap(CommandType::Bash, "   "), "");
/// ```
pub fn wrap(ty: CommandType, raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    match ty {
        CommandType::Bash => format!("bash -c \"{}\"", escape_posix(raw)),
        CommandType::Sh => format!("sh -c \"{}\"", escape_posix(raw)),
        CommandType::Python => format!("python -c \"{}\"", escape_posix(raw)),
        CommandType::Perl => format!("perl -e \"{}\"", escape_posix(raw)),
        CommandType::PowerShell => format!("powershell -Command \"{}\"", escape_powershell(raw)),
        CommandType::Cmd => format!("cmd /c \"{}\"", escape_cmd(raw)),
        CommandType::Raw => raw.to_string(),
    }
}

//! Current selections and the output derived from them.

use cmdwrap_core::{format, CommandType, EncodeType, Formatted};

use crate::clipboard::Clipboard;
use crate::status::Status;

/// UI state for one user: the raw input, both selectors, and the last result.
///
/// Every setter re-runs the stateless formatter, so [`Session::wrapped`] and
/// [`Session::encoded`] always reflect the current input and selections.
#[derive(Debug, Clone)]
pub struct Session {
    input: String,
    command_type: CommandType,
    encode_type: EncodeType,
    output: Formatted,
    status: Status,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(CommandType::default(), EncodeType::default())
    }
}

impl Session {
    pub fn new(command_type: CommandType, encode_type: EncodeType) -> Self {
        Self {
            input: String::new(),
            command_type,
            encode_type,
            output: Formatted::default(),
            status: Status::ready(),
        }
    }

    fn refresh(&mut self) {
        self.output = format(self.input.trim(), self.command_type, self.encode_type);
        tracing::debug!(
            command_type = self.command_type.name(),
            encode_type = self.encode_type.name(),
            wrapped_len = self.output.wrapped.len(),
            encoded_len = self.output.encoded.len(),
            "session output refreshed"
        );
    }

    fn set_status(&mut self, status: Status) -> &Status {
        tracing::debug!(level = status.level.tag(), message = %status.message, "status");
        self.status = status;
        &self.status
    }

    /// Replaces the raw input. Surrounding whitespace is not wrapped.
    pub fn set_input(&mut self, raw: &str) -> &Status {
        self.input = raw.to_string();
        self.refresh();
        self.set_status(Status::char_count(raw.chars().count()))
    }

    pub fn select_command_type(&mut self, command_type: CommandType) -> &Status {
        self.command_type = command_type;
        self.refresh();
        self.set_status(Status::command_type_selected(command_type))
    }

    pub fn select_encode_type(&mut self, encode_type: EncodeType) -> &Status {
        self.encode_type = encode_type;
        self.refresh();
        self.set_status(Status::encode_type_selected(encode_type))
    }

    /// Recomputes the output on demand.
    ///
    /// Reports completion only when there is input to encode; otherwise the
    /// previous status is kept.
    pub fn encode_now(&mut self) -> &Status {
        self.refresh();
        if self.input.trim().is_empty() {
            &self.status
        } else {
            self.set_status(Status::encoding_complete())
        }
    }

    /// Copies the final output to `clipboard` and reports the outcome.
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard) -> &Status {
        let status = copy_to(clipboard, &self.output.encoded);
        self.set_status(status)
    }

    /// Raw input as last set, untrimmed.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn command_type(&self) -> CommandType {
        self.command_type
    }

    pub fn encode_type(&self) -> EncodeType {
        self.encode_type
    }

    pub fn output(&self) -> &Formatted {
        &self.output
    }

    pub fn wrapped(&self) -> &str {
        &self.output.wrapped
    }

    pub fn encoded(&self) -> &str {
        &self.output.encoded
    }

    pub fn status(&self) -> &Status {
        &self.status
    }
}

/// Copies `text` exactly as given. Empty text is not sent.
pub(crate) fn copy_to(clipboard: &mut dyn Clipboard, text: &str) -> Status {
    if text.is_empty() {
        return Status::nothing_to_copy();
    }

    match clipboard.copy(text) {
        Ok(()) => Status::copied(),
        Err(err) => {
            tracing::warn!(clipboard = clipboard.name(), error = %err, "copy failed");
            Status::copy_failed(err)
        }
    }
}

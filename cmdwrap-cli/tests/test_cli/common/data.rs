/// Command without any character that needs escaping.
pub const SIMPLE_COMMAND: &str = "echo hi";

/// Command exercising quote and dollar escaping.
pub const QUOTED_COMMAND: &str = "echo \"quoted $((1+2))\"";

/// Command with multi-byte characters.
pub const MULTIBYTE_COMMAND: &str = "echo héllo 世界";

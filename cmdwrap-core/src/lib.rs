//! # cmdwrap-core
//!
//! Stateless wrapping and encoding of shell commands.
//!
//! A raw command typed by a user is first escaped and embedded in the
//! invocation template of an interpreter (`bash -c "..."`, `cmd /c "..."`,
//! ...), then optionally re-encoded for transport (URL, double URL, base64).
//! Both the wrapped and the encoded string are returned so a front end can
//! show the intermediate result next to the final one.
//!
//! # Example
//!
//! ```rust
//! use cmdwrap_core::{format, CommandType, EncodeType};
//!
//! let out = format("echo hi", CommandType::Bash, EncodeType::None);
//! assert_eq!(out.wrapped, "bash -c \"echo hi\"");
//! assert_eq!(out.encoded, out.wrapped);
//!
//! let out = format("echo hi", CommandType::Bash, EncodeType::Base64);
//! assert_eq!(out.encoded, "YmFzaCAtYyAiZWNobyBoaSI=");
//! ```

pub mod command;
pub mod encoding;
pub mod formatter;

mod error;


pub use command::{escape_cmd, escape_posix, escape_powershell, wrap, CommandType};
pub use encoding::{
    base64_decode, base64_encode, decode, encode, try_decode, url_decode, url_encode, EncodeType,
    URI_COMPONENT,
};
pub use error::{Error, Result};
pub use formatter::{format, Formatted};

//! Centralized error handling for the codec.
//!
//! Every operation in this crate returns `Result<T>` and never panics on
//! malformed input; each variant below carries the offending group/name/
//! position where the spec calls for it, so callers can pattern-match
//! programmatically instead of parsing a message string.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CodecError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("no schema definition for group {group:?}")]
    UnknownGroup { group: String },

    #[error("serialiser for property {property:?} of group {group:?} failed: {message}")]
    SerialiseFailure {
        group: String,
        property: String,
        message: String,
    },

    #[error("deserialiser for property {property:?} of group {group:?} failed: {message}")]
    DeserialiseFailure {
        group: String,
        property: String,
        message: String,
    },

    #[error("malformed escape sequence at byte offset {position}")]
    MalformedEscape { position: usize },

    #[error("row key contained {found} delimiter(s), expected exactly 3")]
    BadDelimCount { found: usize },

    #[error("row key terminal flag {flag:#04x} is not a recognised direction")]
    BadDirectionFlag { flag: u8 },

    #[error("column family bytes are not valid UTF-8")]
    BadGroupEncoding,

    #[error("length prefix at byte offset {position} is truncated or invalid")]
    BadLengthPrefix { position: usize },
}

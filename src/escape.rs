//! Byte escaping so the row-key delimiter never appears literally in user
//! bytes. Prefix-safe: an escaped buffer followed by `DELIMITER` is always
//! unambiguously parseable back into "the escaped buffer, then delimiter".
//!
//! Scheme (pinned for cross-version compatibility, per the design notes):
//! `DELIMITER (0x00) -> [ESCAPE, 0x01]`, `ESCAPE (0xFF) -> [ESCAPE, 0x02]`,
//! every other byte passes through unchanged.

use crate::error::{CodecError, Result};

pub const DELIMITER: u8 = 0x00;
pub const DELIMITER_PLUS_ONE: u8 = 0x01;

const ESCAPE: u8 = 0xFF;
const ESCAPED_DELIMITER: u8 = 0x01;
const ESCAPED_ESCAPE: u8 = 0x02;

/// Transforms `buf` into a buffer that contains no `DELIMITER` byte.
pub fn escape(buf: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(buf.len());
    for &b in buf {
        match b {
            DELIMITER => out.extend_from_slice(&[ESCAPE, ESCAPED_DELIMITER]),
            ESCAPE => out.extend_from_slice(&[ESCAPE, ESCAPED_ESCAPE]),
            other => out.push(other),
        }
    }
    out
}

/// Inverse of [`escape`]. Fails with [`CodecError::MalformedEscape`] on a
/// truncated or unrecognised escape sequence.
pub fn unescape(buf: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(buf.len());
    let mut i = 0;
    while i < buf.len() {
        let b = buf[i];
        if b == ESCAPE {
            let next = buf.get(i + 1).copied().ok_or(CodecError::MalformedEscape { position: i })?;
            match next {
                ESCAPED_DELIMITER => out.push(DELIMITER),
                ESCAPED_ESCAPE => out.push(ESCAPE),
                _ => return Err(CodecError::MalformedEscape { position: i }),
            }
            i += 2;
        } else {
            out.push(b);
            i += 1;
        }
    }
    Ok(out)
}

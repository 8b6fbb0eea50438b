//! Shared length-prefixed record framing used by both the value block
//! (non-group-by properties) and the qualifier block (group-by properties).
//! `ValueCodec` and `QualifierCodec` differ only in which property
//! sequence they walk and whether they filter it first; the record framing
//! itself — `varlen(len) ++ bytes[len]`, `len == 0` meaning "empty bytes"
//! — is identical, so it lives here once.

use crate::element::PropertyValue;
use crate::error::{CodecError, Result};
use crate::schema::Serialiser;
use crate::varint;

/// Appends one length-prefixed record to `out`.
pub fn write_block(out: &mut Vec<u8>, bytes: &[u8]) {
    varint::write_len(bytes.len(), out);
    out.extend_from_slice(bytes);
}

/// Encodes a single property's record: `serialiseNull()` when the value is
/// absent or `Null`, `serialise(v)` otherwise. `ser == None` encodes as
/// an empty record regardless of the value.
pub fn encode_property(out: &mut Vec<u8>, ser: Option<&dyn Serialiser>, value: Option<&PropertyValue>) -> Result<()> {
    let Some(ser) = ser else {
        write_block(out, &[]);
        return Ok(());
    };
    let bytes = match value {
        None | Some(PropertyValue::Null) => ser.serialise_null(),
        Some(v) => ser.serialise(v)?,
    };
    write_block(out, &bytes);
    Ok(())
}

/// Reads one length-prefixed record starting at `bytes[cursor..]`,
/// advancing `cursor` past it, and decodes it via `ser` (or as raw bytes /
/// `Null` when `ser` is absent).
pub fn decode_property(bytes: &[u8], cursor: &mut usize, ser: Option<&dyn Serialiser>) -> Result<PropertyValue> {
    let (len, consumed) = varint::read_len(&bytes[*cursor..])?;
    *cursor += consumed;
    if len > 0 {
        let end = *cursor + len;
        if end > bytes.len() {
            return Err(CodecError::BadLengthPrefix { position: *cursor });
        }
        let record = &bytes[*cursor..end];
        *cursor = end;
        match ser {
            Some(s) => s.deserialise(record),
            None => Ok(PropertyValue::Bytes(record.to_vec())),
        }
    } else {
        match ser {
            Some(s) => s.deserialise_empty_bytes(),
            None => Ok(PropertyValue::Null),
        }
    }
}

/// Rewrites the group/property fields of a serialiser-raised error. A
/// `Serialiser` implementation knows nothing about which property or group
/// it is being invoked for, so `encode_property`/`decode_property` leave
/// those fields blank; callers that do know fill them in at the point of
/// the call.
pub fn annotate(err: CodecError, group: &str, property: &str) -> CodecError {
    match err {
        CodecError::SerialiseFailure { message, .. } => CodecError::SerialiseFailure {
            group: group.to_string(),
            property: property.to_string(),
            message,
        },
        CodecError::DeserialiseFailure { message, .. } => CodecError::DeserialiseFailure {
            group: group.to_string(),
            property: property.to_string(),
            message,
        },
        other => other,
    }
}

/// Skips one length-prefixed record starting at `bytes[cursor..]`,
/// returning the record's byte span (prefix + payload), without invoking
/// any serialiser. Used by the qualifier truncation projection, which only
/// needs to know where records end, not what they mean.
pub fn skip_block(bytes: &[u8], cursor: &mut usize) -> Result<()> {
    let (len, consumed) = varint::read_len(&bytes[*cursor..])?;
    let end = *cursor + consumed + len;
    if end > bytes.len() {
        return Err(CodecError::BadLengthPrefix { position: *cursor });
    }
    *cursor = end;
    Ok(())
}

//! The column qualifier: the `group-by` property subset, encoded with the
//! same length-prefixed record scheme as the value block. Every group-by
//! property contributes a record — there is no `isStoredInValue`-style
//! filter here.

use crate::element::Properties;
use crate::error::{CodecError, Result};
use crate::record_block::{annotate, decode_property, encode_property, skip_block};
use crate::schema::Schema;

pub fn encode_qualifier(schema: &dyn Schema, group: &str, properties: &Properties) -> Result<Vec<u8>> {
    let element_def = schema
        .get_element(group)
        .ok_or_else(|| CodecError::UnknownGroup { group: group.to_string() })?;

    let mut out = Vec::new();
    for name in element_def.group_by() {
        let ser = element_def.property_type_def(name).and_then(|td| td.serialiser());
        encode_property(&mut out, ser, properties.get(name)).map_err(|e| annotate(e, group, name))?;
    }
    Ok(out)
}

pub fn decode_qualifier(schema: &dyn Schema, group: &str, bytes: &[u8]) -> Result<Properties> {
    let mut properties = Properties::new();
    if bytes.is_empty() {
        return Ok(properties);
    }
    let element_def = schema
        .get_element(group)
        .ok_or_else(|| CodecError::UnknownGroup { group: group.to_string() })?;

    let mut cursor = 0usize;
    for name in element_def.group_by() {
        if cursor >= bytes.len() {
            break;
        }
        let ser = element_def.property_type_def(name).and_then(|td| td.serialiser());
        let value = decode_property(bytes, &mut cursor, ser).map_err(|e| annotate(e, group, name))?;
        properties.insert(name.clone(), value);
    }
    Ok(properties)
}

/// Returns the prefix of an encoded qualifier block covering exactly the
/// first `n` group-by properties of `group`. Used by range-scan iterators
/// that only need a clustering-key prefix, not the full qualifier.
pub fn first_n_property_bytes(schema: &dyn Schema, group: &str, bytes: &[u8], n: usize) -> Result<Vec<u8>> {
    let element_def = schema
        .get_element(group)
        .ok_or_else(|| CodecError::UnknownGroup { group: group.to_string() })?;
    let total = element_def.group_by().len();

    if n == 0 {
        return Ok(Vec::new());
    }
    if n >= total {
        return Ok(bytes.to_vec());
    }

    let mut cursor = 0usize;
    for _ in 0..n {
        if cursor >= bytes.len() {
            break;
        }
        skip_block(bytes, &mut cursor)?;
    }
    Ok(bytes[..cursor].to_vec())
}

//! The cell value: the non-group-by, non-timestamp property block.

use crate::element::Properties;
use crate::error::{CodecError, Result};
use crate::record_block::{annotate, decode_property, encode_property};
use crate::schema::{is_stored_in_value, Schema};

/// Encodes the subset of `properties` this group stores in the cell value,
/// in the schema's declared order.
pub fn encode_value(schema: &dyn Schema, group: &str, properties: &Properties) -> Result<Vec<u8>> {
    let element_def = schema
        .get_element(group)
        .ok_or_else(|| CodecError::UnknownGroup { group: group.to_string() })?;
    let group_by = element_def.group_by();
    let timestamp_property = schema.timestamp_property();

    let mut out = Vec::new();
    for name in element_def.properties() {
        if !is_stored_in_value(name, group_by, timestamp_property) {
            continue;
        }
        let ser = element_def.property_type_def(name).and_then(|td| td.serialiser());
        encode_property(&mut out, ser, properties.get(name)).map_err(|e| annotate(e, group, name))?;
    }
    Ok(out)
}

/// Decodes a value block back into the properties it carries. Tolerates a
/// block truncated partway through the declared property order (the
/// qualifier-only projection never includes these records at all, and a
/// short read simply stops rather than erroring).
pub fn decode_value(schema: &dyn Schema, group: &str, bytes: &[u8]) -> Result<Properties> {
    let mut properties = Properties::new();
    if bytes.is_empty() {
        return Ok(properties);
    }
    let element_def = schema
        .get_element(group)
        .ok_or_else(|| CodecError::UnknownGroup { group: group.to_string() })?;
    let group_by = element_def.group_by();
    let timestamp_property = schema.timestamp_property();

    let mut cursor = 0usize;
    for name in element_def.properties() {
        if !is_stored_in_value(name, group_by, timestamp_property) {
            continue;
        }
        if cursor >= bytes.len() {
            break;
        }
        let ser = element_def.property_type_def(name).and_then(|td| td.serialiser());
        let value = decode_property(bytes, &mut cursor, ser).map_err(|e| annotate(e, group, name))?;
        properties.insert(name.clone(), value);
    }
    Ok(properties)
}

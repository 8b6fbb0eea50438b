//! The designated visibility property, serialized to the cell's visibility
//! column on its own rather than folded into the value block. A prior
//! design merged visibility into the element's properties at decode time;
//! this crate keeps the two separate (see DESIGN.md), so decoding never
//! injects the visibility value back into the returned element.

use crate::element::{Properties, PropertyValue};
use crate::error::Result;
use crate::schema::Schema;

fn serialiser_for<'s>(schema: &'s dyn Schema, group: &str) -> Option<(&'s str, &'s dyn crate::schema::Serialiser)> {
    let name = schema.visibility_property()?;
    let ser = schema.get_element(group)?.property_type_def(name)?.serialiser()?;
    Some((name, ser))
}

pub fn encode_visibility(schema: &dyn Schema, group: &str, properties: &Properties) -> Result<Vec<u8>> {
    match serialiser_for(schema, group) {
        None => Ok(Vec::new()),
        Some((name, ser)) => match properties.get(name) {
            None | Some(PropertyValue::Null) => Ok(ser.serialise_null()),
            Some(v) => ser.serialise(v),
        },
    }
}

/// Decodes the visibility column back into a (possibly empty) one-entry
/// property map, suitable for merging into an assembled element's
/// properties by a caller that wants it there — `ElementAssembler` itself
/// does not perform this merge (see DESIGN.md's visibility-as-property
/// open question).
pub fn decode_visibility(schema: &dyn Schema, group: &str, bytes: &[u8]) -> Result<Properties> {
    let mut out = Properties::new();
    let Some((name, ser)) = serialiser_for(schema, group) else {
        return Ok(out);
    };
    let value = if bytes.is_empty() { ser.deserialise_empty_bytes()? } else { ser.deserialise(bytes)? };
    if !value.is_null() {
        out.insert(name.to_string(), value);
    }
    Ok(out)
}

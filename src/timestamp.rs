//! Projects the designated timestamp property to the cell's 64-bit
//! timestamp and back. The property's value, when present, is the
//! big-endian encoding of that same integer (see
//! [`crate::element::PropertyValue::from_i64`]).

use std::time::{SystemTime, UNIX_EPOCH};

use crate::element::{Properties, PropertyValue};
use crate::schema::Schema;

/// Derives the cell timestamp to use for `properties`: the timestamp
/// property's value when the schema designates one and it is present and
/// non-null, otherwise the current wall-clock time in milliseconds.
pub fn build_timestamp(schema: &dyn Schema, properties: &Properties) -> i64 {
    if let Some(name) = schema.timestamp_property() {
        if let Some(value) = properties.get(name) {
            if let Some(ts) = value.as_i64() {
                return ts;
            }
        }
    }
    current_millis()
}

/// Reconstructs the one-entry property map the timestamp projects to, when
/// the schema both designates a timestamp property and the group actually
/// declares it.
pub fn extract(schema: &dyn Schema, group_properties: &[String], ts: i64) -> Properties {
    let mut out = Properties::new();
    if let Some(name) = schema.timestamp_property() {
        if group_properties.iter().any(|p| p == name) {
            out.insert(name.to_string(), PropertyValue::from_i64(ts));
        }
    }
    out
}

fn current_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

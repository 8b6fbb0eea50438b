//! Composes the row-key, value, qualifier, visibility and timestamp codecs
//! into whole-element encode/decode.

use tracing::trace;

use crate::element::{Cell, Element, Properties, PropertyValue};
use crate::error::{CodecError, Result};
use crate::key;
use crate::options::CodecOptions;
use crate::qualifier;
use crate::schema::Schema;
use crate::timestamp;
use crate::value;
use crate::visibility;

/// Everything [`encode_element`] produces for one element: one row key for
/// an entity or a self-edge, two for any other edge, sharing the same
/// family/qualifier/value/visibility/timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedElement {
    pub rows: Vec<Vec<u8>>,
    pub family: Vec<u8>,
    pub qualifier: Vec<u8>,
    pub value: Vec<u8>,
    pub visibility: Vec<u8>,
    pub timestamp: i64,
}

pub fn encode_element(schema: &dyn Schema, element: &Element) -> Result<EncodedElement> {
    let group = element.group();
    let properties = element.properties();

    let rows = match element {
        Element::Entity { vertex, .. } => {
            let vertex_bytes = schema.vertex_serialiser().serialise(vertex)?;
            vec![key::build_entity_row(&vertex_bytes)]
        }
        Element::Edge { source, destination, directed, .. } => {
            let src_bytes = schema.vertex_serialiser().serialise(source)?;
            let dst_bytes = schema.vertex_serialiser().serialise(destination)?;
            let (k1, k2) = key::build_edge_rows(&src_bytes, &dst_bytes, *directed);
            match k2 {
                Some(k2) => vec![k1, k2],
                None => vec![k1],
            }
        }
    };

    let encoded = EncodedElement {
        rows,
        family: group.as_bytes().to_vec(),
        qualifier: qualifier::encode_qualifier(schema, group, properties)?,
        value: value::encode_value(schema, group, properties)?,
        visibility: visibility::encode_visibility(schema, group, properties)?,
        timestamp: timestamp::build_timestamp(schema, properties),
    };
    trace!("encoded element for group {}: {} row(s)", group, encoded.rows.len());
    Ok(encoded)
}

pub fn decode_cell(schema: &dyn Schema, cell: &Cell, options: &CodecOptions) -> Result<Element> {
    let group = String::from_utf8(cell.family.clone()).map_err(|_| CodecError::BadGroupEncoding)?;

    let mut properties = qualifier::decode_qualifier(schema, &group, &cell.qualifier)?;
    properties.extend(value::decode_value(schema, &group, &cell.value)?);

    let element_properties_order: Vec<String> = schema
        .get_element(&group)
        .map(|e| e.properties().to_vec())
        .unwrap_or_default();
    properties.extend(timestamp::extract(schema, &element_properties_order, cell.timestamp));

    let element = if key::is_entity_row(&cell.row) {
        let vertex_bytes = key::parse_entity_row(&cell.row)?;
        let vertex = decode_vertex(schema, &vertex_bytes)?;
        Element::Entity { group, vertex, properties }
    } else {
        let (src_bytes, dst_bytes, directed) = key::parse_edge_row(&cell.row, options)?;
        let source = decode_vertex(schema, &src_bytes)?;
        let destination = decode_vertex(schema, &dst_bytes)?;
        Element::Edge { group, source, destination, directed, properties }
    };
    trace!("decoded cell for group {}", element.group());
    Ok(element)
}

fn decode_vertex(schema: &dyn Schema, bytes: &[u8]) -> Result<PropertyValue> {
    if bytes.is_empty() {
        schema.vertex_serialiser().deserialise_empty_bytes()
    } else {
        schema.vertex_serialiser().deserialise(bytes)
    }
}

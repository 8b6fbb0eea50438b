//! The logical element model: entities and edges carrying typed,
//! insertion-order-preserving properties.

use indexmap::IndexMap;

/// A decoded (or yet-to-be-encoded) property value. This crate does not own
/// concrete property types — those belong to the external serialiser named
/// by the schema — so a value is either absent (`Null`) or the opaque byte
/// payload the serialiser produced/will consume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Null,
    Bytes(Vec<u8>),
}

impl PropertyValue {
    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    /// Convenience constructor for the timestamp property's convention:
    /// the property value is the big-endian encoding of the cell
    /// timestamp.
    pub fn from_i64(value: i64) -> Self {
        PropertyValue::Bytes(value.to_be_bytes().to_vec())
    }

    /// Inverse of [`PropertyValue::from_i64`].
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            PropertyValue::Bytes(b) if b.len() == 8 => {
                let mut buf = [0u8; 8];
                buf.copy_from_slice(b);
                Some(i64::from_be_bytes(buf))
            }
            _ => None,
        }
    }
}

/// Insertion-order-preserving property map, keyed by name.
pub type Properties = IndexMap<String, PropertyValue>;

/// A graph element: an entity on a single vertex, or an edge between two
/// (possibly equal) vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Entity {
        group: String,
        vertex: PropertyValue,
        properties: Properties,
    },
    Edge {
        group: String,
        source: PropertyValue,
        destination: PropertyValue,
        directed: bool,
        properties: Properties,
    },
}

impl Element {
    pub fn group(&self) -> &str {
        match self {
            Element::Entity { group, .. } => group,
            Element::Edge { group, .. } => group,
        }
    }

    pub fn properties(&self) -> &Properties {
        match self {
            Element::Entity { properties, .. } => properties,
            Element::Edge { properties, .. } => properties,
        }
    }

    pub fn is_self_edge(&self) -> bool {
        matches!(self, Element::Edge { source, destination, .. } if source == destination)
    }
}

/// The external wide-column cell contract this crate encodes to and
/// decodes from. The storage engine that actually persists cells is out of
/// scope; this struct is the shape it hands us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub row: Vec<u8>,
    pub family: Vec<u8>,
    pub qualifier: Vec<u8>,
    pub visibility: Vec<u8>,
    pub timestamp: i64,
    pub value: Vec<u8>,
}

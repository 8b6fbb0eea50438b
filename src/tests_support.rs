//! Minimal in-memory `Schema` fixture used only by this crate's own unit
//! tests. Integration tests under `tests/` use the equivalent fixture in
//! `tests/common/mod.rs`, built only against the public API.

#![cfg(test)]

use std::collections::HashMap;

use crate::element::{Properties, PropertyValue};
use crate::error::Result;
use crate::schema::{ElementDef, Schema, Serialiser, TypeDef};

#[derive(Debug)]
pub struct BytesSerialiser;

impl Serialiser for BytesSerialiser {
    fn serialise(&self, value: &PropertyValue) -> Result<Vec<u8>> {
        Ok(match value {
            PropertyValue::Null => Vec::new(),
            PropertyValue::Bytes(b) => b.clone(),
        })
    }

    fn serialise_null(&self) -> Vec<u8> {
        Vec::new()
    }

    fn deserialise(&self, bytes: &[u8]) -> Result<PropertyValue> {
        Ok(PropertyValue::Bytes(bytes.to_vec()))
    }

    fn deserialise_empty_bytes(&self) -> Result<PropertyValue> {
        Ok(PropertyValue::Null)
    }
}

pub struct FixedTypeDef(pub Option<BytesSerialiser>);

impl TypeDef for FixedTypeDef {
    fn serialiser(&self) -> Option<&dyn Serialiser> {
        self.0.as_ref().map(|s| s as &dyn Serialiser)
    }
}

pub struct FixtureElementDef {
    pub properties: Vec<String>,
    pub group_by: Vec<String>,
    pub type_defs: HashMap<String, FixedTypeDef>,
}

impl ElementDef for FixtureElementDef {
    fn properties(&self) -> &[String] {
        &self.properties
    }

    fn group_by(&self) -> &[String] {
        &self.group_by
    }

    fn property_type_def(&self, name: &str) -> Option<&dyn TypeDef> {
        self.type_defs.get(name).map(|t| t as &dyn TypeDef)
    }
}

pub struct FixtureSchema {
    pub elements: HashMap<String, FixtureElementDef>,
    pub visibility_property: Option<String>,
    pub timestamp_property: Option<String>,
    pub vertex_serialiser: BytesSerialiser,
}

impl Schema for FixtureSchema {
    fn get_element(&self, group: &str) -> Option<&dyn ElementDef> {
        self.elements.get(group).map(|e| e as &dyn ElementDef)
    }

    fn visibility_property(&self) -> Option<&str> {
        self.visibility_property.as_deref()
    }

    fn timestamp_property(&self) -> Option<&str> {
        self.timestamp_property.as_deref()
    }

    fn vertex_serialiser(&self) -> &dyn Serialiser {
        &self.vertex_serialiser
    }
}

/// A group `"g"` with properties `[p1, p2(group-by), p3, ts(timestamp)]`,
/// matching the value/qualifier round-trip scenario in the spec.
pub fn schema_fixture() -> FixtureSchema {
    let mut type_defs = HashMap::new();
    for name in ["p1", "p2", "p3", "ts", "vis"] {
        type_defs.insert(name.to_string(), FixedTypeDef(Some(BytesSerialiser)));
    }
    let mut elements = HashMap::new();
    elements.insert(
        "g".to_string(),
        FixtureElementDef {
            properties: vec!["p1".into(), "p2".into(), "p3".into(), "ts".into()],
            group_by: vec!["p2".into()],
            type_defs,
        },
    );

    FixtureSchema {
        elements,
        visibility_property: Some("vis".into()),
        timestamp_property: Some("ts".into()),
        vertex_serialiser: BytesSerialiser,
    }
}

pub fn props(pairs: &[(&str, Option<Vec<u8>>)]) -> Properties {
    let mut map = Properties::new();
    for (name, value) in pairs {
        let value = match value {
            Some(b) => PropertyValue::Bytes(b.clone()),
            None => PropertyValue::Null,
        };
        map.insert((*name).to_string(), value);
    }
    map
}

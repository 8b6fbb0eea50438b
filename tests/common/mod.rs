//! Public-API-only `Schema` fixture shared by the integration tests. Mirrors
//! `src/tests_support.rs`, duplicated rather than shared because an
//! integration test binary cannot see a library crate's `#[cfg(test)]`
//! items.

use std::collections::HashMap;

use byte_entity_codec::{ElementDef, Properties, PropertyValue, Result, Schema, Serialiser, TypeDef};

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

/// Two groups: `"person"` (entity-only properties, a group-by `name`, and a
/// timestamp) and `"knows"` (an edge group with its own group-by `since`),
/// covering both element shapes the scenario tests exercise.
pub fn schema_fixture() -> FixtureSchema {
    let mut person_types = HashMap::new();
    for name in ["name", "age", "ts", "vis"] {
        person_types.insert(name.to_string(), FixedTypeDef(Some(BytesSerialiser)));
    }
    let mut knows_types = HashMap::new();
    for name in ["since", "weight", "vis"] {
        knows_types.insert(name.to_string(), FixedTypeDef(Some(BytesSerialiser)));
    }

    let mut elements = HashMap::new();
    elements.insert(
        "person".to_string(),
        FixtureElementDef {
            properties: vec!["name".into(), "age".into(), "ts".into()],
            group_by: vec!["name".into()],
            type_defs: person_types,
        },
    );
    elements.insert(
        "knows".to_string(),
        FixtureElementDef {
            properties: vec!["since".into(), "weight".into()],
            group_by: vec!["since".into()],
            type_defs: knows_types,
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

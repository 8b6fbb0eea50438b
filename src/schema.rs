//! The property-type registry this codec is a client of. The registry
//! itself — resolving group names to real, typed property definitions — is
//! out of scope for this crate; we only define the contract it must
//! satisfy and consume it through these traits.

use crate::element::PropertyValue;
use crate::error::Result;

/// Bytes-to-value conversion for one property's declared type.
pub trait Serialiser: std::fmt::Debug + Send + Sync {
    /// Serialises a non-null value.
    fn serialise(&self, value: &PropertyValue) -> Result<Vec<u8>>;

    /// The encoding used for an explicit `null` value.
    fn serialise_null(&self) -> Vec<u8>;

    /// Deserialises a non-empty byte record (`len > 0`).
    fn deserialise(&self, bytes: &[u8]) -> Result<PropertyValue>;

    /// Deserialises the `len == 0` case. Not necessarily `Null` — a
    /// serialiser may define a meaningful "empty bytes" value.
    fn deserialise_empty_bytes(&self) -> Result<PropertyValue>;
}

/// A property's type definition: may or may not carry a serialiser.
pub trait TypeDef: Send + Sync {
    fn serialiser(&self) -> Option<&dyn Serialiser>;
}

/// One group's element definition.
pub trait ElementDef: Send + Sync {
    /// All properties of this group, in declared (canonical decode) order.
    fn properties(&self) -> &[String];

    /// The ordered subsequence of `properties()` encoded into the column
    /// qualifier.
    fn group_by(&self) -> &[String];

    /// The type definition for `name`, if the group declares one.
    fn property_type_def(&self, name: &str) -> Option<&dyn TypeDef>;
}

/// The full property-type registry.
pub trait Schema: Send + Sync {
    fn get_element(&self, group: &str) -> Option<&dyn ElementDef>;
    fn visibility_property(&self) -> Option<&str>;
    fn timestamp_property(&self) -> Option<&str>;
    fn vertex_serialiser(&self) -> &dyn Serialiser;
}

/// `properties(name)` is encoded in the cell value iff it is not a
/// group-by property and not the designated timestamp property.
pub fn is_stored_in_value(name: &str, group_by: &[String], timestamp_property: Option<&str>) -> bool {
    !group_by.iter().any(|g| g == name) && Some(name) != timestamp_property
}

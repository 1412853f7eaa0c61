//! Record domain types: the parent link and pass-through fields.

use crate::types::{RecordId, ROOT_SENTINEL};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::ops::{Deref, DerefMut};

/// Parent link of a record.
///
/// On the wire an integer names another record; any string or `null` is the
/// root sentinel. The sentinel always serializes back as `"root"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parent {
    Root,
    Id(RecordId),
}

impl Parent {
    pub fn id(&self) -> Option<RecordId> {
        match self {
            Parent::Root => None,
            Parent::Id(id) => Some(*id),
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, Parent::Root)
    }
}

impl From<RecordId> for Parent {
    fn from(id: RecordId) -> Self {
        Parent::Id(id)
    }
}

impl fmt::Display for Parent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parent::Root => f.write_str(ROOT_SENTINEL),
            Parent::Id(id) => write!(f, "{}", id),
        }
    }
}

impl Serialize for Parent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Parent::Root => serializer.serialize_str(ROOT_SENTINEL),
            Parent::Id(id) => serializer.serialize_i64(*id),
        }
    }
}

struct ParentVisitor;

impl<'de> Visitor<'de> for ParentVisitor {
    type Value = Parent;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer record id or a root sentinel string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Parent, E> {
        Ok(Parent::Id(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Parent, E> {
        RecordId::try_from(v)
            .map(Parent::Id)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_str<E: de::Error>(self, _v: &str) -> Result<Parent, E> {
        Ok(Parent::Root)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Parent, E> {
        Ok(Parent::Root)
    }

    fn visit_none<E: de::Error>(self) -> Result<Parent, E> {
        Ok(Parent::Root)
    }
}

impl<'de> Deserialize<'de> for Parent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ParentVisitor)
    }
}

/// Extra record fields, carried through untouched in input order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct RecordFields(Map<String, Value>);

impl RecordFields {
    pub fn new() -> Self {
        Self(Map::new())
    }
}

impl From<Map<String, Value>> for RecordFields {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}

impl From<RecordFields> for Map<String, Value> {
    fn from(value: RecordFields) -> Self {
        value.0
    }
}

impl FromIterator<(String, Value)> for RecordFields {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Deref for RecordFields {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for RecordFields {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'a> IntoIterator for &'a RecordFields {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A parent-linked record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub parent: Parent,
    #[serde(flatten)]
    pub fields: RecordFields,
}

impl Record {
    pub fn new(id: RecordId, parent: Parent) -> Self {
        Self {
            id,
            parent,
            fields: RecordFields::new(),
        }
    }

    /// Attach a pass-through field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

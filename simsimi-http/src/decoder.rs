//! Permissive decoding of flat JSON objects into typed slots
//!
//! The service adds and drops fields between its success and error shapes, so
//! responses are decoded against a per-call table of `(key, slot)` pairs rather
//! than a fixed struct. Recognized keys are written into their slot with the
//! slot's type (no coercion); every other key has its value skipped
//! structurally, nested objects and arrays included. Keys that never appear
//! leave their slot untouched.

use serde::de::{self, DeserializeSeed, IgnoredAny, MapAccess, Visitor};
use simsimi_core::Result;
use std::fmt;

/// Typed destination for one JSON key
#[derive(Debug)]
pub enum Slot<'a> {
    /// Receives a JSON integer
    Int(&'a mut i64),
    /// Receives a JSON string
    Str(&'a mut String),
}

/// A decode target table: key name to destination
pub type Slots<'s, 'a> = &'s mut [(&'static str, Slot<'a>)];

/// Decode a JSON object held in `bytes` into `slots`
///
/// The whole input must be a single object, optionally surrounded by
/// whitespace.
pub fn decode_object(bytes: &[u8], slots: Slots<'_, '_>) -> Result<()> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    ObjectSeed::new(slots).deserialize(&mut de)?;
    de.end()?;
    Ok(())
}

/// Seed/visitor that routes an object's entries into a slot table
///
/// Usable on its own through [`DeserializeSeed`], or from another visitor's
/// `visit_map` once the caller has seen that the value is an object.
pub struct ObjectSeed<'s, 'a> {
    slots: Slots<'s, 'a>,
}

impl<'s, 'a> ObjectSeed<'s, 'a> {
    /// Wrap a slot table
    pub fn new(slots: Slots<'s, 'a>) -> Self {
        Self { slots }
    }
}

impl<'de> DeserializeSeed<'de> for ObjectSeed<'_, '_> {
    type Value = ();

    fn deserialize<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_map(self)
    }
}

impl<'de> Visitor<'de> for ObjectSeed<'_, '_> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        while let Some(found) = map.next_key_seed(KeyLookup { slots: &*self.slots })? {
            match found.and_then(|index| self.slots.get_mut(index)) {
                Some((_, Slot::Int(dst))) => **dst = map.next_value()?,
                Some((_, Slot::Str(dst))) => **dst = map.next_value()?,
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(())
    }
}

/// Resolves a key to its slot index without allocating the key
struct KeyLookup<'s, 'a> {
    slots: &'s [(&'static str, Slot<'a>)],
}

impl<'de> DeserializeSeed<'de> for KeyLookup<'_, '_> {
    type Value = Option<usize>;

    fn deserialize<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(self)
    }
}

impl<'de> Visitor<'de> for KeyLookup<'_, '_> {
    type Value = Option<usize>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object key")
    }

    fn visit_str<E>(self, key: &str) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(self.slots.iter().position(|(name, _)| *name == key))
    }
}

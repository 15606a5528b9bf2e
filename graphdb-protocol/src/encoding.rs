/*!
Building blocks of the JSON wire format.

The server speaks serde's "externally tagged" enum convention: a variant
without payload is written as its bare name (`"Int64"`), a variant with
payload as a single-key object (`{"Int64": 42}`). Every [`LogicalType`] and
[`Value`] variant is written through [`Tagged`], so the bare-string versus
object decision is made in exactly one place.

Key/value collections are written as arrays of 2-element arrays instead of
JSON objects; see [`Pair`] and [`pairs`].

[`LogicalType`]: crate::logical_type::LogicalType
[`Value`]: crate::value::Value
*/

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, SerializeTuple, Serializer};

/// An externally tagged variant: either a bare tag or `{tag: content}`.
#[derive(Debug)]
pub struct Tagged<'a, T: ?Sized> {
    tag: &'static str,
    content: Option<&'a T>,
}

impl Tagged<'static, ()> {
    /// A variant without payload, written as a bare string.
    pub fn unit(tag: &'static str) -> Tagged<'static, ()> {
        Tagged { tag, content: None }
    }
}

impl<'a, T: ?Sized> Tagged<'a, T> {
    /// A variant carrying `content`, written as a single-key object.
    pub fn new(tag: &'static str, content: &'a T) -> Tagged<'a, T> {
        Tagged {
            tag,
            content: Some(content),
        }
    }
}

impl<T: Serialize + ?Sized> Serialize for Tagged<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.content {
            None => serializer.serialize_str(self.tag),
            Some(content) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(self.tag, content)?;
                map.end()
            }
        }
    }
}

/// Two values written as a 2-element JSON array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair<A, B>(pub A, pub B);

impl<A: Serialize, B: Serialize> Serialize for Pair<A, B> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tup = serializer.serialize_tuple(2)?;
        tup.serialize_element(&self.0)?;
        tup.serialize_element(&self.1)?;
        tup.end()
    }
}

/// Turn an unordered mapping into the ordered-pair array the wire expects.
///
/// The order of the result is the iteration order of the map, which is
/// unspecified. Consumers must treat it as a set of pairs.
pub fn pairs<K, V>(map: &HashMap<K, V>) -> Vec<Pair<&K, &V>> {
    map.iter().map(|(k, v)| Pair(k, v)).collect()
}

/// Same as [`pairs`] for collections that are already ordered.
pub fn ordered_pairs<K, V>(items: &[(K, V)]) -> Vec<Pair<&K, &V>> {
    items.iter().map(|(k, v)| Pair(k, v)).collect()
}

//! `serde` support, enabled by the `serde` feature.
//!
//! The map serializes as a map of entries in ascending key order. Rebuilding
//! goes through [`AvlTree::insert`], so a repeated key keeps its first value.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::key::Key;
use crate::AvlTree;

impl<K: Serialize, V: Serialize> Serialize for AvlTree<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

struct AvlTreeVisitor<K, V> {
    _marker: PhantomData<fn() -> AvlTree<K, V>>,
}

impl<'de, K, V> Visitor<'de> for AvlTreeVisitor<K, V>
where
    K: Key + Deserialize<'de>,
    V: Deserialize<'de>,
{
    type Value = AvlTree<K, V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut tree = AvlTree::new();
        while let Some((key, value)) = access.next_entry()? {
            tree.insert(key, value);
        }
        Ok(tree)
    }
}

impl<'de, K, V> Deserialize<'de> for AvlTree<K, V>
where
    K: Key + Deserialize<'de>,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AvlTreeVisitor {
            _marker: PhantomData,
        })
    }
}

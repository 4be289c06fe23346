//! Serde support for [`OrderedMap`].
//!
//! Maps are serialized as map-shaped data in exactly the container's current
//! iteration order. Deserialization replays one `insert` per decoded pair,
//! so decoding the encoding of a map reproduces the same keys in the same
//! order with equal values. Duplicate keys in the input collapse the way
//! repeated `insert` calls do: the first occurrence fixes the position, the
//! last occurrence fixes the value.
//!
//! Requires the `serde` crate feature.

use core::hash::BuildHasher;
use core::hash::Hash;
use core::marker::PhantomData;

use serde::de::MapAccess;
use serde::de::Visitor;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

use crate::ordered_map::OrderedMap;

impl<K, T, S> Serialize for OrderedMap<K, T, S>
where
    K: Serialize,
    T: Serialize,
{
    fn serialize<Sr>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error>
    where
        Sr: Serializer,
    {
        serializer.collect_map(self)
    }
}

struct OrderedMapVisitor<K, T, S>(PhantomData<(K, T, S)>);

impl<'de, K, T, S> Visitor<'de> for OrderedMapVisitor<K, T, S>
where
    K: Deserialize<'de> + Hash + Eq,
    T: Deserialize<'de>,
    S: BuildHasher + Default,
{
    type Value = OrderedMap<K, T, S>;

    fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(formatter, "a map")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut values = OrderedMap::with_capacity_and_hasher(
            map.size_hint().unwrap_or(0),
            S::default(),
        );
        while let Some((key, value)) = map.next_entry()? {
            values.insert(key, value);
        }
        Ok(values)
    }
}

impl<'de, K, T, S> Deserialize<'de> for OrderedMap<K, T, S>
where
    K: Deserialize<'de> + Hash + Eq,
    T: Deserialize<'de>,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

//! Key/value extraction from optional hash maps.
//!
//! Output order follows the map's iteration order, which for [`HashMap`] is unspecified and
//! differs between map instances. Don't rely on it.

use std::collections::HashMap;
use std::hash::BuildHasher;

/// Returns every key of `map` exactly once, in unspecified order.
///
/// Returns `None` if `map` is `None`, and `Some(vec![])` for an empty map.
pub fn map_keys<K, V, S>(map: Option<&HashMap<K, V, S>>) -> Option<Vec<K>>
where
    K: Clone,
    S: BuildHasher,
{
    map.map(|m| m.keys().cloned().collect())
}

/// Returns one value per key of `map`, in unspecified order.
///
/// Values shared by several keys appear once per key. Returns `None` if `map` is `None`, and
/// `Some(vec![])` for an empty map.
pub fn map_values<K, V, S>(map: Option<&HashMap<K, V, S>>) -> Option<Vec<V>>
where
    V: Clone,
    S: BuildHasher,
{
    map.map(|m| m.values().cloned().collect())
}

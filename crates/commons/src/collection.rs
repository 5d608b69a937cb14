/**
 * @file collection.rs
 * @author Krisna Pranav
 * @brief commons[collection]
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use opt::{Error, Opt};

/// Lookup function over `map`, `Absent` for missing keys.
pub fn map_getter<K, V, S>(map: &HashMap<K, V, S>) -> impl Fn(&K) -> Opt<V> + '_
where
    K: Eq + Hash,
    V: Clone,
    S: BuildHasher,
{
    move |key: &K| Opt::from(map.get(key).cloned())
}

/// Index function over `slice`. Panics when the index is out of bounds.
pub fn slice_index<T: Clone>(slice: &[T]) -> impl Fn(usize) -> T + '_ {
    move |index: usize| slice[index].clone()
}

pub fn try_slice_index<T: Clone>(slice: &[T]) -> impl Fn(usize) -> opt::Result<T> + '_ {
    move |index: usize| {
        slice
            .get(index)
            .cloned()
            .ok_or(Error::IndexOutOfBounds {
                index,
                len: slice.len(),
            })
    }
}

/**
 * @file collect.rs
 * @author Krisna Pranav
 * @brief lazy-iter[collect]
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::{CollectConfig, LazyIterator};

/// Containers a [`LazyIterator`] can be drained into.
pub trait FromLazyIterator<T>: Sized {
    fn from_lazy<I>(iter: I) -> Self
    where
        I: LazyIterator<Item = T>;
}

impl<T> FromLazyIterator<T> for Vec<T> {
    fn from_lazy<I>(iter: I) -> Self
    where
        I: LazyIterator<Item = T>,
    {
        iter.collect_vec()
    }
}

impl<K, V, S> FromLazyIterator<(K, V)> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_lazy<I>(iter: I) -> Self
    where
        I: LazyIterator<Item = (K, V)>,
    {
        let capacity = CollectConfig::default().capacity_for(iter.size_hint());
        let mut result = HashMap::with_capacity_and_hasher(capacity, S::default());

        iter.for_each(|(key, value)| {
            result.insert(key, value);
        });

        result
    }
}

impl<K, V> FromLazyIterator<(K, V)> for BTreeMap<K, V>
where
    K: Ord,
{
    fn from_lazy<I>(iter: I) -> Self
    where
        I: LazyIterator<Item = (K, V)>,
    {
        iter.fold(BTreeMap::new(), |mut result, (key, value)| {
            result.insert(key, value);
            result
        })
    }
}

impl FromLazyIterator<char> for String {
    fn from_lazy<I>(iter: I) -> Self
    where
        I: LazyIterator<Item = char>,
    {
        let capacity = CollectConfig::default().capacity_for(iter.size_hint());
        let mut result = String::with_capacity(capacity);
        iter.for_each(|c| result.push(c));
        result
    }
}

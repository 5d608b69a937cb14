/**
 * @file lib.rs
 * @author Krisna Pranav
 * @brief lib[lazy-iter]
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */

mod adapters;
mod collect;
mod config;
mod size_hint;
mod sources;
#[cfg(test)]
mod testing;

pub use adapters::{
    Cloned, Enumerate, Filter, Fuse, Inspect, Map, Skip, SkipWhile, Take, TakeWhile, Zip,
};
pub use collect::FromLazyIterator;
pub use config::CollectConfig;
pub use opt::{Absent, Opt, Present};
pub use size_hint::SizeHint;
pub use sources::{
    from_fn, from_fn_with_hint, from_vec, iterate, slice_iter, FromFn, Iterate, SliceIter,
    VecIter,
};

use std::collections::HashMap;
use std::hash::Hash;

/// A pull-based lazy sequence.
///
/// `next` hands out one element per call and `Absent` once the sequence is
/// done. Every source and adapter in this crate keeps returning `Absent`
/// after that. Adapters take `self` by value, so a source that has been
/// wrapped can only be driven through the wrapper.
pub trait LazyIterator {
    type Item;

    fn next(&mut self) -> Opt<Self::Item>;

    fn size_hint(&self) -> SizeHint {
        SizeHint::unknown()
    }

    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        Map::new(self, f)
    }

    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    fn zip<U>(self, other: U) -> Zip<Self, U>
    where
        Self: Sized,
        U: LazyIterator,
    {
        Zip::new(self, other)
    }

    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, n)
    }

    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, n)
    }

    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        SkipWhile::new(self, predicate)
    }

    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate::new(self)
    }

    fn inspect<F>(self, f: F) -> Inspect<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item),
    {
        Inspect::new(self, f)
    }

    fn cloned<'a, T>(self) -> Cloned<Self>
    where
        Self: Sized + LazyIterator<Item = &'a T>,
        T: Clone + 'a,
    {
        Cloned::new(self)
    }

    fn fuse(self) -> Fuse<Self>
    where
        Self: Sized,
    {
        Fuse::new(self)
    }

    fn fold<B, F>(self, init: B, f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        let mut f = f;
        let mut acc = init;
        let mut iter = self;

        while let Present(item) = iter.next() {
            acc = f(acc, item);
        }

        acc
    }

    fn for_each<F>(self, f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        let mut f = f;
        self.fold((), |(), item| f(item))
    }

    /// Pulls until `predicate` accepts an element.
    ///
    /// Elements before the match are consumed. Pass `&mut iter` to keep
    /// using the rest of the iterator afterwards.
    fn find<P>(self, predicate: P) -> Opt<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        let mut predicate = predicate;
        let mut iter = self;

        while let Present(item) = iter.next() {
            if predicate(&item) {
                return Present(item);
            }
        }

        Absent
    }

    /// Folds with the first element as the seed, `Absent` when empty.
    fn reduce<F>(self, f: F) -> Opt<Self::Item>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let mut f = f;
        self.fold(Absent, |acc, item| match acc {
            Present(acc) => Present(f(acc, item)),
            Absent => Present(item),
        })
    }

    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.fold(0, |acc, _| acc + 1)
    }

    fn last(self) -> Opt<Self::Item>
    where
        Self: Sized,
    {
        self.fold(Absent, |_, item| Present(item))
    }

    fn any<P>(self, predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.find(predicate).is_some()
    }

    fn all<P>(self, predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        let mut predicate = predicate;
        !self.any(|item| !predicate(item))
    }

    fn position<P>(self, predicate: P) -> Opt<usize>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        let mut predicate = predicate;
        self.enumerate()
            .find(|(_, item)| predicate(item))
            .map(|(index, _)| index)
    }

    fn collect<C>(self) -> C
    where
        Self: Sized,
        C: FromLazyIterator<Self::Item>,
    {
        C::from_lazy(self)
    }

    fn collect_vec(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        self.collect_vec_with(&CollectConfig::default())
    }

    fn collect_vec_with(self, config: &CollectConfig) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        let hint = self.size_hint();
        let capacity = config.capacity_for(hint);
        tracing::trace!(?hint, capacity, "collecting into vec");

        let mut result = Vec::with_capacity(capacity);
        self.for_each(|item| result.push(item));
        result
    }

    /// Collects key/value pairs. A later duplicate key overwrites the
    /// earlier value.
    fn collect_map<K, V>(self) -> HashMap<K, V>
    where
        Self: Sized + LazyIterator<Item = (K, V)>,
        K: Eq + Hash,
    {
        self.collect_map_with(&CollectConfig::default())
    }

    fn collect_map_with<K, V>(self, config: &CollectConfig) -> HashMap<K, V>
    where
        Self: Sized + LazyIterator<Item = (K, V)>,
        K: Eq + Hash,
    {
        let hint = self.size_hint();
        let capacity = config.capacity_for(hint);
        tracing::trace!(?hint, capacity, "collecting into map");

        let mut result = HashMap::with_capacity(capacity);
        self.for_each(|(key, value)| {
            result.insert(key, value);
        });
        result
    }

    fn into_std(self) -> IntoStd<Self>
    where
        Self: Sized,
    {
        IntoStd { iter: self }
    }
}

impl<I> LazyIterator for &mut I
where
    I: LazyIterator + ?Sized,
{
    type Item = I::Item;

    fn next(&mut self) -> Opt<Self::Item> {
        (**self).next()
    }

    fn size_hint(&self) -> SizeHint {
        (**self).size_hint()
    }
}

pub trait IntoLazyIterator: Sized {
    fn lazy(self) -> IntoLazy<Self>;
}

/// A standard library iterator driven through [`LazyIterator`].
///
/// The wrapped iterator is fused, so a std iterator that resumes after
/// `None` still ends the lazy one for good.
pub struct IntoLazy<I> {
    iter: std::iter::Fuse<I>,
}

impl<I> LazyIterator for IntoLazy<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Opt<Self::Item> {
        self.iter.next().into()
    }

    fn size_hint(&self) -> SizeHint {
        self.iter.size_hint().into()
    }
}

impl<I> IntoLazyIterator for I
where
    I: Iterator,
{
    fn lazy(self) -> IntoLazy<Self> {
        IntoLazy { iter: self.fuse() }
    }
}

/// A [`LazyIterator`] usable wherever a standard library iterator is expected.
pub struct IntoStd<I> {
    iter: I,
}

impl<I> Iterator for IntoStd<I>
where
    I: LazyIterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().into()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint().into()
    }
}

/**
 * @file sources.rs
 * @author Krisna Pranav
 * @brief lazy-iter[sources]
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */
use opt::{Absent, Opt, Present};

use crate::{LazyIterator, SizeHint};

/// Borrows each element of a slice in order.
#[derive(Clone, Debug)]
pub struct SliceIter<'a, T> {
    slice: &'a [T],
    position: usize,
}

impl<'a, T> SliceIter<'a, T> {
    pub fn new(slice: &'a [T]) -> Self {
        Self { slice, position: 0 }
    }
}

impl<'a, T> From<&'a [T]> for SliceIter<'a, T> {
    fn from(slice: &'a [T]) -> Self {
        Self::new(slice)
    }
}

impl<'a, T> LazyIterator for SliceIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Opt<Self::Item> {
        match self.slice.get(self.position) {
            Some(element) => {
                self.position += 1;
                Present(element)
            }
            None => Absent,
        }
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.slice.len() - self.position)
    }
}

/// Moves each element out of an owned vector in order.
#[derive(Clone, Debug)]
pub struct VecIter<T> {
    items: std::vec::IntoIter<T>,
}

impl<T> VecIter<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into_iter(),
        }
    }
}

impl<T> From<Vec<T>> for VecIter<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> LazyIterator for VecIter<T> {
    type Item = T;

    fn next(&mut self) -> Opt<Self::Item> {
        self.items.next().into()
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.items.len())
    }
}

/// Pulls elements from a generator closure until it first returns `Absent`.
///
/// The closure is never called again after that, even if it would produce
/// more elements.
pub struct FromFn<F> {
    generate: F,
    hint: SizeHint,
    done: bool,
}

impl<F> FromFn<F> {
    pub fn new(generate: F, hint: SizeHint) -> Self {
        Self {
            generate,
            hint,
            done: false,
        }
    }
}

impl<T, F> LazyIterator for FromFn<F>
where
    F: FnMut() -> Opt<T>,
{
    type Item = T;

    fn next(&mut self) -> Opt<Self::Item> {
        if self.done {
            return Absent;
        }

        let element = (self.generate)();
        if element.is_none() {
            self.done = true;
        } else {
            self.hint = self.hint.skip(1);
        }

        element
    }

    fn size_hint(&self) -> SizeHint {
        if self.done {
            SizeHint::empty()
        } else {
            self.hint
        }
    }
}

/// Yields `init`, `f(init)`, `f(f(init))`, ... forever.
#[derive(Clone, Debug)]
pub struct Iterate<T, F> {
    seed: T,
    previous: Opt<T>,
    f: F,
}

impl<T, F> Iterate<T, F> {
    pub fn new(seed: T, f: F) -> Self {
        Self {
            seed,
            previous: Absent,
            f,
        }
    }
}

impl<T, F> LazyIterator for Iterate<T, F>
where
    T: Clone,
    F: FnMut(T) -> T,
{
    type Item = T;

    fn next(&mut self) -> Opt<Self::Item> {
        let current =
            std::mem::take(&mut self.previous).map_or_else(|| self.seed.clone(), &mut self.f);
        self.previous = Present(current.clone());

        Present(current)
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::unknown()
    }
}

pub fn slice_iter<T>(slice: &[T]) -> SliceIter<'_, T> {
    SliceIter::new(slice)
}

pub fn from_vec<T>(items: Vec<T>) -> VecIter<T> {
    VecIter::new(items)
}

/// Iterator of unknown length over a generator closure.
pub fn from_fn<T, F>(generate: F) -> FromFn<F>
where
    F: FnMut() -> Opt<T>,
{
    FromFn::new(generate, SizeHint::unknown())
}

/// Like [`from_fn`], for a generator known to produce `hint` elements.
pub fn from_fn_with_hint<T, F>(generate: F, hint: SizeHint) -> FromFn<F>
where
    F: FnMut() -> Opt<T>,
{
    FromFn::new(generate, hint)
}

pub fn iterate<T, F>(init: T, f: F) -> Iterate<T, F>
where
    T: Clone,
    F: FnMut(T) -> T,
{
    Iterate::new(init, f)
}

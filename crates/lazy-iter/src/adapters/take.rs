/**
 * @file take.rs
 * @author Krisna Pranav
 * @brief take
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */
use opt::{Absent, Opt};

use crate::{adapters::Fuse, LazyIterator, SizeHint};

/// Yields at most `n` elements. The source is not touched once `n` have
/// been pulled.
pub struct Take<I> {
    iter: Fuse<I>,
    remaining: usize,
}

impl<I> Take<I> {
    pub fn new(iter: I, n: usize) -> Self {
        Self {
            iter: Fuse::new(iter),
            remaining: n,
        }
    }
}

impl<I> LazyIterator for Take<I>
where
    I: LazyIterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Opt<Self::Item> {
        if self.remaining == 0 {
            return Absent;
        }

        self.remaining -= 1;
        let item = self.iter.next();
        if item.is_none() {
            self.remaining = 0;
        }

        item
    }

    fn size_hint(&self) -> SizeHint {
        if self.remaining == 0 {
            return SizeHint::empty();
        }

        self.iter.size_hint().take(self.remaining)
    }
}

pub struct TakeWhile<I, P> {
    iter: Fuse<I>,
    predicate: P,
    done: bool,
}

impl<I, P> TakeWhile<I, P> {
    pub fn new(iter: I, predicate: P) -> Self {
        Self {
            iter: Fuse::new(iter),
            predicate,
            done: false,
        }
    }
}

impl<I, P> LazyIterator for TakeWhile<I, P>
where
    I: LazyIterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Opt<Self::Item> {
        if self.done {
            return Absent;
        }

        let item = self.iter.next().filter(&mut self.predicate);
        if item.is_none() {
            self.done = true;
        }

        item
    }

    fn size_hint(&self) -> SizeHint {
        if self.done {
            SizeHint::empty()
        } else {
            self.iter.size_hint().without_lower_bound()
        }
    }
}

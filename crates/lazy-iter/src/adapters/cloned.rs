/**
 * @file cloned.rs
 * @author Krisna Pranav
 * @brief cloned
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */
use opt::Opt;

use crate::{adapters::Fuse, LazyIterator, SizeHint};

/// Turns an iterator of references into one of owned clones.
pub struct Cloned<I> {
    iter: Fuse<I>,
}

impl<I> Cloned<I> {
    pub fn new(iter: I) -> Self {
        Self {
            iter: Fuse::new(iter),
        }
    }
}

impl<I> From<I> for Cloned<I> {
    fn from(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a, I, T> LazyIterator for Cloned<I>
where
    I: LazyIterator<Item = &'a T>,
    T: Clone + 'a,
{
    type Item = T;

    fn next(&mut self) -> Opt<Self::Item> {
        self.iter.next().map(T::clone)
    }

    fn size_hint(&self) -> SizeHint {
        self.iter.size_hint()
    }
}

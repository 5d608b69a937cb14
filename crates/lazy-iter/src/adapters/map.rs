/**
 * @file map.rs
 * @author Krisna Pranav
 * @brief map
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */
use opt::Opt;

use crate::{adapters::Fuse, LazyIterator, SizeHint};

pub struct Map<I, F> {
    iter: Fuse<I>,
    f: F,
}

impl<I, F> Map<I, F> {
    pub fn new(iter: I, f: F) -> Self {
        Self {
            iter: Fuse::new(iter),
            f,
        }
    }
}

impl<I, F, T> LazyIterator for Map<I, F>
where
    I: LazyIterator,
    F: FnMut(I::Item) -> T,
{
    type Item = T;

    fn next(&mut self) -> Opt<Self::Item> {
        self.iter.next().map(&mut self.f)
    }

    fn size_hint(&self) -> SizeHint {
        self.iter.size_hint()
    }
}

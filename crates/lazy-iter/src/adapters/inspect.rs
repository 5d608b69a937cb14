/**
 * @file inspect.rs
 * @author Krisna Pranav
 * @brief inspect
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */
use opt::Opt;

use crate::{adapters::Fuse, LazyIterator, SizeHint};

pub struct Inspect<I, F> {
    iter: Fuse<I>,
    f: F,
}

impl<I, F> Inspect<I, F> {
    pub fn new(iter: I, f: F) -> Self {
        Self {
            iter: Fuse::new(iter),
            f,
        }
    }
}

impl<I, F> LazyIterator for Inspect<I, F>
where
    I: LazyIterator,
    F: FnMut(&I::Item),
{
    type Item = I::Item;

    fn next(&mut self) -> Opt<Self::Item> {
        self.iter.next().inspect(&mut self.f)
    }

    fn size_hint(&self) -> SizeHint {
        self.iter.size_hint()
    }
}

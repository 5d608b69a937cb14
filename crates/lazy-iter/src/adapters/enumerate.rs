/**
 * @file enumerate.rs
 * @author Krisna Pranav
 * @brief enumerate
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */
use commons::num::increment;
use opt::Opt;

use crate::{adapters::Fuse, LazyIterator, SizeHint};

/// Pairs every element with its zero-based position.
///
/// Behaves like zipping an endless `0, 1, 2, ...` counter with the source,
/// so it ends exactly when the source does.
pub struct Enumerate<I> {
    iter: Fuse<I>,
    index: usize,
}

impl<I> Enumerate<I> {
    pub fn new(iter: I) -> Self {
        Self {
            iter: Fuse::new(iter),
            index: 0,
        }
    }
}

impl<I> From<I> for Enumerate<I> {
    fn from(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<I> LazyIterator for Enumerate<I>
where
    I: LazyIterator,
{
    type Item = (usize, I::Item);

    fn next(&mut self) -> Opt<Self::Item> {
        self.iter.next().map(|item| {
            let index = self.index;
            self.index = increment(index);
            (index, item)
        })
    }

    fn size_hint(&self) -> SizeHint {
        self.iter.size_hint()
    }
}

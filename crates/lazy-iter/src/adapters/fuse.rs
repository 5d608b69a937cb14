/**
 * @file fuse.rs
 * @author Krisna Pranav
 * @brief fuse
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */
use opt::{Absent, Opt};

use crate::{LazyIterator, SizeHint};

/// Keeps returning `Absent` once the wrapped iterator has returned it once.
///
/// Every other adapter holds its source behind a `Fuse`, so a chain is
/// exhausted for good even over a source that would resume.
pub struct Fuse<I> {
    iter: I,
    done: bool,
}

impl<I> Fuse<I> {
    pub fn new(iter: I) -> Self {
        Self { iter, done: false }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl<I> From<I> for Fuse<I> {
    fn from(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<I> LazyIterator for Fuse<I>
where
    I: LazyIterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Opt<Self::Item> {
        if self.done {
            return Absent;
        }

        let item = self.iter.next();
        if item.is_none() {
            tracing::trace!("source exhausted");
            self.done = true;
        }

        item
    }

    fn size_hint(&self) -> SizeHint {
        if self.done {
            SizeHint::empty()
        } else {
            self.iter.size_hint()
        }
    }
}

/**
 * @file testing.rs
 * @author Krisna Pranav
 * @brief lazy-iter[testing]
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */
use opt::{Absent, Opt, Present};

use crate::{LazyIterator, SizeHint};

/// A source that returns `Absent` once after every element and then
/// resumes, for checking that adapters stay exhausted.
pub struct Flaky<T> {
    items: Vec<T>,
    position: usize,
    gap: bool,
}

impl<T> Flaky<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            position: 0,
            gap: false,
        }
    }
}

impl<T: Clone> LazyIterator for Flaky<T> {
    type Item = T;

    fn next(&mut self) -> Opt<Self::Item> {
        if self.gap {
            self.gap = false;
            return Absent;
        }

        match self.items.get(self.position) {
            Some(item) => {
                self.position += 1;
                self.gap = true;
                Present(item.clone())
            }
            None => Absent,
        }
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::new(0, Present(self.items.len() - self.position))
    }
}

/**
 * @file skip.rs
 * @author Krisna Pranav
 * @brief skip
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */
use opt::Opt;

use crate::{adapters::Fuse, LazyIterator, SizeHint};

/// Drops the first `n` elements, pulling them on the first call to `next`.
pub struct Skip<I> {
    iter: Fuse<I>,
    pending: usize,
}

impl<I> Skip<I> {
    pub fn new(iter: I, n: usize) -> Self {
        Self {
            iter: Fuse::new(iter),
            pending: n,
        }
    }
}

impl<I> LazyIterator for Skip<I>
where
    I: LazyIterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Opt<Self::Item> {
        while self.pending > 0 {
            self.pending -= 1;
            if self.iter.next().is_none() {
                self.pending = 0;
            }
        }

        self.iter.next()
    }

    fn size_hint(&self) -> SizeHint {
        self.iter.size_hint().skip(self.pending)
    }
}

/// Drops leading elements while `predicate` holds.
///
/// The predicate only runs until it first fails. The element it failed on
/// is yielded, and everything after it passes through unchecked.
pub struct SkipWhile<I, P> {
    iter: Fuse<I>,
    predicate: P,
    skipping: bool,
}

impl<I, P> SkipWhile<I, P> {
    pub fn new(iter: I, predicate: P) -> Self {
        Self {
            iter: Fuse::new(iter),
            predicate,
            skipping: true,
        }
    }
}

impl<I, P> LazyIterator for SkipWhile<I, P>
where
    I: LazyIterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Opt<Self::Item> {
        if self.skipping {
            self.skipping = false;
            let predicate = &mut self.predicate;
            return (&mut self.iter).find(|item| !predicate(item));
        }

        self.iter.next()
    }

    fn size_hint(&self) -> SizeHint {
        let hint = self.iter.size_hint();
        if self.skipping {
            hint.without_lower_bound()
        } else {
            hint
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{from_vec, slice_iter, testing::Flaky, LazyIterator, SizeHint};
    use opt::{Absent, Present};

    #[test]
    fn skips_first_n() {
        let mut iter = from_vec(vec![1, 2, 3, 4]).skip(2);

        assert_eq!(iter.size_hint(), SizeHint::exact(2));
        assert_eq!(iter.next(), Present(3));
        assert_eq!(iter.size_hint(), SizeHint::exact(1));
        assert_eq!(iter.next(), Present(4));
        assert_eq!(iter.next(), Absent);
    }

    #[test]
    fn skipping_past_the_end() {
        let mut iter = from_vec(vec![1, 2]).skip(5);
        assert_eq!(iter.size_hint(), SizeHint::exact(0));
        assert_eq!(iter.next(), Absent);
        assert_eq!(iter.next(), Absent);
    }

    #[test]
    fn skip_does_not_resume_flaky_source() {
        let mut iter = Flaky::new(vec![1, 2, 3]).skip(1);
        assert_eq!(iter.next(), Absent);
        assert_eq!(iter.next(), Absent);
    }

    #[test]
    fn skip_while_keeps_first_failure() {
        let items = [1, 2, -1, 3];
        let mut iter = slice_iter(&items).skip_while(|x| **x > 0);

        assert_eq!(iter.size_hint(), SizeHint::new(0, Present(4)));
        assert_eq!(iter.next(), Present(&-1));
        assert_eq!(iter.size_hint(), SizeHint::exact(1));
        assert_eq!(iter.next(), Present(&3));
        assert_eq!(iter.next(), Absent);
    }

    #[test]
    fn skip_while_predicate_runs_only_while_skipping() {
        let mut calls = 0;
        let collected = from_vec(vec![1, 2, -1, 3, 4])
            .skip_while(|x| {
                calls += 1;
                *x > 0
            })
            .collect_vec();

        assert_eq!(collected, vec![-1, 3, 4]);
        assert_eq!(calls, 3);
    }

    #[test]
    fn skip_while_everything() {
        let mut iter = from_vec(vec![1, 2]).skip_while(|_| true);
        assert_eq!(iter.next(), Absent);
        assert_eq!(iter.next(), Absent);
    }
}

/**
 * @file filter.rs
 * @author Krisna Pranav
 * @brief filter
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */
use opt::Opt;

use crate::{adapters::Fuse, LazyIterator, SizeHint};

pub struct Filter<I, P> {
    iter: Fuse<I>,
    predicate: P,
}

impl<I, P> Filter<I, P> {
    pub fn new(iter: I, predicate: P) -> Self {
        Self {
            iter: Fuse::new(iter),
            predicate,
        }
    }
}

impl<I, P> LazyIterator for Filter<I, P>
where
    I: LazyIterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Opt<Self::Item> {
        (&mut self.iter).find(&mut self.predicate)
    }

    fn size_hint(&self) -> SizeHint {
        self.iter.size_hint().without_lower_bound()
    }
}

#[cfg(test)]
mod tests {
    use crate::{from_vec, testing::Flaky, LazyIterator, SizeHint};
    use opt::{Absent, Present};

    #[test]
    fn keeps_matching_elements() {
        let mut iter = from_vec(vec![1, 2, -1, 3]).filter(|x| *x > 0);

        assert_eq!(iter.size_hint(), SizeHint::new(0, Present(4)));
        assert_eq!(iter.next(), Present(1));
        assert_eq!(iter.next(), Present(2));
        assert_eq!(iter.next(), Present(3));
        assert_eq!(iter.next(), Absent);
    }

    #[test]
    fn rejecting_everything_is_empty() {
        let mut iter = from_vec(vec![1, 2, 3]).filter(|_| false);
        assert_eq!(iter.next(), Absent);
        assert_eq!(iter.size_hint(), SizeHint::empty());
    }

    #[test]
    fn sticky_over_flaky_source() {
        let mut iter = Flaky::new(vec![1, 2, 3]).filter(|x| x % 2 == 1);
        assert_eq!(iter.next(), Present(1));
        assert_eq!(iter.next(), Absent);
        assert_eq!(iter.next(), Absent);
    }
}

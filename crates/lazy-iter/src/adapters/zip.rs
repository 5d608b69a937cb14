/**
 * @file zip.rs
 * @author Krisna Pranav
 * @brief zip
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */
use opt::{Absent, Opt};

use crate::{adapters::Fuse, LazyIterator, SizeHint};

/// Pairs up elements of two iterators.
///
/// Both sides are pulled on every call before the results are checked. On
/// the call that ends the zip the longer side has already given up one
/// element, and that element is dropped. After that neither side is pulled
/// again.
pub struct Zip<A, B> {
    a: Fuse<A>,
    b: Fuse<B>,
    done: bool,
}

impl<A, B> Zip<A, B> {
    pub fn new(a: A, b: B) -> Self {
        Self {
            a: Fuse::new(a),
            b: Fuse::new(b),
            done: false,
        }
    }
}

impl<A, B> LazyIterator for Zip<A, B>
where
    A: LazyIterator,
    B: LazyIterator,
{
    type Item = (A::Item, B::Item);

    fn next(&mut self) -> Opt<Self::Item> {
        if self.done {
            return Absent;
        }

        let a = self.a.next();
        let b = self.b.next();

        let pair = a.zip(b);
        if pair.is_none() {
            self.done = true;
        }

        pair
    }

    fn size_hint(&self) -> SizeHint {
        if self.done {
            SizeHint::empty()
        } else {
            self.a.size_hint().min(self.b.size_hint())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{from_fn, from_vec, iterate, LazyIterator, SizeHint};
    use opt::{Absent, Present};

    #[test]
    fn stops_at_the_shorter_side() {
        let mut iter = from_vec(vec![1, 2, 3]).zip(from_vec(vec!['a', 'b']));

        assert_eq!(iter.size_hint(), SizeHint::exact(2));
        assert_eq!(iter.next(), Present((1, 'a')));
        assert_eq!(iter.next(), Present((2, 'b')));
        assert_eq!(iter.next(), Absent);
        assert_eq!(iter.next(), Absent);
        assert_eq!(iter.size_hint(), SizeHint::empty());
    }

    #[test]
    fn longer_side_loses_one_element() {
        let mut longer = from_vec(vec![1, 2, 3, 4]);
        let pairs = (&mut longer).zip(from_vec(vec!['a'])).collect_vec();

        assert_eq!(pairs, vec![(1, 'a')]);
        assert_eq!(longer.next(), Present(3));
        assert_eq!(longer.next(), Present(4));
    }

    #[test]
    fn does_not_pull_after_exhaustion() {
        let mut pulls = 0;
        let counted = from_fn(|| {
            pulls += 1;
            Present(pulls)
        });

        let mut iter = counted.zip(from_vec(Vec::<u8>::new()));
        assert_eq!(iter.next(), Absent);
        assert_eq!(iter.next(), Absent);
        drop(iter);
        assert_eq!(pulls, 1);
    }

    #[test]
    fn hint_takes_the_present_upper_bound() {
        let iter = iterate(0, |x| x + 1).zip(from_vec(vec![1, 2, 3]));
        assert_eq!(iter.size_hint(), SizeHint::new(0, Present(3)));

        let iter = from_vec(vec![1, 2, 3]).zip(iterate(0, |x| x + 1));
        assert_eq!(iter.size_hint(), SizeHint::new(0, Present(3)));

        let iter = iterate(0, |x| x + 1).zip(iterate(0, |x| x - 1));
        assert_eq!(iter.size_hint(), SizeHint::unknown());
    }
}

//! Anything with an unsigned element count.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};

use crate::signed::SignedSize;

/// A value that reports an unsigned size.
///
/// Implemented for the std collections with `usize` sizes. Types with a
/// narrower or wider size type (`u16`, `u64`, ...) implement it with that
/// type as `Size` and get the matching signed result from [`crate::ssize`].
pub trait HasSize {
    type Size: SignedSize;

    fn size(&self) -> Self::Size;
}

impl<T: HasSize + ?Sized> HasSize for &T {
    type Size = T::Size;

    #[inline]
    fn size(&self) -> Self::Size {
        (**self).size()
    }
}

impl<T: HasSize + ?Sized> HasSize for Box<T> {
    type Size = T::Size;

    #[inline]
    fn size(&self) -> Self::Size {
        (**self).size()
    }
}

macro_rules! impl_len_size {
    ($([$($gen:tt)*] $ty:ty),* $(,)?) => {$(
        impl<$($gen)*> HasSize for $ty {
            type Size = usize;

            #[inline]
            fn size(&self) -> usize {
                self.len()
            }
        }
    )*};
}

impl_len_size! {
    [T] [T],
    [T, const N: usize] [T; N],
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T] LinkedList<T>,
    [K, V, S] HashMap<K, V, S>,
    [T, S] HashSet<T, S>,
    [K, V] BTreeMap<K, V>,
    [T] BTreeSet<T>,
    [] str,
    [] String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_collections() {
        assert_eq!(vec![1, 2, 3].size(), 3);
        assert_eq!([0u8; 4].size(), 4);
        assert_eq!((&[1, 2][..]).size(), 2);
        assert_eq!("héllo".size(), 6);
        assert_eq!(String::from("ab").size(), 2);
        assert_eq!(VecDeque::<u8>::new().size(), 0);

        let map: HashMap<_, _> = [(1, 'a'), (2, 'b')].into_iter().collect();
        assert_eq!(map.size(), 2);
        let set: BTreeSet<_> = [1, 1, 2].into_iter().collect();
        assert_eq!(set.size(), 2);
    }

    #[test]
    fn through_references_and_boxes() {
        let v = vec![0; 5];
        let r = &v;
        assert_eq!((&r).size(), 5);
        let b: Box<[i32]> = vec![1, 2].into_boxed_slice();
        assert_eq!(b.size(), 2);
    }
}

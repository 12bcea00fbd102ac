//! Specifications for containers usable as stream sources and sinks.
//!
//! A stream reads its input from any type implementing [`Container`] (sequential
//! iteration and a size query) and writes its output through [`PushInto`], which
//! performs each container kind's natural insertion: appending to the end for
//! sequential kinds, deduplicating insertion for set kinds. [`Retype`] relates a
//! container to the container of the same kind over a different element type,
//! which is what allows `map` to change the element type while preserving the
//! container kind.
//!
//! Implementations are provided for `Vec`, `VecDeque`, `LinkedList`, `HashSet`,
//! and `BTreeSet`.

#![forbid(missing_docs)]

use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};
use std::hash::Hash;

/// A container whose contents can be read in order.
///
/// This is the capability a stream source must offer: an element type, a size
/// query, and iteration by reference in the container's own order. Note that
/// `HashSet` iterates in an arbitrary order; every other provided
/// implementation is order-preserving.
///
/// We require [`Default`] so that empty output containers can be conjured when
/// collecting.
pub trait Container: Default {
    /// The type of elements held by the container.
    type Item;

    /// The number of elements in this container.
    fn len(&self) -> usize;

    /// Determine if the container contains any elements, corresponding to `len() == 0`.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterator type when reading from the container.
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a,
        Self::Item: 'a;

    /// Returns an iterator over the contents of this container, in the
    /// container's own order.
    fn iter(&self) -> Self::Iter<'_>;
}

/// A container that can absorb items of a specific type.
///
/// Each implementation uses its kind's natural insertion operation, so pushing
/// an element already present into a set leaves the set unchanged.
pub trait PushInto<T> {
    /// Push `item` into self.
    fn push_into(&mut self, item: T);
}

/// Relates a container to the container of the same kind over element type `X`.
///
/// Mapping a `Vec<i32>` with a function producing `String` should yield a
/// `Vec<String>`, a `BTreeSet<i32>` a `BTreeSet<String>`, and so on. Rust has
/// no direct way to abstract over the `Vec` in `Vec<T>`, so the relation is
/// spelled out per container kind through this trait's associated type.
pub trait Retype<X>: Container {
    /// The same container kind, with `X` as its element type.
    type Output: Container<Item = X> + PushInto<X> + Clone;
}

impl<T> Container for Vec<T> {
    type Item = T;

    #[inline(always)]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a,
        Self::Item: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }
}

impl<T> PushInto<T> for Vec<T> {
    #[inline]
    fn push_into(&mut self, item: T) {
        self.push(item)
    }
}

impl<T, X: Clone> Retype<X> for Vec<T> {
    type Output = Vec<X>;
}

impl<T> Container for VecDeque<T> {
    type Item = T;

    #[inline(always)]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    type Iter<'a>
        = std::collections::vec_deque::Iter<'a, T>
    where
        Self: 'a,
        Self::Item: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        VecDeque::iter(self)
    }
}

impl<T> PushInto<T> for VecDeque<T> {
    #[inline]
    fn push_into(&mut self, item: T) {
        self.push_back(item)
    }
}

impl<T, X: Clone> Retype<X> for VecDeque<T> {
    type Output = VecDeque<X>;
}

impl<T> Container for LinkedList<T> {
    type Item = T;

    #[inline(always)]
    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    type Iter<'a>
        = std::collections::linked_list::Iter<'a, T>
    where
        Self: 'a,
        Self::Item: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        LinkedList::iter(self)
    }
}

impl<T> PushInto<T> for LinkedList<T> {
    #[inline]
    fn push_into(&mut self, item: T) {
        self.push_back(item)
    }
}

impl<T, X: Clone> Retype<X> for LinkedList<T> {
    type Output = LinkedList<X>;
}

impl<T> Container for HashSet<T> {
    type Item = T;

    #[inline(always)]
    fn len(&self) -> usize {
        HashSet::len(self)
    }

    type Iter<'a>
        = std::collections::hash_set::Iter<'a, T>
    where
        Self: 'a,
        Self::Item: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        HashSet::iter(self)
    }
}

impl<T: Eq + Hash> PushInto<T> for HashSet<T> {
    #[inline]
    fn push_into(&mut self, item: T) {
        self.insert(item);
    }
}

impl<T, X: Clone + Eq + Hash> Retype<X> for HashSet<T> {
    type Output = HashSet<X>;
}

impl<T> Container for BTreeSet<T> {
    type Item = T;

    #[inline(always)]
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    type Iter<'a>
        = std::collections::btree_set::Iter<'a, T>
    where
        Self: 'a,
        Self::Item: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        BTreeSet::iter(self)
    }
}

impl<T: Ord> PushInto<T> for BTreeSet<T> {
    #[inline]
    fn push_into(&mut self, item: T) {
        self.insert(item);
    }
}

impl<T, X: Clone + Ord> Retype<X> for BTreeSet<T> {
    type Output = BTreeSet<X>;
}

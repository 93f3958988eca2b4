//! Comparators that order items by a part of themselves.
//!
//! [`Map`](crate::Map) stores `(key, value)` pairs in its tree and orders them by the key alone.
//! It does so with `Projected<First, C>`, which works for any container that orders its items by
//! something derived from them.

use compare::Compare;
use std::cmp::Ordering;

/// Borrows the part of an item that an ordering looks at.
pub trait Projection<T: ?Sized> {
    /// The projected part.
    type Key: ?Sized;

    /// Returns the part of `item` to compare.
    fn project<'a>(&self, item: &'a T) -> &'a Self::Key;
}

/// Projects a pair onto its first element.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct First;

impl<A, B> Projection<(A, B)> for First {
    type Key = A;
    fn project<'a>(&self, item: &'a (A, B)) -> &'a A { &item.0 }
}

/// Projects a pair onto its second element.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Second;

impl<A, B> Projection<(A, B)> for Second {
    type Key = B;
    fn project<'a>(&self, item: &'a (A, B)) -> &'a B { &item.1 }
}

/// A comparator that compares the projections of two items with another comparator.
///
/// # Examples
///
/// ```
/// use bstree::project::{First, Projected};
/// use bstree::Set;
/// use compare::natural;
///
/// let mut set = Set::with_cmp(Projected::new(First, natural()));
///
/// assert!(set.insert((2, "b")).1);
/// assert!(set.insert((1, "a")).1);
/// assert!(!set.insert((2, "z")).1);
///
/// assert_eq!(set.iter().collect::<Vec<_>>(), [&(1, "a"), &(2, "b")]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Projected<P, C> {
    projection: P,
    cmp: C,
}

impl<P, C> Projected<P, C> {
    /// Creates a comparator that compares `projection`s of items with `cmp`.
    pub fn new(projection: P, cmp: C) -> Self { Projected { projection, cmp } }

    /// Returns a reference to the projection.
    pub fn projection(&self) -> &P { &self.projection }

    /// Returns a reference to the comparator applied to projected parts.
    pub fn inner(&self) -> &C { &self.cmp }
}

impl<T: ?Sized, P, C> Compare<T> for Projected<P, C>
    where P: Projection<T>, C: Compare<P::Key> {

    fn compare(&self, l: &T, r: &T) -> Ordering {
        self.cmp.compare(self.projection.project(l), self.projection.project(r))
    }
}

//! An ordered set based on a binary search tree.

use compare::{Compare, Natural};
use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::hash::{self, Hash};
use std::iter;

use crate::policy::Unique;
use crate::tree::{Cursor, Tree};
use crate::Error;

pub use crate::tree::{IntoIter, Iter};

/// An ordered set based on a binary search tree.
///
/// The set holds at most one of each item. The tree is not rebalanced, so the cost of an operation
/// is proportional to the depth the insertion order gave the tree.
///
/// The behavior of this set is undefined if an item's ordering relative to any other item changes
/// while the item is in the set. This is normally only possible through `Cell`, `RefCell`, or
/// unsafe code.
pub struct Set<T, C = Natural<T>> where C: Compare<T> {
    tree: Tree<T, C, Unique>,
}

impl<T> Set<T> where T: Ord {
    /// Creates an empty set ordered according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = bstree::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { Set { tree: Tree::new() } }
}

impl<T, C> Set<T, C> where C: Compare<T> {
    /// Creates an empty set ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut set = bstree::Set::with_cmp(natural().rev());
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn with_cmp(cmp: C) -> Self { Set { tree: Tree::with_cmp(cmp) } }

    /// Checks if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = bstree::Set::new();
    /// assert!(set.is_empty());
    ///
    /// set.insert(2);
    /// assert!(!set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.tree.is_empty() }

    /// Returns the number of items in the set.
    pub fn len(&self) -> usize { self.tree.len() }

    /// Returns the theoretical maximum number of items the set could hold.
    pub fn max_size(&self) -> usize { self.tree.max_size() }

    /// Returns a reference to the set's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let set: bstree::Set<i32> = bstree::Set::new();
    /// assert!(set.cmp().compares_lt(&1, &2));
    ///
    /// let set: bstree::Set<i32, _> = bstree::Set::with_cmp(natural().rev());
    /// assert!(set.cmp().compares_gt(&1, &2));
    /// ```
    pub fn cmp(&self) -> &C { self.tree.cmp() }

    /// Removes all items from the set.
    pub fn clear(&mut self) { self.tree.clear(); }

    /// Inserts an item into the set.
    ///
    /// Returns a cursor at the inserted item and `true`, or, if the set already contained an equal
    /// item, a cursor at that item and `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = bstree::Set::new();
    ///
    /// assert!(set.insert(5).1);
    /// assert!(!set.insert(5).1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, item: T) -> (Cursor, bool) { self.tree.insert(item) }

    /// Inserts an item into the set, failing instead of aborting if node storage cannot grow.
    ///
    /// # Errors
    ///
    /// Returns `Error::Alloc` or `Error::CapacityExceeded`, leaving the set unchanged.
    pub fn try_insert(&mut self, item: T) -> Result<(Cursor, bool), Error> {
        self.tree.try_insert(item)
    }

    /// Inserts each item in turn, returning the result of every insertion.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = bstree::Set::new();
    ///
    /// let inserted: Vec<bool> = set.insert_many([1, 2, 1]).into_iter().map(|r| r.1).collect();
    /// assert_eq!(inserted, [true, true, false]);
    /// ```
    pub fn insert_many<I>(&mut self, items: I) -> Vec<(Cursor, bool)>
        where I: IntoIterator<Item = T> {

        self.tree.insert_many(items)
    }

    /// Removes the item at the cursor and returns it.
    ///
    /// Erasing an end cursor does nothing and returns `Ok(None)`, even if the cursor is stale or
    /// came from another container.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCursor` if the set was structurally modified after a cursor at an item
    /// was obtained, or if the cursor belongs to another container.
    pub fn erase(&mut self, cursor: Cursor) -> Result<Option<T>, Error> { self.tree.erase(cursor) }

    /// Removes the given item from the set, returning `true` if the set contained the item.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = bstree::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert!(set.remove(&1));
    /// assert_eq!(set.len(), 2);
    /// assert!(!set.contains(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, item: &Q) -> bool where C: Compare<Q, T> {
        self.tree.remove(item).is_some()
    }

    /// Removes and returns the item equal to the given one, if any.
    pub fn take<Q: ?Sized>(&mut self, item: &Q) -> Option<T> where C: Compare<Q, T> {
        self.tree.remove(item)
    }

    /// Checks if the set contains the given item.
    pub fn contains<Q: ?Sized>(&self, item: &Q) -> bool where C: Compare<Q, T> {
        self.tree.contains(item)
    }

    /// Returns a reference to the set's item equal to the given one, if any.
    pub fn get<Q: ?Sized>(&self, item: &Q) -> Option<&T> where C: Compare<Q, T> {
        self.tree.get(item)
    }

    /// Returns a cursor at the given item, or past the end if the set does not contain it.
    ///
    /// # Examples
    ///
    /// ```
    /// let set: bstree::Set<_> = [5, 3, 8].into_iter().collect();
    ///
    /// let cursor = set.find(&3);
    /// assert_eq!(set.item(&cursor), Ok(Some(&3)));
    /// assert_eq!(set.find(&4), set.end());
    /// ```
    pub fn find<Q: ?Sized>(&self, item: &Q) -> Cursor where C: Compare<Q, T> {
        self.tree.find(item)
    }

    /// Returns a reference to the set's minimum item, or `None` if the set is empty.
    pub fn first(&self) -> Option<&T> { self.tree.first() }

    /// Returns a reference to the set's maximum item, or `None` if the set is empty.
    pub fn last(&self) -> Option<&T> { self.tree.last() }

    /// Moves every item of `other` into the set, leaving `other` empty.
    ///
    /// Items the set already contains are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut a: bstree::Set<_> = [1, 2].into_iter().collect();
    /// let mut b: bstree::Set<_> = [2, 3].into_iter().collect();
    ///
    /// a.merge(&mut b);
    ///
    /// assert_eq!(a.iter().collect::<Vec<_>>(), [&1, &2, &3]);
    /// assert!(b.is_empty());
    /// ```
    pub fn merge(&mut self, other: &mut Self) { self.tree.merge(&mut other.tree); }

    /// Exchanges the contents of two sets.
    pub fn swap(&mut self, other: &mut Self) { self.tree.swap(&mut other.tree); }

    /// Returns a copy of the set, failing instead of aborting if node storage cannot be
    /// allocated.
    ///
    /// # Errors
    ///
    /// Returns `Error::Alloc` or `Error::CapacityExceeded`.
    pub fn try_clone(&self) -> Result<Self, Error> where T: Clone, C: Clone {
        Ok(Set { tree: self.tree.try_clone()? })
    }

    /// Returns a cursor at the set's minimum item, or past the end if the set is empty.
    pub fn begin(&self) -> Cursor { self.tree.begin() }

    /// Returns a cursor past the end of the set.
    pub fn end(&self) -> Cursor { self.tree.end() }

    /// Returns the item at the cursor, or `None` if the cursor is past the end.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCursor` if the cursor is not valid for the set.
    pub fn item(&self, cursor: &Cursor) -> Result<Option<&T>, Error> { self.tree.item(cursor) }

    /// Moves the cursor to the next item in order.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCursor` if the cursor is not valid for the set.
    pub fn advance(&self, cursor: &mut Cursor) -> Result<(), Error> { self.tree.advance(cursor) }

    /// Returns an iterator over the set.
    ///
    /// The iterator yields the items in ascending order according to the set's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let set: bstree::Set<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    /// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 8, 9]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> { self.tree.iter() }
}

impl<T, C> Clone for Set<T, C> where T: Clone, C: Compare<T> + Clone {
    fn clone(&self) -> Self { Set { tree: self.tree.clone() } }
}

impl<T, C> Debug for Set<T, C> where T: Debug, C: Compare<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { self.tree.fmt(f) }
}

impl<T, C> Default for Set<T, C> where C: Compare<T> + Default {
    fn default() -> Self { Set { tree: Tree::default() } }
}

impl<T, C> Extend<T> for Set<T, C> where C: Compare<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, it: I) { self.tree.extend(it); }
}

impl<T, C> iter::FromIterator<T> for Set<T, C> where C: Compare<T> + Default {
    fn from_iter<I: IntoIterator<Item = T>>(it: I) -> Self { Set { tree: it.into_iter().collect() } }
}

impl<T, C> Hash for Set<T, C> where T: Hash, C: Compare<T> {
    fn hash<H: hash::Hasher>(&self, h: &mut H) { self.tree.hash(h); }
}

impl<'a, T, C> IntoIterator for &'a Set<T, C> where C: Compare<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<T, C> IntoIterator for Set<T, C> where C: Compare<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Returns an iterator that consumes the set.
    ///
    /// The iterator yields the items in ascending order according to the set's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let set: bstree::Set<_> = [2, 1, 3].into_iter().collect();
    ///
    /// let mut it = set.into_iter();
    /// assert_eq!(it.next(), Some(1));
    /// assert_eq!(it.next(), Some(2));
    /// assert_eq!(it.next(), Some(3));
    /// assert_eq!(it.next(), None);
    /// ```
    fn into_iter(self) -> IntoIter<T> { self.tree.into_iter() }
}

impl<T, C> PartialEq for Set<T, C> where T: PartialEq, C: Compare<T> {
    fn eq(&self, other: &Self) -> bool { self.tree == other.tree }
}

impl<T, C> Eq for Set<T, C> where T: Eq, C: Compare<T> {}

impl<T, C> PartialOrd for Set<T, C> where T: PartialOrd, C: Compare<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { self.tree.partial_cmp(&other.tree) }
}

impl<T, C> Ord for Set<T, C> where T: Ord, C: Compare<T> {
    fn cmp(&self, other: &Self) -> Ordering { Ord::cmp(&self.tree, &other.tree) }
}

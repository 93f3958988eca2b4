//! An ordered multiset based on a binary search tree.

use compare::{Compare, Natural};
use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::hash::{self, Hash};
use std::iter;

use crate::policy::Multi;
use crate::tree::{Cursor, Tree};
use crate::Error;

pub use crate::tree::{IntoIter, Iter};

/// An ordered multiset based on a binary search tree.
///
/// Equal items coexist. An inserted item is placed after every equal item already present, so
/// iteration visits equal items in the order they were inserted.
///
/// # Examples
///
/// ```
/// let mut bag = bstree::MultiSet::new();
///
/// bag.insert((1, 'a'));
/// bag.insert((0, 'b'));
/// bag.insert((1, 'c'));
///
/// assert_eq!(bag.len(), 3);
/// assert_eq!(bag.count(&(1, 'a')), 1);
/// ```
pub struct MultiSet<T, C = Natural<T>> where C: Compare<T> {
    tree: Tree<T, C, Multi>,
}

impl<T> MultiSet<T> where T: Ord {
    /// Creates an empty multiset ordered according to the natural order of its items.
    pub fn new() -> Self { MultiSet { tree: Tree::new() } }
}

impl<T, C> MultiSet<T, C> where C: Compare<T> {
    /// Creates an empty multiset ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::MultiSet;
    /// use bstree::project::{First, Projected};
    /// use compare::natural;
    ///
    /// let mut bag = MultiSet::with_cmp(Projected::new(First, natural()));
    ///
    /// bag.insert((2, "x"));
    /// bag.insert((1, "y"));
    /// bag.insert((2, "z"));
    ///
    /// assert_eq!(bag.iter().collect::<Vec<_>>(), [&(1, "y"), &(2, "x"), &(2, "z")]);
    /// ```
    pub fn with_cmp(cmp: C) -> Self { MultiSet { tree: Tree::with_cmp(cmp) } }

    /// Checks if the multiset is empty.
    pub fn is_empty(&self) -> bool { self.tree.is_empty() }

    /// Returns the number of items in the multiset, duplicates included.
    pub fn len(&self) -> usize { self.tree.len() }

    /// Returns the theoretical maximum number of items the multiset could hold.
    pub fn max_size(&self) -> usize { self.tree.max_size() }

    /// Returns a reference to the multiset's comparator.
    pub fn cmp(&self) -> &C { self.tree.cmp() }

    /// Removes all items from the multiset.
    pub fn clear(&mut self) { self.tree.clear(); }

    /// Inserts an item into the multiset and returns a cursor at it.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut bag = bstree::MultiSet::new();
    ///
    /// let first = bag.insert(7);
    /// assert_eq!(bag.item(&first), Ok(Some(&7)));
    ///
    /// let second = bag.insert(7);
    /// assert_eq!(bag.item(&second), Ok(Some(&7)));
    /// assert!(bag.item(&first).is_err());
    /// assert_eq!(bag.len(), 2);
    /// ```
    pub fn insert(&mut self, item: T) -> Cursor { self.tree.insert(item).0 }

    /// Inserts an item into the multiset, failing instead of aborting if node storage cannot grow.
    ///
    /// # Errors
    ///
    /// Returns `Error::Alloc` or `Error::CapacityExceeded`, leaving the multiset unchanged.
    pub fn try_insert(&mut self, item: T) -> Result<Cursor, Error> {
        Ok(self.tree.try_insert(item)?.0)
    }

    /// Inserts each item in turn, returning a cursor for every insertion.
    ///
    /// Only the last cursor is still valid when this returns.
    pub fn insert_many<I>(&mut self, items: I) -> Vec<Cursor> where I: IntoIterator<Item = T> {
        self.tree.insert_many(items).into_iter().map(|(cursor, _)| cursor).collect()
    }

    /// Removes the item at the cursor and returns it.
    ///
    /// Erasing an end cursor does nothing and returns `Ok(None)`, even if the cursor is stale or
    /// came from another container.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCursor` if a cursor at an item is not valid for the multiset.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut bag: bstree::MultiSet<_> = [3, 1, 3, 2, 3].into_iter().collect();
    ///
    /// let cursor = bag.lower_bound(&3);
    /// assert_eq!(bag.erase(cursor), Ok(Some(3)));
    /// assert_eq!(bag.count(&3), 2);
    /// ```
    pub fn erase(&mut self, cursor: Cursor) -> Result<Option<T>, Error> { self.tree.erase(cursor) }

    /// Removes one item equal to the given one and returns it, or `None` if there is none.
    pub fn remove<Q: ?Sized>(&mut self, item: &Q) -> Option<T> where C: Compare<Q, T> {
        self.tree.remove(item)
    }

    /// Removes every item equal to the given one, returning how many were removed.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut bag: bstree::MultiSet<_> = [2, 1, 2, 2].into_iter().collect();
    ///
    /// assert_eq!(bag.remove_all(&2), 3);
    /// assert_eq!(bag.iter().collect::<Vec<_>>(), [&1]);
    /// ```
    pub fn remove_all<Q: ?Sized>(&mut self, item: &Q) -> usize where C: Compare<Q, T> {
        let mut removed = 0;
        while self.tree.remove(item).is_some() { removed += 1; }
        removed
    }

    /// Checks if the multiset contains an item equal to the given one.
    pub fn contains<Q: ?Sized>(&self, item: &Q) -> bool where C: Compare<Q, T> {
        self.tree.contains(item)
    }

    /// Returns a reference to the first item equal to the given one, if any.
    pub fn get<Q: ?Sized>(&self, item: &Q) -> Option<&T> where C: Compare<Q, T> {
        self.tree.get(item)
    }

    /// Returns a cursor at the first item equal to the given one, or past the end if there is
    /// none.
    pub fn find<Q: ?Sized>(&self, item: &Q) -> Cursor where C: Compare<Q, T> {
        self.tree.find(item)
    }

    /// Returns the number of items equal to the given one.
    pub fn count<Q: ?Sized>(&self, item: &Q) -> usize where C: Compare<Q, T> {
        self.tree.count(item)
    }

    /// Returns a cursor at the first item not less than the given one, or past the end if there
    /// is none.
    pub fn lower_bound<Q: ?Sized>(&self, item: &Q) -> Cursor where C: Compare<Q, T> {
        self.tree.lower_bound(item)
    }

    /// Returns a cursor at the first item greater than the given one, or past the end if there is
    /// none.
    pub fn upper_bound<Q: ?Sized>(&self, item: &Q) -> Cursor where C: Compare<Q, T> {
        self.tree.upper_bound(item)
    }

    /// Returns the cursors delimiting the items equal to the given one.
    ///
    /// # Examples
    ///
    /// ```
    /// let bag: bstree::MultiSet<_> = [5, 3, 5, 8, 5].into_iter().collect();
    ///
    /// let (mut cursor, end) = bag.equal_range(&5);
    /// let mut fives = 0;
    ///
    /// while cursor != end {
    ///     assert_eq!(bag.item(&cursor), Ok(Some(&5)));
    ///     bag.advance(&mut cursor).unwrap();
    ///     fives += 1;
    /// }
    ///
    /// assert_eq!(fives, 3);
    /// ```
    pub fn equal_range<Q: ?Sized>(&self, item: &Q) -> (Cursor, Cursor) where C: Compare<Q, T> {
        self.tree.equal_range(item)
    }

    /// Returns a reference to the multiset's minimum item, or `None` if the multiset is empty.
    pub fn first(&self) -> Option<&T> { self.tree.first() }

    /// Returns a reference to the multiset's maximum item, or `None` if the multiset is empty.
    pub fn last(&self) -> Option<&T> { self.tree.last() }

    /// Moves every item of `other` into the multiset, leaving `other` empty.
    ///
    /// Nothing is dropped: items of `other` follow the equal items already present.
    pub fn merge(&mut self, other: &mut Self) { self.tree.merge(&mut other.tree); }

    /// Exchanges the contents of two multisets.
    pub fn swap(&mut self, other: &mut Self) { self.tree.swap(&mut other.tree); }

    /// Returns a copy of the multiset, failing instead of aborting if node storage cannot be
    /// allocated.
    ///
    /// # Errors
    ///
    /// Returns `Error::Alloc` or `Error::CapacityExceeded`.
    pub fn try_clone(&self) -> Result<Self, Error> where T: Clone, C: Clone {
        Ok(MultiSet { tree: self.tree.try_clone()? })
    }

    /// Returns a cursor at the multiset's minimum item, or past the end if it is empty.
    pub fn begin(&self) -> Cursor { self.tree.begin() }

    /// Returns a cursor past the end of the multiset.
    pub fn end(&self) -> Cursor { self.tree.end() }

    /// Returns the item at the cursor, or `None` if the cursor is past the end.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCursor` if the cursor is not valid for the multiset.
    pub fn item(&self, cursor: &Cursor) -> Result<Option<&T>, Error> { self.tree.item(cursor) }

    /// Moves the cursor to the next item in order.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCursor` if the cursor is not valid for the multiset.
    pub fn advance(&self, cursor: &mut Cursor) -> Result<(), Error> { self.tree.advance(cursor) }

    /// Returns an iterator over the multiset.
    ///
    /// The iterator yields the items in ascending order according to the multiset's comparator,
    /// equal items in insertion order.
    pub fn iter(&self) -> Iter<'_, T> { self.tree.iter() }
}

impl<T, C> Clone for MultiSet<T, C> where T: Clone, C: Compare<T> + Clone {
    fn clone(&self) -> Self { MultiSet { tree: self.tree.clone() } }
}

impl<T, C> Debug for MultiSet<T, C> where T: Debug, C: Compare<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { self.tree.fmt(f) }
}

impl<T, C> Default for MultiSet<T, C> where C: Compare<T> + Default {
    fn default() -> Self { MultiSet { tree: Tree::default() } }
}

impl<T, C> Extend<T> for MultiSet<T, C> where C: Compare<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, it: I) { self.tree.extend(it); }
}

impl<T, C> iter::FromIterator<T> for MultiSet<T, C> where C: Compare<T> + Default {
    fn from_iter<I: IntoIterator<Item = T>>(it: I) -> Self {
        MultiSet { tree: it.into_iter().collect() }
    }
}

impl<T, C> Hash for MultiSet<T, C> where T: Hash, C: Compare<T> {
    fn hash<H: hash::Hasher>(&self, h: &mut H) { self.tree.hash(h); }
}

impl<'a, T, C> IntoIterator for &'a MultiSet<T, C> where C: Compare<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<T, C> IntoIterator for MultiSet<T, C> where C: Compare<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> { self.tree.into_iter() }
}

impl<T, C> PartialEq for MultiSet<T, C> where T: PartialEq, C: Compare<T> {
    fn eq(&self, other: &Self) -> bool { self.tree == other.tree }
}

impl<T, C> Eq for MultiSet<T, C> where T: Eq, C: Compare<T> {}

impl<T, C> PartialOrd for MultiSet<T, C> where T: PartialOrd, C: Compare<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { self.tree.partial_cmp(&other.tree) }
}

impl<T, C> Ord for MultiSet<T, C> where T: Ord, C: Compare<T> {
    fn cmp(&self, other: &Self) -> Ordering { Ord::cmp(&self.tree, &other.tree) }
}

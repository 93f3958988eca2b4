//! An ordered map based on a binary search tree.

use compare::{Compare, Natural};
use std::cmp::Ordering::{self, *};
use std::fmt::{self, Debug};
use std::hash::{self, Hash};
use std::iter::{self, FusedIterator};
use std::mem;
use std::ops;

use crate::node::{Handle, Slot};
use crate::policy::Unique;
use crate::project::{First, Projected};
use crate::tree::{self, Cursor, Search, Tree};
use crate::Error;

type Pairs<K, V, C> = Tree<(K, V), Projected<First, C>, Unique>;

/// An ordered map based on a binary search tree.
///
/// The map stores `(key, value)` pairs and orders them by key alone. The tree is not rebalanced.
///
/// The behavior of this map is undefined if a key's ordering relative to any other key changes
/// while the key is in the map. This is normally only possible through `Cell`, `RefCell`, or
/// unsafe code.
pub struct Map<K, V, C = Natural<K>> where C: Compare<K> {
    tree: Pairs<K, V, C>,
}

impl<K, V> Map<K, V> where K: Ord {
    /// Creates an empty map ordered according to the natural order of its keys.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { Map::with_cmp(compare::natural()) }
}

impl<K, V, C> Map<K, V, C> where C: Compare<K> {
    /// Creates an empty map ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut map = bstree::Map::with_cmp(natural().rev());
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn with_cmp(cmp: C) -> Self { Map { tree: Tree::with_cmp(Projected::new(First, cmp)) } }

    /// Checks if the map is empty.
    pub fn is_empty(&self) -> bool { self.tree.is_empty() }

    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize { self.tree.len() }

    /// Returns the theoretical maximum number of entries the map could hold.
    pub fn max_size(&self) -> usize { self.tree.max_size() }

    /// Returns a reference to the map's key comparator.
    pub fn cmp(&self) -> &C { self.tree.cmp().inner() }

    /// Removes all entries from the map.
    pub fn clear(&mut self) { self.tree.clear(); }

    fn search<Q: ?Sized>(&self, key: &Q) -> Search where C: Compare<Q, K> {
        let cmp = self.cmp();
        self.tree.search_by(|item| cmp.compare(key, &item.0), false)
    }

    /// Inserts an entry into the map unless its key is already present.
    ///
    /// Returns a cursor at the inserted entry and `true`, or a cursor at the existing entry and
    /// `false`. An existing value is never overwritten; use `insert_or_assign` for that.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::Map::new();
    ///
    /// assert!(map.insert(1, "a").1);
    /// assert!(!map.insert(1, "b").1);
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> (Cursor, bool) { self.tree.insert((key, value)) }

    /// Inserts an entry into the map, replacing the value if the key is already present.
    ///
    /// Returns a cursor at the entry and whether a new entry was created. Replacing a value is
    /// not a structural change: the map's cursors stay valid.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::Map::new();
    ///
    /// assert!(map.insert_or_assign(1, "a").1);
    /// let (cursor, inserted) = map.insert_or_assign(1, "b");
    ///
    /// assert!(!inserted);
    /// assert_eq!(map.key_value(&cursor), Ok(Some((&1, &"b"))));
    /// ```
    pub fn insert_or_assign(&mut self, key: K, value: V) -> (Cursor, bool) {
        match self.search(&key) {
            Search::Found { node, pending, .. } => {
                self.tree.item_at_mut(node).1 = value;
                (self.tree.cursor_at(node, pending), false)
            }
            Search::Vacant { slot, pending } => {
                let node = self.tree.attach(slot, (key, value));
                (self.tree.cursor_at(node, pending), true)
            }
        }
    }

    /// Inserts an entry like `insert`, failing instead of aborting if node storage cannot grow.
    ///
    /// # Errors
    ///
    /// Returns `Error::Alloc` or `Error::CapacityExceeded`, leaving the map unchanged.
    pub fn try_insert(&mut self, key: K, value: V) -> Result<(Cursor, bool), Error> {
        self.tree.try_insert((key, value))
    }

    /// Inserts each entry in turn like `insert`, returning the result of every insertion.
    pub fn insert_many<I>(&mut self, entries: I) -> Vec<(Cursor, bool)>
        where I: IntoIterator<Item = (K, V)> {

        self.tree.insert_many(entries)
    }

    /// Removes and returns the entry whose key is equal to the given key, returning `None` if the
    /// map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.remove(&1), Some((1, "a")));
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.get(&1), None);
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<(K, V)> where C: Compare<Q, K> {
        match self.search(key) {
            Search::Found { node, slot, .. } => Some(self.tree.unlink(node, slot)),
            Search::Vacant { .. } => None,
        }
    }

    /// Removes the entry at the cursor and returns it.
    ///
    /// Erasing an end cursor does nothing and returns `Ok(None)`, even if the cursor is stale or
    /// came from another container.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCursor` if a cursor at an item is not valid for the map.
    pub fn erase(&mut self, cursor: Cursor) -> Result<Option<(K, V)>, Error> {
        self.tree.erase(cursor)
    }

    /// Returns the map's entry corresponding to the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut counts = bstree::Map::new();
    ///
    /// for s in ["a", "b", "a", "c", "a", "b"] {
    ///     *counts.entry(s).or_insert(0) += 1;
    /// }
    ///
    /// assert_eq!(counts[&"a"], 3);
    /// assert_eq!(counts[&"b"], 2);
    /// assert_eq!(counts[&"c"], 1);
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V, C> {
        match self.search(&key) {
            Search::Found { node, slot, .. } => {
                Entry::Occupied(OccupiedEntry { tree: &mut self.tree, node, slot })
            }
            Search::Vacant { slot, .. } => {
                Entry::Vacant(VacantEntry { tree: &mut self.tree, slot, key })
            }
        }
    }

    /// Returns a mutable reference to the value associated with the given key, inserting
    /// `V::default()` first if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::Map::new();
    ///
    /// *map.get_or_insert_default("x") += 2;
    /// *map.get_or_insert_default("x") += 3;
    ///
    /// assert_eq!(map.at(&"x"), Ok(&5));
    /// ```
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V where V: Default {
        self.entry(key).or_default()
    }

    /// Checks if the map contains the given key.
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool where C: Compare<Q, K> {
        self.get(key).is_some()
    }

    /// Returns a reference to the value associated with the given key, or `None` if the map does
    /// not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::Map::new();
    /// assert_eq!(map.get(&1), None);
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// ```
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V> where C: Compare<Q, K> {
        self.get_key_value(key).map(|e| e.1)
    }

    /// Returns references to the entry whose key is equal to the given key, or `None` if the map
    /// does not contain the key.
    pub fn get_key_value<Q: ?Sized>(&self, key: &Q) -> Option<(&K, &V)> where C: Compare<Q, K> {
        match self.search(key) {
            Search::Found { node, .. } => {
                let (k, v) = self.tree.item_at(node);
                Some((k, v))
            }
            Search::Vacant { .. } => None,
        }
    }

    /// Returns a mutable reference to the value associated with the given key, or `None` if the
    /// map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::Map::new();
    /// map.insert(1, "a");
    ///
    /// *map.get_mut(&1).unwrap() = "b";
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V> where C: Compare<Q, K> {
        match self.search(key) {
            Search::Found { node, .. } => Some(&mut self.tree.item_at_mut(node).1),
            Search::Vacant { .. } => None,
        }
    }

    /// Returns a reference to the value associated with the given key.
    ///
    /// Unlike indexing with `get_or_insert_default`, a missing key is never inserted.
    ///
    /// # Errors
    ///
    /// Returns `Error::KeyNotFound` if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Error, Map};
    ///
    /// let mut map = Map::new();
    /// map.insert(1, "a");
    ///
    /// assert_eq!(map.at(&1), Ok(&"a"));
    /// assert_eq!(map.at(&2), Err(Error::KeyNotFound));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn at<Q: ?Sized>(&self, key: &Q) -> Result<&V, Error> where C: Compare<Q, K> {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Returns a mutable reference to the value associated with the given key.
    ///
    /// # Errors
    ///
    /// Returns `Error::KeyNotFound` if the map does not contain the key.
    pub fn at_mut<Q: ?Sized>(&mut self, key: &Q) -> Result<&mut V, Error> where C: Compare<Q, K> {
        self.get_mut(key).ok_or(Error::KeyNotFound)
    }

    /// Returns a cursor at the entry with the given key, or past the end if the map does not
    /// contain the key.
    pub fn find<Q: ?Sized>(&self, key: &Q) -> Cursor where C: Compare<Q, K> {
        match self.search(key) {
            Search::Found { node, pending, .. } => self.tree.cursor_at(node, pending),
            Search::Vacant { .. } => self.tree.end(),
        }
    }

    /// Returns a cursor at the first entry whose key is not less than the given key, or past the
    /// end if there is none.
    pub fn lower_bound<Q: ?Sized>(&self, key: &Q) -> Cursor where C: Compare<Q, K> {
        let cmp = self.cmp();
        self.tree.lower_bound_by(|item| cmp.compare(key, &item.0))
    }

    /// Returns a cursor at the first entry whose key is greater than the given key, or past the
    /// end if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// let map: bstree::Map<_, _> = [(10, 'a'), (20, 'b'), (30, 'c')].into_iter().collect();
    ///
    /// let cursor = map.upper_bound(&20);
    /// assert_eq!(map.key_value(&cursor), Ok(Some((&30, &'c'))));
    ///
    /// let cursor = map.lower_bound(&15);
    /// assert_eq!(map.key_value(&cursor), Ok(Some((&20, &'b'))));
    /// ```
    pub fn upper_bound<Q: ?Sized>(&self, key: &Q) -> Cursor where C: Compare<Q, K> {
        let cmp = self.cmp();
        self.tree.upper_bound_by(|item| cmp.compare(key, &item.0))
    }

    /// Returns references to the entry with the minimum key, or `None` if the map is empty.
    pub fn first(&self) -> Option<(&K, &V)> { self.tree.first().map(|(k, v)| (k, v)) }

    /// Returns references to the entry with the maximum key, or `None` if the map is empty.
    pub fn last(&self) -> Option<(&K, &V)> { self.tree.last().map(|(k, v)| (k, v)) }

    /// Moves every entry of `other` into the map, leaving `other` empty.
    ///
    /// Entries whose key the map already contains are dropped; the map's values win.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut a: bstree::Map<_, _> = [(1, "a"), (2, "b")].into_iter().collect();
    /// let mut b: bstree::Map<_, _> = [(2, "x"), (3, "c")].into_iter().collect();
    ///
    /// a.merge(&mut b);
    ///
    /// assert_eq!(a.values().copied().collect::<Vec<_>>(), ["a", "b", "c"]);
    /// assert!(b.is_empty());
    /// ```
    pub fn merge(&mut self, other: &mut Self) { self.tree.merge(&mut other.tree); }

    /// Exchanges the contents of two maps.
    pub fn swap(&mut self, other: &mut Self) { self.tree.swap(&mut other.tree); }

    /// Returns a copy of the map, failing instead of aborting if node storage cannot be
    /// allocated.
    ///
    /// # Errors
    ///
    /// Returns `Error::Alloc` or `Error::CapacityExceeded`.
    pub fn try_clone(&self) -> Result<Self, Error> where K: Clone, V: Clone, C: Clone {
        Ok(Map { tree: self.tree.try_clone()? })
    }

    /// Returns a cursor at the entry with the minimum key, or past the end if the map is empty.
    pub fn begin(&self) -> Cursor { self.tree.begin() }

    /// Returns a cursor past the end of the map.
    pub fn end(&self) -> Cursor { self.tree.end() }

    /// Returns references to the entry at the cursor, or `None` if the cursor is past the end.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCursor` if the cursor is not valid for the map.
    pub fn key_value(&self, cursor: &Cursor) -> Result<Option<(&K, &V)>, Error> {
        Ok(self.tree.item(cursor)?.map(|(k, v)| (k, v)))
    }

    /// Returns a mutable reference to the value at the cursor, or `None` if the cursor is past the
    /// end.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCursor` if the cursor is not valid for the map.
    pub fn value_mut(&mut self, cursor: &Cursor) -> Result<Option<&mut V>, Error> {
        self.tree.check(cursor)?;

        Ok(match cursor.handle() {
            None => None,
            Some(node) => Some(&mut self.tree.item_at_mut(node).1),
        })
    }

    /// Moves the cursor to the next entry in order.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCursor` if the cursor is not valid for the map.
    pub fn advance(&self, cursor: &mut Cursor) -> Result<(), Error> { self.tree.advance(cursor) }

    /// Returns an iterator over the map's entries with immutable references to the values.
    ///
    /// The iterator yields the entries in ascending order according to the map's comparator.
    pub fn iter(&self) -> Iter<'_, K, V> { Iter(self.tree.iter()) }

    /// Returns an iterator over the map's entries with mutable references to the values.
    ///
    /// The iterator yields the entries in ascending order according to the map's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map: bstree::Map<_, _> = [(2, 20), (1, 10)].into_iter().collect();
    ///
    /// for (key, value) in map.iter_mut() {
    ///     *value += key;
    /// }
    ///
    /// assert_eq!(map.values().copied().collect::<Vec<_>>(), [11, 22]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> { IterMut(self.tree.iter_mut()) }

    /// Returns an iterator over the map's keys in ascending order.
    pub fn keys(&self) -> Keys<'_, K, V> { Keys(self.iter()) }

    /// Returns an iterator over the map's values in ascending order of their keys.
    pub fn values(&self) -> Values<'_, K, V> { Values(self.iter()) }

    /// Returns an iterator over mutable references to the map's values in ascending order of their
    /// keys.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> { ValuesMut(self.iter_mut()) }
}

impl<K, V, C> Clone for Map<K, V, C> where K: Clone, V: Clone, C: Compare<K> + Clone {
    fn clone(&self) -> Self { Map { tree: self.tree.clone() } }
}

impl<K, V, C> Debug for Map<K, V, C> where K: Debug, V: Debug, C: Compare<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C> Default for Map<K, V, C> where C: Compare<K> + Default {
    fn default() -> Self { Map::with_cmp(C::default()) }
}

impl<K, V, C> Extend<(K, V)> for Map<K, V, C> where C: Compare<K> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, it: I) { self.tree.extend(it); }
}

impl<K, V, C> iter::FromIterator<(K, V)> for Map<K, V, C> where C: Compare<K> + Default {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(it: I) -> Self {
        let mut map = Map::default();
        map.extend(it);
        map
    }
}

impl<K, V, C> Hash for Map<K, V, C> where K: Hash, V: Hash, C: Compare<K> {
    fn hash<H: hash::Hasher>(&self, h: &mut H) { self.tree.hash(h); }
}

impl<'a, K, V, C, Q: ?Sized> ops::Index<&'a Q> for Map<K, V, C>
    where C: Compare<K> + Compare<Q, K> {

    type Output = V;
    fn index(&self, key: &Q) -> &V { self.get(key).expect("key not found") }
}

impl<'a, K, V, C> IntoIterator for &'a Map<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Iter<'a, K, V> { self.iter() }
}

impl<'a, K, V, C> IntoIterator for &'a mut Map<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;
    fn into_iter(self) -> IterMut<'a, K, V> { self.iter_mut() }
}

impl<K, V, C> IntoIterator for Map<K, V, C> where C: Compare<K> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;
    fn into_iter(self) -> IntoIter<K, V> { IntoIter(self.tree.into_iter()) }
}

impl<K, V, C> PartialEq for Map<K, V, C> where V: PartialEq, C: Compare<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(l, r)| {
            self.cmp().compares_eq(l.0, r.0) && l.1 == r.1
        })
    }
}

impl<K, V, C> Eq for Map<K, V, C> where V: Eq, C: Compare<K> {}

impl<K, V, C> PartialOrd for Map<K, V, C> where V: PartialOrd, C: Compare<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let mut l = self.iter();
        let mut r = other.iter();

        loop {
            match (l.next(), r.next()) {
                (None, None) => return Some(Equal),
                (None, Some(_)) => return Some(Less),
                (Some(_), None) => return Some(Greater),
                (Some(l), Some(r)) => match self.cmp().compare(l.0, r.0) {
                    Equal => match l.1.partial_cmp(r.1) {
                        Some(Equal) => {}
                        non_eq => return non_eq,
                    },
                    non_eq => return Some(non_eq),
                },
            }
        }
    }
}

impl<K, V, C> Ord for Map<K, V, C> where V: Ord, C: Compare<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        let mut l = self.iter();
        let mut r = other.iter();

        loop {
            match (l.next(), r.next()) {
                (None, None) => return Equal,
                (None, Some(_)) => return Less,
                (Some(_), None) => return Greater,
                (Some(l), Some(r)) => match self.cmp().compare(l.0, r.0) {
                    Equal => match l.1.cmp(r.1) {
                        Equal => {}
                        non_eq => return non_eq,
                    },
                    non_eq => return non_eq,
                },
            }
        }
    }
}

/// An iterator that consumes the map.
///
/// The iterator yields the entries in ascending order according to the map's comparator.
///
/// # Examples
///
/// Acquire through the `IntoIterator` trait:
///
/// ```
/// let mut map = bstree::Map::new();
///
/// map.insert(2, "b");
/// map.insert(1, "a");
/// map.insert(3, "c");
///
/// for (key, value) in map {
///     println!("{:?}: {:?}", key, value);
/// }
/// ```
#[derive(Clone)]
pub struct IntoIter<K, V>(tree::IntoIter<(K, V)>);

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);
    fn next(&mut self) -> Option<(K, V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

/// An iterator over the map's entries with immutable references to the values.
///
/// The iterator yields the entries in ascending order according to the map's comparator.
///
/// # Examples
///
/// Acquire through [`Map::iter`](struct.Map.html#method.iter) or the `IntoIterator` trait:
///
/// ```
/// let mut map = bstree::Map::new();
///
/// map.insert(2, "b");
/// map.insert(1, "a");
/// map.insert(3, "c");
///
/// for (key, value) in &map {
///     println!("{:?}: {:?}", key, value);
/// }
/// ```
pub struct Iter<'a, K: 'a, V: 'a>(tree::Iter<'a, (K, V)>);

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Iter<'a, K, V> { Iter(self.0.clone()) }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<(&'a K, &'a V)> { self.0.next().map(|(k, v)| (k, v)) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

/// An iterator over the map's entries with mutable references to the values.
///
/// The iterator yields the entries in ascending order according to the map's comparator.
pub struct IterMut<'a, K: 'a, V: 'a>(tree::IterMut<'a, (K, V)>);

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<(&'a K, &'a mut V)> {
        self.0.next().map(|(k, v)| (&*k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> ExactSizeIterator for IterMut<'a, K, V> {}

impl<'a, K, V> FusedIterator for IterMut<'a, K, V> {}

/// An iterator over the map's keys.
pub struct Keys<'a, K: 'a, V: 'a>(Iter<'a, K, V>);

impl<'a, K, V> Clone for Keys<'a, K, V> {
    fn clone(&self) -> Keys<'a, K, V> { Keys(self.0.clone()) }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;
    fn next(&mut self) -> Option<&'a K> { self.0.next().map(|e| e.0) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> ExactSizeIterator for Keys<'a, K, V> {}

/// An iterator over the map's values.
pub struct Values<'a, K: 'a, V: 'a>(Iter<'a, K, V>);

impl<'a, K, V> Clone for Values<'a, K, V> {
    fn clone(&self) -> Values<'a, K, V> { Values(self.0.clone()) }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;
    fn next(&mut self) -> Option<&'a V> { self.0.next().map(|e| e.1) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> ExactSizeIterator for Values<'a, K, V> {}

/// An iterator over mutable references to the map's values.
pub struct ValuesMut<'a, K: 'a, V: 'a>(IterMut<'a, K, V>);

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;
    fn next(&mut self) -> Option<&'a mut V> { self.0.next().map(|e| e.1) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> ExactSizeIterator for ValuesMut<'a, K, V> {}

/// An entry in the map.
///
/// See [`Map::entry`](struct.Map.html#method.entry) for an example.
pub enum Entry<'a, K: 'a, V: 'a, C: 'a = Natural<K>> {
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, K, V, C>),
    /// A vacant entry.
    Vacant(VacantEntry<'a, K, V, C>),
}

impl<'a, K, V, C> Entry<'a, K, V, C> where C: Compare<K> {
    /// Returns a reference to the entry's key.
    pub fn key(&self) -> &K {
        match *self {
            Entry::Occupied(ref e) => e.key(),
            Entry::Vacant(ref e) => e.key(),
        }
    }

    /// Returns the entry's value, inserting the given default if the entry is vacant.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => e.insert(default),
        }
    }

    /// Returns the entry's value, inserting the given function's result if the entry is vacant.
    pub fn or_insert_with<F>(self, default: F) -> &'a mut V where F: FnOnce() -> V {
        match self {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => e.insert(default()),
        }
    }

    /// Returns the entry's value, inserting `V::default()` if the entry is vacant.
    pub fn or_default(self) -> &'a mut V where V: Default { self.or_insert_with(V::default) }
}

/// An occupied entry.
pub struct OccupiedEntry<'a, K: 'a, V: 'a, C: 'a = Natural<K>> {
    tree: &'a mut Pairs<K, V, C>,
    node: Handle,
    slot: Slot,
}

impl<'a, K, V, C> OccupiedEntry<'a, K, V, C> where C: Compare<K> {
    /// Returns a reference to the entry's key.
    pub fn key(&self) -> &K { &self.tree.item_at(self.node).0 }

    /// Returns a reference to the entry's value.
    pub fn get(&self) -> &V { &self.tree.item_at(self.node).1 }

    /// Returns a mutable reference to the entry's value.
    pub fn get_mut(&mut self) -> &mut V { &mut self.tree.item_at_mut(self.node).1 }

    /// Returns a mutable reference to the entry's value with the same lifetime as the map.
    pub fn into_mut(self) -> &'a mut V {
        let tree = self.tree;
        &mut tree.item_at_mut(self.node).1
    }

    /// Replaces the entry's value with the given one, returning the old one.
    pub fn insert(&mut self, value: V) -> V { mem::replace(self.get_mut(), value) }

    /// Removes the entry from the map and returns its key and value.
    pub fn remove(self) -> (K, V) { self.tree.unlink(self.node, self.slot) }
}

/// A vacant entry.
pub struct VacantEntry<'a, K: 'a, V: 'a, C: 'a = Natural<K>> {
    tree: &'a mut Pairs<K, V, C>,
    slot: Slot,
    key: K,
}

impl<'a, K, V, C> VacantEntry<'a, K, V, C> where C: Compare<K> {
    /// Returns a reference to the entry's key.
    pub fn key(&self) -> &K { &self.key }

    /// Returns the entry's key, leaving the map unchanged.
    pub fn into_key(self) -> K { self.key }

    /// Inserts the entry into the map with the given value, returning a mutable reference to the
    /// value.
    pub fn insert(self, value: V) -> &'a mut V {
        let tree = self.tree;
        let node = tree.attach(self.slot, (self.key, value));
        &mut tree.item_at_mut(node).1
    }
}

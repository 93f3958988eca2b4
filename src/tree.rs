//! The binary search tree engine shared by every container in this crate.
//!
//! A [`Tree`] is deliberately left unbalanced: items keep the position their insertion order
//! gives them, so sorted insertions produce a tree as deep as it is long. Every walk over the
//! tree (iteration, copying, counting, clearing) uses an explicit stack, so depth costs time and
//! heap memory but never call stack.

use compare::{Compare, Natural};
use std::cmp::Ordering::{self, *};
use std::fmt::{self, Debug};
use std::hash::{self, Hash};
use std::iter;
use std::marker::PhantomData;
use std::mem;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use crate::node::{Arena, Handle, Link, Node, Pending, Slot, Traversal};
use crate::policy::{Policy, Unique};
use crate::Error;

pub use crate::node::{Cursor, IntoIter, Iter, IterMut};

// Epochs are unique across all trees, so a cursor matches exactly one tree in exactly one state.
static EPOCHS: AtomicU64 = AtomicU64::new(1);

fn next_epoch() -> u64 { EPOCHS.fetch_add(1, AtomicOrdering::Relaxed) }

/// The outcome of a comparator-guided descent.
pub(crate) enum Search {
    /// A node comparing equal to the probe, the slot holding it, and the cursor stack leading to
    /// it.
    Found { node: Handle, slot: Slot, pending: Pending },
    /// The empty slot the probe would be inserted into, and the cursor stack leading to it.
    Vacant { slot: Slot, pending: Pending },
}

/// An ordered collection of items based on an unbalanced binary search tree.
///
/// The tree orders its items with the comparator `C`. Items that compare less than a node live in
/// its left subtree; all others live in its right subtree. The policy `D` decides whether equal
/// items may coexist: see [`Unique`](crate::policy::Unique) and [`Multi`](crate::policy::Multi).
///
/// The behavior of this tree is undefined if an item's ordering relative to any other item changes
/// while the item is in the tree. This is normally only possible through `Cell`, `RefCell`, or
/// unsafe code.
pub struct Tree<T, C = Natural<T>, D = Unique> {
    nodes: Arena<Node<T>>,
    root: Link,
    len: usize,
    cmp: C,
    epoch: u64,
    policy: PhantomData<fn() -> D>,
}

impl<T, D> Tree<T, Natural<T>, D> where T: Ord, D: Policy {
    /// Creates an empty tree ordered according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    /// use bstree::policy::Multi;
    ///
    /// let mut tree: Tree<_, _, Multi> = Tree::new();
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&1, &2, &2]);
    /// ```
    pub fn new() -> Self { Tree::with_cmp(compare::natural()) }
}

impl<T, C, D> Tree<T, C, D> where C: Compare<T>, D: Policy {
    /// Creates an empty tree ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    /// use bstree::policy::Unique;
    /// use compare::{Compare, natural};
    ///
    /// let mut tree: Tree<_, _, Unique> = Tree::with_cmp(natural().rev());
    ///
    /// tree.insert(1);
    /// tree.insert(3);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&3, &2, &1]);
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        Tree {
            nodes: Arena::new(),
            root: None,
            len: 0,
            cmp,
            epoch: next_epoch(),
            policy: PhantomData,
        }
    }

    /// Checks if the tree is empty.
    pub fn is_empty(&self) -> bool { self.root.is_none() }

    /// Returns the number of items in the tree.
    pub fn len(&self) -> usize { self.len }

    /// Returns the theoretical maximum number of items the tree could hold.
    ///
    /// The ceiling derives from the node size, the address space and the width of node handles.
    /// It is not enforced: an allocation failure usually comes first.
    pub fn max_size(&self) -> usize { Arena::<Node<T>>::max_len() }

    /// Returns a reference to the tree's comparator.
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Returns a cursor at the tree's minimum item, or past the end if the tree is empty.
    pub fn begin(&self) -> Cursor {
        Cursor::new(Traversal::first(&self.nodes, self.root), self.epoch)
    }

    /// Returns a cursor past the end of the tree.
    pub fn end(&self) -> Cursor { Cursor::new(Traversal::end(), self.epoch) }

    /// Returns the item at the cursor, or `None` if the cursor is past the end.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCursor` if the cursor does not belong to the tree in its current
    /// state.
    pub fn item(&self, cursor: &Cursor) -> Result<Option<&T>, Error> {
        self.check(cursor)?;
        Ok(cursor.handle().map(|node| &self.nodes.get(node).item))
    }

    /// Moves the cursor to the next item in order, or past the end after the last one.
    ///
    /// Advancing a cursor that is already past the end leaves it there.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCursor` if the cursor does not belong to the tree in its current
    /// state.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Error, Tree};
    ///
    /// let mut tree: Tree<_> = Tree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// let mut cursor = tree.begin();
    /// tree.advance(&mut cursor).unwrap();
    /// assert_eq!(tree.item(&cursor), Ok(Some(&2)));
    ///
    /// tree.insert(3);
    /// assert_eq!(tree.advance(&mut cursor), Err(Error::InvalidCursor));
    /// ```
    pub fn advance(&self, cursor: &mut Cursor) -> Result<(), Error> {
        self.check(cursor)?;
        cursor.walk_mut().advance(&self.nodes);
        Ok(())
    }

    pub(crate) fn check(&self, cursor: &Cursor) -> Result<(), Error> {
        if cursor.epoch() == self.epoch {
            Ok(())
        } else {
            tracing::debug!(cursor = cursor.epoch(), tree = self.epoch, "rejected cursor");
            Err(Error::InvalidCursor)
        }
    }

    pub(crate) fn cursor_at(&self, node: Handle, pending: Pending) -> Cursor {
        Cursor::new(Traversal::at(node, pending), self.epoch)
    }

    pub(crate) fn item_at(&self, node: Handle) -> &T { &self.nodes.get(node).item }

    pub(crate) fn item_at_mut(&mut self, node: Handle) -> &mut T {
        &mut self.nodes.get_mut(node).item
    }

    /// Returns an iterator over the tree.
    ///
    /// The iterator yields the items in ascending order according to the tree's comparator.
    pub fn iter(&self) -> Iter<'_, T> { Iter::new(&self.nodes, self.root, self.len) }

    // Callers must not change the ordering of the items.
    pub(crate) fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.nodes, self.root)
    }

    /// Descends from the root, steering with `probe`, which orders the sought item relative to the
    /// item of each node visited.
    ///
    /// When `descend_equal` is `false`, the descent stops at the first node the probe calls equal.
    /// Otherwise equal nodes are passed on the right, as an inserted duplicate would be.
    pub(crate) fn search_by<F>(&self, mut probe: F, descend_equal: bool) -> Search
        where F: FnMut(&T) -> Ordering {

        let mut slot = Slot::Root;
        let mut link = self.root;
        let mut pending = Pending::new();

        while let Some(handle) = link {
            let node = self.nodes.get(handle);

            match probe(&node.item) {
                Equal if !descend_equal => return Search::Found { node: handle, slot, pending },
                Less => {
                    pending.push(handle);
                    slot = Slot::Left(handle);
                    link = node.left;
                }
                Equal | Greater => {
                    slot = Slot::Right(handle);
                    link = node.right;
                }
            }
        }

        Search::Vacant { slot, pending }
    }

    /// Relocates a node by comparator-guided descent, returning the slot holding it and the
    /// cursor stack leading to it.
    fn seek(&self, target: Handle) -> Option<(Slot, Pending)> {
        let item = &self.nodes.try_get(target)?.item;
        let mut slot = Slot::Root;
        let mut link = self.root;
        let mut pending = Pending::new();

        while let Some(handle) = link {
            if handle == target { return Some((slot, pending)); }
            let node = self.nodes.get(handle);

            if self.cmp.compares_lt(item, &node.item) {
                pending.push(handle);
                slot = Slot::Left(handle);
                link = node.left;
            } else {
                slot = Slot::Right(handle);
                link = node.right;
            }
        }

        None
    }

    fn set_link(&mut self, slot: Slot, link: Link) {
        match slot {
            Slot::Root => self.root = link,
            Slot::Left(parent) => self.nodes.get_mut(parent).left = link,
            Slot::Right(parent) => self.nodes.get_mut(parent).right = link,
        }
    }

    /// Creates a leaf holding `item` in an empty slot found by `search_by`.
    pub(crate) fn attach(&mut self, slot: Slot, item: T) -> Handle {
        let node = self.nodes.alloc(Node::new(item));
        self.set_link(slot, Some(node));
        self.len += 1;
        self.epoch = next_epoch();
        node
    }

    /// Removes the node held by `slot` and returns its item.
    pub(crate) fn unlink(&mut self, target: Handle, slot: Slot) -> T {
        let (left, right) = {
            let node = self.nodes.get(target);
            (node.left, node.right)
        };

        let replacement = match (left, right) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(_), Some(right)) => {
                let mut successor_parent = target;
                let mut successor = right;

                while let Some(next) = self.nodes.get(successor).left {
                    successor_parent = successor;
                    successor = next;
                }

                if successor_parent != target {
                    let successor_right = self.nodes.get(successor).right;
                    self.nodes.get_mut(successor_parent).left = successor_right;
                    self.nodes.get_mut(successor).right = Some(right);
                }

                self.nodes.get_mut(successor).left = left;
                Some(successor)
            }
        };

        self.set_link(slot, replacement);
        self.len -= 1;
        self.epoch = next_epoch();
        self.nodes.take(target).item
    }

    /// Inserts an item into the tree.
    ///
    /// Returns a cursor at the inserted item and `true`, or, if the policy forbids duplicates and
    /// an equal item is already present, a cursor at that item and `false`. In the latter case
    /// the tree is unchanged and its cursors stay valid.
    ///
    /// # Panics
    ///
    /// Panics if the tree already holds `max_size()` items.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree: Tree<_> = Tree::new();
    ///
    /// let (cursor, inserted) = tree.insert(5);
    /// assert!(inserted);
    /// assert_eq!(tree.item(&cursor), Ok(Some(&5)));
    ///
    /// let (again, inserted) = tree.insert(5);
    /// assert!(!inserted);
    /// assert_eq!(again, cursor);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, item: T) -> (Cursor, bool) {
        let cmp = &self.cmp;

        match self.search_by(|node| cmp.compare(&item, node), D::duplicates()) {
            Search::Found { node, pending, .. } => (self.cursor_at(node, pending), false),
            Search::Vacant { slot, pending } => {
                let node = self.attach(slot, item);
                (self.cursor_at(node, pending), true)
            }
        }
    }

    /// Inserts an item into the tree, failing instead of aborting if node storage cannot grow.
    ///
    /// # Errors
    ///
    /// Returns `Error::Alloc` if the allocation fails and `Error::CapacityExceeded` if the tree
    /// already holds `max_size()` items. The tree is unchanged in both cases. Neither can happen
    /// when the item is rejected as a duplicate, since nothing is allocated then.
    pub fn try_insert(&mut self, item: T) -> Result<(Cursor, bool), Error> {
        let cmp = &self.cmp;

        match self.search_by(|node| cmp.compare(&item, node), D::duplicates()) {
            Search::Found { node, pending, .. } => Ok((self.cursor_at(node, pending), false)),
            Search::Vacant { slot, pending } => {
                self.nodes.try_reserve(1)?;
                let node = self.attach(slot, item);
                Ok((self.cursor_at(node, pending), true))
            }
        }
    }

    /// Inserts each item in turn, returning the result of every insertion.
    ///
    /// A returned cursor is invalidated by every later insertion that creates a node.
    pub fn insert_many<I>(&mut self, items: I) -> Vec<(Cursor, bool)>
        where I: IntoIterator<Item = T> {

        items.into_iter().map(|item| self.insert(item)).collect()
    }

    /// Removes the item at the cursor and returns it.
    ///
    /// Erasing an end cursor does nothing and returns `Ok(None)`, even if the cursor is stale or
    /// came from another container.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCursor` if a cursor at an item does not belong to the tree in its current
    /// state.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree: Tree<_> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
    ///
    /// let root = tree.find(&50);
    /// assert_eq!(tree.erase(root), Ok(Some(50)));
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&20, &30, &40, &60, &70, &80]);
    ///
    /// let end = tree.end();
    /// assert_eq!(tree.erase(end), Ok(None));
    /// assert_eq!(tree.len(), 6);
    /// ```
    pub fn erase(&mut self, cursor: Cursor) -> Result<Option<T>, Error> {
        let target = match cursor.handle() {
            None => return Ok(None),
            Some(target) => target,
        };

        self.check(&cursor)?;
        let (slot, _) = self.seek(target).ok_or(Error::InvalidCursor)?;
        Ok(Some(self.unlink(target, slot)))
    }

    /// Removes the first item equal to the given key and returns it, or `None` if there is no
    /// such item.
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<T> where C: Compare<Q, T> {
        let cmp = &self.cmp;

        match self.search_by(|item| cmp.compare(key, item), false) {
            Search::Found { node, slot, .. } => Some(self.unlink(node, slot)),
            Search::Vacant { .. } => None,
        }
    }

    /// Returns a cursor at the first item equal to the given key, or past the end if there is no
    /// such item.
    pub fn find<Q: ?Sized>(&self, key: &Q) -> Cursor where C: Compare<Q, T> {
        match self.search_by(|item| self.cmp.compare(key, item), false) {
            Search::Found { node, pending, .. } => self.cursor_at(node, pending),
            Search::Vacant { .. } => self.end(),
        }
    }

    /// Returns a reference to the first item equal to the given key, or `None` if there is no such
    /// item.
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&T> where C: Compare<Q, T> {
        match self.search_by(|item| self.cmp.compare(key, item), false) {
            Search::Found { node, .. } => Some(self.item_at(node)),
            Search::Vacant { .. } => None,
        }
    }

    /// Checks if the tree contains an item equal to the given key.
    pub fn contains<Q: ?Sized>(&self, key: &Q) -> bool where C: Compare<Q, T> {
        self.get(key).is_some()
    }

    /// Returns the number of items equal to the given key.
    pub fn count<Q: ?Sized>(&self, key: &Q) -> usize where C: Compare<Q, T> {
        let mut count = 0;
        let mut pending: Pending = self.root.into_iter().collect();

        while let Some(handle) = pending.pop() {
            let node = self.nodes.get(handle);

            match self.cmp.compare(key, &node.item) {
                Less => pending.extend(node.left),
                Greater => pending.extend(node.right),
                Equal => {
                    count += 1;
                    pending.extend(node.left);
                    pending.extend(node.right);
                }
            }
        }

        count
    }

    /// Returns a cursor at the first item, in order, for which `probe` does not return `Greater`,
    /// or past the end if there is none.
    ///
    /// `probe` orders the sought position relative to an item.
    pub(crate) fn lower_bound_by<F>(&self, mut probe: F) -> Cursor where F: FnMut(&T) -> Ordering {
        self.bound_by(|item| probe(item) != Greater)
    }

    /// Returns a cursor at the first item, in order, for which `probe` returns `Less`, or past the
    /// end if there is none.
    pub(crate) fn upper_bound_by<F>(&self, mut probe: F) -> Cursor where F: FnMut(&T) -> Ordering {
        self.bound_by(|item| probe(item) == Less)
    }

    // `past` must hold for a suffix of the items in order.
    fn bound_by<F>(&self, mut past: F) -> Cursor where F: FnMut(&T) -> bool {
        let mut candidate = None;
        let mut link = self.root;
        let mut pending = Pending::new();

        while let Some(handle) = link {
            let node = self.nodes.get(handle);

            if past(&node.item) {
                candidate = Some((handle, pending.len()));
                pending.push(handle);
                link = node.left;
            } else {
                link = node.right;
            }
        }

        match candidate {
            None => self.end(),
            Some((node, depth)) => {
                pending.truncate(depth);
                self.cursor_at(node, pending)
            }
        }
    }

    /// Returns a cursor at the first item not less than the given key, or past the end if there is
    /// no such item.
    ///
    /// Among equal items, the cursor points at the one visited first by iteration.
    pub fn lower_bound<Q: ?Sized>(&self, key: &Q) -> Cursor where C: Compare<Q, T> {
        self.lower_bound_by(|item| self.cmp.compare(key, item))
    }

    /// Returns a cursor at the first item greater than the given key, or past the end if there is
    /// no such item.
    pub fn upper_bound<Q: ?Sized>(&self, key: &Q) -> Cursor where C: Compare<Q, T> {
        self.upper_bound_by(|item| self.cmp.compare(key, item))
    }

    /// Returns the cursors `(lower_bound(key), upper_bound(key))`, which delimit the items equal to
    /// the given key.
    pub fn equal_range<Q: ?Sized>(&self, key: &Q) -> (Cursor, Cursor) where C: Compare<Q, T> {
        (self.lower_bound(key), self.upper_bound(key))
    }

    fn extremum(&self, forward: fn(&Node<T>) -> Link) -> Option<&T> {
        let mut node = self.nodes.get(self.root?);
        while let Some(next) = forward(node) { node = self.nodes.get(next); }
        Some(&node.item)
    }

    /// Returns a reference to the tree's minimum item, or `None` if the tree is empty.
    pub fn first(&self) -> Option<&T> { self.extremum(|node| node.left) }

    /// Returns a reference to the tree's maximum item, or `None` if the tree is empty.
    pub fn last(&self) -> Option<&T> { self.extremum(|node| node.right) }

    /// Removes all items from the tree.
    ///
    /// Nodes are destroyed in post-order: both children of a node go before the node itself.
    pub fn clear(&mut self) {
        tracing::trace!(len = self.len, "clearing tree");

        let mut pending = Pending::new();
        let mut link = self.root.take();
        let mut last = None;

        loop {
            while let Some(handle) = link {
                pending.push(handle);
                link = self.nodes.get(handle).left;
            }

            let top = match pending.last() {
                None => break,
                Some(&top) => top,
            };

            let right = self.nodes.get(top).right;

            if right.is_some() && right != last {
                link = right;
            } else {
                pending.pop();
                drop(self.nodes.take(top));
                self.len -= 1;
                last = Some(top);
            }
        }

        debug_assert_eq!(self.len, 0);
        self.nodes.clear();
        self.len = 0;
        self.epoch = next_epoch();
    }

    /// Exchanges the contents of two trees, comparators included.
    ///
    /// No node is touched. Cursors of both trees are invalidated.
    pub fn swap(&mut self, other: &mut Self) {
        tracing::trace!(len = self.len, other = other.len, "swapping trees");
        mem::swap(self, other);
        self.epoch = next_epoch();
        other.epoch = next_epoch();
    }

    /// Moves every item of `other` into the tree, leaving `other` empty.
    ///
    /// If the tree is empty, it takes over `other`'s nodes without copying them, the way `swap`
    /// does. Otherwise the items of `other` are inserted one at a time in ascending order; if the
    /// policy forbids duplicates, those already present are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut a: Tree<_> = [1, 3].into_iter().collect();
    /// let mut b: Tree<_> = [2, 3].into_iter().collect();
    ///
    /// a.merge(&mut b);
    ///
    /// assert_eq!(a.iter().collect::<Vec<_>>(), [&1, &2, &3]);
    /// assert!(b.is_empty());
    /// ```
    pub fn merge(&mut self, other: &mut Self) {
        if other.is_empty() { return; }

        if self.is_empty() {
            tracing::trace!(len = other.len, "merging into an empty tree by taking its nodes");
            self.swap(other);
            return;
        }

        tracing::trace!(len = self.len, other = other.len, "merging by reinsertion");
        for item in other.drain() { self.insert(item); }
    }

    fn drain(&mut self) -> IntoIter<T> {
        let nodes = mem::take(&mut self.nodes);
        let root = self.root.take();
        self.len = 0;
        self.epoch = next_epoch();
        IntoIter::new(nodes, root)
    }

    // Walks `self` in pre-order, which reproduces its shape in `tree`.
    fn copy_into(&self, tree: &mut Self) where T: Clone {
        let mut pending: Pending = self.root.into_iter().collect();

        while let Some(handle) = pending.pop() {
            let node = self.nodes.get(handle);
            tree.insert(node.item.clone());
            pending.extend(node.right);
            pending.extend(node.left);
        }
    }

    /// Returns a copy of the tree, failing instead of aborting if node storage cannot be
    /// allocated.
    ///
    /// # Errors
    ///
    /// Returns `Error::Alloc` if the allocation fails. Nothing of the partial copy survives the
    /// error.
    pub fn try_clone(&self) -> Result<Self, Error> where T: Clone, C: Clone {
        let mut tree = Tree::with_cmp(self.cmp.clone());
        tree.nodes.try_reserve(self.len)?;
        self.copy_into(&mut tree);
        Ok(tree)
    }
}

impl<T, C, D> Clone for Tree<T, C, D> where T: Clone, C: Compare<T> + Clone, D: Policy {
    fn clone(&self) -> Self {
        let mut tree = Tree::with_cmp(self.cmp.clone());
        self.copy_into(&mut tree);
        tree
    }
}

impl<T, C, D> Debug for Tree<T, C, D> where T: Debug, C: Compare<T>, D: Policy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C, D> Default for Tree<T, C, D> where C: Compare<T> + Default, D: Policy {
    fn default() -> Self { Tree::with_cmp(C::default()) }
}

impl<T, C, D> Extend<T> for Tree<T, C, D> where C: Compare<T>, D: Policy {
    fn extend<I: IntoIterator<Item = T>>(&mut self, it: I) {
        for item in it { self.insert(item); }
    }
}

impl<T, C, D> iter::FromIterator<T> for Tree<T, C, D> where C: Compare<T> + Default, D: Policy {
    fn from_iter<I: IntoIterator<Item = T>>(it: I) -> Self {
        let mut tree = Tree::default();
        tree.extend(it);
        tree
    }
}

impl<T, C, D> Hash for Tree<T, C, D> where T: Hash, C: Compare<T>, D: Policy {
    fn hash<H: hash::Hasher>(&self, h: &mut H) {
        self.len.hash(h);
        for item in self.iter() { item.hash(h); }
    }
}

impl<'a, T, C, D> IntoIterator for &'a Tree<T, C, D> where C: Compare<T>, D: Policy {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<T, C, D> IntoIterator for Tree<T, C, D> where C: Compare<T>, D: Policy {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> { IntoIter::new(self.nodes, self.root) }
}

impl<T, C, D> PartialEq for Tree<T, C, D> where T: PartialEq, C: Compare<T>, D: Policy {
    fn eq(&self, other: &Self) -> bool { self.len == other.len && self.iter().eq(other.iter()) }
}

impl<T, C, D> Eq for Tree<T, C, D> where T: Eq, C: Compare<T>, D: Policy {}

impl<T, C, D> PartialOrd for Tree<T, C, D> where T: PartialOrd, C: Compare<T>, D: Policy {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { self.iter().partial_cmp(other.iter()) }
}

impl<T, C, D> Ord for Tree<T, C, D> where T: Ord, C: Compare<T>, D: Policy {
    fn cmp(&self, other: &Self) -> Ordering { self.iter().cmp(other.iter()) }
}

#[cfg(test)]
impl<T, C, D> Tree<T, C, D> where C: Compare<T>, D: Policy {
    pub(crate) fn root(&self) -> Link { self.root }

    pub(crate) fn node(&self, handle: Handle) -> &Node<T> { self.nodes.get(handle) }

    pub(crate) fn live_nodes(&self) -> usize { self.nodes.len() }

    pub(crate) fn spare_nodes(&self) -> usize { self.nodes.spare() }
}

use std::iter::FusedIterator;
use std::vec;

use super::{Arena, Handle, Link, Node, Pending};

/// The state of an in-order walk: the node being visited and the stack of nodes still to visit.
///
/// The walk never reads or writes anything but child links, so it works on nodes that carry no
/// parent or thread pointers.
#[derive(Clone, Debug, Default)]
pub struct Traversal {
    current: Link,
    pending: Pending,
}

impl Traversal {
    pub fn end() -> Self { Traversal::default() }

    /// Starts a walk at the minimum of the subtree rooted at `start`.
    pub fn first<T>(nodes: &Arena<Node<T>>, start: Link) -> Self {
        let mut walk = Traversal::end();
        walk.descend_left(nodes, start);
        walk.current = walk.pending.pop();
        walk
    }

    /// Resumes a walk at `current`, where `pending` holds the ancestors of `current` that precede
    /// it on the path from the root and come after it in order.
    pub fn at(current: Handle, pending: Pending) -> Self {
        Traversal { current: Some(current), pending }
    }

    pub fn current(&self) -> Link { self.current }

    pub fn advance<T>(&mut self, nodes: &Arena<Node<T>>) {
        if let Some(handle) = self.current {
            self.descend_left(nodes, nodes.get(handle).right);
            self.current = self.pending.pop();
        }
    }

    fn descend_left<T>(&mut self, nodes: &Arena<Node<T>>, mut link: Link) {
        while let Some(handle) = link {
            self.pending.push(handle);
            link = nodes.get(handle).left;
        }
    }
}

/// A position in a tree, detached from the tree's borrow.
///
/// A cursor either points at an item or is past the end. It owns its traversal stack, so any
/// number of cursors may walk the same tree independently. Every structural change to the tree
/// (an insertion that creates a node, a removal, `clear`, `merge` or `swap`) invalidates all of
/// its cursors: operations given an invalidated cursor fail with
/// [`Error::InvalidCursor`](crate::Error::InvalidCursor).
///
/// Two cursors are equal when they point at the same node, whatever remains on their stacks.
///
/// # Examples
///
/// ```
/// let set: bstree::Set<_> = [2, 1, 3].into_iter().collect();
///
/// let mut cursor = set.begin();
/// let mut items = vec![];
///
/// while cursor != set.end() {
///     items.push(*set.item(&cursor).unwrap().unwrap());
///     set.advance(&mut cursor).unwrap();
/// }
///
/// assert_eq!(items, [1, 2, 3]);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor {
    walk: Traversal,
    epoch: u64,
}

impl Cursor {
    pub(crate) fn new(walk: Traversal, epoch: u64) -> Self { Cursor { walk, epoch } }

    /// Checks if the cursor is past the end.
    pub fn is_end(&self) -> bool { self.walk.current.is_none() }

    pub(crate) fn handle(&self) -> Link { self.walk.current }

    pub(crate) fn epoch(&self) -> u64 { self.epoch }

    pub(crate) fn walk_mut(&mut self) -> &mut Traversal { &mut self.walk }
}

impl PartialEq for Cursor {
    fn eq(&self, other: &Self) -> bool { self.walk.current == other.walk.current }
}

impl Eq for Cursor {}

/// An iterator over the items of a tree, in ascending order.
pub struct Iter<'a, T: 'a> {
    nodes: &'a Arena<Node<T>>,
    walk: Traversal,
    len: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(nodes: &'a Arena<Node<T>>, root: Link, len: usize) -> Self {
        Iter { nodes, walk: Traversal::first(nodes, root), len }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self { Iter { nodes: self.nodes, walk: self.walk.clone(), len: self.len } }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let handle = self.walk.current()?;
        self.walk.advance(self.nodes);
        self.len -= 1;
        Some(&self.nodes.get(handle).item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.len, Some(self.len)) }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// An iterator over mutable references to the items of a tree, in ascending order.
///
/// The in-order sequence of handles is computed up front, after which each item is handed out
/// exactly once.
pub struct IterMut<'a, T: 'a> {
    items: Vec<Option<&'a mut T>>,
    order: vec::IntoIter<Handle>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(nodes: &'a mut Arena<Node<T>>, root: Link) -> Self {
        let order: Vec<Handle> = super::in_order(nodes, root).collect();
        let items = nodes.slots_mut().map(|slot| slot.map(|node| &mut node.item)).collect();
        IterMut { items, order: order.into_iter() }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let handle = self.order.next()?;
        self.items[handle.index()].take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.order.size_hint() }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

/// An iterator that consumes a tree, yielding its items in ascending order.
#[derive(Clone)]
pub struct IntoIter<T> {
    nodes: Arena<Node<T>>,
    order: vec::IntoIter<Handle>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(nodes: Arena<Node<T>>, root: Link) -> Self {
        let order: Vec<Handle> = super::in_order(&nodes, root).collect();
        IntoIter { nodes, order: order.into_iter() }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let handle = self.order.next()?;
        Some(self.nodes.take(handle).item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.order.size_hint() }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

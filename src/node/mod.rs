mod arena;
mod iter;

#[cfg(test)]
mod test;

use smallvec::SmallVec;

pub use self::arena::{Arena, Handle};
pub use self::iter::{Cursor, IntoIter, Iter, IterMut, Traversal};

pub type Link = Option<Handle>;

/// The scratch stack used by traversals: handles of nodes whose item has not been visited yet,
/// the next one on top.
///
/// Trees of height up to the inline capacity never touch the heap while iterating.
pub type Pending = SmallVec<[Handle; 16]>;

#[derive(Clone, Debug)]
pub struct Node<T> {
    pub left: Link,
    pub right: Link,
    pub item: T,
}

impl<T> Node<T> {
    pub fn new(item: T) -> Self { Node { left: None, right: None, item } }
}

/// The link that holds a node, or that an inserted node would occupy.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Slot {
    Root,
    Left(Handle),
    Right(Handle),
}

/// Walks the nodes reachable from `root` in in-order, yielding their handles.
pub fn in_order<T>(nodes: &Arena<Node<T>>, root: Link) -> impl Iterator<Item = Handle> + '_ {
    let mut walk = Traversal::first(nodes, root);

    std::iter::from_fn(move || {
        let handle = walk.current()?;
        walk.advance(nodes);
        Some(handle)
    })
}

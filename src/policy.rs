#[forbid(missing_docs)]

/// How a tree treats an item that compares equal to one it already holds.
///
/// The policy is a type parameter of [`Tree`](crate::Tree), so the choice costs nothing at run
/// time.
pub trait Policy {
    /// Returns `true` if equal items may coexist in the tree.
    ///
    /// When they may, a new item descends to the right of every equal item already present and is
    /// therefore visited after them.
    fn duplicates() -> bool;
}

/// The policy of trees holding at most one of each item.
#[allow(unused)]
#[derive(Clone, Copy, Debug)]
pub enum Unique {}

impl Policy for Unique {
    fn duplicates() -> bool { false }
}

/// The policy of trees holding any number of equal items.
#[allow(unused)]
#[derive(Clone, Copy, Debug)]
pub enum Multi {}

impl Policy for Multi {
    fn duplicates() -> bool { true }
}

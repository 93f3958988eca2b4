//! Ordered containers based on an unbalanced binary search tree.
//!
//! [`Tree`] is the engine: it owns its nodes, orders them with a [`compare::Compare`] comparator
//! and lets a [policy](policy) decide whether equal items may coexist. The containers wrap it:
//!
//! - [`Set`] holds at most one of each item;
//! - [`MultiSet`] holds any number of equal items and counts them;
//! - [`Map`] holds `(key, value)` pairs ordered by key through a [projection](project).
//!
//! Positions are [`Cursor`]s, which own their traversal state instead of borrowing the container.
//! A cursor is checked against its container on every use and rejected with
//! [`Error::InvalidCursor`] once the container has been structurally modified.
//!
//! # Examples
//!
//! ```
//! let mut words = bstree::MultiSet::new();
//!
//! for word in "the cat saw the other cat".split(' ') {
//!     words.insert(word);
//! }
//!
//! assert_eq!(words.count(&"cat"), 2);
//! assert_eq!(words.iter().next(), Some(&"cat"));
//! ```

mod error;
mod node;

pub mod map;
pub mod multiset;
pub mod policy;
pub mod project;
pub mod set;
pub mod tree;

#[cfg(feature = "ordered_iter")]
mod ordered_iter;

#[cfg(feature = "quickcheck")]
mod quickcheck;

pub use error::Error;
pub use map::Map;
pub use multiset::MultiSet;
pub use set::Set;
pub use tree::{Cursor, Tree};

//! The crate's error type.

use std::collections::TryReserveError;
use thiserror::Error;

/// An error returned by a rejected container operation.
///
/// Operations that can legitimately miss, such as `get` or `remove`, return `Option` instead.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested key is not present in the map.
    #[error("key not found")]
    KeyNotFound,

    /// The cursor was produced by another tree, or its tree has been structurally modified since
    /// the cursor was produced.
    #[error("cursor is not valid for this tree")]
    InvalidCursor,

    /// The tree already holds as many nodes as its handles can address.
    #[error("node capacity of {max} exceeded")]
    CapacityExceeded {
        /// The maximum number of nodes.
        max: usize,
    },

    /// Node storage could not be allocated.
    #[error("allocation failed: {0}")]
    Alloc(#[from] TryReserveError),
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn messages() {
        assert_eq!(Error::KeyNotFound.to_string(), "key not found");
        assert_eq!(Error::InvalidCursor.to_string(), "cursor is not valid for this tree");
        assert_eq!(Error::CapacityExceeded { max: 7 }.to_string(), "node capacity of 7 exceeded");
    }

    #[test]
    fn from_try_reserve_error() {
        let err = Vec::<u64>::new().try_reserve(usize::MAX).unwrap_err();
        assert!(matches!(Error::from(err), Error::Alloc(_)));
    }
}

//! Error types returned by the fallible collection methods.
//!
//! Each condition is its own type so a method only admits the failures it can produce. Where a
//! method can fail in more than one way, the conditions are combined into an enum.

use derive_more::{Display, Error, From, IsVariant};

/// An index was outside the range accepted by the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    /// The offending index.
    pub index: usize,
    /// The length of the collection (or destination slice) at the time of the call.
    pub len: usize,
}

/// A destination slice didn't have room for every element of the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Destination has room for {available} elements but {required} are required!")]
pub struct ArrayTooSmall {
    /// The number of elements that needed to be written.
    pub required: usize,
    /// The number of slots between the start index and the end of the destination.
    pub available: usize,
}

/// The comparer of a tree can't be replaced while the tree holds elements, because the
/// existing nodes are arranged by the old ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Cannot change the comparer of a tree holding {len} elements!")]
pub struct ComparerLocked {
    /// The number of elements in the tree.
    pub len: usize,
}

/// The ways a `copy_to` call can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, IsVariant)]
pub enum CopyError {
    /// The start index isn't inside the destination.
    IndexOutOfBounds(IndexOutOfBounds),
    /// The destination is too short past the start index.
    ArrayTooSmall(ArrayTooSmall),
}

/// Checks that `len` elements can be written into a slice of `dest_len` starting at `start`.
pub(crate) fn check_copy(len: usize, dest_len: usize, start: usize) -> Result<(), CopyError> {
    if start >= dest_len {
        return Err(IndexOutOfBounds {
            index: start,
            len: dest_len,
        }
        .into());
    }

    let available = dest_len - start;
    if available < len {
        return Err(ArrayTooSmall {
            required: len,
            available,
        }
        .into());
    }

    Ok(())
}

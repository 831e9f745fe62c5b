//! The ordering and equality seams used by the collections.
//!
//! Both traits are implemented for plain closures, so most callers never name them:
//!
//! ```
//! use node_collections::tree::BinarySearchTree;
//!
//! // Order by absolute value instead of the natural ordering.
//! let mut tree = BinarySearchTree::with_comparer(|a: &i32, b: &i32| a.abs().cmp(&b.abs()));
//! tree.extend([-3, 1, 2]);
//!
//! assert!(tree.iter().eq(&[1, 2, -3]));
//! ```

use std::cmp::Ordering;

/// A total ordering over `T`.
pub trait Comparer<T: ?Sized> {
    /// Compares `a` to `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparer<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// A `Comparer` that uses the natural ordering of `T` (its [`Ord`] implementation).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparer<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// An equivalence relation over `T`.
pub trait Equality<T: ?Sized> {
    /// Returns true if `a` and `b` are considered equal.
    fn equals(&self, a: &T, b: &T) -> bool;
}

impl<T, F> Equality<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// An `Equality` that uses the natural equality of `T` (its [`PartialEq`] implementation).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalEq;

impl<T: PartialEq + ?Sized> Equality<T> for NaturalEq {
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum TreeOp<T> {
    /// Add the value to the tree
    Add(T),
    /// Remove one copy of the value from the tree
    Remove(T),
    /// Compare traversals
    Iter,
}

impl<T: Arbitrary> Arbitrary for TreeOp<T> {
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => TreeOp::Add(T::arbitrary(g)),
            1 => TreeOp::Remove(T::arbitrary(g)),
            2 => TreeOp::Iter,
            _ => unreachable!(),
        }
    }
}

/// An enum for the various kinds of "things" to do to
/// linked lists in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum ListOp<T> {
    /// Push the value onto the front
    AddFirst(T),
    /// Push the value onto the back
    AddLast(T),
    /// Insert the value at the index, which may be past the end
    Insert(u8, T),
    /// Remove at the index, which may be past the end
    RemoveAt(u8),
    /// Remove the first copy of the value
    Remove(T),
    /// Sort the list
    Sort,
    /// Compare iterators
    Iter,
}

impl<T: Arbitrary> Arbitrary for ListOp<T> {
    fn arbitrary(g: &mut Gen) -> Self {
        // Indices are kept small so that they land inside the list reasonably often.
        let index = |g: &mut Gen| u8::arbitrary(g) % 32;
        match g.choose(&[0, 1, 2, 3, 4, 5, 6]).unwrap() {
            0 => ListOp::AddFirst(T::arbitrary(g)),
            1 => ListOp::AddLast(T::arbitrary(g)),
            2 => ListOp::Insert(index(g), T::arbitrary(g)),
            3 => ListOp::RemoveAt(index(g)),
            4 => ListOp::Remove(T::arbitrary(g)),
            5 => ListOp::Sort,
            6 => ListOp::Iter,
            _ => unreachable!(),
        }
    }
}

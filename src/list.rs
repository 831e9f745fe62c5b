//! A singly linked list. The list only knows its first node, so anything involving the tail or
//! an index walks the chain from the front.
//!
//! # Examples
//!
//! ```
//! use node_collections::list::SinglyLinkedList;
//!
//! let mut list: SinglyLinkedList<i32> = [5, 25, 1].into_iter().collect();
//!
//! list.add_first(-9);
//! list.add_last(18);
//! list.insert(2, 7).unwrap();
//! assert!(list.iter().eq(&[-9, 5, 7, 25, 1, 18]));
//!
//! list.sort();
//! assert!(list.iter().eq(&[-9, 1, 5, 7, 18, 25]));
//!
//! assert_eq!(list.index_of(&7), Some(3));
//! assert_eq!(list.remove_at(3), Ok(7));
//! assert_eq!(list.index_of(&7), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;
use std::ops::{Index, IndexMut};

use crate::compare::{Comparer, Equality, NaturalEq, NaturalOrder};
use crate::error::{self, CopyError, IndexOutOfBounds};
use crate::util::ResultExtension;

/// A list with links in one direction. Equality of elements (for [`remove`](Self::remove),
/// [`contains`](Self::contains) and [`index_of`](Self::index_of)) is decided by `E`.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the list.
/// - `i`: The index of the item in question.
/// - `m`: The number of items being added.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(n)` |
/// | `is_empty` | `O(1)` |
/// | `add_first` | `O(1)` |
/// | `add_last` | `O(n)` |
/// | `add_range` | `O(n + m)` |
/// | `get/get_mut/set` | `O(i)` |
/// | `insert` | `O(i)` |
/// | `remove_at` | `O(i)` |
/// | `remove/contains/index_of` | `O(n)` |
/// | `sort` | `O(n lg n)` |
///
/// The length isn't cached, so prefer [`is_empty`](Self::is_empty) to comparing
/// [`len`](Self::len) against zero.
pub struct SinglyLinkedList<T, E = NaturalEq> {
    head: Link<T>,
    equality: E,
}

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    fn boxed(value: T, next: Link<T>) -> Box<Self> {
        Box::new(Node { value, next })
    }
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new, empty list that compares elements with their [`PartialEq`] implementation.
    pub fn new() -> Self {
        Self::with_equality(NaturalEq)
    }
}

impl<T, E: Default> Default for SinglyLinkedList<T, E> {
    fn default() -> Self {
        Self::with_equality(E::default())
    }
}

impl<T, E> Drop for SinglyLinkedList<T, E> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone, E: Clone> Clone for SinglyLinkedList<T, E> {
    fn clone(&self) -> Self {
        let mut list = Self::with_equality(self.equality.clone());
        list.add_range(self.iter().cloned());
        list
    }
}

impl<T: fmt::Debug, E> fmt::Debug for SinglyLinkedList<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, E> SinglyLinkedList<T, E> {
    /// Creates a new, empty list that compares elements with `equality`.
    ///
    /// # Examples
    ///
    /// ```
    /// use node_collections::list::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::with_equality(|a: &&str, b: &&str| a.eq_ignore_ascii_case(b));
    /// list.add_range(["Tree", "List"]);
    ///
    /// assert!(list.contains(&"list"));
    /// assert!(list.remove(&"TREE"));
    /// assert!(list.iter().eq(&["List"]));
    /// ```
    pub fn with_equality(equality: E) -> Self {
        Self {
            head: None,
            equality,
        }
    }

    /// Returns the equality used by this list.
    pub fn equality(&self) -> &E {
        &self.equality
    }

    /// Counts the elements in the list. This walks the whole list.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns true if the list contains no elements.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// The same functionality can be achieved using the [`Index`] operator, which panics instead.
    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.iter().nth(index).ok_or_else(|| IndexOutOfBounds {
            index,
            len: self.len(),
        })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator, which panics
    /// instead.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        match self.link_at(index)? {
            Some(node) => Ok(&mut node.value),
            None => Err(IndexOutOfBounds { index, len: index }),
        }
    }

    /// Replaces the element at `index`, returning the old one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.get_mut(index)?, value))
    }

    /// Adds an element to the front of the list.
    pub fn add_first(&mut self, value: T) {
        self.head = Some(Node::boxed(value, self.head.take()));
    }

    /// Adds an element to the back of the list.
    pub fn add_last(&mut self, value: T) {
        *self.tail_link() = Some(Node::boxed(value, None));
    }

    /// Adds every element of `values` to the back of the list, in order. The tail is only searched
    /// for once.
    pub fn add_range<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let mut tail = self.tail_link();
        for value in values {
            tail = &mut tail.insert(Node::boxed(value, None)).next;
        }
    }

    /// Inserts an element so that it ends up at `index`, in front of the element currently there.
    /// Inserting at `index == len` adds to the back.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index` is greater than the length of the list.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        let link = self.link_at(index)?;
        let next = link.take();
        *link = Some(Node::boxed(value, next));
        Ok(())
    }

    /// Removes the element at `index` and returns it.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index` isn't the index of an element.
    pub fn remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let link = self.link_at(index)?;
        match link.take() {
            Some(node) => {
                let Node { value, next } = *node;
                *link = next;
                Ok(value)
            }
            None => Err(IndexOutOfBounds { index, len: index }),
        }
    }

    /// Removes every element from the list.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }

    /// Returns an iterator over references to the elements, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Returns an iterator over mutable references to the elements, front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
        }
    }

    /// Sorts the list in ascending order, keeping equal elements in their current order.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(NaturalOrder);
    }

    /// Sorts the list by `comparer`, keeping equal elements in their current order.
    ///
    /// This is a merge sort that relinks the existing nodes rather than moving any elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use node_collections::list::SinglyLinkedList;
    ///
    /// let mut list: SinglyLinkedList<_> = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')].into_iter().collect();
    /// list.sort_by(|x: &(i32, char), y: &(i32, char)| x.0.cmp(&y.0));
    ///
    /// assert!(list.iter().eq(&[(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]));
    /// ```
    pub fn sort_by<C: Comparer<T>>(&mut self, comparer: C) {
        self.head = merge_sort(self.head.take(), &comparer);
    }

    /// Clones every element, front to back, into `dest` starting at `start`. Nothing is written
    /// unless all of the elements fit.
    ///
    /// # Errors
    /// - [`CopyError::IndexOutOfBounds`] if `start` isn't an index of `dest`.
    /// - [`CopyError::ArrayTooSmall`] if `dest` has fewer than [`len`](Self::len) slots from
    ///   `start` onwards.
    pub fn copy_to(&self, dest: &mut [T], start: usize) -> Result<(), CopyError>
    where
        T: Clone,
    {
        error::check_copy(self.len(), dest.len(), start)?;

        for (slot, value) in dest[start..].iter_mut().zip(self.iter()) {
            slot.clone_from(value);
        }
        Ok(())
    }

    /// Returns the link that holds the node at `index`: the head for `0`, otherwise the `next`
    /// of the node before it. The empty link after the last node is returned for `index == len`.
    fn link_at(&mut self, index: usize) -> Result<&mut Link<T>, IndexOutOfBounds> {
        let mut link = &mut self.head;
        for len in 0..index {
            match link {
                Some(node) => link = &mut node.next,
                None => return Err(IndexOutOfBounds { index, len }),
            }
        }
        Ok(link)
    }

    /// Returns the empty link after the last node.
    fn tail_link(&mut self) -> &mut Link<T> {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        link
    }
}

impl<T, E: Equality<T>> SinglyLinkedList<T, E> {
    /// Removes the first element equal to `value`. Returns false if there was none.
    pub fn remove(&mut self, value: &T) -> bool {
        let equality = &self.equality;
        let mut link = &mut self.head;
        loop {
            match link {
                None => return false,
                Some(node) if equality.equals(&node.value, value) => {
                    *link = node.next.take();
                    return true;
                }
                Some(node) => link = &mut node.next,
            }
        }
    }

    /// Returns true if the list contains an element equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Returns the index of the first element equal to `value`, if there is one.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter()
            .position(|element| self.equality.equals(element, value))
    }
}

/// Sorts the chain starting at `head`, returning the new head.
fn merge_sort<T, C: Comparer<T>>(head: Link<T>, comparer: &C) -> Link<T> {
    match head {
        Some(node) if node.next.is_some() => {
            let (front, back) = front_back_split(node);
            sorted_merge(
                merge_sort(Some(front), comparer),
                merge_sort(back, comparer),
                comparer,
            )
        }
        short => short,
    }
}

/// Cuts the chain in two at its midpoint. The front half keeps the extra node when the length is
/// odd.
fn front_back_split<T>(mut source: Box<Node<T>>) -> (Box<Node<T>>, Link<T>) {
    // The hare moves two nodes for every one the tortoise moves. When the hare runs out, the
    // tortoise is on the last node of the front half.
    let mut tortoise = 0;
    let mut hare = source.next.as_deref();
    while let Some(node) = hare {
        hare = node.next.as_deref();
        if let Some(node) = hare {
            tortoise += 1;
            hare = node.next.as_deref();
        }
    }

    let mut cut = &mut source.next;
    for _ in 0..tortoise {
        match cut {
            Some(node) => cut = &mut node.next,
            None => break,
        }
    }
    let back = cut.take();
    (source, back)
}

/// Merges two sorted chains by relinking their nodes. Ties are taken from `front` first.
fn sorted_merge<T, C: Comparer<T>>(mut front: Link<T>, mut back: Link<T>, comparer: &C) -> Link<T> {
    let mut merged: Link<T> = None;
    let mut tail = &mut merged;

    loop {
        let from_front = match (&front, &back) {
            (Some(a), Some(b)) => comparer.compare(&a.value, &b.value) != Ordering::Greater,
            _ => break,
        };

        let source = if from_front { &mut front } else { &mut back };
        if let Some(mut node) = source.take() {
            *source = node.next.take();
            tail = &mut tail.insert(node).next;
        }
    }

    *tail = front.or(back);
    merged
}

impl<T, E> Index<usize> for SinglyLinkedList<T, E> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).throw()
    }
}

impl<T, E> IndexMut<usize> for SinglyLinkedList<T, E> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).throw()
    }
}

impl<T, E> Extend<T> for SinglyLinkedList<T, E> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.add_range(values);
    }
}

impl<T, E: Default> FromIterator<T> for SinglyLinkedList<T, E> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut list = Self::default();
        list.add_range(values);
        list
    }
}

/// An iterator over references to the elements of a [`SinglyLinkedList`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { next: self.next }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// An iterator over mutable references to the elements of a [`SinglyLinkedList`].
pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            &mut node.value
        })
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

/// An iterator that moves the elements out of a [`SinglyLinkedList`], front to back.
pub struct IntoIter<T, E> {
    list: SinglyLinkedList<T, E>,
}

impl<T, E> Iterator for IntoIter<T, E> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.head.take().map(|node| {
            let Node { value, next } = *node;
            self.list.head = next;
            value
        })
    }
}

impl<T, E> FusedIterator for IntoIter<T, E> {}

impl<T, E> IntoIterator for SinglyLinkedList<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T, E>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T, E> IntoIterator for &'a SinglyLinkedList<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, E> IntoIterator for &'a mut SinglyLinkedList<T, E> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}


#[cfg(test)]
mod quicktests {
    use super::*;
    use crate::test::quick::ListOp;

    /// Applies a set of operations to a list and to a `Vec` that models it.
    fn do_ops(ops: &[ListOp<i8>], list: &mut SinglyLinkedList<i8>, model: &mut Vec<i8>) {
        for op in ops {
            match *op {
                ListOp::AddFirst(x) => {
                    list.add_first(x);
                    model.insert(0, x);
                }
                ListOp::AddLast(x) => {
                    list.add_last(x);
                    model.push(x);
                }
                ListOp::Insert(index, x) => {
                    let index = usize::from(index);
                    let result = list.insert(index, x);
                    assert_eq!(result.is_ok(), index <= model.len());
                    if result.is_ok() {
                        model.insert(index, x);
                    }
                }
                ListOp::RemoveAt(index) => {
                    let index = usize::from(index);
                    let expected = (index < model.len()).then(|| model.remove(index));
                    assert_eq!(list.remove_at(index).ok(), expected);
                }
                ListOp::Remove(x) => {
                    let pos = model.iter().position(|y| *y == x);
                    assert_eq!(list.remove(&x), pos.is_some());
                    if let Some(pos) = pos {
                        model.remove(pos);
                    }
                }
                ListOp::Sort => {
                    list.sort();
                    model.sort();
                }
                ListOp::Iter => {
                    assert!(list.iter().eq(model.iter()));
                }
            }
            assert_eq!(list.len(), model.len());
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<ListOp<i8>>) -> bool {
            let mut list = SinglyLinkedList::new();
            let mut model = Vec::new();

            do_ops(&ops, &mut list, &mut model);
            list.iter().eq(model.iter())
        }
    }

    quickcheck::quickcheck! {
        fn sort_is_stable(keys: Vec<u8>) -> bool {
            let mut pairs: Vec<(u8, usize)> = keys.into_iter().enumerate().map(|(i, k)| (k % 8, i)).collect();
            let mut list: SinglyLinkedList<(u8, usize)> = pairs.iter().copied().collect();

            list.sort_by(|a: &(u8, usize), b: &(u8, usize)| a.0.cmp(&b.0));
            pairs.sort_by_key(|pair| pair.0);
            list.iter().eq(pairs.iter())
        }
    }
}

//! An unbalanced binary search tree. Nodes keep a pointer to their parent as well as their two
//! children, which lets every traversal walk the tree without recursion or an explicit stack.
//!
//! Values that compare equal are all kept: a tie always descends into the greater subtree, so
//! equal values come out of an in-order traversal in the order they were added.
//!
//! # Examples
//!
//! ```
//! use node_collections::tree::BinarySearchTree;
//!
//! let mut tree: BinarySearchTree<i32> = [5, 25, 1, -9, 18].into_iter().collect();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&2));
//!
//! tree.add(2);
//! assert!(tree.contains(&2));
//!
//! // Default iteration is sorted.
//! assert!(tree.iter().eq(&[-9, 1, 2, 5, 18, 25]));
//!
//! // Removing a value reports whether it was there.
//! assert!(tree.remove(&18));
//! assert!(!tree.remove(&18));
//! assert_eq!(tree.len(), 5);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use crate::compare::{Comparer, NaturalOrder};
use crate::error::{self, ComparerLocked, CopyError};

/// A Binary Search Tree ordered by the comparer `C`. There is no rebalancing: adding values in
/// sorted order produces a tree as deep as it is long, so `add`, `remove` and `contains` are
/// `O(depth)`, between `O(lg N)` and `O(N)`.
pub struct BinarySearchTree<T, C = NaturalOrder> {
    root: Link<T>,
    comparer: C,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    // Not owned. Only used to retrace upwards and to find the slot a node hangs from.
    parent: Link<T>,
    lesser: Link<T>,
    greater: Link<T>,
}

impl<T> Node<T> {
    fn new_leaf(value: T, parent: Link<T>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Node {
            value,
            parent,
            lesser: None,
            greater: None,
        })))
    }

    /// Asserts that both children of this node point back at it.
    fn check_child_links(&self) {
        let self_ptr = NonNull::from(self);
        for child in [self.lesser, self.greater].into_iter().flatten() {
            // SAFETY: Children of a live node are live nodes of the same tree.
            let child = unsafe { child.as_ref() };
            assert_eq!(child.parent, Some(self_ptr), "child doesn't link back to its parent");
        }
    }
}

impl<T> BinarySearchTree<T> {
    /// Creates a new, empty `BinarySearchTree` ordered by the natural ordering of `T`.
    pub fn new() -> Self {
        Self::with_comparer(NaturalOrder)
    }
}

impl<T, C: Default> Default for BinarySearchTree<T, C> {
    fn default() -> Self {
        Self::with_comparer(C::default())
    }
}

impl<T, C> Drop for BinarySearchTree<T, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, C> Clone for BinarySearchTree<T, C>
where
    T: Clone,
    C: Comparer<T> + Clone,
{
    /// Copies the tree node for node, so the clone has the same shape as the original.
    fn clone(&self) -> Self {
        Self::from_tree(self, self.comparer.clone())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinarySearchTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, C> BinarySearchTree<T, C> {
    /// Creates a new, empty `BinarySearchTree` ordered by `comparer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use node_collections::tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::with_comparer(|a: &i32, b: &i32| b.cmp(a));
    /// tree.extend([1, 3, 2]);
    ///
    /// assert!(tree.iter().eq(&[3, 2, 1]));
    /// ```
    pub fn with_comparer(comparer: C) -> Self {
        Self {
            root: None,
            comparer,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the comparer that orders this tree.
    pub fn comparer(&self) -> &C {
        &self.comparer
    }

    /// Replaces the comparer that orders this tree. This is only possible while the tree is
    /// empty, because the existing nodes were placed according to the old comparer.
    ///
    /// # Examples
    ///
    /// ```
    /// use node_collections::tree::BinarySearchTree;
    ///
    /// let by_key: fn(&(u8, char), &(u8, char)) -> std::cmp::Ordering = |a, b| a.0.cmp(&b.0);
    /// let by_char: fn(&(u8, char), &(u8, char)) -> std::cmp::Ordering = |a, b| a.1.cmp(&b.1);
    ///
    /// let mut tree = BinarySearchTree::with_comparer(by_key);
    /// assert!(tree.set_comparer(by_char).is_ok());
    ///
    /// tree.add((1, 'a'));
    /// assert!(tree.set_comparer(by_key).is_err());
    /// ```
    pub fn set_comparer(&mut self, comparer: C) -> Result<(), ComparerLocked> {
        if !self.is_empty() {
            return Err(ComparerLocked { len: self.len });
        }

        self.comparer = comparer;
        Ok(())
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        let mut link = self.root.take();
        while let Some(ptr) = link {
            // SAFETY: The nodes were detached from the tree by `self.root.take()` and each one is
            // freed exactly once below, after which nothing points at it any more. Parent links
            // are never followed here, so they're allowed to go stale.
            let node = unsafe { &mut *ptr.as_ptr() };
            link = match node.lesser.take() {
                Some(lesser) => {
                    // Rotate the lesser child above this node, so the walk only ever needs to
                    // free nodes without a lesser child.
                    // SAFETY: See above. `lesser` is a different node to `node`.
                    let lesser_node = unsafe { &mut *lesser.as_ptr() };
                    node.lesser = lesser_node.greater.take();
                    lesser_node.greater = Some(ptr);
                    Some(lesser)
                }
                None => {
                    let greater = node.greater;
                    // SAFETY: See above. The node was allocated by `Node::new_leaf`.
                    drop(unsafe { Box::from_raw(ptr.as_ptr()) });
                    greater
                }
            };
        }
        self.len = 0;
    }

    /// Returns an iterator over the values in ascending order. This is the same as
    /// [`in_order`](Self::in_order).
    pub fn iter(&self) -> Traversal<'_, T> {
        self.in_order()
    }

    /// Returns an iterator visiting the lesser subtree, then the node, then the greater subtree:
    /// the values in ascending order.
    pub fn in_order(&self) -> Traversal<'_, T> {
        Traversal::new(self, Order::In)
    }

    /// Returns an iterator visiting the node, then the lesser subtree, then the greater subtree.
    /// Adding the values in this order to an empty tree with the same comparer rebuilds the same
    /// shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use node_collections::tree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<i32> = [2, 3, 1].into_iter().collect();
    /// assert!(tree.pre_order().eq(&[2, 1, 3]));
    /// ```
    pub fn pre_order(&self) -> Traversal<'_, T> {
        Traversal::new(self, Order::Pre)
    }

    /// Returns an iterator visiting the greater subtree, then the node, then the lesser subtree:
    /// the values in descending order.
    pub fn reverse_order(&self) -> Traversal<'_, T> {
        Traversal::new(self, Order::Reverse)
    }

    /// Clones every value, in ascending order, into `dest` starting at `start`. Nothing is written
    /// unless all of the values fit.
    ///
    /// # Errors
    /// - [`CopyError::IndexOutOfBounds`] if `start` isn't an index of `dest`.
    /// - [`CopyError::ArrayTooSmall`] if `dest` has fewer than [`len`](Self::len) slots from
    ///   `start` onwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use node_collections::tree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<i32> = [3, 1, 2].into_iter().collect();
    /// let mut dest = [0; 4];
    ///
    /// tree.copy_to(&mut dest, 1).unwrap();
    /// assert_eq!(dest, [0, 1, 2, 3]);
    ///
    /// assert!(tree.copy_to(&mut dest, 2).is_err());
    /// ```
    pub fn copy_to(&self, dest: &mut [T], start: usize) -> Result<(), CopyError>
    where
        T: Clone,
    {
        error::check_copy(self.len, dest.len(), start)?;

        for (slot, value) in dest[start..].iter_mut().zip(self.iter()) {
            slot.clone_from(value);
        }
        Ok(())
    }
}

impl<T, C: Comparer<T>> BinarySearchTree<T, C> {
    /// Creates a tree ordered by `comparer` holding a copy of every value in `other`. The values
    /// are added in pre-order, so when both comparers agree the new tree has the same shape as
    /// `other` rather than a rebalanced one.
    pub fn from_tree<D>(other: &BinarySearchTree<T, D>, comparer: C) -> Self
    where
        T: Clone,
    {
        let mut tree = Self::with_comparer(comparer);
        tree.extend(other.pre_order().cloned());
        tree
    }

    /// Adds a value to the tree as a new leaf. Values equal to one already in the tree are kept
    /// and placed after it.
    pub fn add(&mut self, value: T) {
        let Some(mut dest) = self.root else {
            self.root = Some(Node::new_leaf(value, None));
            self.len += 1;
            return;
        };

        loop {
            // SAFETY: Every link in the tree points at a live node allocated by `Node::new_leaf`
            // and `&mut self` guarantees that nothing else references the nodes.
            let node = unsafe { dest.as_mut() };
            let slot = match self.comparer.compare(&value, &node.value) {
                Ordering::Less => &mut node.lesser,
                Ordering::Equal | Ordering::Greater => &mut node.greater,
            };

            match *slot {
                Some(child) => dest = child,
                None => {
                    *slot = Some(Node::new_leaf(value, Some(dest)));
                    if cfg!(debug_assertions) {
                        node.check_child_links();
                    }
                    break;
                }
            }
        }

        self.len += 1;
    }

    /// Returns true if the tree holds a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Removes the first value equal to `value` found while searching down from the root. Returns
    /// false, leaving the tree untouched, if there is no such value.
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes the first value equal to `value` found while searching down from the root and
    /// returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use node_collections::tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::with_comparer(|a: &(i32, &str), b: &(i32, &str)| a.0.cmp(&b.0));
    /// tree.extend([(1, "one"), (2, "two")]);
    ///
    /// assert_eq!(tree.take(&(2, "")), Some((2, "two")));
    /// assert_eq!(tree.take(&(2, "")), None);
    /// ```
    pub fn take(&mut self, value: &T) -> Option<T> {
        let target = self.find(value)?;

        // SAFETY: `target` and its descendants are live nodes of this tree and `&mut self`
        // guarantees nothing else references them. The successor is always a different node to
        // `target`.
        let to_splice = unsafe {
            let node = &mut *target.as_ptr();
            match (node.lesser, node.greater) {
                (Some(_), Some(greater)) => {
                    // The successor is the leftmost node of the greater subtree. Moving its value
                    // up leaves it holding the removed value, and it has no lesser child, so it
                    // can be spliced out directly.
                    let mut successor = greater;
                    while let Some(lesser) = successor.as_ref().lesser {
                        successor = lesser;
                    }
                    mem::swap(&mut node.value, &mut (*successor.as_ptr()).value);
                    successor
                }
                _ => target,
            }
        };

        // SAFETY: `to_splice` is a node of this tree with at most one child.
        Some(unsafe { self.splice_out(to_splice) })
    }

    /// Finds the first node equal to `value` on the way down from the root.
    fn find(&self, value: &T) -> Link<T> {
        let mut link = self.root;
        while let Some(ptr) = link {
            // SAFETY: Every link in the tree points at a live node and `&self` guarantees it isn't
            // being modified.
            let node = unsafe { ptr.as_ref() };
            link = match self.comparer.compare(value, &node.value) {
                Ordering::Less => node.lesser,
                Ordering::Equal => return link,
                Ordering::Greater => node.greater,
            };
        }
        None
    }
}

impl<T, C> BinarySearchTree<T, C> {
    /// Unlinks `target`, moving its only child (if any) into the slot it hung from, frees it and
    /// returns its value.
    ///
    /// # Safety
    ///
    /// `target` must be a node of this tree with at most one child.
    unsafe fn splice_out(&mut self, target: NonNull<Node<T>>) -> T {
        // SAFETY: The caller guarantees `target` is a node of this tree, all of which are
        // allocated by `Node::new_leaf`. Once its parent and child are relinked below, nothing
        // points at it any more.
        let node = unsafe { Box::from_raw(target.as_ptr()) };
        debug_assert!(node.lesser.is_none() || node.greater.is_none());

        let child = node.lesser.or(node.greater);
        if let Some(mut child) = child {
            // SAFETY: The child is a live node and a different allocation to `node`.
            unsafe { child.as_mut().parent = node.parent };
        }

        match node.parent {
            Some(mut parent) => {
                // SAFETY: The parent is a live node and a different allocation to `node`.
                let parent = unsafe { parent.as_mut() };
                if parent.lesser == Some(target) {
                    parent.lesser = child;
                } else {
                    parent.greater = child;
                }
                if cfg!(debug_assertions) {
                    parent.check_child_links();
                }
            }
            None => self.root = child,
        }

        self.len -= 1;
        let Node { value, .. } = *node;
        value
    }
}

impl<T, C: Comparer<T>> Extend<T> for BinarySearchTree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.add(value);
        }
    }
}

impl<T, C: Comparer<T> + Default> FromIterator<T> for BinarySearchTree<T, C> {
    /// Builds a tree by adding each value in turn, so the shape follows the iteration order.
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut tree = Self::default();
        tree.extend(values);
        tree
    }
}

impl<'a, T, C> IntoIterator for &'a BinarySearchTree<T, C> {
    type Item = &'a T;
    type IntoIter = Traversal<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Order {
    In,
    Pre,
    Reverse,
}

impl Order {
    /// The child to descend into first and the one to descend into second.
    fn children<T>(self, node: &Node<T>) -> (Link<T>, Link<T>) {
        match self {
            Order::In | Order::Pre => (node.lesser, node.greater),
            Order::Reverse => (node.greater, node.lesser),
        }
    }
}

/// Where the walk resumes when it comes back to the current node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Arrived at the node, possibly from its parent.
    Descend,
    /// Either came back from the first child or there was none.
    Cross,
    /// Either came back from the second child or there was none.
    Ascend,
}

/// A lazy walk over the values of a [`BinarySearchTree`], created by
/// [`in_order`](BinarySearchTree::in_order), [`pre_order`](BinarySearchTree::pre_order) or
/// [`reverse_order`](BinarySearchTree::reverse_order).
///
/// The walk only remembers the node it came from, the node it's at and the node it's heading to,
/// and uses parent links to climb back up, so it needs no stack. Cloning the iterator restarts
/// nothing: the clone continues from the same position.
pub struct Traversal<'a, T> {
    order: Order,
    phase: Phase,
    prev: Link<T>,
    current: Link<T>,
    next: Link<T>,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Traversal<'a, T> {
    fn new<C>(tree: &'a BinarySearchTree<T, C>, order: Order) -> Self {
        Self {
            order,
            phase: Phase::Descend,
            prev: None,
            current: tree.root,
            next: None,
            remaining: tree.len,
            _marker: PhantomData,
        }
    }

    fn visit(&mut self, phase: Phase, value: &'a T) -> Option<&'a T> {
        self.phase = phase;
        self.remaining -= 1;
        Some(value)
    }
}

impl<T> Clone for Traversal<'_, T> {
    fn clone(&self) -> Self {
        Self {
            order: self.order,
            phase: self.phase,
            prev: self.prev,
            current: self.current,
            next: self.next,
            remaining: self.remaining,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.current {
            // SAFETY: The tree is borrowed immutably for `'a`, so every node stays allocated and
            // unmodified for as long as this iterator exists.
            let node: &'a Node<T> = unsafe { &*current.as_ptr() };
            let (first, second) = self.order.children(node);

            if self.phase == Phase::Descend
                && (self.prev.is_none() || self.prev == node.parent)
            {
                self.prev = self.current;
                self.next = first;
                if self.order == Order::Pre {
                    return self.visit(Phase::Cross, &node.value);
                }
            }

            if self.phase != Phase::Ascend && (self.next.is_none() || self.prev == first) {
                self.prev = self.current;
                self.next = second;
                if self.order != Order::Pre {
                    return self.visit(Phase::Ascend, &node.value);
                }
            }

            if self.next.is_none() || self.prev == second {
                self.prev = self.current;
                self.next = node.parent;
            }

            self.current = self.next;
            self.phase = Phase::Descend;
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Traversal<'_, T> {}

impl<T> FusedIterator for Traversal<'_, T> {}

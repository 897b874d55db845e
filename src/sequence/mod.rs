use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::errors::SequenceError;
use crate::sequence::cursor::{Cursor, CursorMut};
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

/// The `Sequence` is an order-preserving container implemented as a
/// doubly-linked list with owned nodes. It supports insertion and removal
/// at both ends in constant time; positional access and value search take
/// *O*(*n*) time.
///
/// The `Sequence` contains:
/// - a pointer `head` to the first node, or `None` when empty;
/// - a pointer `tail` to the last node, or `None` when empty;
/// - a length counter `len`, always equal to the number of nodes.
///
/// Nodes are owned through the forward chain: detaching a node is the only
/// way it is reclaimed, and the `prev` back-reference never frees anything.
pub struct Sequence<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    /// the number of elements in the sequence
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

pub(crate) struct Node<T> {
    pub(crate) next: Option<NonNull<Node<T>>>,
    pub(crate) prev: Option<NonNull<Node<T>>>,
    pub(crate) element: T,
}

// private methods
impl<T> Sequence<T> {
    pub(crate) fn head_node(&self) -> Option<NonNull<Node<T>>> {
        self.head
    }
    pub(crate) fn tail_node(&self) -> Option<NonNull<Node<T>>> {
        self.tail
    }

    /// Attach the detached node `node` into the gap between `before` and
    /// `after`.
    ///
    /// It is unsafe because it does not check that `(before, after)` is an
    /// adjacent pair of this sequence (with `None` standing for the
    /// respective end). Attaching into a pair that is not a gap of this
    /// sequence makes the sequence ill-formed.
    pub(crate) unsafe fn attach_node(
        &mut self,
        before: Option<NonNull<Node<T>>>,
        after: Option<NonNull<Node<T>>>,
        mut node: NonNull<Node<T>>,
    ) {
        node.as_mut().prev = before;
        node.as_mut().next = after;
        match before {
            Some(mut before) => before.as_mut().next = Some(node),
            None => self.head = Some(node),
        }
        match after {
            Some(mut after) => after.as_mut().prev = Some(node),
            None => self.tail = Some(node),
        }
        self.len += 1;
    }

    /// Detach `node` from the sequence and reclaim it as a box.
    ///
    /// It is unsafe because it does not check that `node` belongs to this
    /// sequence. Detaching a foreign node makes both sequences ill-formed.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        let node = Box::from_raw(node.as_ptr());
        match node.prev {
            Some(mut prev) => prev.as_mut().next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(mut next) => next.as_mut().prev = node.prev,
            None => self.tail = node.prev,
        }
        self.len -= 1;
        node
    }

    /// Walk to the node at position `at`, from whichever end is nearer,
    /// or return `None` if `at` is out of bounds.
    pub(crate) fn node_at(&self, at: usize) -> Option<NonNull<Node<T>>> {
        if at >= self.len {
            return None;
        }
        if at <= self.len / 2 {
            let mut node = self.head;
            for _ in 0..at {
                // SAFETY: the first `len` nodes reached from `head` are
                // valid while the sequence is borrowed.
                node = unsafe { node?.as_ref().next };
            }
            node
        } else {
            let mut node = self.tail;
            for _ in 0..(self.len - 1 - at) {
                // SAFETY: as above, walking `prev` from `tail`.
                node = unsafe { node?.as_ref().prev };
            }
            node
        }
    }
}

impl<T> Sequence<T> {
    /// Create an empty `Sequence`.
    ///
    /// # Examples
    /// ```
    /// use seq_list::Sequence;
    /// let sequence: Sequence<u32> = Sequence::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in the `Sequence`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::Sequence;
    ///
    /// let mut sequence = Sequence::new();
    ///
    /// sequence.push_front(2);
    /// assert_eq!(sequence.len(), 1);
    ///
    /// sequence.push_back(3);
    /// assert_eq!(sequence.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the `Sequence` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::Sequence;
    ///
    /// let mut sequence = Sequence::new();
    /// assert!(sequence.is_empty());
    ///
    /// sequence.push_front("foo");
    /// assert!(!sequence.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes all elements from the `Sequence`, leaving it empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    #[inline]
    pub fn clear(&mut self) {
        while self.remove_front().is_ok() {}
    }

    /// Provides a reference to the first element, or `None` if the
    /// sequence is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::Sequence;
    ///
    /// let mut sequence = Sequence::new();
    /// assert_eq!(sequence.front(), None);
    ///
    /// sequence.push_front(1);
    /// assert_eq!(sequence.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        // SAFETY: `head` is a valid node while the sequence is borrowed.
        self.head.map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Provides a reference to the last element, or `None` if the
    /// sequence is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::Sequence;
    ///
    /// let mut sequence = Sequence::new();
    /// assert_eq!(sequence.back(), None);
    ///
    /// sequence.push_back(1);
    /// assert_eq!(sequence.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        // SAFETY: `tail` is a valid node while the sequence is borrowed.
        self.tail.map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Adds an element first in the sequence.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::Sequence;
    ///
    /// let mut sequence = Sequence::new();
    ///
    /// sequence.push_front(2);
    /// assert_eq!(sequence.front(), Some(&2));
    ///
    /// sequence.push_front(1);
    /// assert_eq!(sequence.front(), Some(&1));
    /// ```
    pub fn push_front(&mut self, value: T) {
        let node = Node::new_detached(value);
        // SAFETY: `(None, head)` is the gap before the first element.
        unsafe { self.attach_node(None, self.head, node) };
    }

    /// Appends an element to the back of the sequence.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::Sequence;
    ///
    /// let mut sequence = Sequence::new();
    /// sequence.push_back(1);
    /// sequence.push_back(3);
    /// assert_eq!(sequence.back(), Some(&3));
    /// ```
    pub fn push_back(&mut self, value: T) {
        let node = Node::new_detached(value);
        // SAFETY: `(tail, None)` is the gap after the last element.
        unsafe { self.attach_node(self.tail, None, node) };
    }

    /// Removes the first element and returns it, or
    /// [`SequenceError::EmptyCollection`] if the sequence is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::{Sequence, SequenceError};
    ///
    /// let mut sequence = Sequence::new();
    /// assert_eq!(sequence.remove_front(), Err(SequenceError::EmptyCollection));
    ///
    /// sequence.push_front(1);
    /// sequence.push_front(3);
    /// assert_eq!(sequence.remove_front(), Ok(3));
    /// assert_eq!(sequence.remove_front(), Ok(1));
    /// ```
    pub fn remove_front(&mut self) -> Result<T, SequenceError> {
        let node = self.head.ok_or(SequenceError::EmptyCollection)?;
        // SAFETY: `node` is the head of this sequence.
        Ok(unsafe { self.detach_node(node) }.into_element())
    }

    /// Removes the last element and returns it, or
    /// [`SequenceError::EmptyCollection`] if the sequence is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::{Sequence, SequenceError};
    ///
    /// let mut sequence = Sequence::new();
    /// assert_eq!(sequence.remove_back(), Err(SequenceError::EmptyCollection));
    ///
    /// sequence.push_back(1);
    /// sequence.push_back(3);
    /// assert_eq!(sequence.remove_back(), Ok(3));
    /// ```
    pub fn remove_back(&mut self) -> Result<T, SequenceError> {
        let node = self.tail.ok_or(SequenceError::EmptyCollection)?;
        // SAFETY: `node` is the tail of this sequence.
        Ok(unsafe { self.detach_node(node) }.into_element())
    }

    /// Adds an element at position `at`, clamping the position to the
    /// sequence bounds: a position at or below `0` prepends, a position at
    /// or beyond `len` appends, and anything in between splices the element
    /// so that it ends up at index `at`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::Sequence;
    /// use std::iter::FromIterator;
    ///
    /// let mut sequence = Sequence::from_iter(["a", "b", "c"]);
    ///
    /// sequence.insert(1, "x");
    /// assert_eq!(sequence.to_string(), "[a, x, b, c]");
    ///
    /// sequence.insert(-5, "y");
    /// assert_eq!(sequence.to_string(), "[y, a, x, b, c]");
    ///
    /// sequence.insert(99, "z");
    /// assert_eq!(sequence.to_string(), "[y, a, x, b, c, z]");
    /// ```
    pub fn insert(&mut self, at: isize, value: T) {
        if at <= 0 {
            self.push_front(value);
        } else if at as usize >= self.len {
            self.push_back(value);
        } else {
            let mut cursor = self.cursor_start_mut();
            // `0 < at < len`, so the walk cannot run off the end.
            if cursor.seek_forward(at as usize).is_ok() {
                cursor.insert(value);
            }
        }
    }

    /// Removes the first element equal to `value`, in forward order, and
    /// returns whether a removal happened. A sequence without a matching
    /// element is left untouched.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::Sequence;
    /// use std::iter::FromIterator;
    ///
    /// let mut sequence = Sequence::from_iter([1, 2, 1, 3]);
    ///
    /// assert!(sequence.remove(&1));
    /// assert_eq!(sequence.to_string(), "[2, 1, 3]");
    ///
    /// assert!(!sequence.remove(&9));
    /// assert_eq!(sequence.len(), 3);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut node = self.head;
        while let Some(candidate) = node {
            // SAFETY: nodes reached from `head` are valid and belong to
            // this sequence.
            unsafe {
                if candidate.as_ref().element == *value {
                    self.detach_node(candidate);
                    return true;
                }
                node = candidate.as_ref().next;
            }
        }
        false
    }

    /// Provides a reference to the element at position `at`.
    ///
    /// Fails with [`SequenceError::EmptyCollection`] on an empty sequence,
    /// and with [`SequenceError::IndexOutOfRange`] when `at >= len` on a
    /// non-empty one.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::{Sequence, SequenceError};
    /// use std::iter::FromIterator;
    ///
    /// let empty: Sequence<i32> = Sequence::new();
    /// assert_eq!(empty.get(0), Err(SequenceError::EmptyCollection));
    ///
    /// let sequence = Sequence::from_iter([1, 2, 3]);
    /// assert_eq!(sequence.get(1), Ok(&2));
    /// assert_eq!(sequence.get(3), Err(SequenceError::IndexOutOfRange));
    /// ```
    pub fn get(&self, at: usize) -> Result<&T, SequenceError> {
        if self.is_empty() {
            return Err(SequenceError::EmptyCollection);
        }
        let node = self.node_at(at).ok_or(SequenceError::IndexOutOfRange)?;
        // SAFETY: `node_at` only returns nodes of this sequence.
        Ok(unsafe { &(*node.as_ptr()).element })
    }

    /// Provides a cursor at the gap before the first element.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::Sequence;
    /// use std::iter::FromIterator;
    ///
    /// let sequence = Sequence::from_iter([1, 2, 3]);
    /// let mut cursor = sequence.cursor_start();
    /// assert_eq!(cursor.next(), Ok(&1));
    /// ```
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, None, self.head)
    }

    /// Provides a cursor at the gap after the last element.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::Sequence;
    /// use std::iter::FromIterator;
    ///
    /// let sequence = Sequence::from_iter([1, 2, 3]);
    /// let mut cursor = sequence.cursor_end();
    /// assert!(!cursor.has_next());
    /// assert_eq!(cursor.previous(), Ok(&3));
    /// ```
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.tail, None)
    }

    /// Provides a cursor with editing operations at the gap before the
    /// first element.
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        let (before, after) = (None, self.head);
        CursorMut::new(self, before, after)
    }

    /// Provides a cursor with editing operations at the gap after the
    /// last element.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        let (before, after) = (self.tail, None);
        CursorMut::new(self, before, after)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::Sequence;
    /// use std::iter::FromIterator;
    ///
    /// let sequence = Sequence::from_iter([0, 1, 2]);
    ///
    /// let mut iter = sequence.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::Sequence;
    /// use std::iter::FromIterator;
    ///
    /// let mut sequence = Sequence::from_iter([0, 1, 2]);
    ///
    /// for element in sequence.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// assert_eq!(Vec::from_iter(sequence), vec![10, 11, 12]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T> Node<T> {
    /// Create a detached node with the given element.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: None,
            prev: None,
            element,
        })))
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

impl<T: Debug> Debug for Sequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the elements in forward order, bracketed and separated by
/// `", "`; an empty sequence renders as `[]`.
///
/// # Examples
///
/// ```
/// use seq_list::Sequence;
/// use std::iter::FromIterator;
///
/// assert_eq!(Sequence::<i32>::new().to_string(), "[]");
/// assert_eq!(Sequence::from_iter([1, 2, 3]).to_string(), "[1, 2, 3]");
/// ```
impl<T: Display> Display for Sequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
            for element in iter {
                write!(f, ", {}", element)?;
            }
        }
        f.write_str("]")
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Sequence<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for Sequence<T> {}

unsafe impl<T: Sync> Sync for Sequence<T> {}

// Ensure that `Sequence` and its read-only iterators are covariant in their
// type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: Sequence<&'static str>) -> Sequence<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::SequenceError;
    use crate::sequence::Sequence;
    use std::cell::RefCell;
    use std::iter::FromIterator;

    #[test]
    fn sequence_create() {
        let mut sequence = Sequence::<i32>::new();
        assert!(sequence.is_empty());
        sequence.push_back(1);
        assert!(!sequence.is_empty());
        assert_eq!(sequence.remove_back(), Ok(1));
        assert!(sequence.is_empty());
    }

    #[test]
    fn sequence_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut sequence = Sequence::new();
        sequence.push_back(DropChecker::new(1, &dropped));
        sequence.push_back(DropChecker::new(2, &dropped));
        sequence.push_back(DropChecker::new(3, &dropped));
        drop(sequence);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn sequence_push_and_remove() {
        let mut sequence = Sequence::new();
        assert_eq!(sequence.front(), None);
        assert_eq!(sequence.back(), None);
        assert_eq!(
            sequence.remove_front(),
            Err(SequenceError::EmptyCollection)
        );
        assert_eq!(sequence.remove_back(), Err(SequenceError::EmptyCollection));

        sequence.push_back(1);
        assert_eq!(sequence.back(), Some(&1));
        assert_eq!(sequence.remove_front(), Ok(1));
        assert_eq!(sequence.remove_back(), Err(SequenceError::EmptyCollection));
        assert!(sequence.is_empty());

        sequence.push_front(1);
        sequence.push_front(2);
        sequence.push_back(3);
        assert_eq!(sequence.len(), 3);
        assert_eq!(sequence.front(), Some(&2));
        assert_eq!(sequence.back(), Some(&3));
        assert_eq!(sequence.remove_front(), Ok(2));
        assert_eq!(sequence.remove_back(), Ok(3));
        assert_eq!(sequence.remove_front(), Ok(1));
        assert!(sequence.is_empty());
    }

    #[test]
    fn sequence_insert_clamps_position() {
        let mut sequence = Sequence::from_iter(["a", "b", "c"]);

        sequence.insert(1, "x");
        assert_eq!(sequence.to_string(), "[a, x, b, c]");

        sequence.insert(-5, "y");
        assert_eq!(sequence.to_string(), "[y, a, x, b, c]");

        sequence.insert(99, "z");
        assert_eq!(sequence.to_string(), "[y, a, x, b, c, z]");

        sequence.insert(0, "w");
        assert_eq!(sequence.to_string(), "[w, y, a, x, b, c, z]");

        let mut empty = Sequence::new();
        empty.insert(3, "solo");
        assert_eq!(empty.to_string(), "[solo]");
    }

    #[test]
    fn sequence_remove_first_match_only() {
        let mut sequence = Sequence::from_iter([1, 2, 1, 3]);

        assert!(sequence.remove(&1));
        assert_eq!(sequence.to_string(), "[2, 1, 3]");

        assert!(sequence.remove(&3));
        assert_eq!(sequence.to_string(), "[2, 1]");

        assert!(!sequence.remove(&9));
        assert_eq!(sequence.len(), 2);

        assert!(sequence.remove(&2));
        assert!(sequence.remove(&1));
        assert!(sequence.is_empty());
        assert!(!sequence.remove(&1));
    }

    #[test]
    fn sequence_get_checks_empty_before_bounds() {
        let empty = Sequence::<i32>::new();
        assert_eq!(empty.get(0), Err(SequenceError::EmptyCollection));
        assert_eq!(empty.get(17), Err(SequenceError::EmptyCollection));

        let sequence = Sequence::from_iter(0..10);
        for at in 0..10 {
            assert_eq!(sequence.get(at), Ok(&(at as i32)));
        }
        assert_eq!(sequence.get(10), Err(SequenceError::IndexOutOfRange));
    }

    #[test]
    fn sequence_clear_and_reuse() {
        let mut sequence = Sequence::from_iter(0..5);
        sequence.clear();
        assert!(sequence.is_empty());
        assert_eq!(sequence.len(), 0);
        assert_eq!(sequence.front(), None);

        sequence.push_back(42);
        assert_eq!(sequence.len(), 1);
        assert_eq!(sequence.front(), Some(&42));
    }

    #[test]
    fn sequence_equality() {
        let sequence = Sequence::from_iter([1, 2, 3]);
        assert_eq!(sequence, Sequence::from_iter([1, 2, 3]));
        assert_ne!(sequence, Sequence::from_iter([1, 2]));
        assert_ne!(sequence, Sequence::from_iter([1, 2, 3, 4]));
        assert_ne!(sequence, Sequence::from_iter([3, 2, 1]));
        assert_eq!(Sequence::<i32>::new(), Sequence::new());
    }

    #[test]
    fn sequence_display() {
        assert_eq!(Sequence::<i32>::new().to_string(), "[]");
        assert_eq!(Sequence::from_iter([7]).to_string(), "[7]");
        assert_eq!(Sequence::from_iter([1, 2, 3]).to_string(), "[1, 2, 3]");
    }
}

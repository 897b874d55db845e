use crate::errors::SequenceError;
use crate::sequence::{Node, Sequence};
use std::fmt;
use std::fmt::Formatter;
use std::ptr::NonNull;

/// A cursor over a `Sequence`.
///
/// A `Cursor` is like an iterator, except that it can freely move
/// back-and-forth. It always sits in a *gap* between two neighboring
/// elements: in a sequence with length *n* there are *n* + 1 valid gaps,
/// including the virtual positions before the first element and after the
/// last one.
///
/// Moving the cursor returns a reference to the element it passes over;
/// moving past either end fails with [`SequenceError::NoElement`] and
/// leaves the cursor in place.
///
/// # Examples
///
/// ```
/// use seq_list::{Sequence, SequenceError};
/// use std::iter::FromIterator;
///
/// // Create a sequence: [ A B C D ]
/// let sequence = Sequence::from_iter(['A', 'B', 'C', 'D']);
///
/// // Create a cursor at the start: [|A B C D ]
/// let mut cursor = sequence.cursor_start();
/// assert!(cursor.has_next());
/// assert!(!cursor.has_previous());
///
/// // Pass over 'A': [ A|B C D ]
/// assert_eq!(cursor.next(), Ok(&'A'));
///
/// // Pass back over 'A': [|A B C D ]
/// assert_eq!(cursor.previous(), Ok(&'A'));
/// assert_eq!(cursor.previous(), Err(SequenceError::NoElement));
///
/// // Jump to the end: [ A B C D|]
/// cursor.move_to_end();
/// assert_eq!(cursor.previous(), Ok(&'D'));
/// ```
pub struct Cursor<'a, T: 'a> {
    pub(crate) before: Option<NonNull<Node<T>>>,
    pub(crate) after: Option<NonNull<Node<T>>>,
    pub(crate) sequence: &'a Sequence<T>,
}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        Cursor { ..*self }
    }
}

/// Compare cursors by their position.
///
/// Only cursors over the same sequence and sitting in the same gap are
/// considered equal.
impl<'a, T: 'a> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_sequence_with(other) && self.before == other.before && self.after == other.after
    }
}

impl<'a, T: 'a> Eq for Cursor<'a, T> {}

/// A cursor over a `Sequence` with editing operations.
///
/// A `CursorMut` can restructure the sequence mid-traversal: it splices new
/// elements into its gap and removes the neighbors of its gap. Because it
/// holds the sequence mutably for its whole lifetime, no other handle can
/// mutate the sequence underneath it, so the cursor's gap never dangles.
///
/// # Examples
///
/// ```
/// use seq_list::Sequence;
/// use std::iter::FromIterator;
///
/// let mut sequence = Sequence::from_iter([1, 2, 4]);
/// let mut cursor = sequence.cursor_start_mut();
///
/// assert_eq!(cursor.next(), Ok(&1));
/// assert_eq!(cursor.next(), Ok(&2));
/// cursor.insert(3); // becomes [1, 2, 3, 4], gap after the 3
///
/// assert_eq!(cursor.remove_next(), Ok(4)); // becomes [1, 2, 3]
///
/// assert_eq!(Vec::from_iter(sequence), vec![1, 2, 3]);
/// ```
pub struct CursorMut<'a, T: 'a> {
    pub(crate) before: Option<NonNull<Node<T>>>,
    pub(crate) after: Option<NonNull<Node<T>>>,
    pub(crate) sequence: &'a mut Sequence<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Returns `true` if an element exists after the cursor's gap.
            #[inline]
            pub fn has_next(&self) -> bool {
                self.after.is_some()
            }

            /// Returns `true` if an element exists before the cursor's gap.
            #[inline]
            pub fn has_previous(&self) -> bool {
                self.before.is_some()
            }

            /// Returns `true` if the underlying `Sequence` is empty.
            pub fn is_empty(&self) -> bool {
                self.sequence.is_empty()
            }

            /// Move the cursor to the gap before the first element.
            ///
            /// This operation should compute in *O*(1) time.
            #[inline]
            pub fn move_to_start(&mut self) {
                self.before = None;
                self.after = self.sequence.head_node();
            }

            /// Move the cursor to the gap after the last element.
            ///
            /// This operation should compute in *O*(1) time.
            #[inline]
            pub fn move_to_end(&mut self) {
                self.before = self.sequence.tail_node();
                self.after = None;
            }

            /// Peek at the element after the gap without moving.
            pub fn peek_next(&self) -> Option<&T> {
                // SAFETY: `after` is a valid node of the borrowed sequence.
                self.after.map(|node| unsafe { &(*node.as_ptr()).element })
            }

            /// Peek at the element before the gap without moving.
            pub fn peek_previous(&self) -> Option<&T> {
                // SAFETY: `before` is a valid node of the borrowed sequence.
                self.before.map(|node| unsafe { &(*node.as_ptr()).element })
            }

            /// Move the cursor forward by `steps` elements, or fail with
            /// [`SequenceError::NoElement`] as soon as the end is reached.
            ///
            /// This operation should compute in *O*(*n*) time.
            pub fn seek_forward(&mut self, steps: usize) -> Result<(), SequenceError> {
                for _ in 0..steps {
                    self.next()?;
                }
                Ok(())
            }

            /// Move the cursor backward by `steps` elements, or fail with
            /// [`SequenceError::NoElement`] as soon as the start is reached.
            ///
            /// This operation should compute in *O*(*n*) time.
            pub fn seek_backward(&mut self, steps: usize) -> Result<(), SequenceError> {
                for _ in 0..steps {
                    self.previous()?;
                }
                Ok(())
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("sequence", &self.sequence)
                    .field("next", &self.peek_next())
                    .field("previous", &self.peek_previous())
                    .finish()
            }
        }
    };
}

impl_cursor!(Cursor);
impl_cursor!(CursorMut);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(
        sequence: &'a Sequence<T>,
        before: Option<NonNull<Node<T>>>,
        after: Option<NonNull<Node<T>>>,
    ) -> Self {
        Self {
            before,
            after,
            sequence,
        }
    }

    fn same_sequence_with(&self, other: &Self) -> bool {
        std::ptr::eq(self.sequence, other.sequence)
    }

    /// Advance the gap one element forward and return the element just
    /// passed, or fail with [`SequenceError::NoElement`] if the cursor is
    /// already past the last element.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::{Sequence, SequenceError};
    /// use std::iter::FromIterator;
    ///
    /// let sequence = Sequence::from_iter(["a", "b", "c"]);
    /// let mut cursor = sequence.cursor_start();
    ///
    /// assert_eq!(cursor.next(), Ok(&"a"));
    /// assert_eq!(cursor.next(), Ok(&"b"));
    /// assert_eq!(cursor.next(), Ok(&"c"));
    /// assert_eq!(cursor.next(), Err(SequenceError::NoElement));
    /// ```
    pub fn next(&mut self) -> Result<&'a T, SequenceError> {
        let node = self.after.ok_or(SequenceError::NoElement)?;
        // SAFETY: `after` is a valid node of the borrowed sequence, and the
        // shared borrow keeps it alive for 'a.
        unsafe {
            self.before = Some(node);
            self.after = node.as_ref().next;
            Ok(&(*node.as_ptr()).element)
        }
    }

    /// Move the gap one element backward and return the element just
    /// passed, or fail with [`SequenceError::NoElement`] if the cursor is
    /// already before the first element.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::{Sequence, SequenceError};
    /// use std::iter::FromIterator;
    ///
    /// let sequence = Sequence::from_iter(["a", "b", "c"]);
    /// let mut cursor = sequence.cursor_end();
    ///
    /// assert_eq!(cursor.previous(), Ok(&"c"));
    /// assert_eq!(cursor.previous(), Ok(&"b"));
    /// assert_eq!(cursor.previous(), Ok(&"a"));
    /// assert_eq!(cursor.previous(), Err(SequenceError::NoElement));
    /// ```
    pub fn previous(&mut self) -> Result<&'a T, SequenceError> {
        let node = self.before.ok_or(SequenceError::NoElement)?;
        // SAFETY: as in `next`, on the other side of the gap.
        unsafe {
            self.after = Some(node);
            self.before = node.as_ref().prev;
            Ok(&(*node.as_ptr()).element)
        }
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(
        sequence: &'a mut Sequence<T>,
        before: Option<NonNull<Node<T>>>,
        after: Option<NonNull<Node<T>>>,
    ) -> Self {
        Self {
            before,
            after,
            sequence,
        }
    }

    /// Advance the gap one element forward and return the element just
    /// passed, or fail with [`SequenceError::NoElement`] if the cursor is
    /// already past the last element.
    ///
    /// The returned reference is tied to this borrow of the cursor, so it
    /// cannot outlive a later mutation through the cursor.
    pub fn next(&mut self) -> Result<&T, SequenceError> {
        let node = self.after.ok_or(SequenceError::NoElement)?;
        // SAFETY: `after` is a valid node of the borrowed sequence.
        unsafe {
            self.before = Some(node);
            self.after = node.as_ref().next;
            Ok(&(*node.as_ptr()).element)
        }
    }

    /// Move the gap one element backward and return the element just
    /// passed, or fail with [`SequenceError::NoElement`] if the cursor is
    /// already before the first element.
    pub fn previous(&mut self) -> Result<&T, SequenceError> {
        let node = self.before.ok_or(SequenceError::NoElement)?;
        // SAFETY: as in `next`, on the other side of the gap.
        unsafe {
            self.after = Some(node);
            self.before = node.as_ref().prev;
            Ok(&(*node.as_ptr()).element)
        }
    }

    /// Provide a mutable reference to the element after the gap.
    pub fn peek_next_mut(&mut self) -> Option<&mut T> {
        // SAFETY: `after` is a valid node of the mutably borrowed sequence.
        self.after
            .map(|node| unsafe { &mut (*node.as_ptr()).element })
    }

    /// Provide a mutable reference to the element before the gap.
    pub fn peek_previous_mut(&mut self) -> Option<&mut T> {
        // SAFETY: `before` is a valid node of the mutably borrowed sequence.
        self.before
            .map(|node| unsafe { &mut (*node.as_ptr()).element })
    }

    /// Splice a new element into the gap. The cursor ends up in the gap
    /// just after the new element, so repeated `insert` calls append in
    /// order.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::Sequence;
    /// use std::iter::FromIterator;
    ///
    /// let mut sequence = Sequence::from_iter([1, 4]);
    /// let mut cursor = sequence.cursor_start_mut();
    ///
    /// assert_eq!(cursor.next(), Ok(&1));
    /// cursor.insert(2);
    /// cursor.insert(3);
    ///
    /// assert_eq!(Vec::from_iter(sequence), vec![1, 2, 3, 4]);
    /// ```
    pub fn insert(&mut self, value: T) {
        let node = Node::new_detached(value);
        // SAFETY: `(before, after)` is a gap of the borrowed sequence.
        unsafe { self.sequence.attach_node(self.before, self.after, node) };
        self.before = Some(node);
    }

    /// Remove and return the element just after the gap, or fail with
    /// [`SequenceError::NoElement`] if the cursor is at the end.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn remove_next(&mut self) -> Result<T, SequenceError> {
        let node = self.after.ok_or(SequenceError::NoElement)?;
        // SAFETY: `after` is a valid node of the borrowed sequence.
        unsafe {
            self.after = node.as_ref().next;
            Ok(self.sequence.detach_node(node).into_element())
        }
    }

    /// Remove and return the element just before the gap, or fail with
    /// [`SequenceError::NoElement`] if the cursor is at the start.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::Sequence;
    /// use std::iter::FromIterator;
    ///
    /// let mut sequence = Sequence::from_iter([1, 2, 3]);
    /// let mut cursor = sequence.cursor_end_mut();
    ///
    /// assert_eq!(cursor.remove_previous(), Ok(3));
    /// assert_eq!(cursor.remove_previous(), Ok(2));
    ///
    /// assert_eq!(Vec::from_iter(sequence), vec![1]);
    /// ```
    pub fn remove_previous(&mut self) -> Result<T, SequenceError> {
        let node = self.before.ok_or(SequenceError::NoElement)?;
        // SAFETY: `before` is a valid node of the borrowed sequence.
        unsafe {
            self.before = node.as_ref().prev;
            Ok(self.sequence.detach_node(node).into_element())
        }
    }

    /// Re-borrow the mutable cursor as a short-lived read-only one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.sequence, self.before, self.after)
    }

    /// Temporarily view the sequence via an immutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::Sequence;
    /// use std::iter::FromIterator;
    ///
    /// let mut sequence = Sequence::from_iter([1, 2, 3]);
    /// let mut cursor = sequence.cursor_start_mut();
    ///
    /// cursor.insert(0);
    /// assert_eq!(cursor.view().len(), 4);
    /// ```
    pub fn view(&self) -> &Sequence<T> {
        self.sequence
    }
}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}

unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

unsafe impl<T: Send> Send for CursorMut<'_, T> {}

unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::errors::SequenceError;
    use crate::sequence::Sequence;
    use std::iter::FromIterator;

    #[test]
    fn cursor_walks_forward_then_fails() {
        let sequence = Sequence::from_iter(["a", "b", "c"]);
        let mut cursor = sequence.cursor_start();

        assert!(cursor.has_next());
        assert!(!cursor.has_previous());
        assert_eq!(cursor.next(), Ok(&"a"));
        assert_eq!(cursor.next(), Ok(&"b"));
        assert_eq!(cursor.next(), Ok(&"c"));
        assert!(!cursor.has_next());
        assert_eq!(cursor.next(), Err(SequenceError::NoElement));
        // The failed move left the cursor in place.
        assert_eq!(cursor.previous(), Ok(&"c"));
    }

    #[test]
    fn cursor_walks_backward_then_fails() {
        let sequence = Sequence::from_iter(["a", "b", "c"]);
        let mut cursor = sequence.cursor_end();

        assert!(!cursor.has_next());
        assert!(cursor.has_previous());
        assert_eq!(cursor.previous(), Ok(&"c"));
        assert_eq!(cursor.previous(), Ok(&"b"));
        assert_eq!(cursor.previous(), Ok(&"a"));
        assert!(!cursor.has_previous());
        assert_eq!(cursor.previous(), Err(SequenceError::NoElement));
        assert_eq!(cursor.next(), Ok(&"a"));
    }

    #[test]
    fn cursor_passes_the_same_element_both_ways() {
        let sequence = Sequence::from_iter([1, 2, 3]);
        let mut cursor = sequence.cursor_start();

        assert_eq!(cursor.next(), Ok(&1));
        assert_eq!(cursor.next(), Ok(&2));
        assert_eq!(cursor.previous(), Ok(&2));
        assert_eq!(cursor.next(), Ok(&2));
    }

    #[test]
    fn cursor_repositioning() {
        let sequence = Sequence::from_iter([1, 2, 3]);
        let mut cursor = sequence.cursor_start();

        cursor.move_to_end();
        assert!(!cursor.has_next());
        assert_eq!(cursor.peek_previous(), Some(&3));

        cursor.move_to_start();
        assert!(!cursor.has_previous());
        assert_eq!(cursor.peek_next(), Some(&1));

        assert!(cursor.seek_forward(3).is_ok());
        assert_eq!(cursor.seek_forward(1), Err(SequenceError::NoElement));
        assert!(cursor.seek_backward(3).is_ok());
        assert_eq!(cursor.seek_backward(1), Err(SequenceError::NoElement));
    }

    #[test]
    fn cursor_on_empty_sequence() {
        let sequence = Sequence::<i32>::new();
        let mut cursor = sequence.cursor_start();
        assert!(cursor.is_empty());
        assert!(!cursor.has_next());
        assert!(!cursor.has_previous());
        assert_eq!(cursor.next(), Err(SequenceError::NoElement));
        assert_eq!(cursor.previous(), Err(SequenceError::NoElement));
    }

    #[test]
    fn cursor_equality_is_positional() {
        let sequence = Sequence::from_iter([1, 2, 3]);
        let mut first = sequence.cursor_start();
        let second = sequence.cursor_start();
        assert_eq!(first, second);

        assert!(first.next().is_ok());
        assert_ne!(first, second);

        let other_sequence = Sequence::from_iter([1, 2, 3]);
        assert_ne!(second, other_sequence.cursor_start());
    }

    #[test]
    fn cursor_mut_inserts_mid_traversal() {
        let mut sequence = Sequence::from_iter([1, 2, 3]);
        let mut cursor = sequence.cursor_start_mut();

        assert!(cursor.seek_forward(1).is_ok());
        cursor.insert(9); // becomes [1, 9, 2, 3], gap after the 9
        assert_eq!(cursor.peek_previous(), Some(&9));
        assert_eq!(cursor.peek_next(), Some(&2));

        assert_eq!(Vec::from_iter(sequence), vec![1, 9, 2, 3]);
    }

    #[test]
    fn cursor_mut_removes_around_the_gap() {
        let mut sequence = Sequence::from_iter(0..5);
        let mut cursor = sequence.cursor_start_mut();

        assert!(cursor.seek_forward(2).is_ok());
        assert_eq!(cursor.remove_next(), Ok(2)); // becomes [0, 1, 3, 4]
        assert_eq!(cursor.remove_previous(), Ok(1)); // becomes [0, 3, 4]
        assert_eq!(cursor.peek_previous(), Some(&0));
        assert_eq!(cursor.peek_next(), Some(&3));

        cursor.move_to_start();
        assert_eq!(cursor.remove_previous(), Err(SequenceError::NoElement));
        cursor.move_to_end();
        assert_eq!(cursor.remove_next(), Err(SequenceError::NoElement));

        assert_eq!(Vec::from_iter(sequence), vec![0, 3, 4]);
    }

    #[test]
    fn cursor_mut_edits_elements_in_place() {
        let mut sequence = Sequence::from_iter([1, 2, 3]);
        let mut cursor = sequence.cursor_start_mut();

        if let Some(element) = cursor.peek_next_mut() {
            *element *= 10;
        }
        cursor.move_to_end();
        if let Some(element) = cursor.peek_previous_mut() {
            *element *= 10;
        }

        assert_eq!(Vec::from_iter(sequence), vec![10, 2, 30]);
    }

    #[test]
    fn cursor_mut_reborrows_as_read_only() {
        let mut sequence = Sequence::from_iter([1, 2, 3]);
        let mut cursor = sequence.cursor_start_mut();
        assert!(cursor.next().is_ok());

        let read_only = cursor.as_cursor();
        assert_eq!(read_only.peek_next(), Some(&2));
        assert_eq!(read_only.peek_previous(), Some(&1));

        assert_eq!(cursor.view().len(), 3);
    }
}

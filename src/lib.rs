//! This crate provides a generic, order-preserving sequence container,
//! implemented as a doubly-linked list with owned nodes.
//!
//! The [`Sequence`] supports insertion and removal at both ends in constant
//! time, positional access in *O*(*n*) time, bidirectional traversal through
//! [cursors](crate::sequence::cursor::Cursor), and a stable,
//! comparator-driven merge sort that produces a new sorted sequence without
//! touching the original.
//!
//! Here is a quick example showing how the sequence works.
//!
//! ```
//! use seq_list::Sequence;
//! use std::iter::FromIterator;
//!
//! let mut sequence = Sequence::from_iter(["b", "a", "c"]);
//!
//! let sorted = sequence.sorted();
//! assert_eq!(sorted.to_string(), "[a, b, c]");
//!
//! // Sorting never mutates the receiver.
//! assert_eq!(sequence.to_string(), "[b, a, c]");
//!
//! sequence.push_front("d");
//! assert_eq!(sequence.to_string(), "[d, b, a, c]");
//!
//! assert_eq!(sorted.reversed().to_string(), "[c, b, a]");
//! ```
//!
//! # Memory Layout
//!
//! A `Sequence<T>` holds `head` and `tail` pointers and a length counter.
//! Each node is allocated on the heap and carries:
//! - a `next` pointer to its successor (`None` for the last node);
//! - a `prev` pointer to its predecessor (`None` for the first node);
//! - the payload `T`.
//!
//! Ownership flows strictly forward: a node is reclaimed exactly once,
//! through the forward chain, when it is detached or when the sequence is
//! dropped. The `prev` pointer is a pure back-reference and never drives
//! destruction.
//!
//! # Iteration
//!
//! [`Iter`] and [`IterMut`] are fused, double-ended iterators that walk the
//! sequence like an array. [`IterMut`] allows mutating the elements but not
//! the linked structure.
//!
//! ```
//! use seq_list::Sequence;
//! use std::iter::FromIterator;
//!
//! let mut sequence = Sequence::from_iter([1, 2, 3]);
//! let mut iter = sequence.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next_back(), Some(&3));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), None);
//!
//! sequence.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(sequence), vec![2, 4, 6]);
//! ```
//!
//! # Cursors
//!
//! A cursor sits in one of the *n* + 1 gaps of a sequence with *n* elements,
//! including the virtual positions before the first element and after the
//! last. Moving the cursor returns the element it passes over; running off
//! either end reports [`SequenceError::NoElement`] and leaves the cursor in
//! place.
//!
//! ```
//! use seq_list::{Sequence, SequenceError};
//! use std::iter::FromIterator;
//!
//! let sequence = Sequence::from_iter(['a', 'b', 'c']);
//! let mut cursor = sequence.cursor_start();
//!
//! assert_eq!(cursor.next(), Ok(&'a'));
//! assert_eq!(cursor.next(), Ok(&'b'));
//! assert_eq!(cursor.next(), Ok(&'c'));
//! assert_eq!(cursor.next(), Err(SequenceError::NoElement));
//!
//! cursor.move_to_end();
//! assert_eq!(cursor.previous(), Ok(&'c'));
//! ```
//!
//! [`CursorMut`] additionally splices and removes elements at its gap, so a
//! traversal can restructure the sequence as it goes. Because it holds the
//! sequence mutably for its whole lifetime, no other handle can observe or
//! mutate the sequence underneath it.
//!
//! [`Sequence`]: crate::Sequence
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`CursorMut`]: crate::sequence::cursor::CursorMut
//! [`SequenceError::NoElement`]: crate::SequenceError::NoElement

#[doc(inline)]
pub use collection::Collection;
#[doc(inline)]
pub use errors::SequenceError;
#[doc(inline)]
pub use sequence::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use sequence::Sequence;

pub mod collection;
pub mod errors;
pub mod sequence;

mod experiments;

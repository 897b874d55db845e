use crate::sequence::{Node, Sequence};
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// An iterator over the elements of a `Sequence`.
///
/// This `struct` is created by [`Sequence::iter`]. See its documentation
/// for more.
pub struct Iter<'a, T: 'a> {
    front: Option<NonNull<Node<T>>>,
    back: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<&'a Node<T>>,
}

/// A mutable iterator over the elements of a `Sequence`.
///
/// This `struct` is created by [`Sequence::iter_mut`]. It yields mutable
/// references to the elements but never exposes the linked structure.
pub struct IterMut<'a, T: 'a> {
    front: Option<NonNull<Node<T>>>,
    back: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<&'a mut Node<T>>,
}

/// An owning iterator over the elements of a `Sequence`.
///
/// This `struct` is created by the `into_iter` method on `Sequence`
/// (provided by the [`IntoIterator`] trait). It detaches nodes one by one,
/// so the sequence is deallocated as the iteration proceeds.
pub struct IntoIter<T> {
    sequence: Sequence<T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(sequence: &'a Sequence<T>) -> Self {
        Self {
            front: sequence.head_node(),
            back: sequence.tail_node(),
            len: sequence.len(),
            _marker: PhantomData,
        }
    }
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(sequence: &'a mut Sequence<T>) -> Self {
        Self {
            front: sequence.head_node(),
            back: sequence.tail_node(),
            len: sequence.len(),
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        self.front.map(|node| {
            // SAFETY: `len > 0`, so `front` is a valid node of a sequence
            // that outlives 'a.
            unsafe {
                self.len -= 1;
                self.front = node.as_ref().next;
                &(*node.as_ptr()).element
            }
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        self.back.map(|node| {
            // SAFETY: as in `next`, walking from the other end. The length
            // guard stops the two ends from crossing.
            unsafe {
                self.len -= 1;
                self.back = node.as_ref().prev;
                &(*node.as_ptr()).element
            }
        })
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }
        self.front.map(|node| {
            // SAFETY: `len > 0`, so `front` is a valid node of a sequence
            // borrowed mutably for 'a, and the iterator hands out each
            // element at most once.
            unsafe {
                self.len -= 1;
                self.front = node.as_ref().next;
                &mut (*node.as_ptr()).element
            }
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T: 'a> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }
        self.back.map(|node| {
            // SAFETY: as in `next`, walking from the other end.
            unsafe {
                self.len -= 1;
                self.back = node.as_ref().prev;
                &mut (*node.as_ptr()).element
            }
        })
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.sequence.remove_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.sequence.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.sequence.remove_back().ok()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for Iter<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.len).finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut").field(&self.len).finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.sequence).finish()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Sequence<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the sequence into an iterator yielding elements by value.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::Sequence;
    /// use std::iter::FromIterator;
    ///
    /// let sequence = Sequence::from_iter([1, 2, 3]);
    /// let doubled: Vec<_> = sequence.into_iter().map(|x| x * 2).collect();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { sequence: self }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sequence = Sequence::new();
        sequence.extend(iter);
        sequence
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push_back(element);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

#[cfg(test)]
mod tests {
    use crate::sequence::Sequence;
    use std::iter::FromIterator;

    #[test]
    fn iterator_forward_and_backward() {
        let sequence = Sequence::from_iter(0..4);

        assert_eq!(Vec::from_iter(sequence.iter()), vec![&0, &1, &2, &3]);
        assert_eq!(Vec::from_iter(sequence.iter().rev()), vec![&3, &2, &1, &0]);
    }

    #[test]
    fn iterator_ends_meet_in_the_middle() {
        let sequence = Sequence::from_iter(0..4);
        let mut iter = sequence.iter();

        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&2));
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn iterator_over_empty_sequence() {
        let sequence = Sequence::<i32>::new();
        let mut iter = sequence.iter();
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn iterator_mut_edits_every_element() {
        let mut sequence = Sequence::from_iter([1, 2, 3]);
        for element in sequence.iter_mut() {
            *element *= 10;
        }
        assert_eq!(Vec::from_iter(sequence), vec![10, 20, 30]);

        let mut sequence = Sequence::from_iter([1, 2, 3]);
        for element in sequence.iter_mut().rev() {
            *element -= 1;
        }
        assert_eq!(Vec::from_iter(sequence), vec![0, 1, 2]);
    }

    #[test]
    fn into_iterator_consumes_from_both_ends() {
        let sequence = Sequence::from_iter(0..5);
        let mut iter = sequence.into_iter();

        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.size_hint(), (3, Some(3)));
        assert_eq!(Vec::from_iter(iter), vec![1, 2, 3]);
    }

    #[test]
    fn into_iterator_drops_the_remainder() {
        // Dropping a partly consumed iterator must free the unvisited
        // nodes too.
        let sequence = Sequence::from_iter((0..5).map(|i| i.to_string()));
        let mut iter = sequence.into_iter();
        assert_eq!(iter.next(), Some("0".to_string()));
        drop(iter);
    }

    #[test]
    fn collect_and_extend() {
        let mut sequence: Sequence<i32> = (0..3).collect();
        assert_eq!(sequence.to_string(), "[0, 1, 2]");

        sequence.extend(3..5);
        assert_eq!(sequence.to_string(), "[0, 1, 2, 3, 4]");

        sequence.extend(&[5, 6]);
        assert_eq!(sequence.to_string(), "[0, 1, 2, 3, 4, 5, 6]");
    }

    #[test]
    fn reference_into_iterator() {
        let mut sequence = Sequence::from_iter([1, 2, 3]);

        let mut total = 0;
        for element in &sequence {
            total += element;
        }
        assert_eq!(total, 6);

        for element in &mut sequence {
            *element += 1;
        }
        assert_eq!(sequence.to_string(), "[2, 3, 4]");
    }
}

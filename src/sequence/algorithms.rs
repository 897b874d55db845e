use crate::sequence::Sequence;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: PartialOrd> PartialOrd for Sequence<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for Sequence<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for element in self {
            element.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl<T> Sequence<T> {
    /// Returns `true` if the `Sequence` contains an element equal to the
    /// given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::Sequence;
    /// use std::iter::FromIterator;
    ///
    /// let sequence = Sequence::from_iter([0, 1, 2]);
    ///
    /// assert_eq!(sequence.contains(&0), true);
    /// assert_eq!(sequence.contains(&10), false);
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == value)
    }

    /// Returns the position of the first element equal to the given value,
    /// in forward order, or `None` if no element matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::Sequence;
    /// use std::iter::FromIterator;
    ///
    /// let sequence = Sequence::from_iter(["a", "b", "a"]);
    ///
    /// assert_eq!(sequence.index_of(&"a"), Some(0));
    /// assert_eq!(sequence.index_of(&"b"), Some(1));
    /// assert_eq!(sequence.index_of(&"z"), None);
    /// ```
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|e| e == value)
    }

    /// Returns a new sequence holding clones of the elements in the
    /// opposite order. The receiver is untouched.
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
    /// let sequence = Sequence::from_iter([1, 2, 3]);
    ///
    /// assert_eq!(sequence.reversed().to_string(), "[3, 2, 1]");
    /// assert_eq!(sequence.to_string(), "[1, 2, 3]");
    /// ```
    pub fn reversed(&self) -> Sequence<T>
    where
        T: Clone,
    {
        let mut reversed = Sequence::new();
        for element in self {
            reversed.push_front(element.clone());
        }
        reversed
    }

    /// Returns a new sequence holding the elements sorted by their natural
    /// order. The receiver is untouched.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::Sequence;
    /// use std::iter::FromIterator;
    ///
    /// let sequence = Sequence::from_iter([5, 2, 4, 3, 1]);
    ///
    /// assert_eq!(sequence.sorted().to_string(), "[1, 2, 3, 4, 5]");
    /// assert_eq!(sequence.to_string(), "[5, 2, 4, 3, 1]");
    /// ```
    pub fn sorted(&self) -> Sequence<T>
    where
        T: Clone + Ord,
    {
        self.sorted_by(T::cmp)
    }

    /// Returns a new sequence holding the elements sorted by a comparator
    /// function. The receiver is untouched.
    ///
    /// This sort is stable (i.e., does not reorder elements the comparator
    /// reports as equal).
    ///
    /// The comparator must define a total ordering for the elements in the
    /// sequence. If the ordering is not total, the order of the elements is
    /// unspecified. For example, while [`f64`] doesn't implement [`Ord`]
    /// because `NaN != NaN`, we can use `partial_cmp` as our comparator
    /// when we know the sequence doesn't contain a `NaN`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::Sequence;
    /// use std::iter::FromIterator;
    ///
    /// let sequence = Sequence::from_iter([5, 4, 1, 3, 2]);
    ///
    /// let ascending = sequence.sorted_by(|a, b| a.cmp(b));
    /// assert_eq!(ascending.to_string(), "[1, 2, 3, 4, 5]");
    ///
    /// // reverse sorting
    /// let descending = sequence.sorted_by(|a, b| b.cmp(a));
    /// assert_eq!(descending.to_string(), "[5, 4, 3, 2, 1]");
    /// ```
    pub fn sorted_by<F>(&self, mut compare: F) -> Sequence<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        merge_sort(self.clone(), &mut compare)
    }

    /// Returns `true` if the sequence contains an element equal to the
    /// given value.
    ///
    /// This is meant for sequences sorted under the given comparator, yet
    /// the membership decision uses element equality and always scans the
    /// whole sequence in forward order; the comparator plays no part in the
    /// answer. Callers therefore get plain membership even when the
    /// sequence is not sorted, or when the comparator considers unequal
    /// elements equivalent.
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
    /// let sorted = Sequence::from_iter([1, 3, 5, 7]);
    ///
    /// assert!(sorted.linear_search_by(&5, |a, b| a.cmp(b)));
    /// assert!(!sorted.linear_search_by(&4, |a, b| a.cmp(b)));
    /// ```
    pub fn linear_search_by<F>(&self, value: &T, compare: F) -> bool
    where
        T: PartialEq,
        F: FnMut(&T, &T) -> Ordering,
    {
        let _ = compare;
        self.contains(value)
    }

    /// Returns `true` if the sequence contains an element equal to the
    /// given value, scanning under the natural order. See
    /// [`linear_search_by`].
    ///
    /// [`linear_search_by`]: Sequence::linear_search_by
    pub fn linear_search(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.linear_search_by(value, T::cmp)
    }
}

fn merge_sort<T, F>(mut sequence: Sequence<T>, compare: &mut F) -> Sequence<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if sequence.len() < 2 {
        return sequence;
    }
    let front_half = split_front_half(&mut sequence);
    let left = merge_sort(front_half, compare);
    let right = merge_sort(sequence, compare);
    merge(left, right, compare)
}

/// Moves the first `len / 2` elements out into a new sequence, leaving the
/// rest behind.
fn split_front_half<T>(sequence: &mut Sequence<T>) -> Sequence<T> {
    let mut front = Sequence::new();
    let half = sequence.len() / 2;
    while front.len() < half {
        match sequence.remove_front().ok() {
            Some(value) => front.push_back(value),
            None => break,
        }
    }
    front
}

/// Merges two sequences sorted under `compare` into one. Ties take the
/// element from `left`, which keeps the sort stable.
fn merge<T, F>(mut left: Sequence<T>, mut right: Sequence<T>, compare: &mut F) -> Sequence<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Sequence::new();
    loop {
        let take_left = match (left.front(), right.front()) {
            (Some(a), Some(b)) => compare(a, b) != Ordering::Greater,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let source = if take_left { &mut left } else { &mut right };
        match source.remove_front().ok() {
            Some(value) => merged.push_back(value),
            None => break,
        }
    }
    merged
}

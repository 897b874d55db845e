use crate::sequence::iterator::Iter;
use crate::sequence::Sequence;

/// The capability surface shared by element containers.
///
/// Container kinds that can accept elements, answer membership queries and
/// hand out a read-only traversal implement this trait, so callers can be
/// written against the capability rather than a concrete container.
///
/// # Examples
///
/// ```
/// use seq_list::{Collection, Sequence};
///
/// fn dedup_push<T: PartialEq, C: Collection<T>>(collection: &mut C, value: T) {
///     if !collection.contains(&value) {
///         collection.push(value);
///     }
/// }
///
/// let mut sequence = Sequence::new();
/// dedup_push(&mut sequence, 1);
/// dedup_push(&mut sequence, 2);
/// dedup_push(&mut sequence, 1);
/// assert_eq!(sequence.len(), 2);
/// ```
pub trait Collection<T> {
    /// The read-only traversal over the container, in its canonical order.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Add an element at the container's canonical insertion position.
    fn push(&mut self, value: T);

    /// Returns `true` if some stored element equals `value`.
    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq;

    /// Number of stored elements.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every element.
    fn clear(&mut self);

    /// Traverse the elements in the container's canonical order.
    fn iter(&self) -> Self::Iter<'_>;
}

/// `Sequence` pushes at the back, so `Collection::iter` observes elements
/// in insertion order.
impl<T> Collection<T> for Sequence<T> {
    type Iter<'a> = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn push(&mut self, value: T) {
        self.push_back(value);
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        Sequence::contains(self, value)
    }

    fn len(&self) -> usize {
        Sequence::len(self)
    }

    fn clear(&mut self) {
        Sequence::clear(self);
    }

    fn iter(&self) -> Iter<'_, T> {
        Sequence::iter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::Collection;
    use crate::sequence::Sequence;

    fn exercise<C: Collection<i32>>(collection: &mut C) {
        assert!(collection.is_empty());
        collection.push(1);
        collection.push(2);
        collection.push(3);
        assert_eq!(collection.len(), 3);
        assert!(collection.contains(&2));
        assert!(!collection.contains(&4));
        assert_eq!(collection.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
        collection.clear();
        assert!(collection.is_empty());
        assert!(!collection.contains(&1));
    }

    #[test]
    fn sequence_is_a_collection() {
        let mut sequence = Sequence::new();
        exercise(&mut sequence);
        // The sequence itself is usable again after going through the trait.
        sequence.push_back(7);
        assert_eq!(sequence.front(), Some(&7));
    }
}

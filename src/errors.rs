/// Errors reported by sequence and cursor operations.
///
/// Every failure is a synchronous caller error, not a transient condition:
/// an operation that returns one of these has left the sequence exactly as
/// it found it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// A supplied value cannot be stored in the sequence. Owned elements
    /// are always well-formed values, so the operations of this crate never
    /// report this themselves.
    InvalidArgument,

    /// The sequence has no elements to read or remove.
    EmptyCollection,

    /// A positional access lies outside `0..len`.
    IndexOutOfRange,

    /// A cursor was asked to move past the end of the sequence.
    NoElement,
}

impl core::fmt::Display for SequenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SequenceError::InvalidArgument => f.write_str("value cannot be stored"),
            SequenceError::EmptyCollection => f.write_str("the sequence is empty"),
            SequenceError::IndexOutOfRange => f.write_str("index out of range"),
            SequenceError::NoElement => f.write_str("no element in that direction"),
        }
    }
}

impl std::error::Error for SequenceError {}

#[cfg(test)]
mod tests {
    use super::SequenceError;

    #[test]
    fn display_messages() {
        assert_eq!(
            SequenceError::EmptyCollection.to_string(),
            "the sequence is empty"
        );
        assert_eq!(
            SequenceError::IndexOutOfRange.to_string(),
            "index out of range"
        );
        assert_eq!(
            SequenceError::NoElement.to_string(),
            "no element in that direction"
        );
        assert_eq!(
            SequenceError::InvalidArgument.to_string(),
            "value cannot be stored"
        );
    }
}

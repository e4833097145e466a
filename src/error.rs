//! Errors for weighted collections and draw sequences.

use thiserror::Error;

/// Broad category of a [`WeightedError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A caller-supplied argument is unusable (bad weight, mismatched lengths, absent source).
    InvalidArgument,
    /// An index or range lies outside the collection.
    OutOfRange,
    /// The operation is not valid in the current state of a draw sequence.
    IllegalState,
}

/// Errors for weighted collections, draw sequences and random sources.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightedError {
    /// Weight is negative or not finite (NaN/inf).
    #[error("weight must be finite and >= 0 (got {0})")]
    InvalidWeight(f64),
    /// Parallel weight/value inputs have different lengths.
    #[error(
        "number of weights ({weights}) and number of values ({values}) differ, but they have to be equal"
    )]
    LengthMismatch { weights: usize, values: usize },
    /// A required source collection was absent.
    #[error("{0} must not be absent")]
    MissingSource(&'static str),
    /// Index outside `0..len` (or `0..=len` for insertion positions).
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },
    /// Slice bounds outside the collection or reversed.
    #[error("range {from}..{to} out of range for length {len}")]
    RangeOutOfBounds { from: usize, to: usize, len: usize },
    /// `remove_last` without a draw since the last removal.
    #[error("no pending draw to remove")]
    NoPendingDraw,
    /// Drawing from an empty sequence.
    #[error("draw sequence is exhausted")]
    Exhausted,
    /// A scripted uniform outside `[0, 1)`.
    #[error("uniform sample must lie in [0, 1) (got {0})")]
    InvalidUniform(f64),
    /// A scripted source with nothing to replay.
    #[error("scripted source needs at least one value")]
    EmptyScript,
}

impl WeightedError {
    /// The category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidWeight(_)
            | Self::LengthMismatch { .. }
            | Self::MissingSource(_)
            | Self::InvalidUniform(_)
            | Self::EmptyScript => ErrorKind::InvalidArgument,
            Self::OutOfRange { .. } | Self::RangeOutOfBounds { .. } => ErrorKind::OutOfRange,
            Self::NoPendingDraw | Self::Exhausted => ErrorKind::IllegalState,
        }
    }
}

/// `index` must address an existing element.
pub(crate) fn check_index(index: usize, len: usize) -> Result<(), WeightedError> {
    if index < len {
        Ok(())
    } else {
        Err(WeightedError::OutOfRange { index, len })
    }
}

/// `index` must be a valid insertion position (end included).
pub(crate) fn check_position(index: usize, len: usize) -> Result<(), WeightedError> {
    if index <= len {
        Ok(())
    } else {
        Err(WeightedError::OutOfRange { index, len })
    }
}

pub(crate) fn check_range(from: usize, to: usize, len: usize) -> Result<(), WeightedError> {
    if from <= to && to <= len {
        Ok(())
    } else {
        Err(WeightedError::RangeOutOfBounds { from, to, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(WeightedError::InvalidWeight(-1.0).kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            WeightedError::LengthMismatch { weights: 2, values: 3 }.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(WeightedError::MissingSource("weights").kind(), ErrorKind::InvalidArgument);
        assert_eq!(WeightedError::OutOfRange { index: 3, len: 3 }.kind(), ErrorKind::OutOfRange);
        assert_eq!(
            WeightedError::RangeOutOfBounds { from: 2, to: 1, len: 3 }.kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(WeightedError::NoPendingDraw.kind(), ErrorKind::IllegalState);
        assert_eq!(WeightedError::Exhausted.kind(), ErrorKind::IllegalState);
    }

    #[test]
    fn bounds_helpers() {
        assert!(check_index(2, 3).is_ok());
        assert_eq!(check_index(3, 3), Err(WeightedError::OutOfRange { index: 3, len: 3 }));
        assert!(check_position(3, 3).is_ok());
        assert!(check_position(4, 3).is_err());
        assert!(check_range(1, 1, 3).is_ok());
        assert!(check_range(0, 3, 3).is_ok());
        assert!(check_range(2, 1, 3).is_err());
        assert!(check_range(0, 4, 3).is_err());
    }

    #[test]
    fn messages_name_the_lengths() {
        let msg = WeightedError::LengthMismatch { weights: 2, values: 3 }.to_string();
        assert!(msg.contains("(2)") && msg.contains("(3)"), "{msg}");
    }
}

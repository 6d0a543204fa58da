//! Window parameters, as they appear in configuration documents.

use lazyview_common::{Result, verify};
use serde::{Deserialize, Serialize};

/// The window `[first, first + count)` of source positions.
///
/// Values are signed so that configuration input can be carried verbatim and
/// rejected by [`WindowBounds::validate`] rather than at parse time.
///
/// In JSON, `first` defaults to `0`:
///
/// ```
/// use lazyview_sequence::WindowBounds;
///
/// let bounds: WindowBounds = serde_json::from_str(r#"{ "count": 10 }"#).unwrap();
/// assert_eq!(bounds, WindowBounds::new(0, 10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowBounds {
    /// Number of leading source elements to skip.
    #[serde(default)]
    pub first: i64,
    /// Maximum number of elements to yield after skipping.
    pub count: i64,
}

impl WindowBounds {
    pub fn new(first: i64, count: i64) -> WindowBounds {
        WindowBounds { first, count }
    }

    /// Skips `first` elements and yields everything after them.
    pub fn starting_at(first: i64) -> WindowBounds {
        WindowBounds::new(first, i64::MAX)
    }

    /// Checks that both bounds are non-negative and returns them as
    /// `(first, count)`.
    pub fn validate(&self) -> Result<(u64, u64)> {
        let first = verify::greater_or_equal(self.first, 0, "first")?;
        let count = verify::greater_or_equal(self.count, 0, "count")?;
        Ok((first as u64, count as u64))
    }

    /// Exclusive end position of the window, saturating at `u64::MAX`.
    pub fn end(&self) -> Result<u64> {
        let (first, count) = self.validate()?;
        Ok(first.saturating_add(count))
    }
}

#[cfg(test)]
mod tests {
    use lazyview_common::error::ErrorKind;

    use super::WindowBounds;

    #[test]
    fn test_validate() {
        assert_eq!(WindowBounds::new(1, 2).validate().unwrap(), (1, 2));
        assert_eq!(WindowBounds::new(0, 0).validate().unwrap(), (0, 0));

        let err = WindowBounds::new(-1, 2).validate().unwrap_err();
        match err.kind() {
            ErrorKind::InvalidArgument { name, message } => {
                assert_eq!(name, "first");
                assert_eq!(message, "must be greater or equal to 0 (was -1)");
            }
            other => panic!("unexpected error kind: {other:?}"),
        }

        let err = WindowBounds::new(0, -1).validate().unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidArgument { name, .. } if name == "count"));
    }

    #[test]
    fn test_end() {
        assert_eq!(WindowBounds::new(3, 4).end().unwrap(), 7);
        assert_eq!(WindowBounds::starting_at(5).end().unwrap(), 5 + i64::MAX as u64);
        assert!(WindowBounds::new(-3, 4).end().is_err());
    }

    #[test]
    fn test_serde() {
        let bounds: WindowBounds = serde_json::from_str(r#"{"first": 2, "count": 5}"#).unwrap();
        assert_eq!(bounds, WindowBounds::new(2, 5));

        let json = serde_json::to_string(&WindowBounds::new(1, 3)).unwrap();
        assert_eq!(json, r#"{"first":1,"count":3}"#);

        // Negative values parse, and are rejected on validation.
        let bounds: WindowBounds = serde_json::from_str(r#"{"first": -4, "count": 1}"#).unwrap();
        assert!(bounds.validate().is_err());

        assert!(serde_json::from_str::<WindowBounds>(r#"{"first": 1}"#).is_err());
    }
}

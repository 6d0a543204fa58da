//! Value-returning argument checks.
//!
//! Each check returns the validated value on success, so it can be used inline
//! while constructing a struct:
//!
//! ```
//! use lazyview_common::verify;
//!
//! let first = verify::greater_or_equal(2i64, 0, "first").unwrap();
//! assert_eq!(first, 2);
//! assert!(verify::greater_or_equal(-1i64, 0, "first").is_err());
//! ```
//!
//! All failures are reported as [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument)
//! with the argument name and a message stating the violated bound.

use std::fmt::Display;

use crate::{Result, error::Error};

/// Unwraps an optional argument, failing if it is absent.
pub fn not_null<T>(value: Option<T>, name: &str) -> Result<T> {
    value.ok_or_else(|| Error::invalid_arg(name, "must not be null"))
}

/// Ensures that `value` contains at least one non-whitespace character.
///
/// The `name` itself must not be empty either.
pub fn has_text<'a>(value: &'a str, name: &str) -> Result<&'a str> {
    crate::verify_arg!(name, !name.trim().is_empty());
    if value.trim().is_empty() {
        return Err(Error::invalid_arg(name, "must not be null or empty"));
    }
    Ok(value)
}

pub fn not_empty_collection<'a, T>(values: &'a [T], name: &str) -> Result<&'a [T]> {
    has_text(name, "name")?;
    if values.is_empty() {
        return Err(Error::invalid_arg(name, "must not be null or empty"));
    }
    Ok(values)
}

pub fn greater<T: PartialOrd + Display>(value: T, boundary: T, name: &str) -> Result<T> {
    if value <= boundary {
        return Err(escalate(
            name,
            format!("must be greater than {boundary} (was {value})"),
        ));
    }
    Ok(value)
}

pub fn greater_or_equal<T: PartialOrd + Display>(value: T, boundary: T, name: &str) -> Result<T> {
    if value < boundary {
        return Err(escalate(
            name,
            format!("must be greater or equal to {boundary} (was {value})"),
        ));
    }
    Ok(value)
}

pub fn less<T: PartialOrd + Display>(value: T, boundary: T, name: &str) -> Result<T> {
    if value >= boundary {
        return Err(escalate(
            name,
            format!("must be less than {boundary} (was {value})"),
        ));
    }
    Ok(value)
}

pub fn less_or_equal<T: PartialOrd + Display>(value: T, boundary: T, name: &str) -> Result<T> {
    if value > boundary {
        return Err(escalate(
            name,
            format!("must be less or equal to {boundary} (was {value})"),
        ));
    }
    Ok(value)
}

/// Ensures that `value` lies between `min` and `max`.
///
/// With `inclusive` set, both bounds are accepted; otherwise both are rejected.
/// An inverted range (`min > max`) is rejected as well.
pub fn between<T: PartialOrd + Display>(
    value: T,
    min: T,
    max: T,
    inclusive: bool,
    name: &str,
) -> Result<T> {
    crate::verify_arg!(max, min <= max);
    let (outside, mode) = if inclusive {
        (value < min || value > max, "inclusive")
    } else {
        (value <= min || value >= max, "exclusive")
    };
    if outside {
        return Err(escalate(
            name,
            format!("must be between {min} and {max} ({mode}) - was: {value}"),
        ));
    }
    Ok(value)
}

#[cold]
fn escalate(name: &str, message: String) -> Error {
    Error::invalid_arg(name, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn message_of(err: Error) -> String {
        match err.into_kind() {
            ErrorKind::InvalidArgument { message, .. } => message,
            other => panic!("unexpected error kind: {other:?}"),
        }
    }

    #[test]
    fn test_not_null() {
        assert_eq!(not_null(Some(5), "value").unwrap(), 5);
        let err = not_null::<u8>(None, "value").unwrap_err();
        assert!(err.is_invalid_arg());
    }

    #[test]
    fn test_has_text() {
        assert_eq!(has_text("abc", "value").unwrap(), "abc");
        assert!(has_text("", "value").is_err());
        assert!(has_text("   \t", "value").is_err());

        // An empty argument name is itself a caller bug.
        let err = has_text("abc", " ").unwrap_err();
        match err.kind() {
            ErrorKind::InvalidArgument { name, message } => {
                assert_eq!(name, "name");
                assert_eq!(message, "!name.trim().is_empty()");
            }
            other => panic!("unexpected error kind: {other:?}"),
        }
    }

    #[test]
    fn test_not_empty_collection() {
        assert_eq!(not_empty_collection(&[1, 2], "items").unwrap(), &[1, 2]);
        assert!(not_empty_collection::<u8>(&[], "items").is_err());
    }

    #[test]
    fn test_bounds() {
        assert_eq!(greater(1, 0, "v").unwrap(), 1);
        assert_eq!(
            message_of(greater(0, 0, "v").unwrap_err()),
            "must be greater than 0 (was 0)"
        );

        assert_eq!(greater_or_equal(0i64, 0, "first").unwrap(), 0);
        assert_eq!(
            message_of(greater_or_equal(-1i64, 0, "first").unwrap_err()),
            "must be greater or equal to 0 (was -1)"
        );

        assert_eq!(less(4, 5, "v").unwrap(), 4);
        assert!(less(5, 5, "v").is_err());

        assert_eq!(less_or_equal(5, 5, "v").unwrap(), 5);
        assert_eq!(
            message_of(less_or_equal(6, 5, "v").unwrap_err()),
            "must be less or equal to 5 (was 6)"
        );
    }

    #[test]
    fn test_between() {
        assert_eq!(between(1, 1, 3, true, "v").unwrap(), 1);
        assert_eq!(between(3, 1, 3, true, "v").unwrap(), 3);
        assert!(between(4, 1, 3, true, "v").is_err());

        assert_eq!(between(2, 1, 3, false, "v").unwrap(), 2);
        assert!(between(1, 1, 3, false, "v").is_err());
        assert_eq!(
            message_of(between(3, 1, 3, false, "v").unwrap_err()),
            "must be between 1 and 3 (exclusive) - was: 3"
        );
    }

    #[test]
    fn test_between_inverted_range() {
        let err = between(2, 3, 1, true, "v").unwrap_err();
        match err.kind() {
            ErrorKind::InvalidArgument { name, message } => {
                assert_eq!(name, "max");
                assert_eq!(message, "min <= max");
            }
            other => panic!("unexpected error kind: {other:?}"),
        }
    }
}

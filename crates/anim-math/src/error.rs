//! Error type for the textual vector format.
//!
//! The numeric core never signals: zero divisors and zero-length inputs
//! fall back to defined sentinel values (see [`Vec3`](crate::Vec3)). The
//! only fallible surface is parsing the `"x, y, z"` wire format, which
//! reports through [`ParseVectorError`].

use thiserror::Error;

/// Errors produced when parsing a vector from its textual form.
///
/// # Example
///
/// ```rust
/// use anim_math::Vec3;
///
/// let err = "1, 2".parse::<Vec3>().unwrap_err();
/// assert!(err.to_string().contains("3 components"));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseVectorError {
    /// The input did not contain the expected number of `", "`-separated
    /// fields.
    #[error("expected {expected} components separated by \", \", found {found}")]
    ComponentCount {
        /// Number of components the vector type requires.
        expected: usize,
        /// Number of fields found in the input.
        found: usize,
    },

    /// A field was not a parsable floating-point number.
    #[error("invalid component: {0}")]
    InvalidComponent(#[from] std::num::ParseFloatError),
}

impl ParseVectorError {
    /// Creates a [`ParseVectorError::ComponentCount`] error.
    #[inline]
    pub fn component_count(expected: usize, found: usize) -> Self {
        Self::ComponentCount { expected, found }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_count_message() {
        let err = ParseVectorError::component_count(3, 2);
        let msg = err.to_string();
        assert!(msg.contains("3"));
        assert!(msg.contains("2"));
    }

    #[test]
    fn test_invalid_component_wraps_float_error() {
        let err: ParseVectorError = "abc".parse::<f64>().unwrap_err().into();
        assert!(matches!(err, ParseVectorError::InvalidComponent(_)));
    }
}

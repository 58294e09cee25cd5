// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Errors returned by generated accessors.

/// Error returned by a generated accessor that rejected its argument.
///
/// Setters whose argument type differs from the stored type (a `type`
/// override, or a word-sized `isize`/`usize` field fed from a 64-bit value)
/// convert with `TryFrom` and report a failed conversion with this error.
/// The stored value is left untouched.
///
/// # Example
///
/// ```rust
/// use accessor_core::AccessorError;
///
/// let err = AccessorError::invalid_argument("set_rank", "i8");
/// assert_eq!(
///     err.to_string(),
///     "invalid argument for `set_rank`: value does not fit into `i8`"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum AccessorError {
    /// The argument could not be converted into the stored type.
    #[error("invalid argument for `{method}`: value does not fit into `{expected}`")]
    InvalidArgument {
        /// Name of the generated method.
        method:   &'static str,
        /// Stored type the argument had to fit into.
        expected: &'static str
    }
}

impl AccessorError {
    /// Build an [`AccessorError::InvalidArgument`].
    #[must_use]
    pub const fn invalid_argument(method: &'static str, expected: &'static str) -> Self {
        Self::InvalidArgument { method, expected }
    }

    /// Name of the method that rejected its argument.
    #[must_use]
    pub const fn method(&self) -> &'static str {
        match self {
            Self::InvalidArgument { method, .. } => method
        }
    }
}

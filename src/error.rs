// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for the arithmetic operations.
//!
//! Callers that need the historical integer encoding (for example when
//! comparing against fixed expected values in a case file) can collapse a
//! result with [`Sentinel::or_sentinel`] and a predicate with [`flag`].

use thiserror::Error;

/// Value reported in place of a result when the input is out of domain.
pub const SENTINEL: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithError {
    /// A negative argument was given to an operation only defined for `n >= 0`.
    #[error("`{operation}` is undefined for negative argument {value}")]
    NegativeArgument { operation: &'static str, value: i32 },
    /// The exact result does not fit in an `i32`.
    #[error("`{operation}({value})` overflows i32")]
    Overflow { operation: &'static str, value: i32 },
}

/// Collapse a fallible result into the integer-with-sentinel form.
pub trait Sentinel {
    fn or_sentinel(self) -> i32;
}

impl Sentinel for Result<i32, ArithError> {
    fn or_sentinel(self) -> i32 {
        self.unwrap_or(SENTINEL)
    }
}

/// `1` for `true`, `0` for `false`.
#[must_use]
pub fn flag(value: bool) -> i32 {
    i32::from(value)
}

// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small library of pure integer arithmetic utilities together with the
//! harnesses that check them.
//!
//! All operations work on `i32` and follow two's-complement wraparound on
//! overflow. The only input domain restriction is on [`arith::factorial`] and
//! [`arith::fibonacci`], which reject negative arguments with
//! [`ArithError::NegativeArgument`] instead of returning a magic value.
//!
//! - `arith`: the ten arithmetic operations and their Kani proof harnesses.
//! - `error`: the error type plus the legacy `-1` / `0`-`1` boundary forms.
//! - `regression`: table driven regression suite used by `math-check`.
//! - `config`: loading extra regression cases from TOML files.

pub mod arith;
pub mod config;
pub mod error;
pub mod regression;

pub use arith::{
    abs_value, add, checked_factorial, checked_fibonacci, factorial, fibonacci, is_even,
    is_positive, max_value, min_value, multiply, subtract,
};
pub use error::{ArithError, SENTINEL, Sentinel, flag};

// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer arithmetic operations.
//!
//! Every function is pure. Overflow wraps (two's complement), so results for
//! large inputs are whatever `i32` truncation yields; use
//! [`checked_factorial`] or [`checked_fibonacci`] to detect that instead.

use crate::error::ArithError;

/// Last input for which the factorial is part of the documented domain.
pub const FACTORIAL_DOMAIN_MAX: i32 = 10;
/// Largest `n` whose factorial fits in an `i32` (`12! = 479_001_600`).
pub const MAX_FACTORIAL_INPUT: i32 = 12;
/// Largest `n` whose Fibonacci number fits in an `i32` (`F(46) = 1_836_311_903`).
pub const MAX_FIBONACCI_INPUT: i32 = 46;

#[must_use]
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

#[must_use]
pub fn subtract(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}

#[must_use]
pub fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

/// Absolute value. `abs_value(i32::MIN)` wraps back to `i32::MIN`.
#[must_use]
pub fn abs_value(x: i32) -> i32 {
    if x < 0 { x.wrapping_neg() } else { x }
}

#[must_use]
pub fn max_value(a: i32, b: i32) -> i32 {
    if a > b { a } else { b }
}

#[must_use]
pub fn min_value(a: i32, b: i32) -> i32 {
    if a < b { a } else { b }
}

#[must_use]
pub fn is_even(x: i32) -> bool {
    x % 2 == 0
}

/// Strict positivity: zero is not positive.
#[must_use]
pub fn is_positive(x: i32) -> bool {
    x > 0
}

/// Computes `n!`.
///
/// Returns [`ArithError::NegativeArgument`] for `n < 0`. Results past
/// [`MAX_FACTORIAL_INPUT`] wrap.
#[must_use]
pub fn factorial(n: i32) -> Result<i32, ArithError> {
    check_domain("factorial", n)?;
    Ok((2..=n).fold(1, i32::wrapping_mul))
}

/// Like [`factorial`], but reports [`ArithError::Overflow`] instead of wrapping.
#[must_use]
pub fn checked_factorial(n: i32) -> Result<i32, ArithError> {
    check_domain("factorial", n)?;
    (2..=n)
        .try_fold(1i32, |acc, i| acc.checked_mul(i))
        .ok_or(ArithError::Overflow { operation: "factorial", value: n })
}

/// Computes the `n`th Fibonacci number, with `fibonacci(0) == 0` and
/// `fibonacci(1) == 1`.
///
/// Returns [`ArithError::NegativeArgument`] for `n < 0`. Results past
/// [`MAX_FIBONACCI_INPUT`] wrap.
#[must_use]
pub fn fibonacci(n: i32) -> Result<i32, ArithError> {
    check_domain("fibonacci", n)?;
    if n == 0 {
        return Ok(0);
    }
    let (mut prev, mut curr) = (0i32, 1i32);
    for _ in 1..n {
        let next = prev.wrapping_add(curr);
        prev = curr;
        curr = next;
    }
    Ok(curr)
}

/// Like [`fibonacci`], but reports [`ArithError::Overflow`] instead of wrapping.
#[must_use]
pub fn checked_fibonacci(n: i32) -> Result<i32, ArithError> {
    check_domain("fibonacci", n)?;
    if n == 0 {
        return Ok(0);
    }
    let (mut prev, mut curr) = (0i32, 1i32);
    for _ in 1..n {
        let next = prev
            .checked_add(curr)
            .ok_or(ArithError::Overflow { operation: "fibonacci", value: n })?;
        prev = curr;
        curr = next;
    }
    Ok(curr)
}

fn check_domain(operation: &'static str, n: i32) -> Result<(), ArithError> {
    if n < 0 { Err(ArithError::NegativeArgument { operation, value: n }) } else { Ok(()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{SENTINEL, Sentinel};

    #[test]
    fn add_examples() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(add(0, 5), 5);
        assert_eq!(add(-2, 3), 1);
        assert_eq!(add(2, -3), -1);
        assert_eq!(add(-2, -3), -5);
        assert_eq!(add(1000, 2000), 3000);
        assert_eq!(add(3, 7), add(7, 3));
    }

    #[test]
    fn add_wraps() {
        assert_eq!(add(i32::MAX, 1), i32::MIN);
        assert_eq!(add(i32::MIN, -1), i32::MAX);
    }

    #[test]
    fn subtract_examples() {
        assert_eq!(subtract(5, 3), 2);
        assert_eq!(subtract(5, 5), 0);
        assert_eq!(subtract(3, 5), -2);
        assert_eq!(subtract(-2, 3), -5);
        assert_eq!(subtract(2, -3), 5);
        assert_eq!(subtract(42, 0), 42);
        assert_ne!(subtract(7, 3), subtract(3, 7));
        assert_eq!(subtract(i32::MIN, 1), i32::MAX);
    }

    #[test]
    fn multiply_examples() {
        assert_eq!(multiply(3, 4), 12);
        assert_eq!(multiply(42, 1), 42);
        assert_eq!(multiply(0, 42), 0);
        assert_eq!(multiply(-3, 4), -12);
        assert_eq!(multiply(-3, -4), 12);
        assert_eq!(multiply(3, 7), multiply(7, 3));
        assert_eq!(multiply(i32::MAX, 2), -2);
    }

    #[test]
    fn abs_examples() {
        assert_eq!(abs_value(5), 5);
        assert_eq!(abs_value(-5), 5);
        assert_eq!(abs_value(-100), 100);
        assert_eq!(abs_value(0), 0);
        assert_eq!(abs_value(i32::MAX), i32::MAX);
        assert_eq!(abs_value(-i32::MAX), i32::MAX);
    }

    #[test]
    fn abs_of_min_wraps() {
        assert_eq!(abs_value(i32::MIN), i32::MIN);
    }

    #[test]
    fn min_max_examples() {
        assert_eq!(max_value(5, 3), 5);
        assert_eq!(max_value(3, 5), 5);
        assert_eq!(max_value(5, 5), 5);
        assert_eq!(max_value(-2, -5), -2);
        assert_eq!(max_value(-5, 3), 3);
        assert_eq!(min_value(5, 3), 3);
        assert_eq!(min_value(3, 5), 3);
        assert_eq!(min_value(5, 5), 5);
        assert_eq!(min_value(-2, -5), -5);
        assert_eq!(min_value(-5, 3), -5);
        assert_eq!(max_value(i32::MIN, i32::MAX), i32::MAX);
        assert_eq!(min_value(i32::MIN, i32::MAX), i32::MIN);
    }

    #[test]
    fn parity_and_sign() {
        for x in [0, 2, 100, -2, i32::MIN] {
            assert!(is_even(x), "{x} should be even");
        }
        for x in [1, 3, 99, -1, i32::MAX] {
            assert!(!is_even(x), "{x} should be odd");
        }
        assert!(is_positive(1));
        assert!(is_positive(100));
        assert!(!is_positive(0));
        assert!(!is_positive(-1));
        assert!(!is_positive(i32::MIN));
    }

    #[test]
    fn factorial_examples() {
        let expected = [1, 1, 2, 6, 24, 120, 720, 5040, 40320, 362880, 3628800];
        for (n, want) in expected.into_iter().enumerate() {
            assert_eq!(factorial(n as i32), Ok(want));
        }
    }

    #[test]
    fn factorial_of_two_is_its_input() {
        assert_eq!(factorial(2), Ok(2));
        assert_eq!(checked_factorial(2), Ok(2));
        assert_eq!(factorial(3), Ok(6));
    }

    #[test]
    fn factorial_rejects_negative() {
        assert_eq!(
            factorial(-1),
            Err(ArithError::NegativeArgument { operation: "factorial", value: -1 })
        );
        assert_eq!(factorial(-1).or_sentinel(), SENTINEL);
        assert!(factorial(i32::MIN).is_err());
    }

    #[test]
    fn factorial_overflow() {
        assert_eq!(factorial(MAX_FACTORIAL_INPUT), Ok(479_001_600));
        assert_eq!(checked_factorial(MAX_FACTORIAL_INPUT), Ok(479_001_600));
        // 13! = 6_227_020_800, truncated to 32 bits.
        assert_eq!(factorial(13), Ok(1_932_053_504));
        assert_eq!(
            checked_factorial(13),
            Err(ArithError::Overflow { operation: "factorial", value: 13 })
        );
        assert!(matches!(checked_factorial(-4), Err(ArithError::NegativeArgument { .. })));
    }

    #[test]
    fn fibonacci_examples() {
        let expected = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
        for (n, want) in expected.into_iter().enumerate() {
            assert_eq!(fibonacci(n as i32), Ok(want));
        }
        assert_eq!(fibonacci(6), Ok(fibonacci(5).unwrap() + fibonacci(4).unwrap()));
        assert_eq!(fibonacci(-1).or_sentinel(), SENTINEL);
    }

    #[test]
    fn fibonacci_overflow() {
        assert_eq!(fibonacci(MAX_FIBONACCI_INPUT), Ok(1_836_311_903));
        assert_eq!(checked_fibonacci(MAX_FIBONACCI_INPUT), Ok(1_836_311_903));
        // F(47) = 2_971_215_073 wraps below zero.
        assert_eq!(fibonacci(47), Ok(-1_323_752_223));
        assert_eq!(
            checked_fibonacci(47),
            Err(ArithError::Overflow { operation: "fibonacci", value: 47 })
        );
    }
}

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    fn check_add() {
        let a: i32 = kani::any();
        let b: i32 = kani::any();
        kani::assume(a >= -100 && a <= 100);
        kani::assume(b >= -100 && b <= 100);
        assert_eq!(add(a, b), a + b);
    }

    #[kani::proof]
    fn check_subtract() {
        let a: i32 = kani::any();
        let b: i32 = kani::any();
        kani::assume(a >= -100 && a <= 100);
        kani::assume(b >= -100 && b <= 100);
        assert_eq!(subtract(a, b), a - b);
    }

    #[kani::proof]
    fn check_multiply() {
        let a: i32 = kani::any();
        let b: i32 = kani::any();
        kani::assume(a >= -50 && a <= 50);
        kani::assume(b >= -50 && b <= 50);
        assert_eq!(multiply(a, b), a * b);
        assert_eq!(multiply(a, b), multiply(b, a));
    }

    #[kani::proof]
    fn check_abs_value() {
        let a: i32 = kani::any();
        let result = abs_value(a);
        assert_eq!(result, abs_value(a.wrapping_neg()));
        assert!(result >= a);
        if a != i32::MIN {
            assert!(result >= 0);
        }
    }

    #[kani::proof]
    fn check_max_value() {
        let a: i32 = kani::any();
        let b: i32 = kani::any();
        let result = max_value(a, b);
        assert!(result >= a && result >= b);
        assert!(result == a || result == b);
        assert_eq!(result, max_value(b, a));
    }

    #[kani::proof]
    fn check_min_value() {
        let a: i32 = kani::any();
        let b: i32 = kani::any();
        let result = min_value(a, b);
        assert!(result <= a && result <= b);
        assert!(result == a || result == b);
        assert_eq!(result, min_value(b, a));
    }

    #[kani::proof]
    fn check_is_even() {
        let a: i32 = kani::any();
        assert_eq!(is_even(a), a % 2 == 0);
        assert_ne!(is_even(a), is_even(a.wrapping_add(1)));
    }

    #[kani::proof]
    fn check_is_positive() {
        let a: i32 = kani::any();
        if is_positive(a) {
            assert!(a > 0);
        } else {
            assert!(a <= 0);
        }
    }

    #[kani::proof]
    #[kani::unwind(12)]
    fn check_factorial() {
        let n: i32 = kani::any();
        kani::assume(n >= -1 && n <= FACTORIAL_DOMAIN_MAX);
        match factorial(n) {
            Err(err) => {
                assert!(n < 0);
                assert_eq!(err, ArithError::NegativeArgument { operation: "factorial", value: n });
            }
            Ok(result) => {
                assert!(n >= 0);
                assert!(result >= 1);
                if n <= 1 {
                    assert_eq!(result, 1);
                } else {
                    assert!(result >= n);
                }
                if n >= 3 {
                    assert!(result > n);
                }
            }
        }
    }

    #[kani::proof]
    #[kani::unwind(21)]
    fn check_fibonacci() {
        let n: i32 = kani::any();
        kani::assume(n >= -1 && n <= 20);
        match fibonacci(n) {
            Err(_) => assert!(n < 0),
            Ok(result) => {
                assert!(result >= 0);
                if n == 0 {
                    assert_eq!(result, 0);
                }
                if n == 1 {
                    assert_eq!(result, 1);
                }
                if n >= 1 {
                    assert!(result >= fibonacci(n - 1).unwrap());
                }
            }
        }
    }

    #[kani::proof]
    fn check_add_commutative() {
        let a: i32 = kani::any();
        let b: i32 = kani::any();
        assert_eq!(add(a, b), add(b, a));
    }

    #[kani::proof]
    fn check_multiply_distributive() {
        let a: i32 = kani::any();
        let b: i32 = kani::any();
        let c: i32 = kani::any();
        kani::assume(a >= -10 && a <= 10);
        kani::assume(b >= -10 && b <= 10);
        kani::assume(c >= -10 && c <= 10);
        assert_eq!(multiply(a, add(b, c)), add(multiply(a, b), multiply(a, c)));
    }
}

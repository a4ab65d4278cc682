// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Table driven regression suite.
//!
//! Each [`Case`] names an [`Operation`], its arguments and the expected value
//! in integer form: predicates compare as `0`/`1` and domain violations as the
//! `-1` sentinel. This is the form used by case files, so a case written by
//! hand reads the same as the historical expectations.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::arith;
use crate::error::{Sentinel, flag};

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    AbsValue,
    MaxValue,
    MinValue,
    IsEven,
    IsPositive,
    Factorial,
    Fibonacci,
}

impl Operation {
    pub fn arity(self) -> usize {
        match self {
            Operation::Add
            | Operation::Subtract
            | Operation::Multiply
            | Operation::MaxValue
            | Operation::MinValue => 2,
            Operation::AbsValue
            | Operation::IsEven
            | Operation::IsPositive
            | Operation::Factorial
            | Operation::Fibonacci => 1,
        }
    }

    /// Evaluate the operation and return its integer form.
    pub fn eval(self, args: &[i32]) -> Result<i32, RegressionError> {
        let value = match (self, args) {
            (Operation::Add, &[a, b]) => arith::add(a, b),
            (Operation::Subtract, &[a, b]) => arith::subtract(a, b),
            (Operation::Multiply, &[a, b]) => arith::multiply(a, b),
            (Operation::MaxValue, &[a, b]) => arith::max_value(a, b),
            (Operation::MinValue, &[a, b]) => arith::min_value(a, b),
            (Operation::AbsValue, &[x]) => arith::abs_value(x),
            (Operation::IsEven, &[x]) => flag(arith::is_even(x)),
            (Operation::IsPositive, &[x]) => flag(arith::is_positive(x)),
            (Operation::Factorial, &[n]) => arith::factorial(n).or_sentinel(),
            (Operation::Fibonacci, &[n]) => arith::fibonacci(n).or_sentinel(),
            _ => {
                return Err(RegressionError::Arity {
                    operation: self,
                    expected: self.arity(),
                    found: args.len(),
                });
            }
        };
        Ok(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegressionError {
    #[error("`{operation}` takes {expected} argument(s) but {found} were given")]
    Arity { operation: Operation, expected: usize, found: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub name: String,
    pub operation: Operation,
    pub args: Vec<i32>,
    pub expected: i32,
}

impl Case {
    /// Build a case named after its own expression, e.g. `add(2, 3) == 5`.
    pub fn new(operation: Operation, args: impl Into<Vec<i32>>, expected: i32) -> Self {
        let args = args.into();
        let name = describe(operation, &args, expected);
        Case { name, operation, args, expected }
    }

    pub fn named(
        name: impl Into<String>,
        operation: Operation,
        args: impl Into<Vec<i32>>,
        expected: i32,
    ) -> Self {
        Case { name: name.into(), operation, args: args.into(), expected }
    }
}

pub fn describe(operation: Operation, args: &[i32], expected: i32) -> String {
    let args = args.iter().map(i32::to_string).collect::<Vec<_>>().join(", ");
    format!("{operation}({args}) == {expected}")
}

/// The fixed-value regression cases for every operation.
pub fn builtin_suite() -> Vec<Case> {
    use Operation::*;

    let table: &[(Operation, &[i32], i32)] = &[
        (Add, &[2, 3], 5),
        (Add, &[0, 5], 5),
        (Add, &[5, 0], 5),
        (Add, &[3, 7], 10),
        (Add, &[7, 3], 10),
        (Add, &[-2, 3], 1),
        (Add, &[2, -3], -1),
        (Add, &[-2, -3], -5),
        (Add, &[1000, 2000], 3000),
        (Add, &[42, 0], 42),
        (Subtract, &[5, 3], 2),
        (Subtract, &[10, 0], 10),
        (Subtract, &[5, 5], 0),
        (Subtract, &[3, 5], -2),
        (Subtract, &[-2, 3], -5),
        (Subtract, &[2, -3], 5),
        (Subtract, &[7, 3], 4),
        (Subtract, &[3, 7], -4),
        (Subtract, &[42, 0], 42),
        (Multiply, &[3, 4], 12),
        (Multiply, &[5, 2], 10),
        (Multiply, &[3, 7], 21),
        (Multiply, &[7, 3], 21),
        (Multiply, &[42, 1], 42),
        (Multiply, &[1, 42], 42),
        (Multiply, &[42, 0], 0),
        (Multiply, &[0, 42], 0),
        (Multiply, &[-3, 4], -12),
        (Multiply, &[-3, -4], 12),
        (AbsValue, &[5], 5),
        (AbsValue, &[100], 100),
        (AbsValue, &[-5], 5),
        (AbsValue, &[-100], 100),
        (AbsValue, &[0], 0),
        (AbsValue, &[42], 42),
        (AbsValue, &[-42], 42),
        (MaxValue, &[5, 3], 5),
        (MaxValue, &[3, 5], 5),
        (MaxValue, &[5, 5], 5),
        (MaxValue, &[-2, -5], -2),
        (MaxValue, &[-5, 3], 3),
        (MaxValue, &[10, 20], 20),
        (MinValue, &[5, 3], 3),
        (MinValue, &[3, 5], 3),
        (MinValue, &[5, 5], 5),
        (MinValue, &[-2, -5], -5),
        (MinValue, &[-5, 3], -5),
        (MinValue, &[10, 20], 10),
        (IsEven, &[0], 1),
        (IsEven, &[2], 1),
        (IsEven, &[100], 1),
        (IsEven, &[1], 0),
        (IsEven, &[3], 0),
        (IsEven, &[99], 0),
        (IsEven, &[-2], 1),
        (IsEven, &[-1], 0),
        (IsPositive, &[1], 1),
        (IsPositive, &[100], 1),
        (IsPositive, &[0], 0),
        (IsPositive, &[-1], 0),
        (IsPositive, &[-100], 0),
        (Factorial, &[0], 1),
        (Factorial, &[1], 1),
        (Factorial, &[2], 2),
        (Factorial, &[3], 6),
        (Factorial, &[4], 24),
        (Factorial, &[5], 120),
        (Factorial, &[10], 3628800),
        (Factorial, &[-1], -1),
        (Fibonacci, &[0], 0),
        (Fibonacci, &[1], 1),
        (Fibonacci, &[2], 1),
        (Fibonacci, &[3], 2),
        (Fibonacci, &[4], 3),
        (Fibonacci, &[5], 5),
        (Fibonacci, &[6], 8),
        (Fibonacci, &[7], 13),
        (Fibonacci, &[8], 21),
        (Fibonacci, &[9], 34),
        (Fibonacci, &[10], 55),
        (Fibonacci, &[-1], -1),
    ];

    table.iter().map(|&(operation, args, expected)| Case::new(operation, args, expected)).collect()
}

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Only run cases for this operation.
    pub filter: Option<Operation>,
    /// Stop after the first failing case.
    pub fail_fast: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseOutcome {
    pub name: String,
    pub operation: Operation,
    pub expected: i32,
    pub actual: Option<i32>,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub outcomes: Vec<CaseOutcome>,
}

impl Report {
    /// Percentage of passing cases; `0.0` when nothing ran.
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 { 0.0 } else { 100.0 * self.passed as f64 / self.total as f64 }
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Process exit status for this report: `0` on success, `1` otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.is_success() { 0 } else { 1 }
    }

    fn record(&mut self, outcome: CaseOutcome) {
        self.total += 1;
        if outcome.passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        self.outcomes.push(outcome);
    }
}

pub fn run_case(case: &Case) -> CaseOutcome {
    let (actual, error) = match case.operation.eval(&case.args) {
        Ok(value) => (Some(value), None),
        Err(err) => (None, Some(err.to_string())),
    };
    CaseOutcome {
        name: case.name.clone(),
        operation: case.operation,
        expected: case.expected,
        actual,
        passed: actual == Some(case.expected),
        error,
    }
}

pub fn run(cases: &[Case], options: &RunOptions) -> Report {
    let mut report = Report::default();
    for case in cases.iter().filter(|case| options.filter.is_none_or(|op| op == case.operation)) {
        let outcome = run_case(case);
        debug!(case = %outcome.name, actual = ?outcome.actual, "evaluated case");
        if !outcome.passed {
            warn!(case = %outcome.name, actual = ?outcome.actual, error = ?outcome.error, "case failed");
        }
        let stop = !outcome.passed && options.fail_fast;
        report.record(outcome);
        if stop {
            info!("stopping after first failure");
            break;
        }
    }
    info!(total = report.total, passed = report.passed, failed = report.failed, "regression run finished");
    report
}

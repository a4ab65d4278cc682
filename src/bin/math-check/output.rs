// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Printing of regression reports.

use anyhow::Result;
use console::style;
use math_utils::regression::{CaseOutcome, Report};

const RULE: &str = "========================================";

pub fn print_pretty(report: &Report, quiet: bool) {
    if !quiet {
        for outcome in &report.outcomes {
            println!("{}", case_line(outcome));
        }
        println!();
    }
    print!("{}", summary(report));
}

pub fn print_json(report: &Report) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// The closing summary block, one line per counter.
pub fn summary(report: &Report) -> String {
    [
        RULE.to_string(),
        "Test Results Summary".to_string(),
        RULE.to_string(),
        format!("Total Tests:  {}", report.total),
        format!("Passed:       {}", report.passed),
        format!("Failed:       {}", report.failed),
        format!("Pass Rate:    {:.1}%", report.pass_rate()),
        RULE.to_string(),
    ]
    .iter()
    .map(|line| format!("{line}\n"))
    .collect()
}

pub fn case_line(outcome: &CaseOutcome) -> String {
    if outcome.passed {
        return format!("{} {}", style("✓").green(), outcome.name);
    }
    let detail = match (&outcome.error, outcome.actual) {
        (Some(err), _) => err.clone(),
        (None, Some(actual)) => format!("got {actual}"),
        (None, None) => String::from("no result"),
    };
    format!("{} {} ({})", style("✗").bold().red(), outcome.name, style(detail).bold())
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::strip_ansi_codes;
    use math_utils::regression::{Case, Operation, RunOptions, run};

    fn lines(cases: &[Case]) -> Vec<String> {
        let report = run(cases, &RunOptions::default());
        report.outcomes.iter().map(|o| strip_ansi_codes(&case_line(o)).into_owned()).collect()
    }

    #[test]
    fn case_lines_mark_pass_and_fail() {
        let lines = lines(&[
            Case::new(Operation::Add, [2, 3], 5),
            Case::new(Operation::Fibonacci, [6], 13),
            Case::new(Operation::AbsValue, [1, 2], 1),
        ]);
        assert_eq!(lines[0], "✓ add(2, 3) == 5");
        assert_eq!(lines[1], "✗ fibonacci(6) == 13 (got 8)");
        assert_eq!(lines[2], "✗ abs_value(1, 2) == 1 (`abs_value` takes 1 argument(s) but 2 were given)");
    }

    #[test]
    fn summary_reports_counts_and_rate() {
        let report = run(
            &[
                Case::new(Operation::IsEven, [4], 1),
                Case::new(Operation::IsEven, [5], 0),
                Case::new(Operation::IsPositive, [0], 1),
            ],
            &RunOptions::default(),
        );
        let summary = summary(&report);
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines[1], "Test Results Summary");
        assert_eq!(lines[3], "Total Tests:  3");
        assert_eq!(lines[4], "Passed:       2");
        assert_eq!(lines[5], "Failed:       1");
        assert_eq!(lines[6], "Pass Rate:    66.7%");
        assert!(summary.ends_with(&format!("{RULE}\n")));
    }

    #[test]
    fn empty_summary_has_zero_rate() {
        let summary = summary(&Report::default());
        assert!(summary.contains("Total Tests:  0\n"));
        assert!(summary.contains("Pass Rate:    0.0%\n"));
    }
}

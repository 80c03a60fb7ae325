// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use rstest::rstest;
use tests::{interpret_and_return_diagnostics, interpret_and_return_stdout};

#[test]
fn undefined_variable_prints_zero() {
    assert_eq!(interpret_and_return_stdout("print y"), ["0"]);
    assert_eq!(interpret_and_return_diagnostics("print y"), ["Variable 'y' not defined"]);
}

#[rstest]
#[case("let x = 1\nprint x", &[])]
#[case("print a + b", &["Variable 'a' not defined", "Variable 'b' not defined"])]
#[case("let z = q\nprint z", &["Variable 'q' not defined"])]
#[case("if 0 then print nope endif", &[])]
#[case("print \"unterminated", &[])]
#[case("print (1 + 2", &[])]
fn diagnostics(#[case] input: &str, #[case] expected: &[&str]) {
    assert_eq!(interpret_and_return_diagnostics(input), expected);
}

#[test]
fn execution_continues_after_a_diagnostic() {
    assert_eq!(interpret_and_return_stdout("print missing\nprint 2"), ["0", "2"]);
}

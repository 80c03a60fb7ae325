// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use mscri::Value;
use rstest::rstest;
use tests::interpret_expression;

#[rstest]
#[case("10", 10.0)]
#[case("0.5", 0.5)]
#[case("3.", 3.0)]
fn number_literals(#[case] input: &str, #[case] expected: f64) {
    assert_eq!(interpret_expression(input), Value::Number(expected));
}

#[rstest]
#[case("2 + 3 * 4", 14.0)]
#[case("(2 + 3) * 4", 20.0)]
#[case("10 * 4 + 5", 45.0)]
#[case("10 + 4 * 5", 30.0)]
#[case("52 % 30", 22.0)]
#[case("20 / 4 / 5", 1.0)]
#[case("2 ^ 3 ^ 2", 64.0)]
#[case("2 ^ (3 ^ 2)", 512.0)]
#[case("2 * 3 ^ 2", 18.0)]
#[case("-3 + 5", 2.0)]
#[case("- -3", 3.0)]
#[case("+4", 4.0)]
fn arithmetic(#[case] input: &str, #[case] expected: f64) {
    assert_eq!(interpret_expression(input), Value::Number(expected));
}

#[rstest]
#[case("1 < 2", 1.0)]
#[case("2 <= 2", 1.0)]
#[case("3 > 4", 0.0)]
#[case("4 >= 5", 0.0)]
#[case("1 + 1 == 2", 1.0)]
#[case("1 != 1", 0.0)]
#[case("1 < 2 == 1", 1.0)]
#[case("1 and 0", 0.0)]
#[case("1 or 0", 1.0)]
#[case("not 0", 1.0)]
#[case("not 5", 0.0)]
#[case("true and not false", 1.0)]
#[case("0 or 0 and 1", 0.0)]
#[case("\"a\" == 0", 1.0)]
fn comparisons_and_logic(#[case] input: &str, #[case] expected: f64) {
    assert_eq!(interpret_expression(input), Value::Number(expected));
}

#[rstest]
#[case("\"a\" + \"b\"", "ab")]
#[case("\"x\" + 5", "x5")]
#[case("5 + \"x\"", "5x")]
#[case("\"half \" + 0.5", "half 0.5")]
#[case("\"big \" + 1234567", "big 1.23457e+06")]
#[case("1 + 2 + \"c\"", "3c")]
#[case("'single' + \"double\"", "singledouble")]
fn concatenation(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(interpret_expression(input), Value::Text(expected.into()));
}

#[rstest]
#[case("\"abc\" - 1", -1.0)]
#[case("\"abc\" * 3", 0.0)]
#[case("not \"abc\"", 1.0)]
fn text_counts_as_zero(#[case] input: &str, #[case] expected: f64) {
    assert_eq!(interpret_expression(input), Value::Number(expected));
}

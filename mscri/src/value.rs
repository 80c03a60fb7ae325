// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use crate::{BiOperator, Comparison, UnaryOperator};

/// The number of significant digits used by [`format_general`].
const GENERAL_PRECISION: i32 = 6;

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    #[must_use]
    pub fn from_bool(boolean: bool) -> Self {
        Self::Number(if boolean { 1.0 } else { 0.0 })
    }

    /// Numeric view of the value. Text always counts as `0`.
    #[must_use]
    pub fn as_number(&self) -> f64 {
        match self {
            Self::Number(number) => *number,
            Self::Text(..) => 0.0,
        }
    }

    /// Only a non-zero number is true; text never is.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        matches!(self, Self::Number(number) if *number != 0.0)
    }

    /// The string form used when the value takes part in a concatenation.
    #[must_use]
    pub fn to_concatenation_string(&self) -> String {
        match self {
            Self::Number(number) => format_general(*number),
            Self::Text(text) => text.clone(),
        }
    }

    #[must_use]
    pub fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Number(lhs), Self::Number(rhs)) => Self::Number(lhs + rhs),
            (Self::Text(mut lhs), rhs) => {
                lhs.push_str(&rhs.to_concatenation_string());
                Self::Text(lhs)
            }
            (lhs, Self::Text(rhs)) => {
                let mut text = lhs.to_concatenation_string();
                text.push_str(&rhs);
                Self::Text(text)
            }
        }
    }

    /// Combines two operands. Apart from `+`, every operator works on the numeric
    /// view of both sides.
    #[must_use]
    pub fn apply_binary(self, operator: BiOperator, rhs: Self) -> Self {
        if operator == BiOperator::Add {
            return self.add(rhs);
        }

        let lhs = self.as_number();
        let rhs = rhs.as_number();

        match operator {
            BiOperator::Add => Self::Number(lhs + rhs),
            BiOperator::Subtract => Self::Number(lhs - rhs),
            BiOperator::Multiply => Self::Number(lhs * rhs),
            BiOperator::Divide => Self::Number(lhs / rhs),
            BiOperator::Modulo => Self::Number(lhs % rhs),
            BiOperator::Power => Self::Number(lhs.powf(rhs)),
            BiOperator::Comparison(comparison) => Self::from_bool(compare(lhs, rhs, comparison)),
            BiOperator::LogicalAnd => Self::from_bool(lhs != 0.0 && rhs != 0.0),
            BiOperator::LogicalOr => Self::from_bool(lhs != 0.0 || rhs != 0.0),
        }
    }

    #[must_use]
    pub fn apply_unary(self, operator: UnaryOperator) -> Self {
        let value = self.as_number();

        match operator {
            UnaryOperator::Negate => Self::Number(-value),
            UnaryOperator::Plus => Self::Number(value),
            UnaryOperator::Not => Self::from_bool(value == 0.0),
        }
    }
}

fn compare(lhs: f64, rhs: f64, comparison: Comparison) -> bool {
    match comparison {
        Comparison::Equality => lhs == rhs,
        Comparison::Inequality => lhs != rhs,
        Comparison::LessThan => lhs < rhs,
        Comparison::LessThanOrEqual => lhs <= rhs,
        Comparison::GreaterThan => lhs > rhs,
        Comparison::GreaterThanOrEqual => lhs >= rhs,
    }
}

/// Whole numbers that fit in an `i32` are printed without a decimal point,
/// everything else in the general format.
impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) if is_small_integer(*number) => f.write_fmt(format_args!("{number:.0}")),
            Self::Number(number) => f.write_str(&format_general(*number)),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

fn is_small_integer(number: f64) -> bool {
    number == number.trunc() && (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&number)
}

/// Shortest general notation with six significant digits: fixed notation for
/// moderate exponents, scientific notation (`1e+06`) otherwise, trailing zeros removed.
#[must_use]
pub fn format_general(number: f64) -> String {
    if number.is_nan() {
        return "nan".to_string();
    }

    if number.is_infinite() {
        return if number < 0.0 { "-inf" } else { "inf" }.to_string();
    }

    if number == 0.0 {
        return if number.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let scientific = format!("{:.*e}", (GENERAL_PRECISION - 1) as usize, number);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or_default();

    if exponent < -4 || exponent >= GENERAL_PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs());
    }

    let decimals = (GENERAL_PRECISION - 1 - exponent) as usize;
    trim_fraction(&format!("{number:.decimals$}")).to_string()
}

fn trim_fraction(str: &str) -> &str {
    if !str.contains('.') {
        return str;
    }

    str.trim_end_matches('0').trim_end_matches('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(7.0, "7")]
    #[case(-3.0, "-3")]
    #[case(0.5, "0.5")]
    #[case(3.25, "3.25")]
    #[case(1.0 / 3.0, "0.333333")]
    #[case(1e20, "1e+20")]
    #[case(2147483647.0, "2147483647")]
    #[case(-2147483648.0, "-2147483648")]
    #[case(2147483648.0, "2.14748e+09")]
    #[case(3e9, "3e+09")]
    #[case(1e10, "1e+10")]
    #[case(2f64.powi(100), "1.26765e+30")]
    #[case(2.5e-7, "2.5e-07")]
    fn display_number(#[case] number: f64, #[case] expected: &str) {
        assert_eq!(Value::Number(number).to_string(), expected);
    }

    #[rstest]
    #[case(5.0, "5")]
    #[case(0.1, "0.1")]
    #[case(123456.0, "123456")]
    #[case(1234567.0, "1.23457e+06")]
    #[case(1e20, "1e+20")]
    #[case(0.0001, "0.0001")]
    #[case(0.00001, "1e-05")]
    #[case(-2.5, "-2.5")]
    #[case(100.0, "100")]
    #[case(f64::INFINITY, "inf")]
    #[case(f64::NAN, "nan")]
    fn general_format(#[case] number: f64, #[case] expected: &str) {
        assert_eq!(format_general(number), expected);
    }

    #[rstest]
    #[case(Value::from("a"), Value::from("b"), Value::from("ab"))]
    #[case(Value::from("x"), Value::Number(5.0), Value::from("x5"))]
    #[case(Value::Number(5.0), Value::from("x"), Value::from("5x"))]
    #[case(Value::from("n="), Value::Number(1234567.0), Value::from("n=1.23457e+06"))]
    #[case(Value::Number(2.0), Value::Number(3.0), Value::Number(5.0))]
    fn addition(#[case] lhs: Value, #[case] rhs: Value, #[case] expected: Value) {
        assert_eq!(lhs.add(rhs), expected);
    }

    #[rstest]
    #[case(Value::from("9"), BiOperator::Multiply, Value::Number(3.0), Value::Number(0.0))]
    #[case(Value::Number(3.0), BiOperator::Subtract, Value::from("1"), Value::Number(3.0))]
    #[case(Value::Number(7.0), BiOperator::Modulo, Value::Number(4.0), Value::Number(3.0))]
    #[case(Value::Number(-7.0), BiOperator::Modulo, Value::Number(4.0), Value::Number(-3.0))]
    #[case(Value::Number(2.0), BiOperator::Power, Value::Number(10.0), Value::Number(1024.0))]
    #[case(Value::Number(1.0), BiOperator::Divide, Value::Number(0.0), Value::Number(f64::INFINITY))]
    #[case(Value::from("a"), BiOperator::Comparison(Comparison::Equality), Value::from("b"), Value::Number(1.0))]
    #[case(Value::Number(2.0), BiOperator::Comparison(Comparison::LessThanOrEqual), Value::Number(2.0), Value::Number(1.0))]
    #[case(Value::Number(2.0), BiOperator::Comparison(Comparison::GreaterThan), Value::Number(2.0), Value::Number(0.0))]
    #[case(Value::Number(2.0), BiOperator::LogicalAnd, Value::Number(-1.0), Value::Number(1.0))]
    #[case(Value::Number(2.0), BiOperator::LogicalAnd, Value::Number(0.0), Value::Number(0.0))]
    #[case(Value::Number(0.0), BiOperator::LogicalOr, Value::from("x"), Value::Number(0.0))]
    #[case(Value::Number(0.0), BiOperator::LogicalOr, Value::Number(3.0), Value::Number(1.0))]
    fn numeric_operators(#[case] lhs: Value, #[case] operator: BiOperator, #[case] rhs: Value, #[case] expected: Value) {
        assert_eq!(lhs.apply_binary(operator, rhs), expected);
    }

    #[rstest]
    #[case(Value::Number(4.0), UnaryOperator::Negate, Value::Number(-4.0))]
    #[case(Value::from("4"), UnaryOperator::Negate, Value::Number(-0.0))]
    #[case(Value::from("x"), UnaryOperator::Plus, Value::Number(0.0))]
    #[case(Value::Number(0.0), UnaryOperator::Not, Value::Number(1.0))]
    #[case(Value::Number(0.25), UnaryOperator::Not, Value::Number(0.0))]
    #[case(Value::from("x"), UnaryOperator::Not, Value::Number(1.0))]
    fn unary_operators(#[case] operand: Value, #[case] operator: UnaryOperator, #[case] expected: Value) {
        assert_eq!(operand.apply_unary(operator), expected);
    }

    #[rstest]
    #[case(Value::Number(1.0), true)]
    #[case(Value::Number(-0.5), true)]
    #[case(Value::Number(0.0), false)]
    #[case(Value::from("yes"), false)]
    fn truthiness(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }
}

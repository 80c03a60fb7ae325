// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Write};

use crate::{Keyword, Operator, Ranged};

#[derive(Clone, Debug, PartialEq)]
pub enum PrimaryExpression {
    Boolean(bool),
    Number(f64),
    StringLiteral(String),
    Reference(Ranged<String>),
    Parenthesized(Box<Ranged<Expression>>),

    /// Placeholder for a token that cannot start an expression. Evaluates to `0`.
    Missing,
}

impl Display for PrimaryExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Self::Number(number) => number.fmt(f),
            Self::StringLiteral(str) => {
                f.write_char('"')?;
                f.write_str(str)?;
                f.write_char('"')
            }
            Self::Reference(name) => f.write_str(name.value()),
            Self::Parenthesized(expr) => Display::fmt(expr.value(), f),
            Self::Missing => f.write_str("<missing>"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    BiExpression(BiExpression),
    Primary(PrimaryExpression),
    Unary(UnaryExpression),
}

/// Binary and unary expressions are written fully parenthesized, which makes
/// the grouping chosen by the parser visible.
impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BiExpression(expr) => Display::fmt(expr, f),
            Self::Primary(expr) => Display::fmt(expr, f),
            Self::Unary(expr) => Display::fmt(expr, f),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnaryExpression {
    pub operator: Ranged<UnaryOperator>,
    pub rhs: Box<Ranged<Expression>>,
}

impl Display for UnaryExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char('(')?;
        f.write_str(self.operator.as_str())?;
        if *self.operator.value() == UnaryOperator::Not {
            f.write_char(' ')?;
        }
        Display::fmt(self.rhs.value(), f)?;
        f.write_char(')')
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Negate,
    Plus,
    Not,
}

impl UnaryOperator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Negate => "-",
            Self::Plus => "+",
            Self::Not => "not",
        }
    }
}

/// A chain of operators of one precedence level, folded from left to right:
/// `a - b + c` is `(a - b) + c`.
///
/// The operands are kept in a flat list so that a long chain does not nest.
#[derive(Clone, Debug, PartialEq)]
pub struct BiExpression {
    pub first: Box<Ranged<Expression>>,
    pub rest: Vec<BiOperand>,
}

impl Display for BiExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for _ in &self.rest {
            f.write_char('(')?;
        }

        Display::fmt(self.first.value(), f)?;

        for operand in &self.rest {
            f.write_char(' ')?;
            f.write_str(operand.operator.as_str())?;
            f.write_char(' ')?;

            Display::fmt(operand.rhs.value(), f)?;
            f.write_char(')')?;
        }

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BiOperand {
    pub operator: Ranged<BiOperator>,
    pub rhs: Ranged<Expression>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BiOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
    Comparison(Comparison),
    LogicalAnd,
    LogicalOr,
}

impl BiOperator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::Power => "^",
            Self::Comparison(comparison) => comparison.as_str(),
            Self::LogicalAnd => "and",
            Self::LogicalOr => "or",
        }
    }

    /// The operator spelled by an operator token, if that token is a binary operator at all.
    #[must_use]
    pub const fn from_operator(operator: Operator) -> Option<Self> {
        Some(match operator {
            Operator::PlusSign => Self::Add,
            Operator::HyphenMinus => Self::Subtract,
            Operator::Asterisk => Self::Multiply,
            Operator::Solidus => Self::Divide,
            Operator::PercentageSign => Self::Modulo,
            Operator::Caret => Self::Power,
            Operator::Equals => Self::Comparison(Comparison::Equality),
            Operator::NotEquals => Self::Comparison(Comparison::Inequality),
            Operator::LessThan => Self::Comparison(Comparison::LessThan),
            Operator::LessThanOrEqual => Self::Comparison(Comparison::LessThanOrEqual),
            Operator::GreaterThan => Self::Comparison(Comparison::GreaterThan),
            Operator::GreaterThanOrEqual => Self::Comparison(Comparison::GreaterThanOrEqual),
            Operator::Assignment => return None,
        })
    }

    #[must_use]
    pub const fn from_keyword(keyword: Keyword) -> Option<Self> {
        match keyword {
            Keyword::And => Some(Self::LogicalAnd),
            Keyword::Or => Some(Self::LogicalOr),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Equality,
    Inequality,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

impl Comparison {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Equality => "==",
            Self::Inequality => "!=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
        }
    }
}

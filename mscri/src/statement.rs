// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use crate::{Expression, FileRange, Ranged};

#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub range: FileRange,
    pub kind: StatementKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatementKind {
    /// A `let` binding.
    Variable(VariableStatement),

    Print(Ranged<Expression>),

    /// Only the header of an `if`: the body is not parsed until the condition
    /// has been evaluated.
    If(IfStatement),

    /// Tokens that were consumed without effect: a malformed `let`, a statement
    /// led by an inert keyword, or a token that cannot start a statement.
    Ignored,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariableStatement {
    pub name: Ranged<String>,
    pub expression: Ranged<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IfStatement {
    pub condition: Ranged<Expression>,

    /// `None` when the `then` keyword is missing; such an `if` has no body at all.
    pub then_keyword: Option<FileRange>,
}

// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use super::{Delimiter, Keyword, Operator};

#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    Number(f64),
    StringLiteral(String),
    Identifier(String),
    Keyword(Keyword),
    Operator(Operator),
    Delimiter(Delimiter),
    Newline,
    EndOfInput,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Number(..) => "number",
            Self::StringLiteral(..) => "string",
            Self::Identifier(..) => "identifier",
            Self::Keyword(..) => "keyword",
            Self::Operator(operator) => operator.into(),
            Self::Delimiter(delimiter) => delimiter.into(),
            Self::Newline => "newline",
            Self::EndOfInput => "end of input",
        }
    }

    #[must_use]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        *self == Self::Keyword(keyword)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => number.fmt(f),
            Self::StringLiteral(str) => f.write_fmt(format_args!("\"{str}\"")),
            Self::Identifier(ident) => f.write_str(ident),
            Self::Keyword(keyword) => f.write_str(keyword.as_ref()),
            Self::Operator(operator) => operator.fmt(f),
            Self::Delimiter(delimiter) => delimiter.fmt(f),
            Self::Newline => f.write_str("\\n"),
            Self::EndOfInput => f.write_str("EOF"),
        }
    }
}

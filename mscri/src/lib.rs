// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod config;
mod expression;
mod lexer;
mod parser;
mod statement;
mod util;
mod value;

pub use self::{
    config::{ConfigRoot, ConfigSectionLog},
    expression::*,
    lexer::{Delimiter, Keyword, Lexer, LexerConfig, Operator, Token, TokenKind},
    parser::{Parser, ParseError, ParseResult},
    statement::{IfStatement, Statement, StatementKind, VariableStatement},
    util::{FileLocation, FileRange, Ranged, SourceCode},
    value::{format_general, Value},
};

// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod delimiter;
mod keyword;
mod lexer;
mod operator;
mod token;
mod token_kind;

pub use self::{
    delimiter::Delimiter,
    keyword::Keyword,
    lexer::{
        Lexer,
        LexerConfig,
    },
    operator::Operator,
    token::Token,
    token_kind::TokenKind,
};

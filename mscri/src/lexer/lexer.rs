// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::str::CharIndices;

use log::{debug, trace};
use serde::Deserialize;

use crate::{Delimiter, FileLocation, Keyword, Operator, Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct LexerConfig {
    /// Longer strings, numbers and identifiers are cut off at this many characters.
    pub max_lexeme_length: usize,
}

impl LexerConfig {
    pub const DEFAULT_MAX_LEXEME_LENGTH: usize = 255;
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            max_lexeme_length: Self::DEFAULT_MAX_LEXEME_LENGTH,
        }
    }
}

pub struct Lexer<'source_code> {
    chars: CharIndices<'source_code>,
    length: usize,
    config: LexerConfig,

    current: Option<(FileLocation, char)>,
    line: usize,
    column: usize,
}

impl<'source_code> Lexer<'source_code> {
    pub fn new(input: &'source_code str) -> Self {
        Self::with_config(input, LexerConfig::default())
    }

    pub fn with_config(input: &'source_code str, config: LexerConfig) -> Self {
        Self {
            chars: input.char_indices(),
            length: input.len(),
            config,
            current: None,
            line: 0,
            column: 0,
        }
    }

    /// Produces the next token. Once the input is exhausted, every call yields
    /// [`TokenKind::EndOfInput`].
    pub fn next(&mut self) -> Token {
        loop {
            self.skip_whitespace();

            let Some(ch) = self.peek_char() else {
                return self.end_of_input_token();
            };

            let token = match ch {
                '\n' => self.consume_single_char_token(TokenKind::Newline),

                '"' | '\'' => self.consume_string(ch),

                'a'..='z' | 'A'..='Z' | '_' => self.consume_identifier_or_keyword(),
                '0'..='9' => self.consume_number(),

                '(' => self.consume_single_char_token(TokenKind::Delimiter(Delimiter::LeftParenthesis)),
                ')' => self.consume_single_char_token(TokenKind::Delimiter(Delimiter::RightParenthesis)),
                ',' => self.consume_single_char_token(TokenKind::Delimiter(Delimiter::Comma)),

                '+' => self.consume_single_char_token(TokenKind::Operator(Operator::PlusSign)),
                '-' => self.consume_single_char_token(TokenKind::Operator(Operator::HyphenMinus)),
                '*' => self.consume_single_char_token(TokenKind::Operator(Operator::Asterisk)),
                '%' => self.consume_single_char_token(TokenKind::Operator(Operator::PercentageSign)),
                '^' => self.consume_single_char_token(TokenKind::Operator(Operator::Caret)),
                '=' => self.consume_normal_or_equals_token(Operator::Assignment, Operator::Equals),
                '<' => self.consume_normal_or_equals_token(Operator::LessThan, Operator::LessThanOrEqual),
                '>' => self.consume_normal_or_equals_token(Operator::GreaterThan, Operator::GreaterThanOrEqual),

                '/' => match self.handle_solidus() {
                    Some(token) => token,
                    None => continue,
                },

                '!' => match self.consume_exclamation_mark() {
                    Some(token) => token,
                    None => continue,
                },

                unknown => {
                    trace!("Skipping unknown character {unknown:?} at {}", self.current_location());
                    self.consume_char();
                    continue;
                }
            };

            trace!("Token {} ({}) at {}", token, token.kind.name(), token.begin);
            return token;
        }
    }

    #[must_use]
    fn consume_single_char_token(&mut self, kind: TokenKind) -> Token {
        let begin = self.current_location();

        self.consume_char();

        let end = self.current_location();

        Token {
            kind,
            begin,
            end,
        }
    }

    fn consume_normal_or_equals_token(&mut self, normal: Operator, with_equals: Operator) -> Token {
        let begin = self.current_location();
        self.consume_char();

        let kind = if self.peek_char() == Some('=') {
            self.consume_char();
            TokenKind::Operator(with_equals)
        } else {
            TokenKind::Operator(normal)
        };

        let end = self.current_location();

        Token {
            kind,
            begin,
            end,
        }
    }

    /// A lone `!` is not part of the language and is skipped like any unknown character.
    fn consume_exclamation_mark(&mut self) -> Option<Token> {
        let begin = self.current_location();
        self.consume_char();

        if self.peek_char() != Some('=') {
            trace!("Skipping lone '!' at {begin}");
            return None;
        }

        self.consume_char();

        Some(Token {
            kind: TokenKind::Operator(Operator::NotEquals),
            begin,
            end: self.current_location(),
        })
    }

    fn handle_solidus(&mut self) -> Option<Token> {
        let token = self.consume_single_char_token(TokenKind::Operator(Operator::Solidus));

        match self.peek_char() {
            Some('/') => {
                self.consume_until_end_of_line();
                None
            }

            Some('*') => {
                self.consume_char();
                self.consume_block_comment();
                None
            }

            _ => Some(token),
        }
    }

    /// Leaves the line feed in place, since it still separates statements.
    fn consume_until_end_of_line(&mut self) {
        while let Some(c) = self.peek_char() {
            if c == '\n' {
                break;
            }

            self.consume_char();
        }
    }

    fn consume_block_comment(&mut self) {
        while let Some(c) = self.next_char() {
            if c == '*' && self.peek_char() == Some('/') {
                self.consume_char();
                return;
            }
        }

        debug!("Block comment is not terminated before the end of the input");
    }

    fn consume_string(&mut self, quote: char) -> Token {
        let begin = self.current_location();
        self.consume_char();

        let mut buffer = LexemeBuffer::new(self.config.max_lexeme_length);
        let mut terminated = false;

        while let Some(c) = self.next_char() {
            if c == quote {
                terminated = true;
                break;
            }

            if c != '\\' {
                buffer.push(c);
                continue;
            }

            let Some(escaped) = self.next_char() else {
                break;
            };

            buffer.push(match escaped {
                'n' => '\n',
                't' => '\t',
                other => other,
            });
        }

        if !terminated {
            debug!("String literal starting at {begin} is not terminated");
        }

        Token {
            kind: TokenKind::StringLiteral(buffer.finish(begin)),
            begin,
            end: self.current_location(),
        }
    }

    fn consume_identifier_or_keyword(&mut self) -> Token {
        let begin = self.current_location();
        let mut buffer = LexemeBuffer::new(self.config.max_lexeme_length);

        while let Some(c) = self.peek_char() {
            if !is_identifier_char(c) {
                break;
            }

            buffer.push(c);
            self.consume_char();
        }

        let end = self.current_location();
        let str = buffer.finish(begin);

        let kind = match Keyword::parse(&str) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier(str)
        };

        Token {
            kind,
            begin,
            end,
        }
    }

    /// Digits with at most one decimal point. A second `.` ends the number.
    fn consume_number(&mut self) -> Token {
        let begin = self.current_location();
        let mut buffer = LexemeBuffer::new(self.config.max_lexeme_length);
        let mut has_dot = false;

        while let Some(c) = self.peek_char() {
            if c == '.' {
                if has_dot {
                    break;
                }

                has_dot = true;
            } else if !c.is_ascii_digit() {
                break;
            }

            buffer.push(c);
            self.consume_char();
        }

        let end = self.current_location();
        let str = buffer.finish(begin);
        let number = str.parse().unwrap_or_else(|_| {
            debug!("Number literal `{str}` at {begin} could not be converted, using 0");
            0.0
        });

        Token {
            kind: TokenKind::Number(number),
            begin,
            end,
        }
    }

    fn end_of_input_token(&mut self) -> Token {
        let location = self.current_location();

        Token {
            kind: TokenKind::EndOfInput,
            begin: location,
            end: location,
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if !matches!(c, ' ' | '\t' | '\r') {
                break;
            }

            self.consume_char();
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        if let Some((_, c)) = self.current {
            return Some(c);
        }

        self.current = self.chars.next()
            .map(|(offset, char)| {
                let location = FileLocation::new(offset, self.line, self.column);

                if char == '\n' {
                    self.line += 1;
                    self.column = 0;
                } else {
                    self.column += 1;
                }

                (location, char)
            });
        Some(self.current?.1)
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.consume_char();
        Some(c)
    }

    fn consume_char(&mut self) {
        self.current = None;
        _ = self.peek_char();
    }

    fn current_location(&mut self) -> FileLocation {
        _ = self.peek_char();
        match self.current {
            Some((location, _)) => location,
            None => FileLocation::new(self.length, self.line, self.column),
        }
    }

    /// Collects every token, including the terminating [`TokenKind::EndOfInput`].
    pub fn collect_all(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next();
            let is_end = token.kind == TokenKind::EndOfInput;
            tokens.push(token);

            if is_end {
                break;
            }
        }

        tokens
    }
}

impl<'source_code> Iterator for Lexer<'source_code> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = Lexer::next(self);
        if token.kind == TokenKind::EndOfInput {
            return None;
        }

        Some(token)
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

struct LexemeBuffer {
    text: String,
    length: usize,
    max_length: usize,
    truncated: bool,
}

impl LexemeBuffer {
    fn new(max_length: usize) -> Self {
        Self {
            text: String::new(),
            length: 0,
            max_length,
            truncated: false,
        }
    }

    fn push(&mut self, c: char) {
        if self.length >= self.max_length {
            self.truncated = true;
            return;
        }

        self.text.push(c);
        self.length += 1;
    }

    fn finish(self, begin: FileLocation) -> String {
        if self.truncated {
            debug!("Lexeme at {begin} exceeds {} characters and was truncated", self.max_length);
        }

        self.text
    }
}

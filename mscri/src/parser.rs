// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use log::{debug, trace};
use strum::AsRefStr;

use crate::{
    BiExpression, BiOperand, BiOperator, Comparison, Delimiter, Expression, FileLocation, FileRange, IfStatement, Keyword,
    Operator, PrimaryExpression, Ranged, Statement, StatementKind, Token, TokenKind, UnaryExpression, UnaryOperator,
    VariableStatement,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A cursor over the tokens of one source buffer.
///
/// Statements are handed out one at a time, so that the caller can execute a
/// statement before the next one is parsed. Expressions are parsed completely
/// into a tree before they are evaluated.
#[derive(Clone)]
pub struct Parser<'tokens> {
    tokens: &'tokens [Token],
    pub cursor: usize,
    pub token_begin: FileLocation,
    pub token_end: FileLocation,
    end_of_input_token: Token,
}

impl<'tokens> Parser<'tokens> {
    pub fn new(tokens: &'tokens [Token]) -> Self {
        let end = tokens.last().map(|x| x.end).unwrap_or_default();

        Self {
            tokens,
            cursor: 0,
            token_begin: Default::default(),
            token_end: Default::default(),
            end_of_input_token: Token {
                kind: TokenKind::EndOfInput,
                begin: end,
                end,
            },
        }
    }

    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.peek_token().kind == TokenKind::EndOfInput
    }

    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        self.skip_newlines();

        let first_token = self.peek_token();
        let start = first_token.begin;
        let kind = match first_token.kind {
            TokenKind::EndOfInput => return Err(ParseError::EndOfFile),

            TokenKind::Keyword(Keyword::Let) => {
                _ = self.consume_token();
                self.parse_variable_statement()
            }

            TokenKind::Keyword(Keyword::Print) => {
                _ = self.consume_token();
                StatementKind::Print(self.parse_expression())
            }

            TokenKind::Keyword(Keyword::If) => {
                _ = self.consume_token();
                StatementKind::If(self.parse_if_statement())
            }

            _ => {
                let token = self.consume_token();
                match token.kind {
                    TokenKind::Keyword(keyword) if !keyword.starts_statement() => {
                        debug!("`{}` at {} is reserved but not executable", keyword.as_ref(), token.begin);
                    }
                    _ => debug!("Dropping `{token}` at {}, it cannot start a statement", token.begin),
                }
                StatementKind::Ignored
            }
        };

        let range = FileRange::new(start, self.token_end);
        Ok(Statement {
            range,
            kind,
        })
    }

    /// An incomplete binding is dropped without a diagnostic. Only the tokens that
    /// matched the `let NAME =` prefix are consumed.
    fn parse_variable_statement(&mut self) -> StatementKind {
        let Some(name) = self.peek_token().as_identifier() else {
            debug!("Ignoring `let` without a variable name at {}", self.token_begin);
            return StatementKind::Ignored;
        };
        _ = self.consume_token();

        if self.peek_token().kind != TokenKind::Operator(Operator::Assignment) {
            debug!("Ignoring `let {}` without `=`", name.value());
            return StatementKind::Ignored;
        }
        _ = self.consume_token();

        let expression = self.parse_expression();

        StatementKind::Variable(VariableStatement {
            name,
            expression,
        })
    }

    fn parse_if_statement(&mut self) -> IfStatement {
        let condition = self.parse_expression();

        let then_keyword = if self.peek_token().is_keyword(Keyword::Then) {
            Some(self.consume_token().range())
        } else {
            debug!("Missing `then` after the condition at {}", condition.range().start());
            None
        };

        IfStatement {
            condition,
            then_keyword,
        }
    }

    pub fn skip_newlines(&mut self) {
        while self.peek_token().kind == TokenKind::Newline {
            _ = self.consume_token();
        }
    }

    /// Discards tokens up to and including the next `endif`. Returns `false` if the
    /// input ended first.
    pub fn skip_past_endif(&mut self) -> bool {
        loop {
            match self.peek_token().kind {
                TokenKind::EndOfInput => return false,

                TokenKind::Keyword(Keyword::Endif) => {
                    _ = self.consume_token();
                    return true;
                }

                _ => {
                    let token = self.consume_token();
                    trace!("Skipping `{token}` while looking for `endif`");
                }
            }
        }
    }

    #[must_use]
    pub fn peek_keyword(&self) -> Option<Keyword> {
        match self.peek_token().kind {
            TokenKind::Keyword(keyword) => Some(keyword),
            _ => None,
        }
    }

    pub fn parse_expression(&mut self) -> Ranged<Expression> {
        self.parse_logical_or_expression()
    }

    fn parse_logical_or_expression(&mut self) -> Ranged<Expression> {
        self.parse_bi_expression(Self::parse_logical_and_expression, &[
            BiOperator::LogicalOr,
        ])
    }

    fn parse_logical_and_expression(&mut self) -> Ranged<Expression> {
        self.parse_bi_expression(Self::parse_equality_expression, &[
            BiOperator::LogicalAnd,
        ])
    }

    fn parse_equality_expression(&mut self) -> Ranged<Expression> {
        self.parse_bi_expression(Self::parse_relational_expression, &[
            BiOperator::Comparison(Comparison::Equality),
            BiOperator::Comparison(Comparison::Inequality),
        ])
    }

    fn parse_relational_expression(&mut self) -> Ranged<Expression> {
        self.parse_bi_expression(Self::parse_additive_expression, &[
            BiOperator::Comparison(Comparison::LessThan),
            BiOperator::Comparison(Comparison::GreaterThan),
            BiOperator::Comparison(Comparison::LessThanOrEqual),
            BiOperator::Comparison(Comparison::GreaterThanOrEqual),
        ])
    }

    fn parse_additive_expression(&mut self) -> Ranged<Expression> {
        self.parse_bi_expression(Self::parse_multiplicative_expression, &[
            BiOperator::Add,
            BiOperator::Subtract,
        ])
    }

    fn parse_multiplicative_expression(&mut self) -> Ranged<Expression> {
        self.parse_bi_expression(Self::parse_power_expression, &[
            BiOperator::Multiply,
            BiOperator::Divide,
            BiOperator::Modulo,
        ])
    }

    /// `^` folds to the left just like the other levels: `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2`.
    fn parse_power_expression(&mut self) -> Ranged<Expression> {
        self.parse_bi_expression(Self::parse_unary_expression, &[
            BiOperator::Power,
        ])
    }

    /// Collects every operand of one precedence level into a single flat chain.
    fn parse_bi_expression<F>(&mut self, mut operand: F, operators: &[BiOperator]) -> Ranged<Expression>
            where F: FnMut(&mut Self) -> Ranged<Expression> {
        let first = operand(self);
        let start = first.range().start();
        let mut end = first.range().end();
        let mut rest = Vec::new();

        loop {
            let Some(operator) = self.peek_bi_operator().filter(|x| operators.contains(x)) else {
                break;
            };

            let operator_range = self.consume_token().range();
            let rhs = operand(self);
            end = rhs.range().end().max(operator_range.end());

            rest.push(BiOperand {
                operator: Ranged::new(operator_range, operator),
                rhs,
            });
        }

        if rest.is_empty() {
            return first;
        }

        let expression = Expression::BiExpression(BiExpression {
            first: Box::new(first),
            rest,
        });
        Ranged::new(FileRange::new(start, end), expression)
    }

    fn parse_unary_expression(&mut self) -> Ranged<Expression> {
        let operator = match self.peek_token().kind {
            TokenKind::Operator(Operator::HyphenMinus) => UnaryOperator::Negate,
            TokenKind::Operator(Operator::PlusSign) => UnaryOperator::Plus,
            TokenKind::Keyword(Keyword::Not) => UnaryOperator::Not,
            _ => return self.parse_primary_expression().map(Expression::Primary),
        };

        let operator_range = self.consume_token().range();
        let rhs = self.parse_unary_expression();
        let range = FileRange::new(operator_range.start(), rhs.range().end().max(operator_range.end()));

        Ranged::new(range, Expression::Unary(UnaryExpression {
            operator: Ranged::new(operator_range, operator),
            rhs: Box::new(rhs),
        }))
    }

    /// Never fails: a token that cannot start an expression is left in place and
    /// [`PrimaryExpression::Missing`] is returned instead.
    fn parse_primary_expression(&mut self) -> Ranged<PrimaryExpression> {
        let token = self.peek_token();
        let range = token.range();

        let expression = match &token.kind {
            TokenKind::Number(number) => PrimaryExpression::Number(*number),
            TokenKind::StringLiteral(literal) => PrimaryExpression::StringLiteral(literal.clone()),
            TokenKind::Keyword(Keyword::True) => PrimaryExpression::Boolean(true),
            TokenKind::Keyword(Keyword::False) => PrimaryExpression::Boolean(false),
            TokenKind::Identifier(identifier) => PrimaryExpression::Reference(Ranged::new(range, identifier.clone())),

            TokenKind::Delimiter(Delimiter::LeftParenthesis) => {
                _ = self.consume_token();
                let expression = self.parse_expression();

                if self.peek_token().kind == TokenKind::Delimiter(Delimiter::RightParenthesis) {
                    _ = self.consume_token();
                } else {
                    debug!("Missing `)` for the parenthesis at {}", range.start());
                }

                let range = FileRange::new(range.start(), self.token_end);
                return Ranged::new(range, PrimaryExpression::Parenthesized(Box::new(expression)));
            }

            _ => {
                trace!("`{token}` at {} cannot start an expression", token.begin);
                return Ranged::new(range.start().as_zero_range(), PrimaryExpression::Missing);
            }
        };

        _ = self.consume_token();
        Ranged::new(range, expression)
    }

    fn peek_bi_operator(&self) -> Option<BiOperator> {
        match self.peek_token().kind {
            TokenKind::Operator(operator) => BiOperator::from_operator(operator),
            TokenKind::Keyword(keyword) => BiOperator::from_keyword(keyword),
            _ => None,
        }
    }

    fn peek_token(&self) -> &Token {
        self.tokens.get(self.cursor).unwrap_or(&self.end_of_input_token)
    }

    /// Consuming at the end of the input keeps returning the end-of-input token.
    fn consume_token(&mut self) -> Token {
        let token = self.peek_token().clone();
        if token.kind != TokenKind::EndOfInput {
            self.cursor += 1;
        }

        self.token_begin = token.begin;
        self.token_end = token.end;
        token
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error, AsRefStr)]
pub enum ParseError {
    #[error("End of input reached")]
    EndOfFile,
}

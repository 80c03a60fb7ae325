// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use log::{debug, warn};
use mscri::{
    Expression, FileRange, IfStatement, Keyword, Lexer, LexerConfig, ParseResult, Parser, PrimaryExpression,
    Ranged, SourceCode, Statement, StatementKind, Value,
};

use crate::{Environment, Output, RuntimeDiagnostic};

/// An interpreter session. Bindings survive across calls to [`Interpreter::run`].
pub struct Interpreter<O>
        where O: Output {
    environment: Environment,
    output: O,
    lexer_config: LexerConfig,
}

impl<O> Interpreter<O>
        where O: Output {
    pub fn new(output: O) -> Self {
        Self::with_config(output, LexerConfig::default())
    }

    pub fn with_config(output: O, lexer_config: LexerConfig) -> Self {
        Self {
            environment: Environment::new(),
            output,
            lexer_config,
        }
    }

    /// Executes every statement of the given source.
    pub fn run(&mut self, source_code: &SourceCode) {
        self.output.begin_source(source_code);

        let tokens = Lexer::with_config(source_code.contents(), self.lexer_config).collect_all();
        debug!("Running {} ({} tokens)", source_code.path().display(), tokens.len());

        let mut parser = Parser::new(&tokens);
        while self.execute_next(&mut parser).is_ok() {}
    }

    /// Parses and executes the statement under the cursor.
    pub fn execute_next(&mut self, parser: &mut Parser<'_>) -> ParseResult<()> {
        let statement = parser.parse_statement()?;
        self.execute_statement(&statement, parser);
        Ok(())
    }

    fn execute_statement(&mut self, statement: &Statement, parser: &mut Parser<'_>) {
        match &statement.kind {
            StatementKind::Variable(variable) => {
                let value = self.evaluate(&variable.expression);
                self.environment.assign(variable.name.value(), value);
            }

            StatementKind::Print(expression) => {
                let value = self.evaluate(expression);
                self.output.print(&value);
            }

            StatementKind::If(statement) => {
                self.execute_if_statement(statement, parser);
            }

            StatementKind::Ignored => {
                debug!("Statement at {} has no effect", statement.range.start());
            }
        }
    }

    /// Runs at most one statement as the body, then discards tokens through the next `endif`.
    fn execute_if_statement(&mut self, statement: &IfStatement, parser: &mut Parser<'_>) {
        let condition = self.evaluate(&statement.condition);

        if statement.then_keyword.is_none() {
            return;
        }

        if condition.is_truthy() {
            parser.skip_newlines();

            if parser.peek_keyword() != Some(Keyword::Endif) {
                _ = self.execute_next(parser);
            }
        }

        if !parser.skip_past_endif() {
            debug!("`if` at {} has no `endif`", statement.condition.range().start());
        }
    }

    /// Both operands of every binary operator are evaluated, `and`/`or` included.
    pub fn evaluate(&mut self, expression: &Ranged<Expression>) -> Value {
        match expression.value() {
            Expression::BiExpression(expression) => {
                let mut lhs = self.evaluate(&expression.first);

                for operand in &expression.rest {
                    let rhs = self.evaluate(&operand.rhs);
                    lhs = lhs.apply_binary(*operand.operator.value(), rhs);
                }

                lhs
            }

            Expression::Primary(primary) => self.evaluate_primary_expression(primary, expression.range()),

            Expression::Unary(expression) => {
                let rhs = self.evaluate(&expression.rhs);
                rhs.apply_unary(*expression.operator.value())
            }
        }
    }

    fn evaluate_primary_expression(&mut self, expression: &PrimaryExpression, range: FileRange) -> Value {
        match expression {
            PrimaryExpression::Boolean(boolean) => Value::from_bool(*boolean),
            PrimaryExpression::Number(number) => Value::Number(*number),
            PrimaryExpression::StringLiteral(literal) => Value::Text(literal.clone()),

            PrimaryExpression::Reference(name) => {
                if let Some(value) = self.environment.lookup(name.value()) {
                    return value;
                }

                let diagnostic = RuntimeDiagnostic::UndefinedVariable {
                    name: name.value().clone(),
                    range,
                };
                warn!("{diagnostic} at {}", range.start());
                self.output.diagnostic(&diagnostic);
                Value::Number(0.0)
            }

            PrimaryExpression::Parenthesized(expression) => self.evaluate(expression),
            PrimaryExpression::Missing => Value::Number(0.0),
        }
    }

    #[must_use]
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    #[must_use]
    pub fn output(&self) -> &O {
        &self.output
    }

    #[must_use]
    pub fn into_output(self) -> O {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CapturedOutput;
    use rstest::rstest;

    fn run(input: &str) -> Interpreter<CapturedOutput> {
        let mut interpreter = Interpreter::new(CapturedOutput::new());
        interpreter.run(&SourceCode::new_test(input));
        interpreter
    }

    fn evaluate(input: &str) -> Value {
        let tokens = Lexer::new(input).collect_all();
        let expression = Parser::new(&tokens).parse_expression();
        Interpreter::new(()).evaluate(&expression)
    }

    #[rstest]
    #[case("2 + 3 * 4", Value::Number(14.0))]
    #[case("(2 + 3) * 4", Value::Number(20.0))]
    #[case("2 ^ 3 ^ 2", Value::Number(64.0))]
    #[case("-2 ^ 2", Value::Number(4.0))]
    #[case("10 - 4 - 3", Value::Number(3.0))]
    #[case("7 % 4", Value::Number(3.0))]
    #[case("1 / 4", Value::Number(0.25))]
    #[case("\"a\" + \"b\"", Value::Text("ab".into()))]
    #[case("\"x\" + 5", Value::Text("x5".into()))]
    #[case("5 + \"x\"", Value::Text("5x".into()))]
    #[case("\"x\" * 3", Value::Number(0.0))]
    #[case("-\"x\"", Value::Number(-0.0))]
    #[case("true", Value::Number(1.0))]
    #[case("not true", Value::Number(0.0))]
    #[case("1 < 2 and 2 < 1", Value::Number(0.0))]
    #[case("0 or 3", Value::Number(1.0))]
    #[case("", Value::Number(0.0))]
    fn evaluates(#[case] input: &str, #[case] expected: Value) {
        assert_eq!(evaluate(input), expected);
    }

    #[rstest]
    #[case(" + 1", "100000")]
    #[case(" - 1", "-99998")]
    #[case(" * 1", "1")]
    #[case(" and 1", "1")]
    fn long_operator_chains(#[case] operation: &str, #[case] expected: &str) {
        let input = format!("print 1{}", operation.repeat(99_999));
        let output = run(&input).into_output();
        assert_eq!(output.printed_lines(), [expected]);
    }

    #[test]
    fn undefined_variable_is_reported_and_reads_as_zero() {
        let interpreter = run("print y");
        let output = interpreter.into_output();

        assert_eq!(output.printed_lines(), ["0"]);
        assert_eq!(output.diagnostics(), ["Variable 'y' not defined"]);
    }

    #[test]
    fn both_sides_of_logical_operators_are_evaluated() {
        let output = run("print 0 and a\nprint 1 or b").into_output();

        assert_eq!(output.printed_lines(), ["0", "1"]);
        assert_eq!(output.diagnostics(), [
            "Variable 'a' not defined",
            "Variable 'b' not defined",
        ]);
    }

    #[test]
    fn bindings_persist_across_runs() {
        let mut interpreter = Interpreter::new(CapturedOutput::new());
        interpreter.run(&SourceCode::new_test("let x = 5"));
        interpreter.run(&SourceCode::new_test("print x * 2"));

        assert_eq!(interpreter.environment().len(), 1);
        assert_eq!(interpreter.output().stdout(), "10\n");
    }

    #[rstest]
    #[case("if 0 then print 1 endif", "")]
    #[case("if 1 then print 1 endif", "1\n")]
    #[case("if 1 then print 1 print 2 endif print 3", "1\n3\n")]
    #[case("if 1 then\n\n  print 1\nendif", "1\n")]
    #[case("if 1 then endif print 2", "2\n")]
    #[case("if 1 print 2", "2\n")]
    #[case("if \"yes\" then print 1 endif", "")]
    #[case("if 0 then print 1", "")]
    #[case("if 1 then if 0 then print 1 endif print 2 endif print 3", "3\n")]
    #[case("if 0 then if 1 then print 1 endif print 2 endif print 3", "2\n3\n")]
    fn if_statements(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(run(input).into_output().stdout(), expected);
    }

    #[test]
    fn false_condition_still_evaluates_the_condition() {
        let output = run("if missing then print 1 endif").into_output();
        assert_eq!(output.stdout(), "");
        assert_eq!(output.diagnostics(), ["Variable 'missing' not defined"]);
    }
}

// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use mscri::{Expression, Lexer, Parser, Ranged, SourceCode, Token, Value};
use mscri_interpreter::{CapturedOutput, Interpreter};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).filter(None, log::LevelFilter::max()).try_init();
}

fn parse_expression(tokens: &[Token]) -> Ranged<Expression> {
    let mut parser = Parser::new(tokens);

    let expr = parser.parse_expression();
    assert!(parser.is_at_end(), "Tokens left after the expression");

    expr
}

pub fn interpret_expression(input: &str) -> Value {
    init_logging();

    let tokens = Lexer::new(input).collect_all();
    let expression = parse_expression(&tokens);
    Interpreter::new(()).evaluate(&expression)
}

fn interpret(input: &str) -> CapturedOutput {
    init_logging();

    let mut interpreter = Interpreter::new(CapturedOutput::new());
    interpreter.run(&SourceCode::new_test(input));
    interpreter.into_output()
}

pub fn interpret_and_return_stdout(input: &str) -> Vec<String> {
    interpret(input).printed_lines().to_vec()
}

pub fn interpret_and_return_diagnostics(input: &str) -> Vec<String> {
    interpret(input).diagnostics().to_vec()
}

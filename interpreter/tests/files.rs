// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::path::Path;

use mscri::LexerConfig;
use mscri_interpreter::{run_file, CapturedOutput, Interpreter};
use rstest::rstest;
use temp_dir::TempDir;

#[test]
fn missing_file() {
    let mut interpreter = Interpreter::new(CapturedOutput::new());
    let error = run_file(&mut interpreter, Path::new("/nonexistent/script.ms")).unwrap_err();
    assert_eq!(error.to_string(), "Cannot open file '/nonexistent/script.ms'");
}

#[rstest]
#[case("bindings.ms", "let a = 6\nlet b = 7\nprint a * b\n", "42\n")]
#[case("crlf.ms", "print 1\r\nprint 2\r\n", "1\n2\n")]
#[case("empty.ms", "", "")]
fn runs_whole_file(#[case] name: &str, #[case] contents: &str, #[case] expected: &str) {
    let dir = TempDir::new().unwrap();
    let path = dir.child(name);
    std::fs::write(&path, contents).unwrap();

    let mut interpreter = Interpreter::new(CapturedOutput::new());
    run_file(&mut interpreter, &path).unwrap();

    assert_eq!(interpreter.output().stdout(), expected);
}

#[test]
fn long_lexemes_are_truncated() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("truncate.ms");
    std::fs::write(&path, "let abcdefgh = \"0123456789\"\nprint abcd").unwrap();

    let config = LexerConfig {
        max_lexeme_length: 4,
    };
    let mut interpreter = Interpreter::with_config(CapturedOutput::new(), config);
    run_file(&mut interpreter, &path).unwrap();

    assert_eq!(interpreter.output().printed_lines(), ["0123"]);
    assert!(interpreter.output().diagnostics().is_empty());
}

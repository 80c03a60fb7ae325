// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use rstest::rstest;
use tests::interpret_and_return_stdout;

#[rstest]
#[case(
    r#"
        print "Hello!"
    "#,
    &[
        "Hello!",
    ],
)]
#[case(
    r#"
        let x = 3 + 4
        print x
    "#,
    &[
        "7",
    ],
)]
#[case(
    r#"
        let x = 1
        let x = 2
        print x
    "#,
    &[
        "2",
    ],
)]
#[case(
    r#"
        let s = "text"
        let s = 5
        print s + 1
    "#,
    &[
        "6",
    ],
)]
#[case(
    r#"
        let name = "Mscri"
        print "Hello, " + name + "!"
    "#,
    &[
        "Hello, Mscri!",
    ],
)]
#[case(
    r#"
        print 10 / 4
        print 1 / 3
        print 2 ^ 10
        print 0.1 + 0.2
    "#,
    &[
        "2.5",
        "0.333333",
        "1024",
        "0.3",
    ],
)]
#[case(
    r#"
        print 2147483647
        print 3000000000
        print 2 ^ 100
        print 100000 * 100000
    "#,
    &[
        "2147483647",
        "3e+09",
        "1.26765e+30",
        "1e+10",
    ],
)]
#[case(
    r#"
        print "tab\there"
        print 'new\nline'
    "#,
    &[
        "tab\there",
        "new\nline",
    ],
)]
#[case(
    r#"
        // comment
        print 1 /* inline */ print 2
        /* multi
           line */
        print 3
    "#,
    &[
        "1",
        "2",
        "3",
    ],
)]
fn interpret_and_return_stdout_tests(#[case] input: &str, #[case] expected: &[&str]) {
    let expected: Vec<String> = expected.iter().map(|x| x.to_string()).collect();
    assert_eq!(interpret_and_return_stdout(input), expected);
}

#[rstest]
#[case("let = 5\nprint 1")]
#[case("let x 5\nprint 1")]
#[case("while 1 do\nprint 1\nendwhile")]
#[case("function f()\nreturn 2\nendfunction\nprint 1")]
#[case("x = 7\nprint 1")]
#[case("@ # $\nprint 1")]
fn inert_statements_are_skipped(#[case] input: &str) {
    assert_eq!(interpret_and_return_stdout(input), ["1"]);
}

// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use rstest::rstest;
use tests::interpret_and_return_stdout;

#[rstest]
#[case("if 0 then print 1 endif", &[])]
#[case("if 1 then print 1 endif", &["1"])]
#[case("if 1 then print 1 print 2 endif", &["1"])]
#[case("if 0 then print 1 print 2 endif print 3", &["3"])]
#[case("let x = 5\nif x > 3 then\n    print \"big\"\nendif", &["big"])]
#[case("if 1 then\nendif\nprint 2", &["2"])]
#[case("if 1 then print 1 else print 2 endif", &["1"])]
#[case("if 0 then print 1 else print 2 endif", &[])]
#[case("if 0 then print \"endif\" endif print 2", &["2"])]
#[case("if 0 then let endif = 1 endif print 3", &["3"])]
#[case("if 0 then print 1", &[])]
#[case("if 1 print 5", &["5"])]
fn if_statements(#[case] input: &str, #[case] expected: &[&str]) {
    assert_eq!(interpret_and_return_stdout(input), expected);
}

#[test]
fn nested_if_in_skipped_branch_ends_at_first_endif() {
    let input = "
        if 0 then
            if 1 then print 1 endif
            print 2
        endif
        print 3
    ";

    assert_eq!(interpret_and_return_stdout(input), ["2", "3"]);
}

#[test]
fn nested_if_in_taken_branch() {
    let input = "
        if 1 then
            if 1 then print 1 endif
            print 2
        endif
        print 3
    ";

    assert_eq!(interpret_and_return_stdout(input), ["1", "3"]);
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    simple = { "@status 7", Some(7) },
    zero = { "@status 0", Some(0) },
    negative = { "@status -3", Some(-3) },
    explicit_plus = { "@status +4", Some(4) },
    leading_zeros = { "@status 007", Some(7) },
    surrounding_space = { "   @status 2   ", Some(2) },
    tab_separated = { "\t@status\t9", Some(9) },
    wide_gap = { "@status      5", Some(5) },
    carriage_return = { "@status 1\r", Some(1) },
    i32_max = { "@status 2147483647", Some(i32::MAX) },
    i32_min = { "@status -2147483648", Some(i32::MIN) },
    keyword_suffix = { "@statusx 5", Some(5) },
)]
fn test_classify_valid(line: &str, expected: Option<i32>) {
    assert_eq!(classify(line), Line::Directive(expected));
}

#[parameterized(
    bare_keyword = { "@status" },
    not_a_number = { "@status abc" },
    float = { "@status 1.5" },
    hex = { "@status 0x10" },
    too_many_fields = { "@status 1 2" },
    trailing_words = { "@status 1 # done" },
    overflow = { "@status 2147483648" },
    overflow_i64 = { "@status 3000000000" },
    underflow = { "@status -2147483649" },
    glued = { "@status7" },
    sign_only = { "@status -" },
)]
fn test_classify_malformed(line: &str) {
    assert_eq!(classify(line), Line::Directive(None));
}

#[parameterized(
    empty = { "" },
    plain = { "hello world" },
    keyword_later = { "set @status 1" },
    different_directive = { "@todo 1" },
    uppercase = { "@STATUS 1" },
    indented_text = { "    code block" },
)]
fn test_classify_content(line: &str) {
    assert_eq!(classify(line), Line::Content(line));
}

#[test]
fn test_content_line_keeps_whitespace() {
    assert_eq!(classify("  indented  "), Line::Content("  indented  "));
}

#[parameterized(
    empty = { "", &[] },
    single_newline = { "\n", &[""] },
    no_trailing = { "a\nb", &["a", "b"] },
    trailing = { "a\nb\n", &["a", "b"] },
    trailing_blank = { "a\n\n", &["a", ""] },
    leading_blank = { "\na", &["", "a"] },
    crlf_kept_in_line = { "a\r\nb", &["a\r", "b"] },
)]
fn test_split_lines(text: &str, expected: &[&str]) {
    let lines: Vec<&str> = split_lines(text).collect();
    assert_eq!(lines, expected);
}

#[test]
fn test_extract_removes_directive_and_sets_status() {
    let out = extract_directives("one\n@status 7\ntwo\n");
    assert_eq!(out.lines, vec!["one", "two"]);
    assert_eq!(out.status, 7);
    assert!(out.malformed.is_empty());
}

#[test]
fn test_extract_default_status() {
    let out = extract_directives("nothing here");
    assert_eq!(out.status, DEFAULT_STATUS);
    assert_eq!(out.lines, vec!["nothing here"]);
}

#[test]
fn test_extract_last_valid_wins() {
    let out = extract_directives("@status 1\n@status 2\n@status nope\n@status 3\n@status x y");
    assert_eq!(out.status, 3);
    assert!(out.lines.is_empty());
}

#[test]
fn test_extract_malformed_discarded_and_recorded() {
    let out = extract_directives("text\n  @status abc  \n");
    assert_eq!(out.status, 0);
    assert_eq!(out.lines, vec!["text"]);
    assert_eq!(out.malformed, vec!["@status abc"]);
}

#[test]
fn test_extract_malformed_after_valid_keeps_status() {
    let out = extract_directives("@status 4\n@status oops");
    assert_eq!(out.status, 4);
    assert_eq!(out.malformed, vec!["@status oops"]);
}

#[test]
fn test_extract_keeps_empty_lines_for_later_normalization() {
    let out = extract_directives("\na\n\n@status 1\n\nb");
    assert_eq!(out.lines, vec!["", "a", "", "", "b"]);
}

//! A small data-literal grammar built from the public combinator API:
//! scalars (numbers, quoted strings, bare names) and arbitrarily nested,
//! comma-separated lists in square brackets. Lists commit after `[` and
//! strings after `"`, so malformed input reports from inside the branch
//! instead of backtracking out of it.

use charcomb::boundary::eof;
use charcomb::capture::CaptureExt;
use charcomb::chars::{is_char, not_char};
use charcomb::cut::CutExt;
use charcomb::keyword::{keyword, keyword_cut};
use charcomb::lazy::lazy;
use charcomb::lexer::Lexer;
use charcomb::map::MapExt;
use charcomb::or::OrExt;
use charcomb::repeat::many;
use charcomb::text::{Number, identifier, number, quoted_string};
use charcomb::then::ThenExt;
use charcomb::trace::{TraceExt, TraceSink};
use charcomb::{BoxedParser, Parser, Reader};
use std::sync::{Arc, Mutex};

#[derive(Debug, PartialEq)]
enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Name(String),
    List(Vec<Value>),
}

fn value<'src>() -> BoxedParser<'src, Value> {
    let lexer = Lexer::whitespace();
    let list = lexer
        .symbol('[')
        .cut()
        .ignore_then(many(lazy(value)).separated_by(lexer.symbol(',')))
        .then_ignore(lexer.symbol(']'))
        .map(Value::List);
    let scalar = lexer
        .token(quoted_string())
        .map(Value::Str)
        .or(lexer.token(number()).map(|n| match n {
            Number::I64(int) => Value::Int(int),
            Number::F64(float) => Value::Float(float),
        }))
        .or(lexer
            .token(identifier())
            .map(|name| Value::Name(name.to_string())));
    Box::new(list.or(scalar))
}

#[test]
fn scalar_values() {
    let mut reader = Reader::new("42");
    assert_eq!(value().parse(&mut reader).unwrap().value, Value::Int(42));

    let mut reader = Reader::new("2.5");
    assert_eq!(value().parse(&mut reader).unwrap().value, Value::Float(2.5));

    let mut reader = Reader::new("\"hi\" tail");
    assert_eq!(
        value().parse(&mut reader).unwrap().value,
        Value::Str("hi".to_string())
    );
    assert_eq!(reader.position().index(), 4);

    let mut reader = Reader::new("alpha_2");
    assert_eq!(
        value().parse(&mut reader).unwrap().value,
        Value::Name("alpha_2".to_string())
    );
}

#[test]
fn nested_lists() {
    let mut reader = Reader::new(r#"[1, [2.5, "three"], name]"#);
    let parsed = value().parse(&mut reader).unwrap();
    assert_eq!(
        parsed.value,
        Value::List(vec![
            Value::Int(1),
            Value::List(vec![Value::Float(2.5), Value::Str("three".to_string())]),
            Value::Name("name".to_string()),
        ])
    );
    assert!(reader.at_end());
    assert_eq!(reader.mark_depth(), 0);
}

#[test]
fn empty_list() {
    let mut reader = Reader::new("[ ]");
    assert_eq!(
        value().parse(&mut reader).unwrap().value,
        Value::List(Vec::new())
    );
}

#[test]
fn whitespace_between_tokens() {
    let mut reader = Reader::new("[ 1 ,\n  [ 2 ] ]");
    let parsed = value().parse(&mut reader).unwrap();
    assert_eq!(
        parsed.value,
        Value::List(vec![Value::Int(1), Value::List(vec![Value::Int(2)])])
    );
}

#[test]
fn trailing_comma_is_rejected() {
    let mut reader = Reader::new("[1, 2, ]");
    let failure = value().parse(&mut reader).unwrap_err();
    assert_eq!(failure.message(), "expected ']', found ','");
    assert_eq!(failure.position().index(), 5);
}

#[test]
fn unclosed_list_commits() {
    let mut reader = Reader::new("[1, 2");
    let failure = value().parse(&mut reader).unwrap_err();
    assert_eq!(failure.message(), "expected ']', found end of input");
    assert!(!failure.can_backtrack());
    assert_eq!(reader.mark_depth(), 0);
}

#[test]
fn reader_is_balanced_after_both_outcomes() {
    let mut reader = Reader::new("[a, [b, c]]");
    assert!(value().parse(&mut reader).is_ok());
    assert_eq!(reader.mark_depth(), 0);

    let mut reader = Reader::new("[a, [b, c]");
    assert!(value().parse(&mut reader).is_err());
    assert_eq!(reader.mark_depth(), 0);
}

#[test]
fn quoted_span_composition() {
    let mut reader = Reader::new("\"ab\"cd");
    let parser = is_char('"')
        .ignore_then(many(not_char('"')).capture())
        .then_ignore(is_char('"'));
    let parsed = parser.parse(&mut reader).unwrap();
    assert_eq!(parsed.value, "ab");
    assert_eq!(reader.position().index(), 4);
    assert_eq!(reader.peek(), Some('c'));
}

#[test]
fn committed_left_branch_stops_the_whole_chain() {
    // Left-nested chain: once "ab" commits past its cut, neither "ax"
    // nor "a" is attempted even though "ax" would match.
    let mut reader = Reader::new("ax");
    let parser = keyword_cut("ab", 1).or(keyword("ax")).or(keyword("a"));
    let failure = parser.parse(&mut reader).unwrap_err();
    assert_eq!(failure.message(), "expected 'b', found 'x' while matching 'ab'");
    assert!(!failure.can_backtrack());
    assert_eq!(reader.position().index(), 1);
}

#[test]
fn committed_inner_right_branch_recovers_one_level_up() {
    // The commit in "ab" resolves only the choice it sits inside; the
    // outer choice still gets to try "a".
    let mut reader = Reader::new("ax");
    let parser = keyword("zz").or(keyword_cut("ab", 1)).or(keyword("a"));
    let parsed = parser.parse(&mut reader).unwrap();
    assert_eq!(parsed.value, "a");
    assert_eq!(reader.position().index(), 1);
}

#[test]
fn committed_failure_blocks_a_right_nested_chain() {
    let mut reader = Reader::new("ax");
    let parser = keyword_cut("ab", 1).or(keyword("ax").or(keyword("a")));
    let failure = parser.parse(&mut reader).unwrap_err();
    assert!(!failure.can_backtrack());
}

#[test]
fn tracing_is_transparent() {
    let mut plain = Reader::new("[1, two]");
    let expected = value().parse(&mut plain).unwrap();

    let lines = Arc::new(Mutex::new(Vec::new()));
    let sink_lines = Arc::clone(&lines);
    let sink = TraceSink::custom(move |line| {
        sink_lines.lock().unwrap().push(line.to_string());
    });
    let mut traced = Reader::new("[1, two]");
    let got = value().trace("value").with_sink(sink).parse(&mut traced).unwrap();

    assert_eq!(got, expected);
    assert_eq!(traced.position(), plain.position());
    let lines = lines.lock().unwrap();
    assert_eq!(lines[0], "value started at line 1, column 1");
    assert_eq!(lines[1], "value matched, now at line 1, column 9");
}

#[test]
fn failure_report_renders_the_offending_line() {
    let mut reader = Reader::new("[one,\n two!\n three]");
    let failure = value().parse(&mut reader).unwrap_err();
    assert_eq!(failure.position().line(), 2);
    assert_eq!(failure.position().column(), 5);
    let report = failure.to_string();
    assert!(report.contains("syntax error at line 2, column 5: expected ']', found '!'"));
    assert!(report.contains("  > 2 |  two!"));
    assert!(report.contains("^--- here"));
}

#[test]
fn anchored_parse_requires_all_input() {
    let anchored = || value().then_ignore(Lexer::whitespace().token(eof()));

    let mut reader = Reader::new("[1]  \n");
    assert!(anchored().parse(&mut reader).is_ok());

    let mut reader = Reader::new("[1] [2]");
    let failure = anchored().parse(&mut reader).unwrap_err();
    assert_eq!(failure.message(), "expected end of input, found '['");
}

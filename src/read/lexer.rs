use nom::character::complete::{char, digit1};
use nom::combinator::{all_consuming, map_res, opt, recognize};
use nom::sequence::pair;
use nom::IResult;
use regex::Regex;

lazy_static! {
    // Parens always stand alone; anything else runs until whitespace or a
    // paren.
    static ref TOKEN: Regex = Regex::new(r"[()]|[^\s()]+").unwrap();
}

/// Split a line into tokens. Never fails; a blank line has no tokens.
pub fn tokenize(input: &str) -> Vec<&str> {
    TOKEN.find_iter(input).map(|m| m.as_str()).collect()
}

fn integer(input: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(opt(char('-')), digit1)),
        |digits: &str| digits.parse::<i64>())(input)
}

/// Decimal integer literal with an optional leading `-`. Literals that don't
/// fit in an i64 are not integers.
pub fn parse_integer(token: &str) -> Option<i64> {
    all_consuming(integer)(token).ok().map(|(_, n)| n)
}

#[test]
fn test_tokenize_call() {
    assert_eq!(tokenize("(+ 2 2)"), vec!["(", "+", "2", "2", ")"]);
}

#[test]
fn test_tokenize_nested() {
    assert_eq!(tokenize("(*  2(+ 1 2))"),
        vec!["(", "*", "2", "(", "+", "1", "2", ")", ")"]);
}

#[test]
fn test_tokenize_whitespace() {
    assert!(tokenize("").is_empty());
    assert!(tokenize(" \t ").is_empty());
    assert_eq!(tokenize("\tfoo  bar "), vec!["foo", "bar"]);
}

#[test]
fn test_tokenize_unbalanced() {
    assert_eq!(tokenize(")x("), vec![")", "x", "("]);
}

#[test]
fn test_integer() {
    assert_eq!(parse_integer("42"), Some(42));
    assert_eq!(parse_integer("-7"), Some(-7));
    assert_eq!(parse_integer("007"), Some(7));
}

#[test]
fn test_not_integer() {
    assert_eq!(parse_integer("-"), None);
    assert_eq!(parse_integer("+5"), None);
    assert_eq!(parse_integer("12a"), None);
    assert_eq!(parse_integer("x1"), None);
    assert_eq!(parse_integer("99999999999999999999"), None);
}

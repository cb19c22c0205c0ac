mod lexer;

pub use self::lexer::{parse_integer, tokenize};

use crate::error::{Error, SyntaxError};
use crate::runtime::{atomize, eval, Environment};

/// A parsed form. Atoms borrow their text from the line they were read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node<'a> {
    Atom(&'a str),
    Call(Vec<Node<'a>>),
}

/// Given the tokens following an opening paren, return the index of the
/// paren that closes it.
pub fn matching_paren(tokens: &[&str]) -> Result<usize, SyntaxError> {
    let mut depth = 0usize;
    for (i, &token) in tokens.iter().enumerate() {
        match token {
            "(" => depth += 1,
            ")" if depth == 0 => return Ok(i),
            ")" => depth -= 1,
            _ => {},
        }
    }
    Err(SyntaxError::UnbalancedParens)
}

/// Parse the inside of a call form (the tokens strictly between its parens)
/// into its operator and operand nodes.
pub fn parse_call<'a>(tokens: &[&'a str], max_depth: usize) ->
    Result<Vec<Node<'a>>, SyntaxError> {

    parse_nested(tokens, 1, max_depth)
}

fn parse_nested<'a>(tokens: &[&'a str], depth: usize, max_depth: usize) ->
    Result<Vec<Node<'a>>, SyntaxError> {

    if depth > max_depth {
        return Err(SyntaxError::TooDeep(max_depth));
    }

    let mut nodes = Vec::new();
    let mut rest = tokens;
    while let Some((&token, tail)) = rest.split_first() {
        match token {
            "(" => {
                let close = matching_paren(tail)?;
                let inner = parse_nested(&tail[..close], depth + 1,
                    max_depth)?;
                nodes.push(Node::Call(inner));
                rest = &tail[close + 1..];
            },
            // A matched slice is balanced, so a closer can only be filler.
            ")" => rest = tail,
            atom => {
                nodes.push(Node::Atom(atom));
                rest = tail;
            },
        }
    }
    Ok(nodes)
}

/// Read the first form of a tokenized line, evaluate it, and render the
/// result. Tokens after the first complete form are ignored.
pub fn read(tokens: &[&str], env: &Environment, max_depth: usize) ->
    Result<String, Error> {

    let (&first, rest) = tokens.split_first()
        .ok_or(SyntaxError::UnexpectedEof)?;
    let value = match first {
        "(" => {
            let close = matching_paren(rest)?;
            let items = parse_call(&rest[..close], max_depth)?;
            trace!("read form {:?}", items);
            eval(&Node::Call(items), env)?
        },
        ")" => return Err(SyntaxError::UnexpectedClose.into()),
        atom => atomize(atom, env),
    };
    Ok(value.to_string())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::builtin::initial_environment;
    use crate::error::ArithmeticError;

    fn read_line(line: &str, env: &Environment) -> Result<String, Error> {
        read(&tokenize(line), env, 64)
    }

    #[test]
    fn test_matching_paren_flat() {
        assert_eq!(matching_paren(&["+", "1", "2", ")"]), Ok(3));
    }

    #[test]
    fn test_matching_paren_nested() {
        let tokens = tokenize("* 2 (+ 1 (- 3 1)) 4) 5)");
        assert_eq!(matching_paren(&tokens), Ok(12));
    }

    #[test]
    fn test_matching_paren_first_close() {
        assert_eq!(matching_paren(&[")", ")"]), Ok(0));
    }

    #[test]
    fn test_matching_paren_unbalanced() {
        assert_eq!(matching_paren(&["+", "1"]),
            Err(SyntaxError::UnbalancedParens));
        assert_eq!(matching_paren(&["+", "(", "1", ")"]),
            Err(SyntaxError::UnbalancedParens));
    }

    #[test]
    fn test_parse_call() {
        let tokens = tokenize("* 2 (+ 1 2) x");
        assert_eq!(parse_call(&tokens, 8), Ok(vec![
            Node::Atom("*"),
            Node::Atom("2"),
            Node::Call(vec![Node::Atom("+"), Node::Atom("1"),
                Node::Atom("2")]),
            Node::Atom("x"),
        ]));
    }

    #[test]
    fn test_parse_skips_consumed_tokens() {
        let tokens = tokenize("+ (+ 1 (+ 2 3)) 4");
        let nodes = parse_call(&tokens, 8).unwrap();
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[2], Node::Atom("4"));
    }

    #[test]
    fn test_parse_too_deep() {
        let tokens = tokenize("+ (+ (+ (+ 1))))");
        assert!(parse_call(&tokens, 4).is_ok());
        assert_eq!(parse_call(&tokens, 3), Err(SyntaxError::TooDeep(3)));
    }

    #[test]
    fn test_read_call() {
        let env = initial_environment();
        assert_eq!(read_line("(+ 2 2)", &env), Ok("4".to_string()));
    }

    #[test]
    fn test_read_atoms() {
        let env = initial_environment();
        assert_eq!(read_line("17", &env), Ok("17".to_string()));
        assert_eq!(read_line("-3", &env), Ok("-3".to_string()));
        assert_eq!(read_line("foo", &env), Ok("foo".to_string()));
        assert_eq!(read_line("*", &env), Ok("#<builtin *>".to_string()));
    }

    #[test]
    fn test_read_trailing_ignored() {
        let env = initial_environment();
        assert_eq!(read_line("(+ 1 2) (/ 1 0)", &env), Ok("3".to_string()));
        assert_eq!(read_line("5 6", &env), Ok("5".to_string()));
        assert_eq!(read_line("(+ 1 2) )", &env), Ok("3".to_string()));
    }

    #[test]
    fn test_read_syntax_errors() {
        let env = initial_environment();
        assert_eq!(read_line("", &env),
            Err(Error::Syntax(SyntaxError::UnexpectedEof)));
        assert_eq!(read_line(")", &env),
            Err(Error::Syntax(SyntaxError::UnexpectedClose)));
        assert_eq!(read_line("(+ 1", &env),
            Err(Error::Syntax(SyntaxError::UnbalancedParens)));
        assert_eq!(read_line("(+ 1 (* 2 3)", &env),
            Err(Error::Syntax(SyntaxError::UnbalancedParens)));
        assert_eq!(read_line("()", &env),
            Err(Error::Syntax(SyntaxError::EmptyCall)));
    }

    #[test]
    fn test_read_arithmetic_error() {
        let env = initial_environment();
        assert_eq!(read_line("(/ 1 0)", &env),
            Err(Error::Arithmetic(ArithmeticError::DivisionByZero)));
    }
}

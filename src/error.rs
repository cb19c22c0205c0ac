use thiserror::Error as ThisError;

#[derive(ThisError, Clone, Debug, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("unbalanced parentheses")]
    UnbalancedParens,
    #[error("unexpected closing paren")]
    UnexpectedClose,
    #[error("unexpected EOF while reading")]
    UnexpectedEof,
    #[error("empty expression")]
    EmptyCall,
    #[error("operator must be a symbol")]
    OperatorNotSymbol,
    #[error("expression nested deeper than {0} levels")]
    TooDeep(usize),
}

#[derive(ThisError, Clone, Debug, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow")]
    Overflow,
}

/// Everything that can go wrong while reading or evaluating one line.
#[derive(ThisError, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("unbound symbol: {0}")]
    UnboundSymbol(String),
    #[error("type error: {0}")]
    Type(String),
    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

#[test]
fn test_messages() {
    assert_eq!(Error::from(SyntaxError::UnbalancedParens).to_string(),
        "syntax error: unbalanced parentheses");
    assert_eq!(Error::UnboundSymbol("foo".to_string()).to_string(),
        "unbound symbol: foo");
    assert_eq!(Error::from(ArithmeticError::DivisionByZero).to_string(),
        "arithmetic error: division by zero");
}

//! Rejection reasons
//!
//! Each variant is one stable message template. The message is the diagnostic: it names the
//! broken rule, the offending text where there is one, and shows a corrected example.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The expression is empty. Write an expression such as 2.5 + 3.0")]
    Empty,

    #[error(
        "Invalid character '{text}'. Only decimal numbers, the operators + - * / and parentheses are allowed"
    )]
    InvalidCharacter { text: String },

    #[error(
        "Integer '{text}' is not allowed: numbers need a decimal part. Write {text}.0 instead of {text}"
    )]
    IntegerLiteral { text: String },

    #[error("Letters '{text}' are not allowed. Use decimal numbers such as 2.5")]
    Letters { text: String },

    #[error(
        "Missing operator: '{number}' is not combined with anything. Add an operator and another number, e.g. {number} + 1.0"
    )]
    LoneNumber { number: String },

    #[error("Missing operators between numbers. Separate numbers with + - * or /, e.g. 2.5 + 3.0")]
    MissingOperators,

    #[error("The expression cannot start with the operator '{op}'. Put a number first, e.g. 2.5 {op} 3.0")]
    LeadingOperator { op: String },

    #[error("The expression cannot start with ')'. Open the group first, e.g. (2.5 + 3.0)")]
    LeadingCloseParen,

    #[error("The expression cannot end with the operator '{op}'. Add a number after it, e.g. 2.5 {op} 3.0")]
    TrailingOperator { op: String },

    #[error("The expression ends with an unclosed '('. Complete the group and close it, e.g. (2.5 + 3.0)")]
    TrailingOpenParen,

    #[error(
        "Consecutive operators '{first}' and '{second}'. Put a number between them, e.g. 2.5 {first} 1.0 {second} 3.0"
    )]
    ConsecutiveOperators { first: String, second: String },

    #[error("Missing operator between '{first}' and '{second}'. Write e.g. {first} + {second}")]
    ConsecutiveNumbers { first: String, second: String },

    #[error("Missing operator between '{number}' and '('. Write e.g. {number} * (2.5 + 3.0)")]
    NumberBeforeOpenParen { number: String },

    #[error("Missing operator between ')' and '{number}'. Write e.g. (2.5 + 3.0) * {number}")]
    CloseParenBeforeNumber { number: String },

    #[error("The operator '{op}' cannot be followed by ')'. Add a number before closing, e.g. (2.5 {op} 3.0)")]
    OperatorBeforeCloseParen { op: String },

    #[error("The operator '{op}' cannot directly follow '('. Start the group with a number, e.g. (2.5 {op} 3.0)")]
    OperatorAfterOpenParen { op: String },

    #[error("Unmatched ')' at position {position}: there is no '(' for it to close. Remove it or add a matching '('")]
    UnmatchedCloseParen { position: usize },

    #[error("Unbalanced parentheses: {count} unclosed '(' still open. Add {count} matching ')'")]
    UnclosedParens { count: usize },
}

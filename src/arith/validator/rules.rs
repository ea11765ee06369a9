//! Individual validation checks
//!
//! Every check sees the whole token sequence and is independent of the others. They assume
//! the checks listed before them in [RULES] have passed: the positional checks, for instance,
//! only ever see numbers, operators and parentheses.

use crate::arith::lexer::{Token, TokenKind};
use crate::arith::validator::error::ValidationError;

/// A single check over a token sequence
pub type Rule = fn(&[Token]) -> Result<(), ValidationError>;

/// All checks in evaluation order, with a name for logging
pub const RULES: &[(&str, Rule)] = &[
    ("not-empty", check_not_empty),
    ("allowed-tokens", check_allowed_tokens),
    ("operator-present", check_operator_present),
    ("positions", check_positions),
    ("balance", check_balance),
];

pub fn check_not_empty(tokens: &[Token]) -> Result<(), ValidationError> {
    if tokens.is_empty() {
        return Err(ValidationError::Empty);
    }
    Ok(())
}

/// Reject the first ERROR, NUM_INT or LETTER token
pub fn check_allowed_tokens(tokens: &[Token]) -> Result<(), ValidationError> {
    for token in tokens {
        let text = token.text().to_string();
        match token.kind() {
            TokenKind::Error => return Err(ValidationError::InvalidCharacter { text }),
            TokenKind::Integer => return Err(ValidationError::IntegerLiteral { text }),
            TokenKind::Letter => return Err(ValidationError::Letters { text }),
            TokenKind::Number
            | TokenKind::Operator
            | TokenKind::OpenParen
            | TokenKind::CloseParen => {}
        }
    }
    Ok(())
}

pub fn check_operator_present(tokens: &[Token]) -> Result<(), ValidationError> {
    if tokens.iter().any(|t| t.kind().is_operator()) {
        return Ok(());
    }

    let mut numbers = tokens.iter().filter(|t| t.kind().is_number());
    match (numbers.next(), numbers.next()) {
        (Some(number), None) => Err(ValidationError::LoneNumber {
            number: number.text().to_string(),
        }),
        _ => Err(ValidationError::MissingOperators),
    }
}

/// Leading, trailing and adjacency checks, in a single left-to-right walk
pub fn check_positions(tokens: &[Token]) -> Result<(), ValidationError> {
    let last = tokens.len().saturating_sub(1);

    for (index, token) in tokens.iter().enumerate() {
        if index == 0 {
            check_first(token)?;
        }
        if index == last {
            check_last(token)?;
        }
        if let Some(next) = tokens.get(index + 1) {
            check_pair(token, next)?;
        }
    }
    Ok(())
}

fn check_first(token: &Token) -> Result<(), ValidationError> {
    match token.kind() {
        TokenKind::Operator => Err(ValidationError::LeadingOperator {
            op: token.text().to_string(),
        }),
        TokenKind::CloseParen => Err(ValidationError::LeadingCloseParen),
        _ => Ok(()),
    }
}

fn check_last(token: &Token) -> Result<(), ValidationError> {
    match token.kind() {
        TokenKind::Operator => Err(ValidationError::TrailingOperator {
            op: token.text().to_string(),
        }),
        TokenKind::OpenParen => Err(ValidationError::TrailingOpenParen),
        _ => Ok(()),
    }
}

fn check_pair(current: &Token, next: &Token) -> Result<(), ValidationError> {
    let this = current.text().to_string();
    let that = next.text().to_string();

    match (current.kind(), next.kind()) {
        (TokenKind::Operator, TokenKind::Operator) => Err(ValidationError::ConsecutiveOperators {
            first: this,
            second: that,
        }),
        (TokenKind::Number, TokenKind::Number) => Err(ValidationError::ConsecutiveNumbers {
            first: this,
            second: that,
        }),
        (TokenKind::Number, TokenKind::OpenParen) => {
            Err(ValidationError::NumberBeforeOpenParen { number: this })
        }
        (TokenKind::CloseParen, TokenKind::Number) => {
            Err(ValidationError::CloseParenBeforeNumber { number: that })
        }
        (TokenKind::Operator, TokenKind::CloseParen) => {
            Err(ValidationError::OperatorBeforeCloseParen { op: this })
        }
        (TokenKind::OpenParen, TokenKind::Operator) => {
            Err(ValidationError::OperatorAfterOpenParen { op: that })
        }
        _ => Ok(()),
    }
}

/// Running depth count; `)` below zero or `(` left open at the end are errors
pub fn check_balance(tokens: &[Token]) -> Result<(), ValidationError> {
    let mut depth: usize = 0;

    for token in tokens {
        match token.kind() {
            TokenKind::OpenParen => depth += 1,
            TokenKind::CloseParen => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(ValidationError::UnmatchedCloseParen {
                        position: token.offset() + 1,
                    })?;
            }
            _ => {}
        }
    }

    if depth > 0 {
        return Err(ValidationError::UnclosedParens { count: depth });
    }
    Ok(())
}

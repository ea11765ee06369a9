//! Property-based tests for the lexer and validator

use arith_lex::arith::lexer::{detokenize, tokenize, TokenKind};
use arith_lex::arith::processor::strip_whitespace;
use arith_lex::arith::validator::{validate, ValidationError};
use proptest::prelude::*;

/// Text mixing every lexical class, whitespace and a few non-ASCII characters
fn noisy_text_strategy() -> impl Strategy<Value = String> {
    "[0-9a-zA-Z.+*/()\\- \t\n@$#ñ×]{0,40}"
}

/// Well-formed expressions with at least one operator
fn expression_strategy() -> impl Strategy<Value = String> {
    let operand = "[0-9]{1,3}\\.[0-9]{1,3}".prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            (inner.clone(), "[-+*/]", inner.clone())
                .prop_map(|(left, op, right)| format!("{}{}{}", left, op, right)),
            inner.prop_map(|e| format!("({})", e)),
        ]
    })
    .boxed();
    (operand.clone(), "[-+*/]", operand)
        .prop_map(|(left, op, right)| format!("{}{}{}", left, op, right))
}

proptest! {
    #[test]
    fn tokens_reproduce_stripped_input(input in noisy_text_strategy()) {
        let tokens = tokenize(&input);
        prop_assert_eq!(detokenize(&tokens), strip_whitespace(&input));
    }

    #[test]
    fn error_tokens_are_single_characters(input in noisy_text_strategy()) {
        for token in tokenize(&input) {
            if token.kind() == TokenKind::Error {
                prop_assert_eq!(token.text().chars().count(), 1);
            }
        }
    }

    #[test]
    fn validation_is_repeatable(input in noisy_text_strategy()) {
        let tokens = tokenize(&input);
        let first = validate(tokens.clone());
        let second = validate(tokens);
        prop_assert_eq!(first.message(), second.message());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn well_formed_expressions_are_accepted(input in expression_strategy()) {
        let verdict = validate(tokenize(&input));
        prop_assert!(verdict.is_accepted(), "{}: {:?}", input, verdict.message());
    }

    #[test]
    fn integer_beats_structural_errors(
        prefix in "[()+*/]{0,5}",
        digits in "[0-9]{1,3}",
        suffix in "[()+*/]{0,5}",
    ) {
        let input = format!("{}{}{}", prefix, digits, suffix);
        prop_assert_eq!(
            validate(tokenize(&input)).into_result().err(),
            Some(ValidationError::IntegerLiteral { text: digits })
        );
    }
}

//! Implementation of the arithmetic lexer
//!
//! logos does the matching. This module turns its output into [Token]s, splitting anything
//! logos could not match into one `ERROR` token per character.

use crate::arith::lexer::tokens::{Token, TokenKind};
use logos::Logos;
use tracing::{debug, trace};

/// Tokenize an expression. Never fails; unrecognised characters become `ERROR` tokens.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    // Character offsets are tracked incrementally from the end of the previous token
    let mut last_byte = 0;
    let mut last_char = 0;

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let slice = lexer.slice();
        let offset = last_char + source[last_byte..span.start].chars().count();

        match result {
            Ok(kind) => {
                trace!(%kind, text = slice, offset, "token");
                tokens.push(Token::new(kind, slice, span.clone(), offset));
            }
            Err(()) => {
                for (index, (byte, ch)) in slice.char_indices().enumerate() {
                    let start = span.start + byte;
                    trace!(text = %ch, offset = offset + index, "unrecognised character");
                    tokens.push(Token::new(
                        TokenKind::Error,
                        ch,
                        start..start + ch.len_utf8(),
                        offset + index,
                    ));
                }
            }
        }

        last_byte = span.end;
        last_char = offset + slice.chars().count();
    }

    debug!(
        tokens = tokens.len(),
        errors = tokens.iter().filter(|t| t.kind() == TokenKind::Error).count(),
        "tokenized expression"
    );
    tokens
}

/// Tokenize and keep only the class and byte span of each token
pub fn tokenize_with_spans(source: &str) -> Vec<(TokenKind, logos::Span)> {
    tokenize(source)
        .into_iter()
        .map(|token| (token.kind(), token.span().clone()))
        .collect()
}

/// Concatenate token texts back into a string.
///
/// For any input this is the input with its whitespace removed.
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(Token::text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(source: &str) -> Vec<(TokenKind, String)> {
        tokenize(source)
            .into_iter()
            .map(|t| (t.kind(), t.text().to_string()))
            .collect()
    }

    #[test]
    fn test_simple_tokenization() {
        assert_eq!(
            pairs("2.5+3.0"),
            vec![
                (TokenKind::Number, "2.5".to_string()),
                (TokenKind::Operator, "+".to_string()),
                (TokenKind::Number, "3.0".to_string()),
            ]
        );
    }

    #[test]
    fn test_mixed_classes() {
        assert_eq!(
            pairs("(x*12)/0.5"),
            vec![
                (TokenKind::OpenParen, "(".to_string()),
                (TokenKind::Letter, "x".to_string()),
                (TokenKind::Operator, "*".to_string()),
                (TokenKind::Integer, "12".to_string()),
                (TokenKind::CloseParen, ")".to_string()),
                (TokenKind::Operator, "/".to_string()),
                (TokenKind::Number, "0.5".to_string()),
            ]
        );
    }

    #[test]
    fn test_each_unknown_character_is_its_own_token() {
        assert_eq!(
            pairs("$@"),
            vec![
                (TokenKind::Error, "$".to_string()),
                (TokenKind::Error, "@".to_string()),
            ]
        );
    }

    #[test]
    fn test_non_ascii_characters() {
        let tokens = tokenize("2.5×ñ");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].kind(), TokenKind::Error);
        assert_eq!(tokens[1].text(), "×");
        assert_eq!(tokens[2].text(), "ñ");
        assert_eq!(tokens[2].offset(), 4);
        assert_eq!(detokenize(&tokens), "2.5×ñ");
    }

    #[test]
    fn test_whitespace_is_elided() {
        let source = "  ( 1.5 +\t2.0 ) ";
        let tokens = tokenize(source);
        assert_eq!(detokenize(&tokens), "(1.5+2.0)");
        assert!(tokens.iter().all(|t| !t.text().trim().is_empty()));
    }

    #[test]
    fn test_spans_and_offsets() {
        let tokens = tokenize("1.0 + 2.0");
        assert_eq!(tokens[0].span(), &(0..3));
        assert_eq!(tokens[1].span(), &(4..5));
        assert_eq!(tokens[2].span(), &(6..9));
        assert_eq!(tokens[2].offset(), 6);
    }

    #[test]
    fn test_tokenize_with_spans() {
        let tokens = tokenize_with_spans("1.0*a");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Number, 0..3),
                (TokenKind::Operator, 3..4),
                (TokenKind::Letter, 4..5),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\n").is_empty());
    }
}

//! Token definitions for arithmetic expressions
//!
//! [TokenKind] is the closed set of lexical classes, derived with logos. [Token] pairs a class
//! with the exact text it matched.
use logos::Logos;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// All lexical classes an expression can be split into
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[logos(skip r"\s+")]
pub enum TokenKind {
    /// Decimal number with a fractional part, e.g. `2.5`
    #[regex(r"[0-9]+\.[0-9]+")]
    #[serde(rename = "NUM")]
    Number,

    /// Integer without a fractional part, rejected by the validator
    #[regex(r"[0-9]+")]
    #[serde(rename = "NUM_INT")]
    Integer,

    /// Run of ASCII letters, rejected by the validator
    #[regex(r"[A-Za-z]+")]
    #[serde(rename = "LETTER")]
    Letter,

    #[regex(r"[+\-*/]")]
    #[serde(rename = "OP")]
    Operator,

    #[token("(")]
    #[serde(rename = "LPAREN")]
    OpenParen,

    #[token(")")]
    #[serde(rename = "RPAREN")]
    CloseParen,

    /// A single unrecognised character. Never produced by logos directly; the lexer builds
    /// these from logos errors.
    #[serde(rename = "ERROR")]
    Error,
}

impl TokenKind {
    /// The class name used on the wire and in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Number => "NUM",
            TokenKind::Integer => "NUM_INT",
            TokenKind::Letter => "LETTER",
            TokenKind::Operator => "OP",
            TokenKind::OpenParen => "LPAREN",
            TokenKind::CloseParen => "RPAREN",
            TokenKind::Error => "ERROR",
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, TokenKind::Number)
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, TokenKind::Operator)
    }

    pub fn is_open_paren(&self) -> bool {
        matches!(self, TokenKind::OpenParen)
    }

    pub fn is_close_paren(&self) -> bool {
        matches!(self, TokenKind::CloseParen)
    }

    /// Classes the lexer accepts but no valid expression may contain
    pub fn is_disallowed(&self) -> bool {
        matches!(
            self,
            TokenKind::Error | TokenKind::Integer | TokenKind::Letter
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified piece of the source text
///
/// Serializes as `{"tipo": <class>, "valor": <text>}`. The span (bytes) and offset
/// (characters) locate the token in the text that was scanned and are not serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "tipo")]
    kind: TokenKind,
    #[serde(rename = "valor")]
    text: String,
    #[serde(skip)]
    span: Range<usize>,
    #[serde(skip)]
    offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Range<usize>, offset: usize) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
            offset,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte range in the scanned source
    pub fn span(&self) -> &Range<usize> {
        &self.span
    }

    /// Zero-based character index of the first character in the scanned source
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}:{}>", self.kind, self.text)
    }
}

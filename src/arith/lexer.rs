//! Lexer for arithmetic expressions
//!
//! Tokenization is done by a logos lexer over a closed set of lexical classes, tried in this
//! priority order:
//!
//!     1. NUM      digits "." digits        2.5
//!     2. NUM_INT  digits                   7
//!     3. LETTER   ASCII letters            abc
//!     4. OP       one of + - * /           +
//!     5. LPAREN   (
//!     6. RPAREN   )
//!     -  ERROR    any other single character
//!
//! Only NUM is a valid number. Bare integers and letter runs are still tokenized, as their own
//! classes, so the validator can say "write 5.0" or "letters are not allowed" instead of a
//! generic syntax error. Lexing never fails: all rejection happens in the validator.
//!
//! Ordering
//!
//!     logos picks the longest match rather than the first one in a list. For this table the two
//!     agree: only NUM and NUM_INT compete for the same input, and whenever NUM matches it is
//!     strictly longer than the integer prefix it starts with. Input like "2." therefore lexes
//!     as NUM_INT "2" followed by ERROR ".".
//!
//! Whitespace is skipped by the lexer itself, so it is safe to call on unstripped text. The
//! concatenated token texts always equal the input with its whitespace removed; see
//! [detokenize].

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{detokenize, tokenize, tokenize_with_spans};
pub use tokens::{Token, TokenKind};

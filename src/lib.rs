//! # arith-lex
//!
//! A tokenizer and syntax checker for flat decimal arithmetic expressions.
//!
//! The work happens in two stages that never feed back into each other:
//!
//! - The [lexer](arith::lexer) turns text into classified tokens. It never fails; characters
//!   it does not recognise become `ERROR` tokens.
//! - The [validator](arith::validator) walks the tokens and either accepts them or returns the
//!   first rule they break, as a message that says what to change.
//!
//! The [processor](arith::processor) wraps both stages behind the `{"tokens": ...}` /
//! `{"error": ...}` response body and the output formats used by the `arith` binary.

pub mod arith;

//! Main module for arith-lex library functionality

pub mod config;
pub mod lexer;
pub mod processor;
pub mod validator;

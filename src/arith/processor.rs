//! Request processing API for arithmetic expressions
//!
//! This is the boundary a transport sits on. [analyze] takes the raw expression field, strips
//! its whitespace and returns the [Response] body: `{"tokens": [...]}` when the expression is
//! accepted, `{"error": "..."}` otherwise.
//!
//! On top of that, [process] renders an expression in one of several formats, named as
//! `<stage>-<format>`:
//!
//!     token-simple     <NUM:2.5><OP:+><NUM:3.0>, lexing only
//!     token-json       JSON token list, lexing only
//!     verdict-simple   one "text<TAB>class" line per token, or "error: <message>"
//!     verdict-json     the response body

use crate::arith::lexer::{tokenize, Token};
use crate::arith::validator::{validate, Verdict};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Returned when the expression is nothing but whitespace, before any lexing happens
pub const NO_EXPRESSION_MESSAGE: &str =
    "No expression was provided. Enter an arithmetic expression such as 2.5 + 3.0";

/// Response body for one expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Tokens { tokens: Vec<Token> },
    Error { error: String },
}

impl Response {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Response::Tokens { .. })
    }
}

impl From<Verdict> for Response {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Accepted(tokens) => Response::Tokens { tokens },
            Verdict::Rejected(error) => Response::Error {
                error: error.to_string(),
            },
        }
    }
}

/// Remove every whitespace character
pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Tokenize and validate one expression field
pub fn analyze(input: &str) -> Response {
    let expression = strip_whitespace(input);
    if expression.is_empty() {
        debug!("empty expression");
        return Response::Error {
            error: NO_EXPRESSION_MESSAGE.to_string(),
        };
    }

    validate(tokenize(&expression)).into()
}

/// Represents the processing stage (what data to produce)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Verdict,
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "verdict-json"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "verdict" => ProcessingStage::Verdict,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        Ok(ProcessingSpec { stage, format })
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        let mut specs = Vec::new();
        for stage in [ProcessingStage::Token, ProcessingStage::Verdict] {
            for format in [OutputFormat::Simple, OutputFormat::Json] {
                specs.push(ProcessingSpec { stage, format });
            }
        }
        specs
    }

    pub fn name(&self) -> String {
        let stage = match self.stage {
            ProcessingStage::Token => "token",
            ProcessingStage::Verdict => "verdict",
        };
        let format = match self.format {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
        };
        format!("{}-{}", stage, format)
    }
}

/// Errors that can occur during processing
#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid stage: {0}")]
    InvalidStage(String),
    #[error("Invalid format type: {0}")]
    InvalidFormatType(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A rendered expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    pub output: String,
    /// False only when the verdict stage rejected the expression
    pub accepted: bool,
}

/// Process an expression according to the given specification
pub fn process(
    input: &str,
    spec: &ProcessingSpec,
    pretty: bool,
) -> Result<Processed, ProcessingError> {
    debug!(format = %spec.name(), "processing expression");

    match spec.stage {
        ProcessingStage::Token => {
            let tokens = tokenize(input);
            Ok(Processed {
                output: format_tokens(&tokens, spec.format, pretty)?,
                accepted: true,
            })
        }
        ProcessingStage::Verdict => {
            let response = analyze(input);
            Ok(Processed {
                accepted: response.is_accepted(),
                output: format_response(&response, spec.format, pretty)?,
            })
        }
    }
}

/// Format tokens according to the specified format
fn format_tokens(
    tokens: &[Token],
    format: OutputFormat,
    pretty: bool,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => Ok(tokens.iter().map(ToString::to_string).collect()),
        OutputFormat::Json => to_json(&tokens, pretty),
    }
}

fn format_response(
    response: &Response,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, ProcessingError> {
    match (format, response) {
        (OutputFormat::Simple, Response::Tokens { tokens }) => Ok(tokens
            .iter()
            .map(|t| format!("{}\t{}", t.text(), t.kind()))
            .collect::<Vec<_>>()
            .join("\n")),
        (OutputFormat::Simple, Response::Error { error }) => Ok(format!("error: {}", error)),
        (OutputFormat::Json, response) => to_json(response, pretty),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, ProcessingError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ProcessingSpec::name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::lexer::TokenKind;

    #[test]
    fn test_processing_spec_parsing() {
        let spec = ProcessingSpec::from_string("token-simple").unwrap();
        assert_eq!(spec.stage, ProcessingStage::Token);
        assert_eq!(spec.format, OutputFormat::Simple);

        let spec = ProcessingSpec::from_string("verdict-json").unwrap();
        assert_eq!(spec.stage, ProcessingStage::Verdict);
        assert_eq!(spec.format, OutputFormat::Json);

        assert!(matches!(
            ProcessingSpec::from_string("invalid"),
            Err(ProcessingError::InvalidFormat(_))
        ));
        assert!(matches!(
            ProcessingSpec::from_string("token-xml"),
            Err(ProcessingError::InvalidFormatType(_))
        ));
        assert!(matches!(
            ProcessingSpec::from_string("ast-json"),
            Err(ProcessingError::InvalidStage(_))
        ));
    }

    #[test]
    fn test_available_formats() {
        assert_eq!(
            available_formats(),
            vec!["token-simple", "token-json", "verdict-simple", "verdict-json"]
        );
    }

    #[test]
    fn test_analyze_strips_whitespace() {
        let response = analyze(" 2.5 +\t3.0 ");
        match response {
            Response::Tokens { tokens } => {
                assert_eq!(tokens.len(), 3);
                assert_eq!(tokens[2].kind(), TokenKind::Number);
                assert_eq!(tokens[2].offset(), 4);
            }
            Response::Error { error } => panic!("unexpected rejection: {}", error),
        }
    }

    #[test]
    fn test_blank_input_uses_fixed_message() {
        assert_eq!(
            analyze("   "),
            Response::Error {
                error: NO_EXPRESSION_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn test_token_simple_does_not_validate() {
        let spec = ProcessingSpec::from_string("token-simple").unwrap();
        let processed = process("5 + x", &spec, false).unwrap();
        assert_eq!(processed.output, "<NUM_INT:5><OP:+><LETTER:x>");
        assert!(processed.accepted);
    }

    #[test]
    fn test_verdict_simple() {
        let spec = ProcessingSpec::from_string("verdict-simple").unwrap();

        let processed = process("1.5*2.0", &spec, false).unwrap();
        assert_eq!(processed.output, "1.5\tNUM\n*\tOP\n2.0\tNUM");
        assert!(processed.accepted);

        let processed = process("1.5*", &spec, false).unwrap();
        assert!(processed.output.starts_with("error: "));
        assert!(!processed.accepted);
    }

    #[test]
    fn test_verdict_json_compact() {
        let spec = ProcessingSpec::from_string("verdict-json").unwrap();
        let processed = process("(1.0)", &spec, false).unwrap();
        assert!(processed.output.starts_with(r#"{"error":"Missing operator: '1.0'"#));
    }
}

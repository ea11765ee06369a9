//! The outcome of validating a token sequence

use crate::arith::lexer::Token;
use crate::arith::validator::error::ValidationError;

/// Either the accepted tokens or the first rule they broke
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted(Vec<Token>),
    Rejected(ValidationError),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted(_))
    }

    pub fn tokens(&self) -> Option<&[Token]> {
        match self {
            Verdict::Accepted(tokens) => Some(tokens.as_slice()),
            Verdict::Rejected(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Verdict::Accepted(_) => None,
            Verdict::Rejected(error) => Some(error),
        }
    }

    /// The diagnostic text for a rejection
    pub fn message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }

    pub fn into_result(self) -> Result<Vec<Token>, ValidationError> {
        match self {
            Verdict::Accepted(tokens) => Ok(tokens),
            Verdict::Rejected(error) => Err(error),
        }
    }
}

impl From<Result<Vec<Token>, ValidationError>> for Verdict {
    fn from(result: Result<Vec<Token>, ValidationError>) -> Self {
        match result {
            Ok(tokens) => Verdict::Accepted(tokens),
            Err(error) => Verdict::Rejected(error),
        }
    }
}

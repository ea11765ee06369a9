//! Validator for arithmetic token sequences
//!
//! Validation is an ordered chain of independent checks over the whole token sequence. Each
//! check either passes or returns the [ValidationError] describing what is wrong. The first
//! failing check decides the verdict and no later check runs.
//!
//! Check Order
//!
//!     1. Empty sequence.
//!     2. Disallowed classes (ERROR, NUM_INT, LETTER), first offending token wins. This runs
//!        before any structural check, so a single bad token rejects the expression no matter
//!        how well formed the rest of it is.
//!     3. Operator presence.
//!     4. Position and adjacency, walking the tokens left to right. At each index the
//!        first-token checks run (index 0), then the last-token checks (last index), then the
//!        pair formed with the next token.
//!     5. Parenthesis balance.
//!
//!     The order is part of the contract: it decides which message a malformed expression gets.
//!     See [rules::RULES].

pub mod error;
pub mod rules;
pub mod verdict;

pub use error::ValidationError;
pub use verdict::Verdict;

use crate::arith::lexer::Token;
use tracing::debug;

/// Run every check in order, stopping at the first failure
pub fn check(tokens: &[Token]) -> Result<(), ValidationError> {
    for (name, rule) in rules::RULES {
        if let Err(error) = rule(tokens) {
            debug!(rule = name, %error, "expression rejected");
            return Err(error);
        }
    }
    Ok(())
}

/// Decide whether a token sequence forms a well-formed expression
pub fn validate(tokens: Vec<Token>) -> Verdict {
    match check(&tokens) {
        Ok(()) => Verdict::Accepted(tokens),
        Err(error) => Verdict::Rejected(error),
    }
}

//! Error types for the interpreter

use thiserror::Error;

/// Why a single line was rejected. Parse errors are local to their line:
/// the interpreter reports them and moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The destination is neither a register letter nor the output letter.
    #[error("malformed destination")]
    MalformedDestination,
    /// A valid destination is not followed by `<-`.
    #[error("missing assignment arrow")]
    MissingArrow,
    /// No expression alternative consumed the rest of the line.
    #[error("malformed expression")]
    MalformedExpression,
    /// A logic expression operand is not a register.
    #[error("malformed operand")]
    MalformedOperand,
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

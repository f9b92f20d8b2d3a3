//! Operator recognition

use std::fmt;

use super::scanner::{is_alpha, is_alphanumeric, Scanner};

/// Anything the operator scanners can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `ashl`: arithmetic shift left by one.
    ShiftLeft1,
    /// `ashr`: arithmetic shift right by one.
    ShiftRight1,
    And,
    Or,
    Xor,
    AndNot,
    /// The assignment arrow `<-`.
    Move,
    Invalid,
}

/// Unary operators of a logic expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftOp {
    Left,
    Right,
}

/// Binary operators of a logic expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    And,
    Or,
    Xor,
    AndNot,
}

impl Operator {
    pub fn shift_op(self) -> Option<ShiftOp> {
        match self {
            Operator::ShiftLeft1 => Some(ShiftOp::Left),
            Operator::ShiftRight1 => Some(ShiftOp::Right),
            _ => None,
        }
    }

    pub fn binary_op(self) -> Option<BinaryOp> {
        match self {
            Operator::And => Some(BinaryOp::And),
            Operator::Or => Some(BinaryOp::Or),
            Operator::Xor => Some(BinaryOp::Xor),
            Operator::AndNot => Some(BinaryOp::AndNot),
            _ => None,
        }
    }

    /// Keyword operators by their mnemonic.
    pub fn from_keyword(word: &str) -> Operator {
        match word {
            "ashl" => Operator::ShiftLeft1,
            "ashr" => Operator::ShiftRight1,
            _ => Operator::Invalid,
        }
    }
}

impl fmt::Display for ShiftOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShiftOp::Left => "ashl",
            ShiftOp::Right => "ashr",
        })
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Or and AndNot have no surface syntax; these spellings are display-only.
        f.write_str(match self {
            BinaryOp::And => "&",
            BinaryOp::Or => "|",
            BinaryOp::Xor => "^",
            BinaryOp::AndNot => "&~",
        })
    }
}

/// Recognise `&`, `^` or `<-`.
///
/// A `<` without a following `-` is consumed and still yields
/// [`Operator::Invalid`].
pub fn parse_short_operator(scanner: &mut Scanner) -> Operator {
    scanner.skip_whitespace();
    if scanner.matches('&') {
        Operator::And
    } else if scanner.matches('^') {
        Operator::Xor
    } else if scanner.matches('<') {
        if scanner.matches('-') {
            Operator::Move
        } else {
            Operator::Invalid
        }
    } else {
        Operator::Invalid
    }
}

/// Recognise a keyword operator (`ashl`, `ashr`).
///
/// Consumes nothing unless the next character is alphabetic; otherwise the
/// whole alphanumeric run is consumed whether or not it names an operator.
pub fn parse_long_operator(scanner: &mut Scanner) -> Operator {
    scanner.skip_whitespace();
    if !is_alpha(scanner.peek()) {
        return Operator::Invalid;
    }
    let start = scanner.position();
    while is_alphanumeric(scanner.peek()) {
        scanner.advance();
    }
    Operator::from_keyword(scanner.lexeme(start))
}

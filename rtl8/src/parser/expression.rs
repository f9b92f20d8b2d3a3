//! Expression parsing: binary literals, logic operations and register reads
//!
//! Every rule takes a [`Scanner`] by value and, on success, returns the
//! expression together with the advanced scanner. Alternatives are tried in
//! order from the same starting scanner, so a failed attempt leaves nothing
//! behind.

use std::fmt;

use super::address::{parse_address, Register};
use super::operator::{parse_long_operator, parse_short_operator, BinaryOp, ShiftOp};
use super::scanner::Scanner;
use crate::error::ParseError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// Decoded binary digit run. Not clamped until stored.
    Literal(i64),
    /// Read of a register.
    Reference(Register),
    /// `ashl X` / `ashr X`
    Shift { op: ShiftOp, operand: Register },
    /// `X op Y`
    Binary {
        op: BinaryOp,
        left: Register,
        right: Register,
    },
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(v) if *v >= 0 => write!(f, "{:08b}", v),
            Expression::Literal(v) => write!(f, "{}", v),
            Expression::Reference(r) => write!(f, "{}", r),
            Expression::Shift { op, operand } => write!(f, "{} {}", op, operand),
            Expression::Binary { op, left, right } => write!(f, "{} {} {}", left, op, right),
        }
    }
}

type Parsed<'a> = Result<(Expression, Scanner<'a>), ParseError>;

pub struct ExpressionParser;

impl ExpressionParser {
    /// Parse the rest of the line as an expression.
    ///
    /// Tries a binary literal, then a logic expression, then a bare register
    /// reference. The literal wins on any leading digit run; the other two
    /// must consume the line up to trailing whitespace.
    pub fn parse(scanner: Scanner<'_>) -> Parsed<'_> {
        if let Ok(parsed) = Self::parse_literal(scanner) {
            return Ok(parsed);
        }

        let logic = Self::parse_logic(scanner);
        if logic.is_ok() {
            return logic;
        }

        if let Ok(parsed) = Self::parse_reference(scanner) {
            return Ok(parsed);
        }

        match logic {
            Err(ParseError::MalformedOperand) => Err(ParseError::MalformedOperand),
            _ => Err(ParseError::MalformedExpression),
        }
    }

    /// A non-empty run of `0`/`1` read as base 2. Whatever follows the run
    /// is left unread.
    pub fn parse_literal(mut scanner: Scanner<'_>) -> Parsed<'_> {
        scanner.skip_whitespace();
        let start = scanner.position();
        while matches!(scanner.peek(), '0' | '1') {
            scanner.advance();
        }
        let value = decode_binary(scanner.lexeme(start)).ok_or(ParseError::MalformedExpression)?;
        Ok((Expression::Literal(value), scanner))
    }

    /// `ashl X` / `ashr X`, falling back to `X op Y`.
    pub fn parse_logic(scanner: Scanner<'_>) -> Parsed<'_> {
        let unary = Self::parse_unary(scanner);
        if unary.is_ok() {
            return unary;
        }
        let binary = Self::parse_binary(scanner);
        if binary.is_ok() {
            return binary;
        }
        if matches!(unary, Err(ParseError::MalformedOperand)) {
            return unary;
        }
        binary
    }

    fn parse_unary(mut scanner: Scanner<'_>) -> Parsed<'_> {
        let op = parse_long_operator(&mut scanner);
        let operand = parse_address(&mut scanner);
        let op = match op.shift_op() {
            Some(op) if scanner.at_line_end() => op,
            _ => return Err(ParseError::MalformedExpression),
        };
        let operand = operand.register().ok_or(ParseError::MalformedOperand)?;
        Ok((Expression::Shift { op, operand }, scanner))
    }

    fn parse_binary(mut scanner: Scanner<'_>) -> Parsed<'_> {
        let left = parse_address(&mut scanner);
        let op = parse_short_operator(&mut scanner);
        let right = parse_address(&mut scanner);
        let op = match op.binary_op() {
            Some(op) if scanner.at_line_end() => op,
            _ => return Err(ParseError::MalformedExpression),
        };
        match (left.register(), right.register()) {
            (Some(left), Some(right)) => Ok((Expression::Binary { op, left, right }, scanner)),
            _ => Err(ParseError::MalformedOperand),
        }
    }

    /// A single register letter and nothing else.
    pub fn parse_reference(mut scanner: Scanner<'_>) -> Parsed<'_> {
        let address = parse_address(&mut scanner);
        match address.register() {
            Some(r) if scanner.at_line_end() => Ok((Expression::Reference(r), scanner)),
            _ => Err(ParseError::MalformedExpression),
        }
    }
}

/// Decode a run of binary digits. Empty or overflowing runs are rejected.
fn decode_binary(digits: &str) -> Option<i64> {
    if digits.is_empty() {
        return None;
    }
    digits.bytes().try_fold(0i64, |acc, d| {
        acc.checked_mul(2)?.checked_add((d - b'0') as i64)
    })
}

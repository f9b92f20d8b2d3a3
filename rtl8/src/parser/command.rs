//! Top-level line parser

use std::fmt;

use super::address::{parse_address, Target};
use super::expression::{Expression, ExpressionParser};
use super::operator::{parse_short_operator, Operator};
use super::scanner::Scanner;
use crate::error::ParseError;

/// Marks a comment line when it is the first non-blank character.
pub const COMMENT: char = ';';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank or comment line.
    Noop,
    /// `target <- expression`
    Assign { target: Target, expression: Expression },
}

impl Command {
    pub fn is_noop(&self) -> bool {
        matches!(self, Command::Noop)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Noop => write!(f, "{}", COMMENT),
            Command::Assign { target, expression } => write!(f, "{} <- {}", target, expression),
        }
    }
}

/// Parse one source line.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let mut scanner = Scanner::new(line);

    scanner.skip_whitespace();
    if scanner.is_at_end() || scanner.matches(COMMENT) {
        return Ok(Command::Noop);
    }

    let target = parse_address(&mut scanner)
        .target()
        .ok_or(ParseError::MalformedDestination)?;

    if parse_short_operator(&mut scanner) != Operator::Move {
        tracing::debug!(line, "failed to find arrow");
        return Err(ParseError::MissingArrow);
    }

    let (expression, _) = ExpressionParser::parse(scanner)?;
    Ok(Command::Assign { target, expression })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::address::Register;
    use crate::parser::operator::BinaryOp;

    fn reg(c: char) -> Register {
        Register::from_letter(c).unwrap()
    }

    #[test]
    fn test_noop_lines() {
        assert_eq!(parse_command(""), Ok(Command::Noop));
        assert_eq!(parse_command("   \t"), Ok(Command::Noop));
        assert_eq!(parse_command("; a comment"), Ok(Command::Noop));
        assert_eq!(parse_command("  ;A <- garbage &&"), Ok(Command::Noop));
    }

    #[test]
    fn test_assign_literal() {
        assert_eq!(
            parse_command("A <- 00000101"),
            Ok(Command::Assign {
                target: Target::Register(reg('A')),
                expression: Expression::Literal(5),
            })
        );
    }

    #[test]
    fn test_output_target() {
        assert_eq!(
            parse_command("P <- C"),
            Ok(Command::Assign {
                target: Target::Output,
                expression: Expression::Reference(reg('C')),
            })
        );
    }

    #[test]
    fn test_compact_spacing() {
        assert_eq!(
            parse_command("B<-A^C"),
            Ok(Command::Assign {
                target: Target::Register(reg('B')),
                expression: Expression::Binary {
                    op: BinaryOp::Xor,
                    left: reg('A'),
                    right: reg('C'),
                },
            })
        );
    }

    #[test]
    fn test_malformed_destination() {
        assert_eq!(parse_command("H <- 00000001"), Err(ParseError::MalformedDestination));
        assert_eq!(parse_command("x <- 1"), Err(ParseError::MalformedDestination));
    }

    #[test]
    fn test_missing_arrow() {
        assert_eq!(parse_command("A"), Err(ParseError::MissingArrow));
        assert_eq!(parse_command("A = 1"), Err(ParseError::MissingArrow));
        assert_eq!(parse_command("A < 1"), Err(ParseError::MissingArrow));
    }

    #[test]
    fn test_expression_errors_propagate() {
        assert_eq!(parse_command("A <- ashl"), Err(ParseError::MalformedOperand));
        assert_eq!(parse_command("A <-"), Err(ParseError::MalformedExpression));
    }

    #[test]
    fn test_literal_ignores_trailing_text() {
        for (line, value) in [("A <- 0101 A", 5), ("A <- 0102", 2), ("A <- 10 ; note", 2)] {
            assert_eq!(
                parse_command(line),
                Ok(Command::Assign {
                    target: Target::Register(reg('A')),
                    expression: Expression::Literal(value),
                })
            );
        }
    }

    #[test]
    fn test_display_round_trips() {
        for line in ["A <- 00000101", "P <- C", "B <- A ^ C", "G <- ashl D"] {
            let cmd = parse_command(line).unwrap();
            assert_eq!(cmd.to_string(), line);
            assert_eq!(parse_command(&cmd.to_string()), Ok(cmd));
        }
        assert_eq!(Command::Noop.to_string(), ";");
    }
}

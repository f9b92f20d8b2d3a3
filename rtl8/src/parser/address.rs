//! Storage locations: registers and the output sink

use std::fmt;

use super::scanner::Scanner;

/// Number of register slots in the machine.
pub const REGISTER_COUNT: usize = 8;

/// Letter naming the output sink.
pub const OUTPUT_LETTER: char = 'P';

/// Highest register letter the address grammar accepts. Slot 7 exists in
/// the machine but has no letter.
const LAST_REGISTER_LETTER: char = 'G';

/// Index of a register slot, always in `0..REGISTER_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Register(u8);

impl Register {
    pub fn new(index: usize) -> Option<Self> {
        (index < REGISTER_COUNT).then_some(Self(index as u8))
    }

    pub fn from_letter(c: char) -> Option<Self> {
        if ('A'..=LAST_REGISTER_LETTER).contains(&c) {
            Self::new((c as u8 - b'A') as usize)
        } else {
            None
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn letter(self) -> char {
        (b'A' + self.0) as char
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Result of scanning one address token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Register(Register),
    Output,
    Invalid,
}

impl Destination {
    pub fn register(self) -> Option<Register> {
        match self {
            Destination::Register(r) => Some(r),
            _ => None,
        }
    }

    pub fn target(self) -> Option<Target> {
        match self {
            Destination::Register(r) => Some(Target::Register(r)),
            Destination::Output => Some(Target::Output),
            Destination::Invalid => None,
        }
    }
}

/// A validated command destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Register(Register),
    Output,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Register(r) => write!(f, "{}", r),
            Target::Output => write!(f, "{}", OUTPUT_LETTER),
        }
    }
}

/// Consume one address character after any leading whitespace.
///
/// Exactly one character is consumed unless the line is exhausted, in which
/// case the result is [`Destination::Invalid`] and nothing moves. Callers
/// that want to try another rule must restore the scanner themselves.
pub fn parse_address(scanner: &mut Scanner) -> Destination {
    scanner.skip_whitespace();
    let c = scanner.advance();
    if let Some(r) = Register::from_letter(c) {
        Destination::Register(r)
    } else if c == OUTPUT_LETTER {
        Destination::Output
    } else {
        Destination::Invalid
    }
}

//! Parser module for program lines

pub mod scanner;
pub mod address;
pub mod operator;
pub mod expression;
pub mod command;

pub use scanner::Scanner;
pub use address::{parse_address, Destination, Register, Target, OUTPUT_LETTER, REGISTER_COUNT};
pub use operator::{parse_long_operator, parse_short_operator, BinaryOp, Operator, ShiftOp};
pub use expression::{Expression, ExpressionParser};
pub use command::{parse_command, Command};

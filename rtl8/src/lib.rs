//! Interpreter for a minimal 8-bit register-transfer language
//! - One statement per line, executed once, top to bottom
//! - Eight signed 8-bit registers; values wrap on store
//! - Output sink `P` reports a value instead of storing it
//!
//! ## Syntax
//! - `X <- expr`: assign to register `A`..`G`, or to `P` to print.
//! - **Expressions**:
//!   - `00000101`: binary literal; wider than 8 bits is fine, but a run
//!     that overflows 63 bits is a parse error. Text after the digits is ignored.
//!   - `B`: register read.
//!   - `ashl B`, `ashr B`: arithmetic shift by one.
//!   - `B & C`, `B ^ C`: bitwise and / xor.
//! - Blank lines and lines starting with `;` do nothing.
//! - A line that fails to parse is reported and skipped; the run continues.
//!
//! ## Optional Features
//! - `listing`: enables functions to print and save a listing of parsed lines.
//!
//! ## Basic Usage
//! ```rust
//! use rtl8::{Interpreter, RecordingSink, Register};
//!
//! let mut vm = Interpreter::new(RecordingSink::new());
//! let src = "
//!     A <- 00000101
//!     B <- 00000011
//!     C <- A & B
//!     P <- C
//! ";
//!
//! let summary = vm.run_source(src);
//! assert_eq!(summary.failures, 0);
//! assert_eq!(vm.state().get(Register::from_letter('C').unwrap()), 1);
//! assert_eq!(vm.sink().values(), vec![1]);
//! ```
//!
//! ## License
//! This project is released under [The Unlicense](https://unlicense.org/).
//! You are free to use it for any purpose, without restriction.

mod error;
mod eval;
mod interpreter;
#[cfg(feature = "listing")]
mod listing;
mod machine;
pub mod parser;

// Public exports
pub use error::{ParseError, RunError};
pub use eval::{evaluate, execute, OutputSink, RecordingSink, Report, StdoutSink, WriterSink};
pub use interpreter::{Interpreter, RunSummary};
#[cfg(feature = "listing")]
pub use listing::{print_listing, save_listing, write_listing};
pub use machine::{bit_pattern, truncate, MachineState};
pub use parser::{
    parse_command, BinaryOp, Command, Destination, Expression, Operator, Register, ShiftOp, Target,
};

//! Expression evaluation and command execution

use std::io::{self, Write};

use crate::error::ParseError;
use crate::machine::{bit_pattern, MachineState};
use crate::parser::{BinaryOp, Command, Expression, ShiftOp, Target};

/// Receiver for everything a program reports while it runs.
pub trait OutputSink {
    /// A value assigned to the output sink.
    fn emit(&mut self, value: i64);
    /// A line that failed to parse. `line_number` is 1-based.
    fn reject(&mut self, line_number: usize, line: &str, error: &ParseError);
}

/// Writes reports as text: `"{value} = {bits}"` and `"Error: {line}"`.
pub struct WriterSink<W: Write> {
    out: W,
}

pub type StdoutSink = WriterSink<io::Stdout>;

impl<W: Write> WriterSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl StdoutSink {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn emit(&mut self, value: i64) {
        let _ = writeln!(self.out, "{} = {}", value, bit_pattern(value));
    }

    fn reject(&mut self, _line_number: usize, line: &str, _error: &ParseError) {
        let _ = writeln!(self.out, "Error: {}", line);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Value(i64),
    Rejected {
        line_number: usize,
        line: String,
        error: ParseError,
    },
}

/// Keeps every report in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub reports: Vec<Report>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> Vec<i64> {
        self.reports
            .iter()
            .filter_map(|r| match r {
                Report::Value(v) => Some(*v),
                _ => None,
            })
            .collect()
    }

    pub fn rejected_lines(&self) -> Vec<usize> {
        self.reports
            .iter()
            .filter_map(|r| match r {
                Report::Rejected { line_number, .. } => Some(*line_number),
                _ => None,
            })
            .collect()
    }
}

impl OutputSink for RecordingSink {
    fn emit(&mut self, value: i64) {
        self.reports.push(Report::Value(value));
    }

    fn reject(&mut self, line_number: usize, line: &str, error: &ParseError) {
        self.reports.push(Report::Rejected {
            line_number,
            line: line.to_string(),
            error: *error,
        });
    }
}

/// Evaluate an expression against the current registers.
///
/// Register reads are widened before any operation, so shifts are not
/// clamped to 8 bits here.
pub fn evaluate(expr: &Expression, state: &MachineState) -> i64 {
    match expr {
        Expression::Literal(v) => *v,
        Expression::Reference(r) => state.get(*r) as i64,
        Expression::Shift { op, operand } => {
            let v = state.get(*operand) as i64;
            match op {
                ShiftOp::Left => v << 1,
                ShiftOp::Right => v >> 1,
            }
        }
        Expression::Binary { op, left, right } => {
            let l = state.get(*left) as i64;
            let r = state.get(*right) as i64;
            match op {
                BinaryOp::And => l & r,
                BinaryOp::Or => l | r,
                BinaryOp::Xor => l ^ r,
                BinaryOp::AndNot => l & !r,
            }
        }
    }
}

/// Run one command: store into a register or report to the sink.
pub fn execute<S: OutputSink + ?Sized>(command: &Command, state: &mut MachineState, sink: &mut S) {
    let Command::Assign { target, expression } = command else {
        return;
    };
    let value = evaluate(expression, state);
    match target {
        Target::Register(r) => {
            state.set(*r, value);
            tracing::trace!(register = %r, value, stored = state.get(*r), "store");
        }
        Target::Output => sink.emit(value),
    }
}

//! Line-by-line run loop

use std::fs;
use std::path::Path;

use crate::error::{ParseError, RunError};
use crate::eval::{execute, OutputSink};
use crate::machine::MachineState;
use crate::parser::{parse_command, Command};

/// Counts for one pass over a program.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub lines: usize,
    pub executed: usize,
    pub noops: usize,
    pub failures: usize,
}

pub struct Interpreter<S: OutputSink> {
    state: MachineState,
    sink: S,
    line_number: usize,
}

impl<S: OutputSink> Interpreter<S> {
    pub fn new(sink: S) -> Self {
        Self {
            state: MachineState::new(),
            sink,
            line_number: 0,
        }
    }

    pub fn state(&self) -> &MachineState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (MachineState, S) {
        (self.state, self.sink)
    }

    /// Parse and execute the next line. A line that fails to parse is
    /// reported to the sink and leaves the registers untouched.
    pub fn run_line(&mut self, line: &str) -> Result<Command, ParseError> {
        self.line_number += 1;
        match parse_command(line) {
            Ok(command) => {
                tracing::trace!(line_number = self.line_number, %command, "parsed");
                execute(&command, &mut self.state, &mut self.sink);
                Ok(command)
            }
            Err(error) => {
                tracing::debug!(line_number = self.line_number, %error, line, "rejected");
                self.sink.reject(self.line_number, line, &error);
                Err(error)
            }
        }
    }

    /// Run every line of `source` in order.
    pub fn run_source(&mut self, source: &str) -> RunSummary {
        let mut summary = RunSummary::default();
        for line in source.lines() {
            summary.lines += 1;
            match self.run_line(line) {
                Ok(command) if command.is_noop() => summary.noops += 1,
                Ok(_) => summary.executed += 1,
                Err(_) => summary.failures += 1,
            }
        }
        tracing::debug!(?summary, "program finished");
        summary
    }

    pub fn run_file(&mut self, path: impl AsRef<Path>) -> Result<RunSummary, RunError> {
        let source = fs::read_to_string(path)?;
        Ok(self.run_source(&source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::{RecordingSink, Report};
    use crate::parser::Register;

    fn reg(c: char) -> Register {
        Register::from_letter(c).unwrap()
    }

    #[test]
    fn test_run_source_counts() {
        let mut vm = Interpreter::new(RecordingSink::new());
        let summary = vm.run_source("; setup\nA <- 1\n\nZ <- 1\nP <- A\n");
        assert_eq!(
            summary,
            RunSummary { lines: 5, executed: 2, noops: 2, failures: 1 }
        );
        assert_eq!(vm.sink().values(), vec![1]);
        assert_eq!(vm.sink().rejected_lines(), vec![4]);
    }

    #[test]
    fn test_failure_does_not_stop_run() {
        let mut vm = Interpreter::new(RecordingSink::new());
        vm.run_source("A <- 11\nB <- ashl\nB <- ashl A");
        assert_eq!(vm.state().get(reg('A')), 3);
        assert_eq!(vm.state().get(reg('B')), 6);
        assert_eq!(
            vm.sink().reports,
            vec![Report::Rejected {
                line_number: 2,
                line: "B <- ashl".to_string(),
                error: ParseError::MalformedOperand,
            }]
        );
    }

    #[test]
    fn test_line_numbers_continue_across_calls() {
        let mut vm = Interpreter::new(RecordingSink::new());
        assert!(vm.run_line("A <- 1").is_ok());
        assert_eq!(vm.run_line("A <-"), Err(ParseError::MalformedExpression));
        assert_eq!(vm.sink().rejected_lines(), vec![2]);
    }

    #[test]
    fn test_run_file_missing() {
        let mut vm = Interpreter::new(RecordingSink::new());
        let result = vm.run_file("this/file/does/not/exist.rtl");
        assert!(matches!(result, Err(RunError::Io(_))));
    }

    #[test]
    fn test_into_parts() {
        let mut vm = Interpreter::new(RecordingSink::new());
        vm.run_source("G <- 1111111\nP <- G");
        let (state, sink) = vm.into_parts();
        assert_eq!(state.get(reg('G')), 127);
        assert_eq!(sink.values(), vec![127]);
    }
}

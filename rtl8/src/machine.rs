//! Register file

use std::fmt;

use crate::parser::{Register, REGISTER_COUNT};

/// Eight signed 8-bit registers, zeroed on creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MachineState {
    registers: [i8; REGISTER_COUNT],
}

impl MachineState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, register: Register) -> i8 {
        self.registers[register.index()]
    }

    /// Store `value` truncated to 8 bits (two's complement wrap).
    pub fn set(&mut self, register: Register, value: i64) {
        self.registers[register.index()] = truncate(value);
    }

    pub fn registers(&self) -> &[i8; REGISTER_COUNT] {
        &self.registers
    }
}

/// Final register dump, one line per slot.
impl fmt::Display for MachineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Registers")?;
        for (i, value) in self.registers.iter().enumerate() {
            writeln!(f, "R{} = {} = {}", i, value, bit_pattern(*value as i64))?;
        }
        Ok(())
    }
}

pub fn truncate(value: i64) -> i8 {
    value as i8
}

/// Low 8 bits of `value` as a two's-complement bit string.
pub fn bit_pattern(value: i64) -> String {
    format!("{:08b}", value as u8)
}

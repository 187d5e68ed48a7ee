//! Core execution engine.
//!
//! The executor owns the register file and the memory and drives the
//! fetch/decode/dispatch loop over a program's lines. Execution is strictly
//! sequential: the only control flow is `IFNZ`, which consumes exactly one
//! extra line when its register reads zero.
//!
//! A run is in one of three states: running (lines remain), halted cleanly
//! (end of input, `run` returns `Ok`), or halted on the first fatal error
//! (`run` returns `Err`). There is no error recovery.

use crate::processor::errors::VmError;
use crate::processor::isa::Opcode;
use crate::processor::memory::Memory;
use crate::processor::operand::Operand;
use crate::processor::parser::{Instruction, parse_line};
use crate::processor::registers::RegisterFile;
use std::io::Write;

/// Outcome of one dispatched instruction: continue at the next line, or
/// additionally consume the line after it.
enum Step {
    Next,
    SkipOne,
}

/// The dispatch loop over a program's lines.
///
/// Holds the single per-run [`RegisterFile`] and [`Memory`] instances and
/// applies each decoded instruction against them. `PRINT` output goes to
/// the writer passed to [`run`](Executor::run).
pub struct Executor {
    registers: RegisterFile,
    memory: Memory,
}

impl Executor {
    /// Creates an executor with zeroed registers and memory.
    pub fn new() -> Self {
        Self {
            registers: RegisterFile::new(),
            memory: Memory::new(),
        }
    }

    /// Returns the register file.
    pub fn registers(&self) -> &RegisterFile {
        &self.registers
    }

    /// Returns the memory.
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Executes `source` line by line, writing `PRINT` output to `out`.
    ///
    /// Empty lines are skipped without touching any processor state. The
    /// program is modeled as a finite sequence of lines with an explicit
    /// cursor; an `IFNZ` skip advances the cursor by 2 instead of 1, so the
    /// skipped line is consumed unexamined even if it is blank or invalid.
    ///
    /// Returns `Ok(())` when the last line has been consumed, or the first
    /// fatal error. Parse errors carry `line N:` context.
    pub fn run<W: Write>(&mut self, source: &str, out: &mut W) -> Result<(), VmError> {
        let lines: Vec<&str> = source.lines().collect();
        let mut cursor = 0;

        while cursor < lines.len() {
            let line = lines[cursor];
            let line_no = cursor + 1;
            cursor += 1;

            if line.is_empty() {
                continue;
            }

            let instruction =
                parse_line(line).map_err(|source| VmError::at_line(line_no, source))?;
            if let Step::SkipOne = self.exec(&instruction, out)? {
                cursor += 1;
            }
        }

        Ok(())
    }

    /// Validates the instruction's operands and applies its effect.
    fn exec<W: Write>(&mut self, instruction: &Instruction, out: &mut W) -> Result<Step, VmError> {
        match instruction.opcode {
            Opcode::SetV => {
                let (dst, value) = self.dst_and_immediate(instruction)?;
                self.registers.get_mut(dst)?.assign(value);
            }
            Opcode::SetR => {
                let (dst, value) = self.dst_and_register_value(instruction)?;
                self.registers.get_mut(dst)?.assign(value);
            }
            Opcode::AddV => {
                let (dst, value) = self.dst_and_immediate(instruction)?;
                self.registers.get_mut(dst)?.add(value);
            }
            Opcode::AddR => {
                let (dst, value) = self.dst_and_register_value(instruction)?;
                self.registers.get_mut(dst)?.add(value);
            }
            Opcode::SubV => {
                let (dst, value) = self.dst_and_immediate(instruction)?;
                self.registers.get_mut(dst)?.subtract(value);
            }
            Opcode::SubR => {
                let (dst, value) = self.dst_and_register_value(instruction)?;
                self.registers.get_mut(dst)?.subtract(value);
            }
            Opcode::Ifnz => {
                let rank = Self::single_register(instruction)?;
                if self.registers.read(rank)? == 0 {
                    return Ok(Step::SkipOne);
                }
            }
            Opcode::Print => {
                let rank = Self::single_register(instruction)?;
                let value = self.registers.read(rank)?;
                writeln!(out, "{value}").map_err(|e| VmError::Io(e.to_string()))?;
            }
            Opcode::Push => {
                let rank = Self::single_register(instruction)?;
                self.memory.push(self.registers.read(rank)?)?;
            }
            Opcode::Pop => {
                let rank = Self::single_register(instruction)?;
                let value = self.memory.pop()?;
                self.registers.get_mut(rank)?.assign(value);
            }
            Opcode::Load => {
                let (addr, rank) = Self::address_and_register(instruction)?;
                let value = self.memory.read_word(addr)?;
                self.registers.get_mut(rank)?.assign(value);
            }
            Opcode::Store => {
                let (addr, rank) = Self::address_and_register(instruction)?;
                let value = self.registers.read(rank)?;
                self.memory.write_word(addr, value)?;
            }
        }
        Ok(Step::Next)
    }

    /// Requires both operand slots to be populated.
    fn two_operands(instruction: &Instruction) -> Result<(Operand, Operand), VmError> {
        match instruction.operands {
            [Some(first), Some(second)] => Ok((first, second)),
            _ => Err(VmError::MissingOperand),
        }
    }

    /// Requires the first operand slot to be populated.
    fn one_operand(instruction: &Instruction) -> Result<Operand, VmError> {
        instruction.operands[0].ok_or(VmError::MissingOperand)
    }

    /// Destination rank from a sole register operand (IFNZ, PRINT, PUSH, POP).
    fn single_register(instruction: &Instruction) -> Result<u16, VmError> {
        match Self::one_operand(instruction)? {
            Operand::RegisterRef(rank) => Ok(rank),
            Operand::Immediate(_) => Err(VmError::InvalidFirstOperand),
        }
    }

    /// Destination rank plus immediate source (SETv, ADDv, SUBv).
    fn dst_and_immediate(&self, instruction: &Instruction) -> Result<(u16, u16), VmError> {
        let (first, second) = Self::two_operands(instruction)?;
        let dst = match first {
            Operand::RegisterRef(rank) => rank,
            Operand::Immediate(_) => return Err(VmError::InvalidFirstOperand),
        };
        let value = match second {
            Operand::Immediate(value) => value,
            Operand::RegisterRef(_) => return Err(VmError::InvalidSecondOperand),
        };
        Ok((dst, value))
    }

    /// Destination rank plus the value read from a register source
    /// (SETr, ADDr, SUBr).
    fn dst_and_register_value(&self, instruction: &Instruction) -> Result<(u16, u16), VmError> {
        let (first, second) = Self::two_operands(instruction)?;
        let dst = match first {
            Operand::RegisterRef(rank) => rank,
            Operand::Immediate(_) => return Err(VmError::InvalidFirstOperand),
        };
        let src = match second {
            Operand::RegisterRef(rank) => rank,
            Operand::Immediate(_) => return Err(VmError::InvalidSecondOperand),
        };
        Ok((dst, self.registers.read(src)?))
    }

    /// Heap address plus register rank (LOAD, STORE). The parsed address is
    /// truncated to the 8-bit address space.
    fn address_and_register(instruction: &Instruction) -> Result<(u8, u16), VmError> {
        let (first, second) = Self::two_operands(instruction)?;
        let addr = match first {
            Operand::Immediate(value) => value as u8,
            Operand::RegisterRef(_) => return Err(VmError::InvalidFirstOperand),
        };
        let rank = match second {
            Operand::RegisterRef(rank) => rank,
            Operand::Immediate(_) => return Err(VmError::InvalidSecondOperand),
        };
        Ok((addr, rank))
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new()
    }
}

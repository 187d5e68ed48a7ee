//! Line-oriented instruction parser.
//!
//! Syntax: one instruction per line, fields separated by single spaces.
//!
//! ```text
//! MNEMONIC [operand] [operand]
//! ```
//!
//! The parser resolves the mnemonic and classifies up to two positional
//! operands; it does not enforce per-opcode arity or operand kinds — the
//! executor validates those before dispatch.

use crate::processor::errors::VmError;
use crate::processor::isa::Opcode;
use crate::processor::operand::Operand;

/// Field separator between mnemonic and operands.
const DELIMITER: char = ' ';

/// One decoded program line: an opcode plus up to two operands.
///
/// Instructions are transient; each line is parsed fresh and discarded
/// after execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: Opcode,
    pub operands: [Option<Operand>; 2],
}

/// Parses one non-empty line into an [`Instruction`].
///
/// Returns [`VmError::UnknownOpcode`] for an unrecognized mnemonic and
/// [`VmError::MalformedOperand`] for an operand token that is neither a
/// register name nor an unsigned integer. Fields past the second operand
/// are ignored.
pub fn parse_line(line: &str) -> Result<Instruction, VmError> {
    let mut fields = line.split(DELIMITER);
    let mnemonic = fields.next().unwrap_or_default();
    let opcode = Opcode::from_mnemonic(mnemonic)
        .ok_or_else(|| VmError::UnknownOpcode(mnemonic.to_string()))?;

    let mut operands = [None, None];
    for slot in operands.iter_mut() {
        let Some(token) = fields.next() else { break };
        *slot = Some(Operand::parse(token)?);
    }

    Ok(Instruction { opcode, operands })
}

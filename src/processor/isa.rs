//! Instruction set definition.
//!
//! The mnemonic suffix encodes the expected source operand kind: `v` takes
//! an immediate value, `r` takes a register. Arity and operand kinds are
//! enforced by the executor, not here.

/// The closed set of opcodes understood by the processor.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Opcode {
    /// `SETv reg imm` ; reg = imm
    SetV,
    /// `SETr reg reg` ; reg = other reg
    SetR,
    /// `ADDv reg imm` ; reg += imm, saturating
    AddV,
    /// `ADDr reg reg` ; reg += other reg, saturating
    AddR,
    /// `SUBv reg imm` ; reg -= imm, saturating
    SubV,
    /// `SUBr reg reg` ; reg -= other reg, saturating
    SubR,
    /// `IFNZ reg` ; if reg == 0, skip the next line
    Ifnz,
    /// `PRINT reg` ; write reg as decimal plus newline
    Print,
    /// `PUSH reg` ; push reg onto the stack
    Push,
    /// `POP reg` ; pop the stack into reg
    Pop,
    /// `LOAD addr reg` ; reg = word at heap address
    Load,
    /// `STORE addr reg` ; word at heap address = reg
    Store,
}

impl Opcode {
    /// Resolves a mnemonic token to its opcode.
    pub fn from_mnemonic(token: &str) -> Option<Self> {
        Some(match token {
            "SETv" => Opcode::SetV,
            "SETr" => Opcode::SetR,
            "ADDv" => Opcode::AddV,
            "ADDr" => Opcode::AddR,
            "SUBv" => Opcode::SubV,
            "SUBr" => Opcode::SubR,
            "IFNZ" => Opcode::Ifnz,
            "PRINT" => Opcode::Print,
            "PUSH" => Opcode::Push,
            "POP" => Opcode::Pop,
            "LOAD" => Opcode::Load,
            "STORE" => Opcode::Store,
            _ => return None,
        })
    }

    /// Returns the canonical mnemonic for this opcode.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::SetV => "SETv",
            Opcode::SetR => "SETr",
            Opcode::AddV => "ADDv",
            Opcode::AddR => "ADDr",
            Opcode::SubV => "SUBv",
            Opcode::SubR => "SUBr",
            Opcode::Ifnz => "IFNZ",
            Opcode::Print => "PRINT",
            Opcode::Push => "PUSH",
            Opcode::Pop => "POP",
            Opcode::Load => "LOAD",
            Opcode::Store => "STORE",
        }
    }
}

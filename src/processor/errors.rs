use thiserror::Error;

/// Errors that can occur while parsing or executing a program.
///
/// Every variant is fatal: the executor stops at the first error and the
/// CLI maps it to a nonzero exit status.
#[derive(Debug, Error)]
pub enum VmError {
    /// Unrecognized instruction mnemonic.
    #[error("unknown opcode: {0}")]
    UnknownOpcode(String),
    /// Operand token that is neither a register name nor an unsigned integer.
    #[error("malformed operand: {0}")]
    MalformedOperand(String),
    /// Instruction requires an operand that was not supplied.
    #[error("missing operand")]
    MissingOperand,
    /// First operand has the wrong kind for the instruction.
    #[error("invalid first operand")]
    InvalidFirstOperand,
    /// Second operand has the wrong kind for the instruction.
    #[error("invalid second operand")]
    InvalidSecondOperand,
    /// Register rank outside the register file.
    #[error("invalid register id: {0}")]
    InvalidRegisterId(u16),
    /// LOAD address inside the reserved stack region.
    #[error("reading from stack region {0}")]
    ReadingFromStackRegion(u8),
    /// STORE address inside the reserved stack region.
    #[error("writing to stack region {0}")]
    WritingToStackRegion(u8),
    /// Word access whose high byte would fall past the end of memory.
    #[error("word access at {0} crosses the end of memory")]
    WordOutOfBounds(u8),
    /// Push onto a full stack.
    #[error("stack overflow")]
    StackOverflow,
    /// Pop from an empty stack.
    #[error("stack underflow")]
    StackUnderflow,
    /// Failure writing to the output sink.
    #[error("io error: {0}")]
    Io(String),
    /// Parse error with line number context.
    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<VmError>,
    },
}

impl VmError {
    /// Wraps a parse-stage error with the 1-based line it occurred on.
    pub(crate) fn at_line(line: usize, source: VmError) -> Self {
        VmError::AtLine {
            line,
            source: Box::new(source),
        }
    }
}

//! Minimal 16-bit virtual processor.
//!
//! Executes line-oriented text programs against four saturating 16-bit
//! registers and a flat 256-byte memory with a reserved stack region.
//!
//! # Architecture
//!
//! - **Registers**: four cells named `a`..`d`; arithmetic clamps to
//!   `[0, 65535]` instead of wrapping
//! - **Memory**: bytes `[0, 16)` form a word stack reachable only through
//!   `PUSH`/`POP`; bytes `[16, 256)` form the heap addressed by
//!   `LOAD`/`STORE`
//! - **Instruction format**: one instruction per line, space-separated
//!   mnemonic plus up to two operands
//! - **Execution model**: strictly sequential; `IFNZ` skips exactly the
//!   next line when its register reads zero
//!
//! # Modules
//!
//! - [`errors`]: Parse and execution error types
//! - [`executor`]: Dispatch loop and operand validation
//! - [`isa`]: Instruction set definition and mnemonic mappings
//! - [`memory`]: Stack/heap memory with bounds validation
//! - [`operand`]: Operand sum type and token classification
//! - [`parser`]: Line-to-instruction decoding
//! - [`registers`]: Saturating register cells and the register file

pub mod errors;
pub mod executor;
pub mod isa;
pub mod memory;
pub mod operand;
pub mod parser;
pub mod registers;

pub use errors::VmError;
pub use executor::Executor;

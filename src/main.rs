//! Virtual processor CLI.
//!
//! Reads a program file and executes it on the virtual processor.
//!
//! # Usage
//! ```text
//! vproc <program-file>
//! ```
//!
//! # Arguments
//! - `program-file`: Text program, one instruction per line
//!
//! # Exit status
//! - `0`: the program ran to the end of the file
//! - `1`: missing/unreadable program file or any fatal execution error

use std::env;
use std::fs;
use std::io;
use std::process;
use vproc::error;
use vproc::processor::Executor;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() >= 2 && (args[1] == "--help" || args[1] == "-h") {
        print_usage(&args[0]);
        process::exit(0);
    }

    if args.len() < 2 {
        error!("Program file path was not provided.");
        process::exit(1);
    }

    let path = &args[1];
    let source = fs::read_to_string(path).unwrap_or_else(|_| {
        error!("Unable to open file: {path}");
        process::exit(1)
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut executor = Executor::new();
    if let Err(e) = executor.run(&source, &mut out) {
        error!("{e}");
        process::exit(1);
    }
}

fn print_usage(program: &str) {
    println!("Usage: {program} <program-file>");
    println!();
    println!("Executes a virtual processor program, one instruction per line.");
    println!();
    println!("Instructions:");
    println!("  SETv reg value   set register to an immediate value");
    println!("  SETr reg reg     set register to another register's value");
    println!("  ADDv reg value   add an immediate value (saturating)");
    println!("  ADDr reg reg     add another register's value (saturating)");
    println!("  SUBv reg value   subtract an immediate value (saturating)");
    println!("  SUBr reg reg     subtract another register's value (saturating)");
    println!("  IFNZ reg         skip the next line if the register is zero");
    println!("  PRINT reg        print the register's decimal value");
    println!("  PUSH reg         push the register onto the stack");
    println!("  POP reg          pop the stack into the register");
    println!("  LOAD addr reg    load the word at a heap address");
    println!("  STORE addr reg   store the register at a heap address");
    println!();
    println!("Registers: a, b, c, d (16-bit, saturating arithmetic)");
}

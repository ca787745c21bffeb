//! Emit `case` labels for the CPU dispatch switch.
//!
//! Usage:
//!   gen-opcode-boilerplate opcodes.txt >> cpu_cases.inc

use std::process::ExitCode;

use gbe_opgen_cli::{init_tracing, run_script};
use gbe_opgen_core::RenderMode;

fn main() -> ExitCode {
    init_tracing(false);
    let args: Vec<String> = std::env::args().collect();
    run_script(RenderMode::SwitchCase, &args)
}

//! Emit `TEST_F` stubs for the CPU test fixture.
//!
//! Usage:
//!   gen-opcode-test-boilerplate opcodes.txt >> tests/cpu.cpp

use std::process::ExitCode;

use gbe_opgen_cli::{init_tracing, run_script};
use gbe_opgen_core::RenderMode;

fn main() -> ExitCode {
    init_tracing(false);
    let args: Vec<String> = std::env::args().collect();
    run_script(RenderMode::TestStub, &args)
}

//! Opcode table parsing and boilerplate rendering for gbe.
//!
//! This crate turns a pipe-delimited opcode table into C++ source fragments
//! for the CPU core: `case` labels for the instruction dispatch switch, and
//! `TEST_F` stubs for the CPU test fixture.
//!
//! # Table format
//!
//! One opcode per line, two fields separated by `|`. The first token of the
//! left field is the hexadecimal opcode, the right field is a description:
//!
//! ```text
//! 4c         | Load accumulator
//! 9D NOP     | No operation
//! ```
//!
//! Both lines parse to a canonical literal (`0x4C`, `0x9D`) plus the trimmed
//! description. Parsing is shared by every [`RenderMode`].

mod record;
mod table;
mod transcode;
pub mod config;
pub mod render;

pub use config::{ConfigError, GeneratorConfig, MalformedPolicy};
pub use record::{LineError, LineErrorKind, OpcodeRecord, canonical_opcode, parse_line};
pub use render::{Render, RenderMode, SwitchCaseRenderer, TestStubRenderer};
pub use table::{OpcodeTable, TableError};
pub use transcode::{TranscodeError, TranscodeSummary, Transcoder};

//! Boilerplate rendering.
//!
//! Each renderer turns one [`OpcodeRecord`] into one block of C++ source,
//! terminated by a blank line so consecutive blocks stay separated.

use crate::config::{GeneratorConfig, SwitchCaseConfig, TestStubConfig};
use crate::record::OpcodeRecord;
use std::fmt::Write as FmtWrite;

/// Which template is applied to each record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// `case` labels for the instruction dispatch switch
    SwitchCase,
    /// `TEST_F` stubs for the CPU test fixture
    TestStub,
}

impl RenderMode {
    /// Build the renderer for this mode from the template settings.
    pub fn renderer(self, config: &GeneratorConfig) -> Box<dyn Render> {
        match self {
            RenderMode::SwitchCase => Box::new(SwitchCaseRenderer::new(config.switch_case.clone())),
            RenderMode::TestStub => Box::new(TestStubRenderer::new(config.test_stub.clone())),
        }
    }
}

/// A template applied to one record at a time.
pub trait Render {
    /// Append the block for `record` to `output`.
    fn render(&self, output: &mut String, record: &OpcodeRecord) -> Result<(), std::fmt::Error>;
}

/// Emits:
///
/// ```text
/// // Load accumulator
/// case 0x4C:
///     break;
///
/// ```
#[derive(Debug, Clone, Default)]
pub struct SwitchCaseRenderer {
    config: SwitchCaseConfig,
}

impl SwitchCaseRenderer {
    pub fn new(config: SwitchCaseConfig) -> Self {
        Self { config }
    }
}

impl Render for SwitchCaseRenderer {
    fn render(&self, output: &mut String, record: &OpcodeRecord) -> Result<(), std::fmt::Error> {
        writeln!(output, "// {}", record.description)?;
        writeln!(output, "case {}:", record.code)?;
        writeln!(output, "{}break;", self.config.indent)?;
        writeln!(output)?;
        Ok(())
    }
}

/// Emits:
///
/// ```text
/// TEST_F(CPUTest, Opcode0x4CTest)
/// {
///     // Testing Load accumulator
///     EXPECT_TRUE(false);
/// }
///
/// ```
#[derive(Debug, Clone, Default)]
pub struct TestStubRenderer {
    config: TestStubConfig,
}

impl TestStubRenderer {
    pub fn new(config: TestStubConfig) -> Self {
        Self { config }
    }
}

impl Render for TestStubRenderer {
    fn render(&self, output: &mut String, record: &OpcodeRecord) -> Result<(), std::fmt::Error> {
        let indent = &self.config.indent;
        writeln!(output, "TEST_F({}, Opcode{}Test)", self.config.fixture, record.code)?;
        writeln!(output, "{{")?;
        writeln!(output, "{indent}// Testing {}", record.description)?;
        writeln!(output, "{indent}{}", self.config.assertion)?;
        writeln!(output, "}}")?;
        writeln!(output)?;
        Ok(())
    }
}

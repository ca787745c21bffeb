//! Opcode records and the per-line grammar.

use serde::Serialize;
use thiserror::Error;

/// Field separator between the opcode and its description.
const SEPARATOR: char = '|';

/// A single parsed table line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpcodeRecord {
    /// Canonical opcode literal (e.g., "0x4C")
    pub code: String,
    /// Trimmed description text
    pub description: String,
}

/// Why a line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineErrorKind {
    #[error("expected exactly one '|' separator, found {found}")]
    SeparatorCount { found: usize },
}

/// A malformed table line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct LineError {
    /// 1-based line number
    pub line: usize,
    pub kind: LineErrorKind,
}

/// Build the canonical literal from a raw opcode field.
///
/// Only the text before the first space is used, so trailing mnemonics or
/// comments are dropped: `"4c some comment"` becomes `"0x4C"`.
pub fn canonical_opcode(raw_code: &str) -> String {
    let token = raw_code.split(' ').next().unwrap_or(raw_code);
    format!("0x{}", token.to_uppercase())
}

/// Parse one table line.
///
/// `line` is the 1-based position used in the error. The content is not
/// validated beyond the separator count; any opcode text or description is
/// accepted verbatim.
pub fn parse_line(line: usize, text: &str) -> Result<OpcodeRecord, LineError> {
    let mut fields = text.trim().split(SEPARATOR);
    let (Some(raw_code), Some(description), None) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(LineError {
            line,
            kind: LineErrorKind::SeparatorCount {
                found: text.matches(SEPARATOR).count(),
            },
        });
    };

    Ok(OpcodeRecord {
        code: canonical_opcode(raw_code.trim()),
        description: description.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_opcode() {
        assert_eq!(canonical_opcode("4c"), "0x4C");
        assert_eq!(canonical_opcode("4C some comment"), "0x4C");
        assert_eq!(canonical_opcode("cb 7f"), "0xCB");
        assert_eq!(canonical_opcode("00"), "0x00");
    }

    #[test]
    fn test_parse_line_basic() {
        let record = parse_line(1, "4c | Load accumulator").unwrap();
        assert_eq!(record.code, "0x4C");
        assert_eq!(record.description, "Load accumulator");
    }

    #[test]
    fn test_parse_line_discards_mnemonic() {
        let record = parse_line(1, "9D NOP | No operation").unwrap();
        assert_eq!(record.code, "0x9D");
        assert_eq!(record.description, "No operation");
    }

    #[test]
    fn test_parse_line_trims_surrounding_whitespace() {
        let record = parse_line(3, "  \t1a|  LD A,(DE)  \r").unwrap();
        assert_eq!(record.code, "0x1A");
        assert_eq!(record.description, "LD A,(DE)");
    }

    #[test]
    fn test_parse_line_accepts_any_content() {
        // No hex or range validation is performed
        let record = parse_line(1, "zz | ").unwrap();
        assert_eq!(record.code, "0xZZ");
        assert_eq!(record.description, "");
    }

    #[test]
    fn test_parse_line_missing_separator() {
        let err = parse_line(7, "4c Load accumulator").unwrap_err();
        assert_eq!(err.line, 7);
        assert_eq!(err.kind, LineErrorKind::SeparatorCount { found: 0 });
        assert_eq!(
            err.to_string(),
            "line 7: expected exactly one '|' separator, found 0"
        );
    }

    #[test]
    fn test_parse_line_extra_separator() {
        let err = parse_line(2, "4c | LD | extra").unwrap_err();
        assert_eq!(err.kind, LineErrorKind::SeparatorCount { found: 2 });
    }

    #[test]
    fn test_parse_line_blank() {
        let err = parse_line(1, "").unwrap_err();
        assert_eq!(err.kind, LineErrorKind::SeparatorCount { found: 0 });
    }
}

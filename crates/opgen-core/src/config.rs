//! Generator configuration.
//!
//! Every key is optional. An empty file (or no file at all) yields the
//! templates used by the CPU core and its test suite:
//!
//! ```toml
//! on_malformed = "abort"
//!
//! [switch_case]
//! indent = "    "
//!
//! [test_stub]
//! fixture = "CPUTest"
//! indent = "    "
//! assertion = "EXPECT_TRUE(false);"
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// What to do with a line that does not split into exactly two fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Stop at the first malformed line.
    #[default]
    Abort,
    /// Log a warning and continue with the next line.
    Skip,
}

/// Template settings for `case` labels.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SwitchCaseConfig {
    /// Indentation before `break;`
    pub indent: String,
}

impl Default for SwitchCaseConfig {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
        }
    }
}

/// Template settings for `TEST_F` stubs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TestStubConfig {
    /// Fixture class passed as the first `TEST_F` argument
    pub fixture: String,
    /// Indentation of the test body
    pub indent: String,
    /// Placeholder statement marking the test as unimplemented
    pub assertion: String,
}

impl Default for TestStubConfig {
    fn default() -> Self {
        Self {
            fixture: "CPUTest".to_string(),
            indent: "    ".to_string(),
            assertion: "EXPECT_TRUE(false);".to_string(),
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub on_malformed: MalformedPolicy,
    pub switch_case: SwitchCaseConfig,
    pub test_stub: TestStubConfig,
}

impl GeneratorConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

//! Table to boilerplate transcoding.

use std::io::Write;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{GeneratorConfig, MalformedPolicy};
use crate::record::LineError;
use crate::render::{Render, RenderMode};
use crate::table::OpcodeTable;

#[derive(Debug, Error)]
pub enum TranscodeError {
    #[error("malformed opcode table: {0}")]
    Malformed(#[from] LineError),

    #[error("formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("write error: {0}")]
    Write(#[from] std::io::Error),
}

/// Counts for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranscodeSummary {
    /// Blocks written to the output
    pub rendered: usize,
    /// Malformed lines passed over under [`MalformedPolicy::Skip`]
    pub skipped: usize,
}

/// Applies one renderer to every line of a table.
pub struct Transcoder {
    renderer: Box<dyn Render>,
    policy: MalformedPolicy,
}

impl Transcoder {
    pub fn new(renderer: Box<dyn Render>, policy: MalformedPolicy) -> Self {
        Self { renderer, policy }
    }

    /// Build a transcoder for `mode` using the templates and policy in `config`.
    pub fn from_config(mode: RenderMode, config: &GeneratorConfig) -> Self {
        Self::new(mode.renderer(config), config.on_malformed)
    }

    /// Render every record of `table` to `out`, in line order.
    ///
    /// Blocks are written as they are produced. Under
    /// [`MalformedPolicy::Abort`] the blocks preceding a malformed line have
    /// already reached `out` when the error is returned.
    pub fn run<W: Write>(
        &self,
        table: &OpcodeTable,
        out: &mut W,
    ) -> Result<TranscodeSummary, TranscodeError> {
        let mut summary = TranscodeSummary::default();
        let mut block = String::new();

        for result in table.records() {
            let record = match result {
                Ok(record) => record,
                Err(err) => match self.policy {
                    MalformedPolicy::Abort => return Err(err.into()),
                    MalformedPolicy::Skip => {
                        warn!("skipping {}", err);
                        summary.skipped += 1;
                        continue;
                    }
                },
            };

            block.clear();
            self.renderer.render(&mut block, &record)?;
            out.write_all(block.as_bytes())?;
            summary.rendered += 1;
        }

        out.flush()?;
        debug!(
            rendered = summary.rendered,
            skipped = summary.skipped,
            "transcoding finished"
        );
        Ok(summary)
    }

    /// Render a table into a string.
    pub fn run_to_string(&self, table: &OpcodeTable) -> Result<String, TranscodeError> {
        let mut out = Vec::new();
        self.run(table, &mut out)?;
        // Blocks are built from `&str` fragments only
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

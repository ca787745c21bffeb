//! Shared plumbing for the opcode generator binaries.

use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use gbe_opgen_core::{
    ConfigError, GeneratorConfig, MalformedPolicy, OpcodeRecord, OpcodeTable, RenderMode,
    TableError, TranscodeError, TranscodeSummary, Transcoder,
};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

/// Usage line printed by the script-compatible binaries.
pub const SCRIPT_USAGE: &str = "usage: genOpcodeBoilerplate.py <opcodeFile>";

/// Input path that selects standard input.
pub const STDIN_PATH: &str = "-";

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Transcode(#[from] TranscodeError),

    #[error("cannot create {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize records: {0}")]
    Json(#[from] serde_json::Error),
}

/// Targets that `--verbose` opens up: the library crates and the `opgen` binary.
const LOG_TARGETS: [&str; 2] = ["gbe_opgen", "opgen"];

/// Install the stderr subscriber. Standard output carries generated code only.
pub fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let mut filter = EnvFilter::from_default_env();
    for target in LOG_TARGETS {
        let directive = format!("{target}={level}");
        filter =
            filter.add_directive(directive.parse().unwrap_or_else(|_| LevelFilter::WARN.into()));
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Load a table from a path, or from stdin for [`STDIN_PATH`].
pub fn load_table(input: &str) -> Result<OpcodeTable, TableError> {
    if input == STDIN_PATH {
        OpcodeTable::from_reader(io::stdin().lock(), input)
    } else {
        OpcodeTable::open(input)
    }
}

/// Render `input` with `mode`, to `out_path` or to stdout.
///
/// File output goes to a temporary file next to `out_path` that replaces it
/// only once every block has been written, so an unreadable or malformed
/// table leaves any existing output untouched.
pub fn generate(
    mode: RenderMode,
    input: &str,
    out_path: Option<&Path>,
    config: &GeneratorConfig,
) -> Result<TranscodeSummary, CliError> {
    let table = load_table(input)?;
    let transcoder = Transcoder::from_config(mode, config);

    let summary = match out_path {
        Some(path) => {
            let output_error = |source: io::Error| CliError::Output {
                path: path.to_path_buf(),
                source,
            };
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            let mut writer = BufWriter::new(NamedTempFile::new_in(dir).map_err(output_error)?);
            let summary = transcoder.run(&table, &mut writer)?;
            writer
                .into_inner()
                .map_err(|err| output_error(err.into_error()))?
                .persist(path)
                .map_err(|err| output_error(err.error))?;
            summary
        }
        None => transcoder.run(&table, &mut io::stdout().lock())?,
    };
    Ok(summary)
}

/// Parse `input` and return its records as pretty JSON.
pub fn records_json(input: &str, policy: MalformedPolicy) -> Result<String, CliError> {
    let table = load_table(input)?;
    let mut records: Vec<OpcodeRecord> = Vec::new();
    for result in table.records() {
        match result {
            Ok(record) => records.push(record),
            Err(err) if policy == MalformedPolicy::Skip => warn!("skipping {}", err),
            Err(err) => return Err(TranscodeError::from(err).into()),
        }
    }
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Turn a run result into the process exit status.
///
/// Errors are printed to stdout. An unreadable table is reported but still
/// exits successfully; a malformed table exits with status 1.
pub fn report<T>(result: Result<T, CliError>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(CliError::Table(err)) => {
            println!("{err}");
            ExitCode::SUCCESS
        }
        Err(CliError::Transcode(TranscodeError::Write(err))) => {
            error!("failed to write output: {}", err);
            ExitCode::FAILURE
        }
        Err(err) => {
            println!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Entry point shared by the script-compatible binaries.
///
/// `args` includes the program name. A wrong argument count prints the usage
/// line and still runs with the first argument when there is one.
pub fn run_script(mode: RenderMode, args: &[String]) -> ExitCode {
    if args.len() != 2 {
        println!("{SCRIPT_USAGE}");
    }
    let Some(input) = args.get(1) else {
        return ExitCode::from(2);
    };
    report(generate(mode, input, None, &GeneratorConfig::default()))
}

//! Opcode boilerplate generator CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use gbe_opgen_cli::{CliError, generate, init_tracing, records_json, report};
use gbe_opgen_core::{GeneratorConfig, MalformedPolicy, RenderMode};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "opgen")]
#[command(about = "Generate CPU opcode boilerplate from a pipe-delimited opcode table")]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Skip malformed lines instead of stopping at the first one
    #[arg(long, global = true)]
    skip_malformed: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit `case` labels for the instruction dispatch switch
    SwitchCase {
        /// Opcode table (or - for stdin)
        file: String,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Emit `TEST_F` stubs for the CPU test fixture
    TestStub {
        /// Opcode table (or - for stdin)
        file: String,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print the parsed records as JSON
    Records {
        /// Opcode table (or - for stdin)
        file: String,
    },
}

fn load_config(cli: &Cli) -> Result<GeneratorConfig, CliError> {
    let mut config = match &cli.config {
        Some(path) => {
            debug!("Loading config from {}", path.display());
            GeneratorConfig::from_file(path)?
        }
        None => GeneratorConfig::default(),
    };
    if cli.skip_malformed {
        config.on_malformed = MalformedPolicy::Skip;
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(&cli)?;

    match cli.command {
        Commands::SwitchCase { file, out } => {
            let summary = generate(RenderMode::SwitchCase, &file, out.as_deref(), &config)?;
            if let Some(path) = out {
                info!("Wrote {} cases to {}", summary.rendered, path.display());
            }
        }

        Commands::TestStub { file, out } => {
            let summary = generate(RenderMode::TestStub, &file, out.as_deref(), &config)?;
            if let Some(path) = out {
                info!("Wrote {} test stubs to {}", summary.rendered, path.display());
            }
        }

        Commands::Records { file } => {
            println!("{}", records_json(&file, config.on_malformed)?);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    report(run(cli))
}

//! circuit-stats CLI: circuit labels, telemetry events and signature encodings.
//!
//! Provides four commands: `name`, `list`, `signature`, and `event`.
//!
//! All of them are thin wrappers over [`circuit_stats_core`]; nothing here keeps
//! state between invocations.

mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "circuit-stats",
    about = "Circuit labels, telemetry events and signature encodings for protocol artifacts",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, env = "CIRCUIT_STATS_FORMAT", default_value = "text")]
    format: OutputFormat,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the circuit label for one or more artifact tags
    Name {
        /// Artifact tags (e.g. BaseRollupArtifact)
        #[arg(required = true)]
        artifacts: Vec<String>,
    },

    /// List every known artifact tag with its circuit label
    List {
        /// Only list one side of the artifact universe
        #[arg(long, value_enum)]
        side: Option<SideChoice>,
    },

    /// Decode a Schnorr signature and print its buffer and field encodings
    Signature {
        /// 64-byte signature as hex (`0x` prefix optional)
        hex: String,
    },

    /// Build a telemetry event record for an artifact run
    Event {
        /// Kind of run being recorded
        #[arg(value_enum)]
        kind: EventKind,

        /// Artifact tag the run belongs to
        #[arg(long)]
        artifact: String,

        /// Run duration in milliseconds
        #[arg(long = "duration", visible_alias = "duration-ms", value_name = "MS")]
        duration_ms: u64,

        /// Input size in bytes
        #[arg(long, default_value = "0")]
        input_size: u64,

        /// Output size in bytes (simulation, witness generation)
        #[arg(long, default_value = "0")]
        output_size: u64,

        /// Proof size in bytes (proving)
        #[arg(long, default_value = "0")]
        proof_size: u64,

        /// Circuit size in gates (proving)
        #[arg(long, default_value = "0")]
        circuit_size: u64,

        /// Number of public inputs (proving)
        #[arg(long, default_value = "0")]
        num_public_inputs: u32,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SideChoice {
    Client,
    Server,
}

impl SideChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Server => "server",
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Simulation,
    WitnessGeneration,
    Proving,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Name { artifacts } => {
            commands::name::run(&artifacts, cli.format)?;
        }
        Commands::List { side } => {
            commands::list::run(side, cli.format)?;
        }
        Commands::Signature { hex } => {
            commands::signature::run(&hex, cli.format)?;
        }
        Commands::Event {
            kind,
            artifact,
            duration_ms,
            input_size,
            output_size,
            proof_size,
            circuit_size,
            num_public_inputs,
        } => {
            let sizes = commands::event::Sizes {
                input_size,
                output_size,
                proof_size,
                circuit_size,
                num_public_inputs,
            };
            commands::event::run(kind, &artifact, duration_ms, &sizes, cli.format)?;
        }
    }

    Ok(())
}

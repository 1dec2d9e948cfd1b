use std::time::Duration;

use anyhow::Result;

use circuit_stats_core::stats::CircuitEvent;

use crate::output;
use crate::{EventKind, OutputFormat};

/// Size measurements passed through from the command line.
#[derive(Debug, Clone, Default)]
pub struct Sizes {
    pub input_size: u64,
    pub output_size: u64,
    pub proof_size: u64,
    pub circuit_size: u64,
    pub num_public_inputs: u32,
}

/// Build the event record for one run.
pub fn build(kind: EventKind, artifact: &str, duration_ms: u64, sizes: &Sizes) -> Result<CircuitEvent> {
    let duration = Duration::from_millis(duration_ms);
    let event = match kind {
        EventKind::Simulation => {
            CircuitEvent::simulation(artifact, duration, sizes.input_size, sizes.output_size)?
        }
        EventKind::WitnessGeneration => CircuitEvent::witness_generation(
            artifact,
            duration,
            sizes.input_size,
            sizes.output_size,
        )?,
        EventKind::Proving => CircuitEvent::proving(
            artifact,
            duration,
            sizes.input_size,
            sizes.proof_size,
            sizes.circuit_size,
            sizes.num_public_inputs,
        )?,
    };
    Ok(event)
}

/// Key/value rows shown in text mode. JSON lives behind `--format json`.
pub fn text_rows(event: &CircuitEvent) -> Vec<(&'static str, String)> {
    vec![
        ("Event", event.event_name().to_string()),
        ("Circuit", event.circuit_name().to_string()),
        ("Duration", format!("{} ms", event.duration())),
    ]
}

/// Print a telemetry event record for an artifact run.
pub fn run(
    kind: EventKind,
    artifact: &str,
    duration_ms: u64,
    sizes: &Sizes,
    format: OutputFormat,
) -> Result<()> {
    let event = build(kind, artifact, duration_ms, sizes)?;

    match format {
        OutputFormat::Json => output::print_json(&event)?,
        OutputFormat::Text => {
            output::print_header("circuit-stats event");
            for (key, value) in text_rows(&event) {
                output::print_key_value(key, &value);
            }
        }
    }
    Ok(())
}

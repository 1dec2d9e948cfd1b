use anyhow::Result;
use serde::Serialize;

use circuit_stats_core::artifact::ProtocolArtifact;
use circuit_stats_core::CircuitName;

use crate::output;
use crate::{OutputFormat, SideChoice};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub artifact: &'static str,
    pub side: &'static str,
    pub circuit_name: CircuitName,
}

/// Known artifacts, optionally restricted to one side.
pub fn entries(side: Option<SideChoice>) -> Vec<Entry> {
    ProtocolArtifact::all()
        .map(|artifact| Entry {
            artifact: artifact.as_str(),
            side: if artifact.is_client() {
                SideChoice::Client.as_str()
            } else {
                SideChoice::Server.as_str()
            },
            circuit_name: artifact.circuit_name(),
        })
        .filter(|entry| side.is_none_or(|s| s.as_str() == entry.side))
        .collect()
}

/// List every known artifact tag and the label it reports under.
pub fn run(side: Option<SideChoice>, format: OutputFormat) -> Result<()> {
    let entries = entries(side);

    match format {
        OutputFormat::Json => output::print_json(&entries)?,
        OutputFormat::Text => {
            output::print_header("circuit-stats list");
            for entry in &entries {
                output::print_key_value(
                    entry.artifact,
                    &format!("{} ({})", entry.circuit_name, entry.side),
                );
            }
            output::print_success(&format!("{} artifact(s)", entries.len()));
        }
    }
    Ok(())
}

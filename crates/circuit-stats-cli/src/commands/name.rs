use anyhow::{Context, Result};
use serde::Serialize;

use circuit_stats_core::mapping::circuit_name_for_artifact;
use circuit_stats_core::CircuitName;

use crate::output;
use crate::OutputFormat;

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Labelled {
    pub artifact: String,
    pub circuit_name: CircuitName,
}

/// Resolve every tag, stopping at the first unknown one.
///
/// An unknown tag is an integration error upstream, so there is no
/// "skip and continue" mode.
pub fn resolve(artifacts: &[String]) -> Result<Vec<Labelled>> {
    artifacts
        .iter()
        .map(|artifact| {
            let circuit_name = circuit_name_for_artifact(artifact)
                .with_context(|| format!("cannot label artifact '{artifact}'"))?;
            Ok(Labelled {
                artifact: artifact.clone(),
                circuit_name,
            })
        })
        .collect()
}

/// Print the circuit label for each artifact tag.
pub fn run(artifacts: &[String], format: OutputFormat) -> Result<()> {
    let labelled = resolve(artifacts)?;
    tracing::info!("resolved {} artifact(s)", labelled.len());

    match format {
        OutputFormat::Json => output::print_json(&labelled)?,
        OutputFormat::Text => {
            for entry in &labelled {
                output::print_key_value(&entry.artifact, entry.circuit_name.as_str());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_and_reset() {
        let tags = vec![
            "RootRollupArtifact".to_string(),
            "PrivateKernelResetTinyArtifact".to_string(),
        ];
        let labelled = resolve(&tags).unwrap();
        assert_eq!(labelled[0].circuit_name, CircuitName::RootRollup);
        assert_eq!(labelled[1].circuit_name, CircuitName::PrivateKernelReset);
    }

    #[test]
    fn test_resolve_stops_on_unknown() {
        let tags = vec!["RootRollupArtifact".to_string(), "Bogus".to_string()];
        let err = resolve(&tags).unwrap_err();
        assert!(err.to_string().contains("Bogus"));
        assert!(format!("{err:#}").contains("unknown circuit type: Bogus"));
    }

    #[test]
    fn test_json_shape() {
        let labelled = resolve(&["EmptyNestedArtifact".to_string()]).unwrap();
        let json = serde_json::to_value(&labelled).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "artifact": "EmptyNestedArtifact", "circuitName": "empty-nested" }])
        );
    }
}

//! Telemetry event records keyed by circuit label.
//!
//! Events serialize to the JSON shape the statistics pipeline ingests:
//!
//! ```json
//! {
//!   "eventName": "circuit-proving",
//!   "circuitName": "base-rollup",
//!   "duration": 1520.0,
//!   "inputSize": 4096,
//!   "proofSize": 14592,
//!   "circuitSize": 1048576,
//!   "numPublicInputs": 2
//! }
//! ```
//!
//! Durations are in milliseconds, sizes in bytes (gates for `circuitSize`).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::circuit_name::CircuitName;
use crate::error::Result;
use crate::mapping::circuit_name_for_artifact;

/// A single timing/size measurement for one circuit run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "eventName", rename_all = "kebab-case")]
pub enum CircuitEvent {
    /// Native simulation of a circuit (no witness, no proof).
    #[serde(rename_all = "camelCase")]
    CircuitSimulation {
        circuit_name: CircuitName,
        duration: f64,
        input_size: u64,
        output_size: u64,
    },

    /// Witness generation for a circuit.
    #[serde(rename_all = "camelCase")]
    CircuitWitnessGeneration {
        circuit_name: CircuitName,
        duration: f64,
        input_size: u64,
        output_size: u64,
    },

    /// Proof generation for a circuit.
    #[serde(rename_all = "camelCase")]
    CircuitProving {
        circuit_name: CircuitName,
        duration: f64,
        input_size: u64,
        proof_size: u64,
        circuit_size: u64,
        num_public_inputs: u32,
    },
}

impl CircuitEvent {
    /// Record a simulation run of `artifact`.
    ///
    /// Fails with [`crate::Error::UnknownArtifact`] rather than emitting an
    /// event under a made-up label.
    pub fn simulation(
        artifact: &str,
        duration: Duration,
        input_size: u64,
        output_size: u64,
    ) -> Result<Self> {
        let circuit_name = circuit_name_for_artifact(artifact)?;
        tracing::debug!(%circuit_name, artifact, "recording circuit simulation");
        Ok(Self::CircuitSimulation {
            circuit_name,
            duration: as_millis_f64(duration),
            input_size,
            output_size,
        })
    }

    /// Record a witness generation run of `artifact`.
    pub fn witness_generation(
        artifact: &str,
        duration: Duration,
        input_size: u64,
        output_size: u64,
    ) -> Result<Self> {
        let circuit_name = circuit_name_for_artifact(artifact)?;
        tracing::debug!(%circuit_name, artifact, "recording witness generation");
        Ok(Self::CircuitWitnessGeneration {
            circuit_name,
            duration: as_millis_f64(duration),
            input_size,
            output_size,
        })
    }

    /// Record a proving run of `artifact`.
    pub fn proving(
        artifact: &str,
        duration: Duration,
        input_size: u64,
        proof_size: u64,
        circuit_size: u64,
        num_public_inputs: u32,
    ) -> Result<Self> {
        let circuit_name = circuit_name_for_artifact(artifact)?;
        tracing::debug!(%circuit_name, artifact, proof_size, "recording circuit proving");
        Ok(Self::CircuitProving {
            circuit_name,
            duration: as_millis_f64(duration),
            input_size,
            proof_size,
            circuit_size,
            num_public_inputs,
        })
    }

    /// The `eventName` tag this record serializes with.
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::CircuitSimulation { .. } => "circuit-simulation",
            Self::CircuitWitnessGeneration { .. } => "circuit-witness-generation",
            Self::CircuitProving { .. } => "circuit-proving",
        }
    }

    pub fn circuit_name(&self) -> CircuitName {
        match self {
            Self::CircuitSimulation { circuit_name, .. }
            | Self::CircuitWitnessGeneration { circuit_name, .. }
            | Self::CircuitProving { circuit_name, .. } => *circuit_name,
        }
    }

    /// Duration in milliseconds.
    pub fn duration(&self) -> f64 {
        match self {
            Self::CircuitSimulation { duration, .. }
            | Self::CircuitWitnessGeneration { duration, .. }
            | Self::CircuitProving { duration, .. } => *duration,
        }
    }
}

fn as_millis_f64(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_proving_event_json_shape() {
        let event = CircuitEvent::proving(
            "BaseRollupArtifact",
            Duration::from_millis(1500),
            4096,
            14592,
            1 << 20,
            2,
        )
        .unwrap();

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "eventName": "circuit-proving",
                "circuitName": "base-rollup",
                "duration": 1500.0,
                "inputSize": 4096,
                "proofSize": 14592,
                "circuitSize": 1048576,
                "numPublicInputs": 2
            })
        );
    }

    #[test]
    fn test_simulation_event_json_shape() {
        let event = CircuitEvent::simulation(
            "PrivateKernelInitArtifact",
            Duration::from_millis(250),
            100,
            200,
        )
        .unwrap();
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["eventName"], "circuit-simulation");
        assert_eq!(json["circuitName"], "private-kernel-init");
        assert_eq!(json["duration"], 250.0);
        assert_eq!(json["outputSize"], 200);
    }

    #[test]
    fn test_event_name_matches_serde_tag() {
        let events = [
            CircuitEvent::simulation("RootParityArtifact", Duration::ZERO, 0, 0).unwrap(),
            CircuitEvent::witness_generation("RootParityArtifact", Duration::ZERO, 0, 0).unwrap(),
            CircuitEvent::proving("RootParityArtifact", Duration::ZERO, 0, 0, 0, 0).unwrap(),
        ];
        for event in events {
            let json = serde_json::to_value(&event).unwrap();
            assert_eq!(json["eventName"], event.event_name());
            assert_eq!(event.circuit_name(), CircuitName::RootParity);
        }
    }

    #[test]
    fn test_reset_variants_group_under_one_label() {
        let small = CircuitEvent::witness_generation(
            "PrivateKernelResetSmallArtifact",
            Duration::from_millis(10),
            1,
            1,
        )
        .unwrap();
        let custom = CircuitEvent::witness_generation(
            "PrivateKernelReset_2_2_2",
            Duration::from_millis(10),
            1,
            1,
        )
        .unwrap();
        assert_eq!(small.circuit_name(), custom.circuit_name());
        assert_eq!(small, custom);
    }

    #[test]
    fn test_unknown_artifact_aborts_event() {
        let err = CircuitEvent::proving("MysteryArtifact", Duration::ZERO, 0, 0, 0, 0).unwrap_err();
        assert_eq!(err, Error::UnknownArtifact("MysteryArtifact".into()));
    }

    #[test]
    fn test_deserialize_event() {
        let json = r#"{
            "eventName": "circuit-witness-generation",
            "circuitName": "merge-rollup",
            "duration": 12.5,
            "inputSize": 10,
            "outputSize": 20
        }"#;
        let event: CircuitEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.circuit_name(), CircuitName::MergeRollup);
        assert_eq!(event.duration(), 12.5);
        assert_eq!(event.event_name(), "circuit-witness-generation");
    }
}

//! Artifact tag to circuit label mapping.
//!
//! The mapping is pure and total over the known artifact universe plus the
//! `PrivateKernelReset*` family. It is deliberately not injective: every reset
//! size collapses onto a single label so telemetry groups them together.

use crate::artifact::{ProtocolArtifact, PRIVATE_KERNEL_RESET_PREFIX};
use crate::circuit_name::CircuitName;
use crate::error::{Error, Result};

/// Map a protocol artifact tag to the circuit label reported in telemetry.
///
/// Exact tags are resolved first. Anything else carrying the
/// `PrivateKernelReset` prefix maps to [`CircuitName::PrivateKernelReset`],
/// which covers reset sizes the table does not list yet.
///
/// Returns [`Error::UnknownArtifact`] with the raw tag otherwise. Callers must
/// not substitute a default label on error.
pub fn circuit_name_for_artifact(artifact: &str) -> Result<CircuitName> {
    match ProtocolArtifact::from_tag(artifact) {
        Some(known) => Ok(known.circuit_name()),
        None if artifact.starts_with(PRIVATE_KERNEL_RESET_PREFIX) => {
            Ok(CircuitName::PrivateKernelReset)
        }
        None => Err(Error::UnknownArtifact(artifact.to_string())),
    }
}

/// Every known artifact tag together with its label.
pub fn known_mappings() -> impl Iterator<Item = (&'static str, CircuitName)> {
    ProtocolArtifact::all().map(|a| (a.as_str(), a.circuit_name()))
}

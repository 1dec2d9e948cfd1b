//! Core library for the circuit-stats toolkit.
//!
//! Two independent pieces sit at the boundary between the proving subsystem and
//! its consumers:
//! - [`mapping::circuit_name_for_artifact`] turns a compiled protocol artifact tag
//!   into the stable [`circuit_name::CircuitName`] label used by telemetry.
//! - [`signature::Signature`] is the encoding contract every signature variant
//!   implements: a byte buffer for transport/storage and a field-element sequence
//!   for in-circuit verification.
//!
//! Supporting modules provide the BN254 scalar field element ([`fields::Fr`]),
//! one concrete signature variant ([`schnorr::SchnorrSignature`]), and the
//! telemetry event records built on top of the mapper ([`stats::CircuitEvent`]).

pub mod artifact;
pub mod circuit_name;
pub mod error;
pub mod fields;
pub mod mapping;
pub mod schnorr;
pub mod signature;
pub mod stats;

pub use circuit_name::CircuitName;
pub use error::{Error, Result};
pub use fields::Fr;
pub use signature::Signature;

//! Unified error types for circuit-stats.

use thiserror::Error;

/// All errors that can occur in circuit-stats operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // --- Artifacts ---

    /// The artifact tag is neither in the known table nor part of the reset family.
    #[error("unknown circuit type: {0}")]
    UnknownArtifact(String),

    /// The label is not one of the canonical circuit names.
    #[error("unknown circuit name: {0}")]
    UnknownCircuitName(String),

    // --- Field elements ---

    /// The input could not be parsed as a field element (bad digits, too wide).
    #[error("invalid field element: {0}")]
    InvalidFieldElement(String),

    /// The value parsed but is not below the BN254 scalar field modulus.
    #[error("field element is not canonical (value >= modulus)")]
    NonCanonicalField,

    // --- Signatures ---

    /// A signature buffer had the wrong number of bytes.
    #[error("invalid signature length: expected {expected} bytes, got {actual}")]
    InvalidSignatureLength { expected: usize, actual: usize },

    /// A signature field encoding had the wrong number of elements.
    #[error("invalid signature field count: expected {expected}, got {actual}")]
    InvalidFieldCount { expected: usize, actual: usize },

    /// A signature scalar is not below the Grumpkin scalar field modulus.
    #[error("signature scalar is not canonical (value >= grumpkin modulus)")]
    NonCanonicalScalar,

    /// A limb in a split-scalar field encoding does not fit in 128 bits.
    #[error("field limb exceeds 128 bits")]
    LimbOutOfRange,

    // --- General ---

    /// Hex decoding failed.
    #[error(transparent)]
    Hex(#[from] hex::FromHexError),
}

/// Alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

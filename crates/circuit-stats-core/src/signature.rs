//! Encoding contract shared by every signature variant.

use crate::fields::Fr;

/// A signature value with a transport encoding and an in-circuit encoding.
///
/// Implementations must be immutable once built and both methods must be pure
/// functions of the value: no randomness, no addresses, no cached state. The
/// two views are independent; each variant keeps them consistent itself.
pub trait Signature {
    /// Canonical byte encoding for the wire and for storage.
    ///
    /// The layout belongs to the variant, but must be stable and accepted by
    /// that variant's own decoder.
    fn to_buffer(&self) -> Vec<u8>;

    /// Field elements in the exact order the verifying circuit reads them.
    ///
    /// Reordering changes what the circuit verifies and is a breaking change.
    fn to_fields(&self) -> Vec<Fr>;
}

//! BN254 scalar field elements.
//!
//! Circuits consuming [`crate::signature::Signature::to_fields`] work over the
//! BN254 scalar field. Elements are kept as 32-byte big-endian arrays, always
//! reduced, which is also the layout Barretenberg uses for public inputs.

use std::fmt;

use num_bigint::BigUint;
use num_traits::{Num, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// BN254 scalar field modulus `r`, big-endian.
pub const MODULUS: [u8; 32] = [
    0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58, 0x5d,
    0x28, 0x33, 0xe8, 0x48, 0x79, 0xb9, 0x70, 0x91, 0x43, 0xe1, 0xf5, 0x93, 0xf0, 0x00, 0x00, 0x01,
];

/// An element of the BN254 scalar field.
///
/// The inner bytes are big-endian and strictly below [`MODULUS`]; every
/// constructor enforces this, so byte equality is field equality.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Fr([u8; 32]);

impl Fr {
    pub const SIZE_IN_BYTES: usize = 32;

    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    pub fn one() -> Self {
        Self::from_u64(1)
    }

    pub fn from_u64(value: u64) -> Self {
        let mut out = [0u8; 32];
        out[24..].copy_from_slice(&value.to_be_bytes());
        Self(out)
    }

    pub fn from_u128(value: u128) -> Self {
        let mut out = [0u8; 32];
        out[16..].copy_from_slice(&value.to_be_bytes());
        Self(out)
    }

    /// Build from 32 big-endian bytes, rejecting values `>= r`.
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Result<Self> {
        if bytes.as_slice() >= MODULUS.as_slice() {
            return Err(Error::NonCanonicalField);
        }
        Ok(Self(*bytes))
    }

    /// Interpret any number of big-endian bytes and reduce modulo `r`.
    pub fn from_be_bytes_reduced(bytes: &[u8]) -> Self {
        let reduced = BigUint::from_bytes_be(bytes) % modulus();
        Self(biguint_to_be32(&reduced))
    }

    /// Parse a decimal string (snarkjs and nargo both print field elements this way).
    ///
    /// Only plain ASCII digits are accepted; signs and `_` separators are rejected.
    pub fn from_decimal(s: &str) -> Result<Self> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidFieldElement(format!("invalid decimal: {s:?}")));
        }
        let n = BigUint::from_str_radix(s, 10)
            .map_err(|e| Error::InvalidFieldElement(format!("invalid decimal: {s}: {e}")))?;
        Self::from_biguint(&n)
    }

    /// Parse a hex string, with or without a `0x`/`0X` prefix. Short inputs are left-padded.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = strip_hex_prefix(s);
        if digits.is_empty() {
            return Err(Error::InvalidFieldElement(format!("empty hex string: {s:?}")));
        }
        if let Some(pos) = digits.find(|c: char| !c.is_ascii_hexdigit()) {
            return Err(Error::InvalidFieldElement(format!(
                "invalid hex digit at index {pos}: {s:?}"
            )));
        }
        if digits.len() > 64 {
            return Err(Error::InvalidFieldElement(format!(
                "value too large for 32 bytes: {s}"
            )));
        }
        let padded = format!("{digits:0>64}");
        let mut out = [0u8; 32];
        hex::decode_to_slice(&padded, &mut out)?;
        Self::from_be_bytes(&out)
    }

    /// Build from an arbitrary-precision integer, rejecting values `>= r`.
    pub fn from_biguint(n: &BigUint) -> Result<Self> {
        if n.bits() > 256 {
            return Err(Error::InvalidFieldElement(format!(
                "value too large for 32 bytes: {n}"
            )));
        }
        Self::from_be_bytes(&biguint_to_be32(n))
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.0
    }

    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.0)
    }

    /// The value as a `u128`, if it fits.
    pub fn to_u128(&self) -> Option<u128> {
        if self.0[..16].iter().any(|&b| b != 0) {
            return None;
        }
        let mut low = [0u8; 16];
        low.copy_from_slice(&self.0[16..]);
        Some(u128::from_be_bytes(low))
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }
}

/// Drop a leading `0x` or `0X`.
pub(crate) fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

fn modulus() -> BigUint {
    BigUint::from_bytes_be(&MODULUS)
}

/// Left-pad a value known to fit in 256 bits into a 32-byte big-endian array.
fn biguint_to_be32(n: &BigUint) -> [u8; 32] {
    let mut out = [0u8; 32];
    if n.is_zero() {
        return out;
    }
    let be = n.to_bytes_be();
    let offset = 32 - be.len();
    out[offset..].copy_from_slice(&be);
    out
}

impl From<u64> for Fr {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl fmt::Display for Fr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Fr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fr({self})")
    }
}

impl Serialize for Fr {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Fr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Fr::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const R_DEC: &str =
        "21888242871839275222246405745257275088548364400416034343698204186575808495617";
    const R_MINUS_ONE_DEC: &str =
        "21888242871839275222246405745257275088548364400416034343698204186575808495616";

    #[test]
    fn test_from_u64_layout() {
        let fr = Fr::from_u64(0x0102);
        let bytes = fr.to_be_bytes();
        assert_eq!(bytes[30], 0x01);
        assert_eq!(bytes[31], 0x02);
        assert!(bytes[..30].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_modulus_is_rejected() {
        assert_eq!(Fr::from_be_bytes(&MODULUS), Err(Error::NonCanonicalField));
        assert_eq!(Fr::from_be_bytes(&[0xff; 32]), Err(Error::NonCanonicalField));
    }

    #[test]
    fn test_modulus_minus_one_is_accepted() {
        let mut bytes = MODULUS;
        bytes[31] -= 1;
        let fr = Fr::from_be_bytes(&bytes).unwrap();
        assert_eq!(fr, Fr::from_decimal(R_MINUS_ONE_DEC).unwrap());
    }

    #[test]
    fn test_reduction() {
        assert_eq!(Fr::from_be_bytes_reduced(&MODULUS), Fr::zero());

        let mut r_plus_one = MODULUS;
        r_plus_one[31] += 1;
        assert_eq!(Fr::from_be_bytes_reduced(&r_plus_one), Fr::one());

        assert_eq!(Fr::from_be_bytes_reduced(&[]), Fr::zero());
        assert_eq!(Fr::from_be_bytes_reduced(&[0x2a]), Fr::from_u64(42));
    }

    #[test]
    fn test_from_decimal() {
        assert_eq!(Fr::from_decimal("0").unwrap(), Fr::zero());
        assert_eq!(Fr::from_decimal("256").unwrap(), Fr::from_u64(256));
        assert_eq!(Fr::from_decimal(R_DEC), Err(Error::NonCanonicalField));
        assert!(matches!(
            Fr::from_decimal("not_a_number"),
            Err(Error::InvalidFieldElement(_))
        ));
        assert!(Fr::from_decimal("").is_err());
        assert!(Fr::from_decimal("-1").is_err());
        assert!(matches!(
            Fr::from_decimal("1_000"),
            Err(Error::InvalidFieldElement(_))
        ));
        assert!(matches!(
            Fr::from_decimal("+5"),
            Err(Error::InvalidFieldElement(_))
        ));
        assert!(Fr::from_decimal(" 5").is_err());
    }

    #[test]
    fn test_from_decimal_wider_than_256_bits() {
        // 2^256
        let too_large =
            "115792089237316195423570985008687907853269984665640564039457584007913129639936";
        assert!(matches!(
            Fr::from_decimal(too_large),
            Err(Error::InvalidFieldElement(msg)) if msg.contains("too large")
        ));
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Fr::from_hex("0x2a").unwrap(), Fr::from_u64(42));
        assert_eq!(Fr::from_hex("2a").unwrap(), Fr::from_u64(42));
        assert_eq!(Fr::from_hex("0x123").unwrap(), Fr::from_u64(0x123));
        assert!(Fr::from_hex("0x").is_err());
        assert!(Fr::from_hex("0xzz").is_err());
        assert_eq!(Fr::from_hex("0X2a").unwrap(), Fr::from_u64(42));
        assert_eq!(Fr::from_hex("0X2A").unwrap(), Fr::from_u64(42));
        assert!(Fr::from_hex(&"1".repeat(65)).is_err());
        assert_eq!(
            Fr::from_hex(&hex::encode(MODULUS)),
            Err(Error::NonCanonicalField)
        );
    }

    #[test]
    fn test_from_hex_reports_index_in_caller_input() {
        let err = Fr::from_hex("0x12g4").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidFieldElement("invalid hex digit at index 2: \"0x12g4\"".into())
        );
    }

    #[test]
    fn test_display_is_padded_hex() {
        let s = Fr::one().to_string();
        assert_eq!(s.len(), 66);
        assert!(s.starts_with("0x"));
        assert!(s.ends_with("01"));
        assert_eq!(Fr::from_hex(&s).unwrap(), Fr::one());
    }

    #[test]
    fn test_serde_as_hex_string() {
        let fr = Fr::from_u64(1771);
        let json = serde_json::to_string(&fr).unwrap();
        assert_eq!(json, format!("\"{fr}\""));
        let back: Fr = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fr);

        let bad = format!("\"0x{}\"", hex::encode(MODULUS));
        assert!(serde_json::from_str::<Fr>(&bad).is_err());
    }

    #[test]
    fn test_to_u128() {
        assert_eq!(Fr::from_u128(u128::MAX).to_u128(), Some(u128::MAX));
        assert_eq!(Fr::zero().to_u128(), Some(0));
        let wide = Fr::from_be_bytes_reduced(&[1u8; 17]);
        assert_eq!(wide.to_u128(), None);
    }

    #[test]
    fn test_ordering_is_numeric() {
        assert!(Fr::from_u64(255) < Fr::from_u64(256));
        assert!(Fr::from_u128(u128::MAX) > Fr::from_u64(u64::MAX));
    }

    #[test]
    fn test_to_biguint() {
        assert_eq!(Fr::from_u64(7).to_biguint(), BigUint::from(7u32));
        assert!(Fr::zero().is_zero());
    }
}

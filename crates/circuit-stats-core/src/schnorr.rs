//! Schnorr signatures over Grumpkin.
//!
//! Wire format: `s(32 BE) | e(32 BE)` = 64 bytes.
//!
//! Both scalars live in the Grumpkin scalar field, which is the BN254 *base*
//! field and therefore larger than the BN254 scalar field the circuit works
//! over. A scalar can't be carried in one [`Fr`], so each is split into a low
//! and a high 128-bit limb:
//!
//! ```text
//! to_fields() = [s_lo, s_hi, e_lo, e_hi]
//! ```
//!
//! Both layouts belong to this variant; [`SchnorrSignature::from_buffer`] and
//! [`SchnorrSignature::from_fields`] are their decoders.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::fields::{strip_hex_prefix, Fr};
use crate::signature::Signature;

/// Grumpkin scalar field modulus (equal to the BN254 base field modulus), big-endian.
pub const GRUMPKIN_SCALAR_MODULUS: [u8; 32] = [
    0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58, 0x5d,
    0x97, 0x81, 0x6a, 0x91, 0x68, 0x71, 0xca, 0x8d, 0x3c, 0x20, 0x8c, 0x16, 0xd8, 0x7c, 0xfd, 0x47,
];

/// A Schnorr signature `(s, e)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SchnorrSignature {
    s: [u8; 32],
    e: [u8; 32],
}

impl SchnorrSignature {
    pub const SIZE_IN_BYTES: usize = 64;
    pub const NUM_FIELDS: usize = 4;

    /// Build from the two scalars, rejecting non-canonical values.
    pub fn new(s: [u8; 32], e: [u8; 32]) -> Result<Self> {
        check_scalar(&s)?;
        check_scalar(&e)?;
        Ok(Self { s, e })
    }

    /// Decode the 64-byte wire format.
    pub fn from_buffer(buf: &[u8]) -> Result<Self> {
        if buf.len() != Self::SIZE_IN_BYTES {
            return Err(Error::InvalidSignatureLength {
                expected: Self::SIZE_IN_BYTES,
                actual: buf.len(),
            });
        }
        let mut s = [0u8; 32];
        let mut e = [0u8; 32];
        s.copy_from_slice(&buf[..32]);
        e.copy_from_slice(&buf[32..]);
        Self::new(s, e)
    }

    /// Decode a hex-encoded wire format, with or without `0x`/`0X`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = strip_hex_prefix(s);
        let bytes = hex::decode(digits)?;
        Self::from_buffer(&bytes)
    }

    /// Rebuild from the limb encoding produced by [`Signature::to_fields`].
    pub fn from_fields(fields: &[Fr]) -> Result<Self> {
        if fields.len() != Self::NUM_FIELDS {
            return Err(Error::InvalidFieldCount {
                expected: Self::NUM_FIELDS,
                actual: fields.len(),
            });
        }
        let s = join_limbs(&fields[0], &fields[1])?;
        let e = join_limbs(&fields[2], &fields[3])?;
        Self::new(s, e)
    }

    pub fn s(&self) -> &[u8; 32] {
        &self.s
    }

    pub fn e(&self) -> &[u8; 32] {
        &self.e
    }
}

fn check_scalar(scalar: &[u8; 32]) -> Result<()> {
    if scalar.as_slice() >= GRUMPKIN_SCALAR_MODULUS.as_slice() {
        return Err(Error::NonCanonicalScalar);
    }
    Ok(())
}

/// `[lo, hi]` with each limb holding 16 bytes of the big-endian scalar.
fn split_limbs(scalar: &[u8; 32]) -> [Fr; 2] {
    let mut hi = [0u8; 16];
    let mut lo = [0u8; 16];
    hi.copy_from_slice(&scalar[..16]);
    lo.copy_from_slice(&scalar[16..]);
    [
        Fr::from_u128(u128::from_be_bytes(lo)),
        Fr::from_u128(u128::from_be_bytes(hi)),
    ]
}

fn join_limbs(lo: &Fr, hi: &Fr) -> Result<[u8; 32]> {
    let lo = lo.to_u128().ok_or(Error::LimbOutOfRange)?;
    let hi = hi.to_u128().ok_or(Error::LimbOutOfRange)?;
    let mut out = [0u8; 32];
    out[..16].copy_from_slice(&hi.to_be_bytes());
    out[16..].copy_from_slice(&lo.to_be_bytes());
    Ok(out)
}

impl Signature for SchnorrSignature {
    fn to_buffer(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::SIZE_IN_BYTES);
        out.extend_from_slice(&self.s);
        out.extend_from_slice(&self.e);
        debug_assert_eq!(out.len(), Self::SIZE_IN_BYTES);
        out
    }

    fn to_fields(&self) -> Vec<Fr> {
        let [s_lo, s_hi] = split_limbs(&self.s);
        let [e_lo, e_hi] = split_limbs(&self.e);
        vec![s_lo, s_hi, e_lo, e_hi]
    }
}

impl fmt::Display for SchnorrSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}{}", hex::encode(self.s), hex::encode(self.e))
    }
}

impl fmt::Debug for SchnorrSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchnorrSignature")
            .field("s", &hex::encode(self.s))
            .field("e", &hex::encode(self.e))
            .finish()
    }
}

impl Serialize for SchnorrSignature {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SchnorrSignature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        SchnorrSignature::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

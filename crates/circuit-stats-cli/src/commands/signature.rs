use anyhow::{Context, Result};
use serde::Serialize;

use circuit_stats_core::schnorr::SchnorrSignature;
use circuit_stats_core::{Fr, Signature};

use crate::output;
use crate::OutputFormat;

#[derive(Debug, Serialize)]
pub struct Encodings {
    pub buffer: String,
    pub fields: Vec<Fr>,
}

/// Decode a hex signature and collect both of its encodings.
pub fn encodings(hex_sig: &str) -> Result<Encodings> {
    let sig = SchnorrSignature::from_hex(hex_sig.trim()).context("invalid Schnorr signature")?;
    Ok(Encodings {
        buffer: format!("0x{}", hex::encode(sig.to_buffer())),
        fields: sig.to_fields(),
    })
}

/// Print the buffer and field encodings of a Schnorr signature.
pub fn run(hex_sig: &str, format: OutputFormat) -> Result<()> {
    let encodings = encodings(hex_sig)?;

    match format {
        OutputFormat::Json => output::print_json(&encodings)?,
        OutputFormat::Text => {
            output::print_header("circuit-stats signature");
            output::print_key_value("Buffer", &encodings.buffer);
            for (label, field) in ["s_lo", "s_hi", "e_lo", "e_hi"]
                .iter()
                .zip(&encodings.fields)
            {
                output::print_key_value(label, &field.to_string());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encodings() {
        let hex_sig = format!("0x{}{}", "00".repeat(31) + "05", "00".repeat(31) + "07");
        let enc = encodings(&hex_sig).unwrap();
        assert_eq!(enc.buffer, hex_sig);
        assert_eq!(
            enc.fields,
            vec![Fr::from_u64(5), Fr::zero(), Fr::from_u64(7), Fr::zero()]
        );
    }

    #[test]
    fn test_short_signature_rejected() {
        let err = encodings("0xdeadbeef").unwrap_err();
        assert!(format!("{err:#}").contains("expected 64 bytes, got 4"));
    }
}

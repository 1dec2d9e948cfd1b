//! Canonical circuit labels reported to the statistics pipeline.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Stable, hyphenated lowercase label for a family of compiled circuits.
///
/// Several artifacts may share one label (every private kernel reset variant
/// reports as [`CircuitName::PrivateKernelReset`]), so this is not a
/// one-to-one view of the artifact universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CircuitName {
    BaseParity,
    RootParity,
    BaseRollup,
    MergeRollup,
    BlockRootRollup,
    EmptyBlockRootRollup,
    BlockMergeRollup,
    RootRollup,
    PublicKernelInner,
    PublicKernelMerge,
    PublicKernelTail,
    PrivateKernelInit,
    PrivateKernelInner,
    PrivateKernelTail,
    PrivateKernelTailToPublic,
    EmptyNested,
    PrivateKernelEmpty,
    PrivateKernelReset,
}

impl CircuitName {
    /// Every label, in declaration order.
    pub const ALL: [CircuitName; 18] = [
        Self::BaseParity,
        Self::RootParity,
        Self::BaseRollup,
        Self::MergeRollup,
        Self::BlockRootRollup,
        Self::EmptyBlockRootRollup,
        Self::BlockMergeRollup,
        Self::RootRollup,
        Self::PublicKernelInner,
        Self::PublicKernelMerge,
        Self::PublicKernelTail,
        Self::PrivateKernelInit,
        Self::PrivateKernelInner,
        Self::PrivateKernelTail,
        Self::PrivateKernelTailToPublic,
        Self::EmptyNested,
        Self::PrivateKernelEmpty,
        Self::PrivateKernelReset,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BaseParity => "base-parity",
            Self::RootParity => "root-parity",
            Self::BaseRollup => "base-rollup",
            Self::MergeRollup => "merge-rollup",
            Self::BlockRootRollup => "block-root-rollup",
            Self::EmptyBlockRootRollup => "empty-block-root-rollup",
            Self::BlockMergeRollup => "block-merge-rollup",
            Self::RootRollup => "root-rollup",
            Self::PublicKernelInner => "public-kernel-inner",
            Self::PublicKernelMerge => "public-kernel-merge",
            Self::PublicKernelTail => "public-kernel-tail",
            Self::PrivateKernelInit => "private-kernel-init",
            Self::PrivateKernelInner => "private-kernel-inner",
            Self::PrivateKernelTail => "private-kernel-tail",
            Self::PrivateKernelTailToPublic => "private-kernel-tail-to-public",
            Self::EmptyNested => "empty-nested",
            Self::PrivateKernelEmpty => "private-kernel-empty",
            Self::PrivateKernelReset => "private-kernel-reset",
        }
    }
}

impl fmt::Display for CircuitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CircuitName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| Error::UnknownCircuitName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_lowercase_hyphenated() {
        for name in CircuitName::ALL {
            let label = name.as_str();
            assert!(!label.is_empty());
            assert!(
                label.chars().all(|c| c.is_ascii_lowercase() || c == '-'),
                "bad label: {label}"
            );
            assert!(!label.starts_with('-') && !label.ends_with('-'));
        }
    }

    #[test]
    fn test_labels_are_distinct() {
        let mut labels: Vec<&str> = CircuitName::ALL.iter().map(|n| n.as_str()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), CircuitName::ALL.len());
    }

    #[test]
    fn test_serde_matches_display() {
        for name in CircuitName::ALL {
            let json = serde_json::to_string(&name).unwrap();
            assert_eq!(json, format!("\"{name}\""));
            let back: CircuitName = serde_json::from_str(&json).unwrap();
            assert_eq!(back, name);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "private-kernel-tail-to-public".parse::<CircuitName>().unwrap(),
            CircuitName::PrivateKernelTailToPublic
        );
        assert_eq!(
            "empty-block-root-rollup".parse::<CircuitName>().unwrap(),
            CircuitName::EmptyBlockRootRollup
        );
        assert!("Base-Parity".parse::<CircuitName>().is_err());
        assert!("".parse::<CircuitName>().is_err());
    }
}

//! The closed universe of compiled protocol artifacts.
//!
//! Artifacts are split between the client side (private kernels, proven in the
//! user's wallet) and the server side (rollup, parity and public kernel circuits,
//! proven by the network). Tags are the literal identifiers handed over by the
//! circuit-compilation step.

use std::fmt;
use std::str::FromStr;

use crate::circuit_name::CircuitName;
use crate::error::Error;

/// Tag prefix shared by every private kernel reset variant.
///
/// Reset circuits are compiled in several sizes; all of them report under
/// [`CircuitName::PrivateKernelReset`].
pub const PRIVATE_KERNEL_RESET_PREFIX: &str = "PrivateKernelReset";

/// Artifacts proven on the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientProtocolArtifact {
    PrivateKernelInit,
    PrivateKernelInner,
    PrivateKernelTail,
    PrivateKernelTailToPublic,
    PrivateKernelReset,
    PrivateKernelResetBig,
    PrivateKernelResetMedium,
    PrivateKernelResetSmall,
    PrivateKernelResetTiny,
}

impl ClientProtocolArtifact {
    pub const ALL: [ClientProtocolArtifact; 9] = [
        Self::PrivateKernelInit,
        Self::PrivateKernelInner,
        Self::PrivateKernelTail,
        Self::PrivateKernelTailToPublic,
        Self::PrivateKernelReset,
        Self::PrivateKernelResetBig,
        Self::PrivateKernelResetMedium,
        Self::PrivateKernelResetSmall,
        Self::PrivateKernelResetTiny,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PrivateKernelInit => "PrivateKernelInitArtifact",
            Self::PrivateKernelInner => "PrivateKernelInnerArtifact",
            Self::PrivateKernelTail => "PrivateKernelTailArtifact",
            Self::PrivateKernelTailToPublic => "PrivateKernelTailToPublicArtifact",
            Self::PrivateKernelReset => "PrivateKernelResetArtifact",
            Self::PrivateKernelResetBig => "PrivateKernelResetBigArtifact",
            Self::PrivateKernelResetMedium => "PrivateKernelResetMediumArtifact",
            Self::PrivateKernelResetSmall => "PrivateKernelResetSmallArtifact",
            Self::PrivateKernelResetTiny => "PrivateKernelResetTinyArtifact",
        }
    }

    pub fn circuit_name(&self) -> CircuitName {
        match self {
            Self::PrivateKernelInit => CircuitName::PrivateKernelInit,
            Self::PrivateKernelInner => CircuitName::PrivateKernelInner,
            Self::PrivateKernelTail => CircuitName::PrivateKernelTail,
            Self::PrivateKernelTailToPublic => CircuitName::PrivateKernelTailToPublic,
            Self::PrivateKernelReset
            | Self::PrivateKernelResetBig
            | Self::PrivateKernelResetMedium
            | Self::PrivateKernelResetSmall
            | Self::PrivateKernelResetTiny => CircuitName::PrivateKernelReset,
        }
    }

    /// Whether this artifact is one of the sized reset variants.
    pub fn is_reset(&self) -> bool {
        self.as_str().starts_with(PRIVATE_KERNEL_RESET_PREFIX)
    }
}

/// Artifacts proven by the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServerProtocolArtifact {
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
    EmptyNested,
    PrivateKernelEmpty,
}

impl ServerProtocolArtifact {
    pub const ALL: [ServerProtocolArtifact; 13] = [
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
        Self::EmptyNested,
        Self::PrivateKernelEmpty,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BaseParity => "BaseParityArtifact",
            Self::RootParity => "RootParityArtifact",
            Self::BaseRollup => "BaseRollupArtifact",
            Self::MergeRollup => "MergeRollupArtifact",
            Self::BlockRootRollup => "BlockRootRollupArtifact",
            Self::EmptyBlockRootRollup => "EmptyBlockRootRollupArtifact",
            Self::BlockMergeRollup => "BlockMergeRollupArtifact",
            Self::RootRollup => "RootRollupArtifact",
            Self::PublicKernelInner => "PublicKernelInnerArtifact",
            Self::PublicKernelMerge => "PublicKernelMergeArtifact",
            Self::PublicKernelTail => "PublicKernelTailArtifact",
            Self::EmptyNested => "EmptyNestedArtifact",
            Self::PrivateKernelEmpty => "PrivateKernelEmptyArtifact",
        }
    }

    pub fn circuit_name(&self) -> CircuitName {
        match self {
            Self::BaseParity => CircuitName::BaseParity,
            Self::RootParity => CircuitName::RootParity,
            Self::BaseRollup => CircuitName::BaseRollup,
            Self::MergeRollup => CircuitName::MergeRollup,
            Self::BlockRootRollup => CircuitName::BlockRootRollup,
            Self::EmptyBlockRootRollup => CircuitName::EmptyBlockRootRollup,
            Self::BlockMergeRollup => CircuitName::BlockMergeRollup,
            Self::RootRollup => CircuitName::RootRollup,
            Self::PublicKernelInner => CircuitName::PublicKernelInner,
            Self::PublicKernelMerge => CircuitName::PublicKernelMerge,
            Self::PublicKernelTail => CircuitName::PublicKernelTail,
            Self::EmptyNested => CircuitName::EmptyNested,
            Self::PrivateKernelEmpty => CircuitName::PrivateKernelEmpty,
        }
    }
}

/// Any artifact from either universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtocolArtifact {
    Client(ClientProtocolArtifact),
    Server(ServerProtocolArtifact),
}

impl ProtocolArtifact {
    /// Every known artifact: client side first, then server side.
    pub fn all() -> impl Iterator<Item = ProtocolArtifact> {
        ClientProtocolArtifact::ALL
            .into_iter()
            .map(Self::Client)
            .chain(ServerProtocolArtifact::ALL.into_iter().map(Self::Server))
    }

    /// Resolve a tag against the known universe. Exact matches only.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let artifact = match tag {
            "PrivateKernelInitArtifact" => Self::Client(ClientProtocolArtifact::PrivateKernelInit),
            "PrivateKernelInnerArtifact" => {
                Self::Client(ClientProtocolArtifact::PrivateKernelInner)
            }
            "PrivateKernelTailArtifact" => Self::Client(ClientProtocolArtifact::PrivateKernelTail),
            "PrivateKernelTailToPublicArtifact" => {
                Self::Client(ClientProtocolArtifact::PrivateKernelTailToPublic)
            }
            "PrivateKernelResetArtifact" => {
                Self::Client(ClientProtocolArtifact::PrivateKernelReset)
            }
            "PrivateKernelResetBigArtifact" => {
                Self::Client(ClientProtocolArtifact::PrivateKernelResetBig)
            }
            "PrivateKernelResetMediumArtifact" => {
                Self::Client(ClientProtocolArtifact::PrivateKernelResetMedium)
            }
            "PrivateKernelResetSmallArtifact" => {
                Self::Client(ClientProtocolArtifact::PrivateKernelResetSmall)
            }
            "PrivateKernelResetTinyArtifact" => {
                Self::Client(ClientProtocolArtifact::PrivateKernelResetTiny)
            }
            "BaseParityArtifact" => Self::Server(ServerProtocolArtifact::BaseParity),
            "RootParityArtifact" => Self::Server(ServerProtocolArtifact::RootParity),
            "BaseRollupArtifact" => Self::Server(ServerProtocolArtifact::BaseRollup),
            "MergeRollupArtifact" => Self::Server(ServerProtocolArtifact::MergeRollup),
            "BlockRootRollupArtifact" => Self::Server(ServerProtocolArtifact::BlockRootRollup),
            "EmptyBlockRootRollupArtifact" => {
                Self::Server(ServerProtocolArtifact::EmptyBlockRootRollup)
            }
            "BlockMergeRollupArtifact" => Self::Server(ServerProtocolArtifact::BlockMergeRollup),
            "RootRollupArtifact" => Self::Server(ServerProtocolArtifact::RootRollup),
            "PublicKernelInnerArtifact" => Self::Server(ServerProtocolArtifact::PublicKernelInner),
            "PublicKernelMergeArtifact" => Self::Server(ServerProtocolArtifact::PublicKernelMerge),
            "PublicKernelTailArtifact" => Self::Server(ServerProtocolArtifact::PublicKernelTail),
            "EmptyNestedArtifact" => Self::Server(ServerProtocolArtifact::EmptyNested),
            "PrivateKernelEmptyArtifact" => {
                Self::Server(ServerProtocolArtifact::PrivateKernelEmpty)
            }
            _ => return None,
        };
        Some(artifact)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client(a) => a.as_str(),
            Self::Server(a) => a.as_str(),
        }
    }

    /// The telemetry label for this artifact. Total over the known universe.
    pub fn circuit_name(&self) -> CircuitName {
        match self {
            Self::Client(a) => a.circuit_name(),
            Self::Server(a) => a.circuit_name(),
        }
    }

    pub fn is_client(&self) -> bool {
        matches!(self, Self::Client(_))
    }
}

impl From<ClientProtocolArtifact> for ProtocolArtifact {
    fn from(artifact: ClientProtocolArtifact) -> Self {
        Self::Client(artifact)
    }
}

impl From<ServerProtocolArtifact> for ProtocolArtifact {
    fn from(artifact: ServerProtocolArtifact) -> Self {
        Self::Server(artifact)
    }
}

impl fmt::Display for ProtocolArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProtocolArtifact {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| Error::UnknownArtifact(s.to_string()))
    }
}

//! Core data structures for cluster snapshots and diagnostics output

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Cluster-unique node identifier
pub type NodeId = u32;

/// One (key, value) attribute describing a node's topological position.
///
/// A node's locality is an ordered list of tiers, e.g. region then zone.
/// Tier order is significant and is preserved everywhere.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct LocalityTier {
    pub key: String,
    pub value: String,
}

/// Raw per-node status record as reported by the liveness subsystem.
///
/// The latency map is keyed by peer node id and never contains a
/// self entry.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RawNodeStatus {
    #[serde(rename = "nodeId")]
    pub node_id: NodeId,

    #[serde(default)]
    pub address: String,

    /// Ordered locality tiers, outermost first
    #[serde(default)]
    pub locality: Vec<LocalityTier>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,

    /// Measured round-trip latency to each known peer
    #[serde(default)]
    pub latencies: HashMap<NodeId, Duration>,
}

/// Externally reported health classification of a node at snapshot time
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum LivenessStatus {
    /// Node is up and participating
    Live,

    /// Node has recently missed heartbeats but is not yet considered dead
    Suspect,

    /// Node is confirmed down
    Dead,

    /// Node is being removed from the cluster
    Decommissioning,

    /// Node has been removed from the cluster
    Decommissioned,

    /// Liveness could not be determined
    #[default]
    Unknown,
}

/// Normalized node identity derived from a [`RawNodeStatus`].
///
/// `locality` is the canonical serialization of the node's tiers,
/// joined as `"k1=v1,k2=v2"` in original tier order.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Identity {
    pub node_id: NodeId,
    pub address: String,
    pub locality: String,
    pub last_updated: DateTime<Utc>,
}

/// A one-directional apparent connectivity gap: `from` reports a
/// latency toward `to`, but `to` is not part of the healthy set.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NoConnection {
    pub from: Identity,
    pub to: Identity,
}

/// Band boundaries derived from the latency distribution
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct DeviationThresholds {
    pub plus1: f64,
    pub plus2: f64,
    pub minus1: f64,
    pub minus2: f64,
}

/// Statistical summary of pairwise latencies among healthy nodes.
///
/// `stddev_ms` is the sample standard deviation (n−1 denominator).
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct LatencyStats {
    pub mean_ms: f64,
    pub stddev_ms: f64,
    pub thresholds: DeviationThresholds,
}

/// Classification of one (a, b) node pair relative to the latency
/// distribution, or a special state when no value applies.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash)]
pub enum LatencyBand {
    /// a == b; no numeric value
    SelfPair,
    /// Either endpoint is stale, or a has no latency entry for b
    NoConnection,
    /// Within one standard deviation of the mean
    Even,
    /// Above mean + 1σ
    Plus1,
    /// Above mean + 2σ
    Plus2,
    /// Below mean − 1σ
    Minus1,
    /// Below mean − 2σ
    Minus2,
}

impl LatencyBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            LatencyBand::SelfPair => "self",
            LatencyBand::NoConnection => "no-connection",
            LatencyBand::Even => "even",
            LatencyBand::Plus1 => "plus-1",
            LatencyBand::Plus2 => "plus-2",
            LatencyBand::Minus1 => "minus-1",
            LatencyBand::Minus2 => "minus-2",
        }
    }
}

impl std::fmt::Display for LatencyBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The immutable input bundle for a single diagnostics computation
#[derive(Clone, Debug, Deserialize, Serialize, Default)]
pub struct ClusterSnapshot {
    #[serde(default)]
    pub statuses: Vec<RawNodeStatus>,

    /// Liveness classification per node id
    #[serde(default)]
    pub liveness: HashMap<NodeId, LivenessStatus>,
}

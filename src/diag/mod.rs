//! Cluster network diagnostics engine
//!
//! A pure computation over a point-in-time snapshot of inter-node
//! latency and liveness data: identity resolution, filtering, node
//! partitioning, latency statistics, per-pair deviation bands,
//! missing-connection detection and deterministic ordering.

pub mod classify;
pub mod connections;
pub mod engine;
pub mod filter;
pub mod identity;
pub mod order;
pub mod stats;
pub mod types;

pub use classify::{classify_pair, partition_nodes};
pub use connections::detect_missing_connections;
pub use engine::{compute_diagnostics, DiagnosticsResult};
pub use filter::DiagnosticFilter;
pub use identity::{locality_string, resolve_identities};
pub use order::{sort_identities, sort_no_connections};
pub use stats::{collect_samples, compute_stats, duration_to_ms};
pub use types::{
    ClusterSnapshot, DeviationThresholds, Identity, LatencyBand, LatencyStats, LivenessStatus,
    LocalityTier, NoConnection, NodeId, RawNodeStatus,
};

//! Cluster-Netdiag: inter-node latency and liveness diagnostics
//!
//! This crate analyzes a point-in-time snapshot of a node cluster's
//! pairwise network latency and liveness data. Given an immutable
//! snapshot and a free-text filter it computes which nodes are healthy,
//! stale or excluded, the statistical distribution of latencies among
//! healthy nodes, a per-pair deviation-band classification, and a list
//! of one-directional connectivity gaps.
//!
//! Data fetching, refresh timing and rendering belong to callers; the
//! engine is a pure function invoked in-process.

pub mod diag;
pub mod error;
pub mod report;
pub mod snapshot;

pub use crate::diag::{
    compute_diagnostics, ClusterSnapshot, DiagnosticFilter, DiagnosticsResult, LatencyBand,
};
pub use crate::error::{Error, Result};

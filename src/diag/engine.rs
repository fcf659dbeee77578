//! Diagnostics orchestrator
//!
//! Ties the pipeline together: identity resolution, node partitioning,
//! latency statistics, missing-connection detection and deterministic
//! ordering. The computation is a pure function over an immutable
//! snapshot; nothing is cached between invocations.

use super::classify::{classify_pair, partition_nodes};
use super::connections::detect_missing_connections;
use super::filter::DiagnosticFilter;
use super::identity::resolve_identities;
use super::order::{sort_identities, sort_no_connections};
use super::stats::{collect_samples, compute_stats, duration_to_ms};
use super::types::{
    ClusterSnapshot, Identity, LatencyBand, LatencyStats, NoConnection, NodeId,
};
use std::collections::{HashMap, HashSet};
use std::time::Duration;
use tracing::debug;

/// Result of one diagnostics computation.
///
/// Identity lists are deterministically ordered; `stats` is `None` when
/// no healthy pairwise latency sample exists. The result retains enough
/// context to classify arbitrary node pairs on demand.
#[derive(Clone, Debug)]
pub struct DiagnosticsResult {
    /// Filtered healthy and stale identities, ordered for display
    pub display_identities: Vec<Identity>,
    /// Filtered stale identities, ordered for display
    pub stale_identities: Vec<Identity>,
    /// One-directional connectivity gaps, ordered for display
    pub no_connections: Vec<NoConnection>,
    /// Latency distribution over healthy pairs, if any sample exists
    pub stats: Option<LatencyStats>,

    stale_ids: HashSet<NodeId>,
    latencies: HashMap<NodeId, HashMap<NodeId, Duration>>,
}

impl DiagnosticsResult {
    /// Latency from `a` to `b` in milliseconds, if reported
    pub fn latency_ms(&self, a: NodeId, b: NodeId) -> Option<f64> {
        self.latencies
            .get(&a)
            .and_then(|peers| peers.get(&b))
            .map(|&latency| duration_to_ms(latency))
    }

    /// Classify the (a, b) pair into a deviation band
    pub fn classify(&self, a: NodeId, b: NodeId) -> LatencyBand {
        classify_pair(
            a,
            b,
            &self.stale_ids,
            self.latency_ms(a, b),
            self.stats.as_ref(),
        )
    }
}

/// Compute the full diagnostic view for one snapshot and filter.
///
/// Pure and synchronous; every output is recomputed from scratch. The
/// all-pairs statistics step is O(H²) in the number of healthy nodes,
/// so callers should re-invoke on snapshot or filter changes rather
/// than on every render tick.
pub fn compute_diagnostics(
    snapshot: &ClusterSnapshot,
    filter: &DiagnosticFilter,
) -> DiagnosticsResult {
    let identities = resolve_identities(&snapshot.statuses);

    let latencies: HashMap<NodeId, HashMap<NodeId, Duration>> = snapshot
        .statuses
        .iter()
        .map(|status| (status.node_id, status.latencies.clone()))
        .collect();

    let (healthy_ids, stale_ids) = partition_nodes(&identities, &snapshot.liveness, filter);
    debug!(
        healthy = healthy_ids.len(),
        stale = stale_ids.len(),
        "Partitioned {} nodes",
        identities.len()
    );

    let samples = collect_samples(&healthy_ids, &latencies);
    let stats = compute_stats(&samples);

    let mut no_connections = detect_missing_connections(&healthy_ids, &latencies, &identities);
    sort_no_connections(&mut no_connections);

    let mut display_identities: Vec<Identity> = healthy_ids
        .iter()
        .chain(stale_ids.iter())
        .filter_map(|id| identities.get(id).cloned())
        .collect();
    sort_identities(&mut display_identities);

    let mut stale_identities: Vec<Identity> = stale_ids
        .iter()
        .filter_map(|id| identities.get(id).cloned())
        .collect();
    sort_identities(&mut stale_identities);

    DiagnosticsResult {
        display_identities,
        stale_identities,
        no_connections,
        stats,
        stale_ids,
        latencies,
    }
}

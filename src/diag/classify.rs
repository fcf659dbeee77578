//! Node partitioning and per-pair latency band classification

use super::filter::DiagnosticFilter;
use super::types::{Identity, LatencyBand, LatencyStats, LivenessStatus, NodeId};
use std::collections::{HashMap, HashSet};

/// Partition the known nodes into healthy and stale sets, applying the
/// view filter.
///
/// Nodes whose liveness is neither [`LivenessStatus::Live`] nor
/// [`LivenessStatus::Suspect`] are excluded from both sets. A non-empty
/// node-id filter intersects both sets; the locality pattern then
/// removes matching identities from both sets (exclusion semantics).
/// The returned sets are disjoint.
pub fn partition_nodes(
    identities: &HashMap<NodeId, Identity>,
    liveness: &HashMap<NodeId, LivenessStatus>,
    filter: &DiagnosticFilter,
) -> (HashSet<NodeId>, HashSet<NodeId>) {
    let mut healthy = HashSet::new();
    let mut stale = HashSet::new();

    for &id in identities.keys() {
        match liveness.get(&id).copied().unwrap_or_default() {
            LivenessStatus::Live => {
                healthy.insert(id);
            }
            LivenessStatus::Suspect => {
                stale.insert(id);
            }
            _ => {}
        }
    }

    if !filter.node_ids.is_empty() {
        healthy.retain(|id| filter.node_ids.contains(id));
        stale.retain(|id| filter.node_ids.contains(id));
    }

    if let Some(pattern) = &filter.locality_pattern {
        let hidden = |id: &NodeId| {
            identities
                .get(id)
                .map(|identity| pattern.is_match(&identity.locality))
                .unwrap_or(false)
        };
        healthy.retain(|id| !hidden(id));
        stale.retain(|id| !hidden(id));
    }

    (healthy, stale)
}

/// Classify one (a, b) pair into a deviation band.
///
/// Decision order, first match wins: self pair, stale endpoint, missing
/// latency value, then the numeric bands with the wider ±2σ bands
/// checked before ±1σ. When `stats` is absent (empty sample list) a
/// pair that does have a latency value classifies as [`LatencyBand::Even`]
/// so that no undefined threshold ever reaches a comparison.
pub fn classify_pair(
    a: NodeId,
    b: NodeId,
    stale: &HashSet<NodeId>,
    latency_ms: Option<f64>,
    stats: Option<&LatencyStats>,
) -> LatencyBand {
    if a == b {
        return LatencyBand::SelfPair;
    }
    if stale.contains(&a) || stale.contains(&b) {
        return LatencyBand::NoConnection;
    }
    let value = match latency_ms {
        Some(value) => value,
        None => return LatencyBand::NoConnection,
    };
    let thresholds = match stats {
        Some(stats) => stats.thresholds,
        None => return LatencyBand::Even,
    };

    if value > thresholds.plus2 {
        LatencyBand::Plus2
    } else if value > thresholds.plus1 {
        LatencyBand::Plus1
    } else if value < thresholds.minus2 {
        LatencyBand::Minus2
    } else if value < thresholds.minus1 {
        LatencyBand::Minus1
    } else {
        LatencyBand::Even
    }
}

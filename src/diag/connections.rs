//! Missing-connection detection

use super::types::{Identity, NoConnection, NodeId};
use std::collections::{HashMap, HashSet};
use std::time::Duration;

/// Find one-directional apparent connectivity gaps.
///
/// For every healthy node A, every peer in A's latency map that is not
/// itself healthy yields one `NoConnection { from: A, to: peer }`:
/// A believes the peer is reachable, but the peer is stale, filtered
/// out, or otherwise excluded. Detection is asymmetric; a reverse entry
/// appears only if the peer independently reports one toward A. Peers
/// with no identity in the snapshot are skipped.
pub fn detect_missing_connections(
    healthy: &HashSet<NodeId>,
    latencies: &HashMap<NodeId, HashMap<NodeId, Duration>>,
    identities: &HashMap<NodeId, Identity>,
) -> Vec<NoConnection> {
    let mut missing = Vec::new();

    for &a in healthy {
        let Some(from) = identities.get(&a) else {
            continue;
        };
        let Some(peer_latencies) = latencies.get(&a) else {
            continue;
        };
        for peer in peer_latencies.keys() {
            if healthy.contains(peer) {
                continue;
            }
            if let Some(to) = identities.get(peer) {
                missing.push(NoConnection {
                    from: from.clone(),
                    to: to.clone(),
                });
            }
        }
    }

    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn identity(node_id: NodeId) -> Identity {
        Identity {
            node_id,
            address: String::new(),
            locality: String::new(),
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn test_detects_entry_toward_excluded_peer() {
        let identities = HashMap::from([(1, identity(1)), (2, identity(2))]);
        let latencies = HashMap::from([(
            1,
            HashMap::from([(2, Duration::from_millis(5))]),
        )]);
        let healthy = HashSet::from([1]);

        let missing = detect_missing_connections(&healthy, &latencies, &identities);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].from.node_id, 1);
        assert_eq!(missing[0].to.node_id, 2);
    }

    #[test]
    fn test_no_reverse_entry_synthesized() {
        let identities = HashMap::from([(1, identity(1)), (2, identity(2))]);
        // Only node 1 reports a latency toward node 2.
        let latencies = HashMap::from([
            (1, HashMap::from([(2, Duration::from_millis(5))])),
            (2, HashMap::new()),
        ]);
        let healthy = HashSet::from([1]);

        let missing = detect_missing_connections(&healthy, &latencies, &identities);
        assert_eq!(missing.len(), 1);
    }

    #[test]
    fn test_healthy_peers_are_not_reported() {
        let identities = HashMap::from([(1, identity(1)), (2, identity(2))]);
        let latencies = HashMap::from([(
            1,
            HashMap::from([(2, Duration::from_millis(5))]),
        )]);
        let healthy = HashSet::from([1, 2]);

        let missing = detect_missing_connections(&healthy, &latencies, &identities);
        assert!(missing.is_empty());
    }

    #[test]
    fn test_unknown_peer_identity_is_skipped() {
        let identities = HashMap::from([(1, identity(1))]);
        let latencies = HashMap::from([(
            1,
            HashMap::from([(9, Duration::from_millis(5))]),
        )]);
        let healthy = HashSet::from([1]);

        let missing = detect_missing_connections(&healthy, &latencies, &identities);
        assert!(missing.is_empty());
    }
}

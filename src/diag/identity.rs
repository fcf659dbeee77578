//! Identity resolution from raw node status records

use super::types::{Identity, LocalityTier, NodeId, RawNodeStatus};
use std::collections::HashMap;

/// Build the canonical locality string for an ordered list of tiers.
///
/// Tiers are joined as `key=value` separated by commas, preserving the
/// order in which they were reported. Tiers are never sorted.
pub fn locality_string(tiers: &[LocalityTier]) -> String {
    tiers
        .iter()
        .map(|tier| format!("{}={}", tier.key, tier.value))
        .collect::<Vec<_>>()
        .join(",")
}

/// Resolve every raw status record into a normalized [`Identity`].
///
/// This never fails: a record with no address or no locality tiers
/// resolves to empty strings for those fields. If the same node id
/// appears twice the later record wins.
pub fn resolve_identities(statuses: &[RawNodeStatus]) -> HashMap<NodeId, Identity> {
    let mut identities = HashMap::with_capacity(statuses.len());

    for status in statuses {
        identities.insert(
            status.node_id,
            Identity {
                node_id: status.node_id,
                address: status.address.clone(),
                locality: locality_string(&status.locality),
                last_updated: status.updated_at,
            },
        );
    }

    identities
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn tier(key: &str, value: &str) -> LocalityTier {
        LocalityTier {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    fn status(node_id: NodeId, tiers: Vec<LocalityTier>) -> RawNodeStatus {
        RawNodeStatus {
            node_id,
            address: format!("10.0.0.{node_id}:26257"),
            locality: tiers,
            updated_at: Utc::now(),
            latencies: Default::default(),
        }
    }

    #[test]
    fn test_locality_string_preserves_tier_order() {
        let tiers = vec![tier("zone", "b"), tier("region", "east")];
        assert_eq!(locality_string(&tiers), "zone=b,region=east");
    }

    #[test]
    fn test_locality_string_empty() {
        assert_eq!(locality_string(&[]), "");
    }

    #[test]
    fn test_resolve_identities() {
        let statuses = vec![
            status(1, vec![tier("region", "east")]),
            status(2, vec![]),
        ];

        let identities = resolve_identities(&statuses);
        assert_eq!(identities.len(), 2);
        assert_eq!(identities[&1].locality, "region=east");
        assert_eq!(identities[&2].locality, "");
        assert_eq!(identities[&2].address, "10.0.0.2:26257");
    }

    #[test]
    fn test_resolve_identities_last_record_wins() {
        let mut first = status(7, vec![tier("region", "east")]);
        first.address = "old:26257".to_string();
        let second = status(7, vec![tier("region", "west")]);

        let identities = resolve_identities(&[first, second]);
        assert_eq!(identities.len(), 1);
        assert_eq!(identities[&7].locality, "region=west");
    }
}

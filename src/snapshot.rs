//! Snapshot file loading for CLI callers
//!
//! The engine itself performs no I/O; this is the edge that reads a
//! serialized [`ClusterSnapshot`] from disk on its behalf.

use crate::diag::ClusterSnapshot;
use crate::error::Result;
use std::fs;
use std::path::Path;
use tracing::info;

/// Load a JSON-encoded cluster snapshot from a file
pub fn load_snapshot(path: &Path) -> Result<ClusterSnapshot> {
    let raw = fs::read_to_string(path)?;
    let snapshot: ClusterSnapshot = serde_json::from_str(&raw)?;

    info!(
        "Loaded snapshot with {} node statuses and {} liveness records from {}",
        snapshot.statuses.len(),
        snapshot.liveness.len(),
        path.display()
    );

    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_snapshot_roundtrip() {
        let json = r#"{
            "statuses": [
                {
                    "nodeId": 1,
                    "address": "node1:26257",
                    "locality": [{"key": "region", "value": "east"}],
                    "updatedAt": "2026-08-30T12:00:00Z",
                    "latencies": {"2": {"secs": 0, "nanos": 5000000}}
                }
            ],
            "liveness": {"1": "live", "2": "suspect"}
        }"#;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let snapshot = load_snapshot(file.path()).unwrap();
        assert_eq!(snapshot.statuses.len(), 1);
        assert_eq!(snapshot.statuses[0].node_id, 1);
        assert_eq!(
            snapshot.statuses[0].latencies[&2],
            std::time::Duration::from_millis(5)
        );
        assert_eq!(
            snapshot.liveness[&1],
            crate::diag::LivenessStatus::Live
        );
    }

    #[test]
    fn test_load_snapshot_rejects_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();
        assert!(load_snapshot(file.path()).is_err());
    }
}

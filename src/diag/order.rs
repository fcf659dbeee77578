//! Deterministic ordering of diagnostic output lists

use super::types::{Identity, NoConnection};

/// Order identities by locality group, then by node id within a group.
///
/// Implemented as a composition of stable sort passes: each later pass
/// becomes the primary key while preserving the relative order the
/// earlier passes established. The net effect is grouping by locality
/// string ascending with node ids ascending inside each group.
pub fn sort_identities(identities: &mut [Identity]) {
    identities.sort_by(|a, b| a.node_id.cmp(&b.node_id));
    identities.sort_by(|a, b| a.locality.cmp(&b.locality));
}

/// Order a no-connection list by `from.locality`, `from.node_id`,
/// `to.locality`, `to.node_id`.
///
/// Same stable-pass composition as [`sort_identities`]; the passes run
/// from least to most significant key.
pub fn sort_no_connections(connections: &mut [NoConnection]) {
    connections.sort_by(|a, b| a.to.node_id.cmp(&b.to.node_id));
    connections.sort_by(|a, b| a.to.locality.cmp(&b.to.locality));
    connections.sort_by(|a, b| a.from.node_id.cmp(&b.from.node_id));
    connections.sort_by(|a, b| a.from.locality.cmp(&b.from.locality));
}

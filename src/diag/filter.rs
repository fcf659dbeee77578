//! Free-text filter parsing

use super::types::NodeId;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

/// Structured view filter parsed from free-text input.
///
/// An empty `node_ids` set means no node restriction. The locality
/// pattern is an exclusion filter: identities whose locality string
/// matches are hidden from the diagnostic view.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticFilter {
    pub node_ids: HashSet<NodeId>,
    pub locality_pattern: Option<Regex>,
}

impl DiagnosticFilter {
    /// Parse a comma-separated node-id list and a locality pattern.
    ///
    /// Parsing never fails. Node-id tokens that do not parse as an
    /// integer are silently dropped, as is the value 0 — a node whose
    /// id is 0 can therefore never be explicitly selected. An invalid
    /// locality pattern degrades to no locality restriction.
    pub fn parse(nodes_text: &str, locality_text: &str) -> Self {
        let node_ids = nodes_text
            .split(',')
            .filter_map(|token| token.trim().parse::<NodeId>().ok())
            .filter(|&id| id != 0)
            .collect();

        let locality_pattern = if locality_text.trim().is_empty() {
            None
        } else {
            match Regex::new(locality_text) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    debug!("Ignoring invalid locality pattern {:?}: {}", locality_text, e);
                    None
                }
            }
        };

        Self {
            node_ids,
            locality_pattern,
        }
    }

    /// True when the filter imposes no restriction at all
    pub fn is_empty(&self) -> bool {
        self.node_ids.is_empty() && self.locality_pattern.is_none()
    }
}

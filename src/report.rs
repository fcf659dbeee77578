//! Plain-text rendering of a diagnostics result
//!
//! Rendering lives with the CLI caller; the engine only computes. The
//! report mirrors what an interactive view would show: the node table,
//! the latency matrix with deviation bands, the stats legend and the
//! no-connection list.

use crate::diag::{DiagnosticsResult, LatencyBand};
use std::fmt::Write;

/// Render a human-readable report for one diagnostics result
pub fn render_report(result: &DiagnosticsResult) -> String {
    let mut out = String::new();

    render_nodes(&mut out, result);
    render_matrix(&mut out, result);
    render_stats(&mut out, result);
    render_no_connections(&mut out, result);

    out
}

fn render_nodes(out: &mut String, result: &DiagnosticsResult) {
    let _ = writeln!(out, "Nodes ({}):", result.display_identities.len());
    for identity in &result.display_identities {
        let stale = result
            .stale_identities
            .iter()
            .any(|s| s.node_id == identity.node_id);
        let marker = if stale { " (stale)" } else { "" };
        let _ = writeln!(
            out,
            "  n{}  {}  [{}]{}",
            identity.node_id, identity.address, identity.locality, marker
        );
    }
}

fn render_matrix(out: &mut String, result: &DiagnosticsResult) {
    if result.display_identities.is_empty() {
        return;
    }

    let _ = writeln!(out, "\nLatency matrix (ms):");
    let _ = write!(out, "  {:>8}", "");
    for to in &result.display_identities {
        let _ = write!(out, " {:>8}", format!("n{}", to.node_id));
    }
    let _ = writeln!(out);

    for from in &result.display_identities {
        let _ = write!(out, "  {:>8}", format!("n{}", from.node_id));
        for to in &result.display_identities {
            let cell = match result.classify(from.node_id, to.node_id) {
                LatencyBand::SelfPair => "-".to_string(),
                LatencyBand::NoConnection => "x".to_string(),
                _ => result
                    .latency_ms(from.node_id, to.node_id)
                    .map(|ms| format!("{ms:.1}"))
                    .unwrap_or_else(|| "x".to_string()),
            };
            let _ = write!(out, " {cell:>8}");
        }
        let _ = writeln!(out);
    }
}

fn render_stats(out: &mut String, result: &DiagnosticsResult) {
    match &result.stats {
        Some(stats) => {
            let _ = writeln!(
                out,
                "\nStatistics: mean {:.2} ms, stddev {:.2} ms",
                stats.mean_ms, stats.stddev_ms
            );
            let _ = writeln!(
                out,
                "  bands: < {:.2} | < {:.2} | even | > {:.2} | > {:.2}",
                stats.thresholds.minus2,
                stats.thresholds.minus1,
                stats.thresholds.plus1,
                stats.thresholds.plus2
            );
        }
        None => {
            let _ = writeln!(out, "\nStatistics: undefined (no healthy latency samples)");
        }
    }
}

fn render_no_connections(out: &mut String, result: &DiagnosticsResult) {
    if result.no_connections.is_empty() {
        return;
    }

    let _ = writeln!(out, "\nNo connection ({}):", result.no_connections.len());
    for connection in &result.no_connections {
        let _ = writeln!(
            out,
            "  n{} -> n{}",
            connection.from.node_id, connection.to.node_id
        );
    }
}

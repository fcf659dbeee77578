//! Pairwise latency statistics among healthy nodes

use super::types::{DeviationThresholds, LatencyStats, NodeId};
use std::collections::{HashMap, HashSet};
use std::time::Duration;
use tracing::debug;

/// Convert a stored latency to milliseconds
pub fn duration_to_ms(latency: Duration) -> f64 {
    latency.as_secs_f64() * 1000.0
}

/// Collect the latency sample list over all ordered healthy pairs.
///
/// For every ordered pair (a, b) with a ≠ b, both healthy, where a's
/// latency map has an entry for b, the value in milliseconds is kept if
/// it is finite and strictly positive. The two directions of a pair are
/// independent samples.
pub fn collect_samples(
    healthy: &HashSet<NodeId>,
    latencies: &HashMap<NodeId, HashMap<NodeId, Duration>>,
) -> Vec<f64> {
    let mut samples = Vec::new();

    for &a in healthy {
        let Some(peer_latencies) = latencies.get(&a) else {
            continue;
        };
        for &b in healthy {
            if a == b {
                continue;
            }
            if let Some(&latency) = peer_latencies.get(&b) {
                let ms = duration_to_ms(latency);
                if ms.is_finite() && ms > 0.0 {
                    samples.push(ms);
                }
            }
        }
    }

    samples
}

/// Compute mean, sample standard deviation and deviation thresholds
/// over a latency sample list.
///
/// Returns `None` for an empty sample list: statistics are explicitly
/// undefined in that case and callers must not compare against them.
pub fn compute_stats(samples: &[f64]) -> Option<LatencyStats> {
    if samples.is_empty() {
        debug!("No healthy pairwise latency samples; statistics undefined");
        return None;
    }

    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;

    // Sample standard deviation (n−1 denominator); a single sample
    // has zero spread.
    let stddev = if samples.len() > 1 {
        let sum_sq = samples
            .iter()
            .map(|&x| {
                let diff = x - mean;
                diff * diff
            })
            .sum::<f64>();
        (sum_sq / (n - 1.0)).sqrt()
    } else {
        0.0
    };

    let plus1 = mean + stddev;
    let minus1 = mean - stddev;

    Some(LatencyStats {
        mean_ms: mean,
        stddev_ms: stddev,
        thresholds: DeviationThresholds {
            plus1,
            plus2: plus1 + stddev,
            minus1,
            minus2: minus1 - stddev,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latency_map(entries: &[(NodeId, &[(NodeId, u64)])]) -> HashMap<NodeId, HashMap<NodeId, Duration>> {
        entries
            .iter()
            .map(|(id, peers)| {
                (
                    *id,
                    peers
                        .iter()
                        .map(|(peer, ms)| (*peer, Duration::from_millis(*ms)))
                        .collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_collect_samples_both_directions() {
        let latencies = latency_map(&[
            (1, &[(2, 5), (3, 50)]),
            (2, &[(1, 5), (3, 6)]),
            (3, &[(1, 50), (2, 6)]),
        ]);
        let healthy = HashSet::from([1, 2, 3]);

        let mut samples = collect_samples(&healthy, &latencies);
        samples.sort_by(|a, b| a.total_cmp(b));
        assert_eq!(samples, vec![5.0, 5.0, 6.0, 6.0, 50.0, 50.0]);
    }

    #[test]
    fn test_collect_samples_skips_unhealthy_and_zero() {
        let latencies = latency_map(&[(1, &[(2, 10), (3, 7), (4, 0)]), (2, &[(1, 10)])]);
        // Node 3 not healthy; node 4's value is zero and dropped.
        let healthy = HashSet::from([1, 2, 4]);

        let mut samples = collect_samples(&healthy, &latencies);
        samples.sort_by(|a, b| a.total_cmp(b));
        assert_eq!(samples, vec![10.0, 10.0]);
    }

    #[test]
    fn test_compute_stats_worked_example() {
        // Sample list from a three-node cluster: [5, 50, 5, 6, 50, 6].
        let samples = [5.0, 50.0, 5.0, 6.0, 50.0, 6.0];
        let stats = compute_stats(&samples).unwrap();

        assert!((stats.mean_ms - 20.333).abs() < 0.01);
        assert!((stats.stddev_ms - 22.984).abs() < 0.01);
        assert!((stats.thresholds.plus1 - (stats.mean_ms + stats.stddev_ms)).abs() < 1e-9);
        assert!((stats.thresholds.plus2 - (stats.mean_ms + 2.0 * stats.stddev_ms)).abs() < 1e-9);
        assert!((stats.thresholds.minus2 - (stats.mean_ms - 2.0 * stats.stddev_ms)).abs() < 1e-9);
    }

    #[test]
    fn test_compute_stats_empty_is_undefined() {
        assert!(compute_stats(&[]).is_none());
    }

    #[test]
    fn test_compute_stats_single_sample() {
        let stats = compute_stats(&[12.0]).unwrap();
        assert_eq!(stats.mean_ms, 12.0);
        assert_eq!(stats.stddev_ms, 0.0);
    }
}

//! Benchmark display helpers

use subsidyscope_domain::BenchmarkSnapshot;

/// Utilization gap between the industry reference and the user's company
///
/// Display value only; inputs are taken as provided, with no range
/// validation or clamping.
pub fn utilization_gap(benchmark: &BenchmarkSnapshot) -> f64 {
    (benchmark.competitors - benchmark.you).abs()
}

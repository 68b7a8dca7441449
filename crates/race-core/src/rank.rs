// File: crates/race-core/src/rank.rs
// Summary: Ranking of projected points (stable sort by value, then top-N truncation).

use crate::config::SortOrder;
use crate::project::ProjectedPoint;

/// Sort `points` by value in `order` and keep at most the first `top_n`.
///
/// The sort is stable: points with equal values keep their input order in
/// both directions. A `top_n` larger than the series returns every point.
pub fn rank(mut points: Vec<ProjectedPoint>, order: SortOrder, top_n: usize) -> Vec<ProjectedPoint> {
    match order {
        SortOrder::Asc => points.sort_by(|a, b| a.value.total_cmp(&b.value)),
        SortOrder::Desc => points.sort_by(|a, b| b.value.total_cmp(&a.value)),
    }
    points.truncate(top_n);
    points
}

// src/extract/simplify.rs

use crate::map::GridPoint;
use crate::utils::{Line2D, Point2D};

/// Douglas-Peucker reduction of an open polyline.
///
/// A segment whose farthest interior point lies within `tolerance` of the
/// chord collapses to its endpoints; otherwise it is split at that point and
/// both halves are reduced. Inputs of two points or fewer come back
/// unchanged. Work is driven by an explicit stack, so long outlines do not
/// deepen the call stack.
pub fn simplify_outline(points: &[GridPoint], tolerance: f64) -> Vec<GridPoint> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[points.len() - 1] = true;

    let mut stack = vec![(0usize, points.len() - 1)];
    while let Some((first, last)) = stack.pop() {
        if last - first < 2 {
            continue;
        }

        let chord = Line2D::between(points[first], points[last]);
        let mut max_distance = 0.0;
        let mut split = first;
        for (i, p) in points.iter().enumerate().take(last).skip(first + 1) {
            let distance = chord.distance_to_point(&Point2D::from(*p));
            if distance > max_distance {
                max_distance = distance;
                split = i;
            }
        }

        // A collinear run leaves `split == first`; never re-queue it.
        if split > first && max_distance > tolerance {
            keep[split] = true;
            stack.push((split, last));
            stack.push((first, split));
        }
    }

    points
        .iter()
        .zip(keep)
        .filter_map(|(p, kept)| kept.then_some(*p))
        .collect()
}

use crate::model::{AnalyzerError, Clustering, NOISE, Point};
use crate::normalizer::normalize_points;
use std::collections::VecDeque;

// Points not yet visited by the scan. Never appears in the output.
const UNCLASSIFIED: i64 = -2;

/// Density-based clustering (DBSCAN) over raw point coordinates.
///
/// Coordinates are min-max normalized to the unit square first, and `eps`
/// is a Euclidean radius in that normalized space. A point is a core point
/// when its eps-neighborhood, including itself, holds at least `min_samples`
/// points; clusters grow by chaining core points, border points attach to
/// the first cluster that reaches them, and everything else is noise.
///
/// The scan visits points in input order, so the grouping is deterministic
/// for identical input. Label numbers are an artifact of scan order and
/// carry no meaning beyond distinguishing clusters.
pub fn cluster_analysis(
    points: &[Point],
    eps: f64,
    min_samples: usize,
) -> Result<Clustering, AnalyzerError> {
    if !(eps > 0.0 && eps.is_finite()) {
        return Err(AnalyzerError::InvalidParameter(format!(
            "eps must be positive and finite, got {eps}"
        )));
    }
    if min_samples < 1 {
        return Err(AnalyzerError::InvalidParameter(
            "min_samples must be at least 1".to_string(),
        ));
    }
    if points.is_empty() {
        return Ok(Clustering::empty());
    }

    let normalized = normalize_points(points);
    let n = normalized.len();
    let eps_sq = eps * eps;

    // O(n^2) neighborhood scan; each list includes the point itself.
    let neighborhoods: Vec<Vec<usize>> = (0..n)
        .map(|i| {
            (0..n)
                .filter(|&j| distance_sq(normalized[i], normalized[j]) <= eps_sq)
                .collect()
        })
        .collect();

    let mut labels = vec![UNCLASSIFIED; n];
    let mut next_label: i64 = 0;

    for i in 0..n {
        if labels[i] != UNCLASSIFIED {
            continue;
        }
        if neighborhoods[i].len() < min_samples {
            // May be upgraded to a border point by a later expansion.
            labels[i] = NOISE;
            continue;
        }

        let label = next_label;
        next_label += 1;
        labels[i] = label;

        let mut frontier: VecDeque<usize> = neighborhoods[i].iter().copied().collect();
        while let Some(j) = frontier.pop_front() {
            if labels[j] == NOISE {
                // Border point: density-reachable but not core.
                labels[j] = label;
            }
            if labels[j] != UNCLASSIFIED {
                continue;
            }
            labels[j] = label;
            if neighborhoods[j].len() >= min_samples {
                frontier.extend(neighborhoods[j].iter().copied());
            }
        }
    }

    let mut clustering = Clustering::empty();
    for (index, &label) in labels.iter().enumerate() {
        if label == NOISE {
            clustering.noise.push(index);
        } else {
            clustering.clusters.entry(label).or_default().push(index);
        }
    }
    clustering.labels = labels;
    Ok(clustering)
}

fn distance_sq(a: Point, b: Point) -> f64 {
    (a.x - b.x).powi(2) + (a.y - b.y).powi(2)
}

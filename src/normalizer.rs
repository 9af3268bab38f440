use crate::model::Point;

/// Min-max feature scaling of raw point coordinates into the unit square.
///
/// Each axis is scaled independently to [0, 1] so that eps-neighborhood
/// queries treat x and y spread equally regardless of the original
/// coordinate ranges. An axis with zero range maps to 0.0 for every point.
pub fn normalize_points(points: &[Point]) -> Vec<Point> {
    if points.is_empty() {
        return Vec::new();
    }

    let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
    for p in points {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    let range_x = max_x - min_x;
    let range_y = max_y - min_y;

    points
        .iter()
        .map(|p| {
            let x = if range_x > 0.0 { (p.x - min_x) / range_x } else { 0.0 };
            let y = if range_y > 0.0 { (p.y - min_y) / range_y } else { 0.0 };
            Point::new(x, y)
        })
        .collect()
}

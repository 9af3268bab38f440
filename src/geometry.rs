use crate::model::Point;

/// Area of a simple polygon given as an ordered vertex ring, via the
/// shoelace formula. Orientation does not matter; the result is always
/// non-negative. A ring that repeats its first vertex at the end yields the
/// same area, since the wrap term of the duplicate edge is zero.
///
/// Degenerate rings (fewer than 3 distinct vertices, or all collinear)
/// yield 0.0; callers treat non-positive area as invalid geometry.
pub fn polygon_area(boundary: &[Point]) -> f64 {
    if boundary.len() < 3 {
        return 0.0;
    }
    let mut twice_area = 0.0;
    for i in 0..boundary.len() {
        let a = boundary[i];
        let b = boundary[(i + 1) % boundary.len()];
        twice_area += a.x * b.y - b.x * a.y;
    }
    (twice_area / 2.0).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_square() {
        let ring = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        assert!((polygon_area(&ring) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn closed_ring_matches_open_ring() {
        let open = vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 3.0),
            Point::new(0.0, 3.0),
        ];
        let mut closed = open.clone();
        closed.push(open[0]);
        assert_eq!(polygon_area(&open), polygon_area(&closed));
    }

    #[test]
    fn clockwise_ring_is_positive() {
        let ring = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ];
        assert!((polygon_area(&ring) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_rings_are_zero() {
        assert_eq!(polygon_area(&[]), 0.0);
        assert_eq!(polygon_area(&[Point::new(1.0, 1.0), Point::new(2.0, 2.0)]), 0.0);
        // Collinear vertices enclose nothing.
        let line = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
        ];
        assert_eq!(polygon_area(&line), 0.0);
    }
}

//! Shared geometry helpers for solutions working on polygons and rectangles.

use nalgebra::Point2;

/// The number of unit cells covered by the rectangle spanned by two corners, inclusive of both.
pub fn rect_area(a: Point2<i64>, b: Point2<i64>) -> i64 {
    ((a.x - b.x).abs() + 1) * ((a.y - b.y).abs() + 1)
}

/// Whether the cell row from `left` to `right` at row `y` lies inside the rectilinear polygon.
///
/// The polygon is a closed loop of vertices with axis-aligned edges. A cell row spans the band
/// between grid lines `y` and `y + 1`; it is inside when some pair of vertical edges crossing
/// that band brackets the whole `left..=right` range.
pub fn row_inside(polygon: &[Point2<i64>], y: i64, left: i64, right: i64) -> bool {
    let (left, right) = if left <= right {
        (left, right)
    } else {
        (right, left)
    };

    let mut crossings = Vec::new();
    for (i, &a) in polygon.iter().enumerate() {
        let b = polygon[(i + 1) % polygon.len()];
        if a.x != b.x {
            continue;
        }
        let (top, bottom) = if a.y <= b.y { (a.y, b.y) } else { (b.y, a.y) };
        if top <= y && y + 1 <= bottom {
            crossings.push(a.x);
        }
    }
    crossings.sort_unstable();

    // crossings pair up as enter/leave sweeping left to right
    crossings
        .chunks_exact(2)
        .any(|pair| pair[0] <= left && right <= pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_polygon() -> Vec<Point2<i64>> {
        [
            (7, 1),
            (11, 1),
            (11, 7),
            (9, 7),
            (9, 5),
            (2, 5),
            (2, 3),
            (7, 3),
        ]
        .into_iter()
        .map(|(x, y)| Point2::new(x, y))
        .collect()
    }

    #[test]
    fn rect_area_counts_both_corners() {
        assert_eq!(rect_area(Point2::new(7, 1), Point2::new(11, 7)), 35);
        assert_eq!(rect_area(Point2::new(3, 3), Point2::new(3, 3)), 1);
    }

    #[test]
    fn row_inside_checks_vertical_edge_brackets() {
        let polygon = example_polygon();
        assert!(row_inside(&polygon, 3, 2, 11));
        assert!(row_inside(&polygon, 1, 7, 11));
        assert!(!row_inside(&polygon, 1, 2, 11));
        assert!(!row_inside(&polygon, 5, 2, 9));
    }
}

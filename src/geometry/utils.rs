use crate::geometry::types::Point;

#[must_use]
pub fn euclidean_distance(a: Point, b: Point) -> f64 {
    (a.x as f64 - b.x as f64).hypot(a.y as f64 - b.y as f64)
}

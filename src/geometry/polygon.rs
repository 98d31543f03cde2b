use itertools::Itertools;

use crate::geometry::types::Point;

fn distance_to_segment(point: Point, a: Point, b: Point) -> f64 {
    let (px, py) = (point.x as f64, point.y as f64);
    let (ax, ay) = (a.x as f64, a.y as f64);
    let (dx, dy) = (b.x as f64 - ax, b.y as f64 - ay);

    let t = if a == b {
        0.0
    } else {
        (((px - ax) * dx + (py - ay) * dy) / dx.mul_add(dx, dy * dy))
            .clamp(0.0, 1.0)
    };

    (px - t.mul_add(dx, ax)).hypot(py - t.mul_add(dy, ay))
}

// even-odd rule. horizontal edges never count as a crossing.
fn crosses(point: Point, a: Point, b: Point) -> bool {
    if (a.y > point.y) == (b.y > point.y) {
        return false;
    }

    let (px, py) = (point.x as f64, point.y as f64);
    let (ax, ay) = (a.x as f64, a.y as f64);
    let (bx, by) = (b.x as f64, b.y as f64);

    let x_cross = ax + ((py - ay) * (bx - ax)) / (by - ay);
    px < x_cross
}

/// Signed distance from `point` to the closed polygon through `vertices`.
///
/// Positive inside, negative outside, and the magnitude is the distance to
/// the nearest edge. The last vertex joins back to the first one. A single
/// vertex behaves like a point and two vertices like a segment, so the
/// result is never positive for those.
///
/// Returns `None` for an empty polygon.
pub fn signed_distance<'a, I>(vertices: I, point: Point) -> Option<f64>
where
    I: IntoIterator<Item = &'a Point>,
    I::IntoIter: Clone + ExactSizeIterator,
{
    let mut nearest: Option<f64> = None;
    let mut inside = false;

    for (a, b) in vertices.into_iter().circular_tuple_windows() {
        let distance = distance_to_segment(point, *a, *b);
        nearest = Some(nearest.map_or(distance, |n| n.min(distance)));

        if crosses(point, *a, *b) {
            inside = !inside;
        }
    }

    nearest.map(|distance| if inside { distance } else { -distance })
}

use std::collections::VecDeque;

use crate::geometry::{types::Point, utils::euclidean_distance};

/// The snake's point history, oldest point at the front.
///
/// `lengths[i]` is the distance between `points[i]` and `points[i + 1]`, so
/// there is always one length fewer than there are points.
#[derive(Clone, Debug, Default)]
pub struct Body {
    points:        VecDeque<Point>,
    lengths:       VecDeque<f64>,
    total_length:  f64,
    previous_head: Option<Point>,
}

impl Body {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new head and returns the length of the segment it added.
    /// The first point of a body adds no segment.
    pub fn push_head(&mut self, head: Point) -> f64 {
        let length = self
            .previous_head
            .map_or(0.0, |previous| euclidean_distance(previous, head));

        if self.previous_head.is_some() {
            self.lengths.push_back(length);
            self.total_length += length;
        }

        self.points.push_back(head);
        self.previous_head = Some(head);

        length
    }

    /// Evicts the oldest points until the total length fits in `allowed`,
    /// or only the head is left. Returns how many points were evicted.
    pub fn trim_to(&mut self, allowed: f64) -> usize {
        let mut evicted = 0;

        while self.total_length > allowed {
            let Some(length) = self.lengths.pop_front() else {
                break;
            };
            self.total_length -= length;
            self.points.pop_front();
            evicted += 1;
        }

        if self.lengths.is_empty() {
            self.total_length = 0.0;
        }

        evicted
    }

    #[must_use]
    pub const fn points(&self) -> &VecDeque<Point> {
        &self.points
    }

    #[must_use]
    pub const fn lengths(&self) -> &VecDeque<f64> {
        &self.lengths
    }

    #[must_use]
    pub const fn total_length(&self) -> f64 {
        self.total_length
    }

    #[must_use]
    pub fn head(&self) -> Option<Point> {
        self.points.back().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    fn recomputed_length(body: &Body) -> f64 {
        body.points()
            .iter()
            .tuple_windows()
            .map(|(a, b)| euclidean_distance(*a, *b))
            .sum()
    }

    #[test]
    fn first_point_adds_no_segment() {
        let mut body = Body::new();
        assert!(body.push_head(Point::new(640, 360)).abs() < f64::EPSILON);
        assert_eq!(body.len(), 1);
        assert!(body.lengths().is_empty());
        assert_eq!(body.head(), Some(Point::new(640, 360)));
    }

    #[test]
    fn lengths_track_consecutive_points() {
        let mut body = Body::new();
        body.push_head(Point::new(0, 0));
        assert!((body.push_head(Point::new(3, 4)) - 5.0).abs() < 1e-9);
        assert!((body.push_head(Point::new(3, 14)) - 10.0).abs() < 1e-9);

        assert_eq!(body.lengths().len(), body.len() - 1);
        assert!((body.total_length() - 15.0).abs() < 1e-9);
        assert_eq!(body.head(), Some(Point::new(3, 14)));
    }

    #[test]
    fn trimming_evicts_from_the_oldest_end() {
        let mut body = Body::new();
        for x in 0..10 {
            body.push_head(Point::new(x * 10, 0));
        }
        assert!((body.total_length() - 90.0).abs() < 1e-9);

        let evicted = body.trim_to(45.0);
        assert_eq!(evicted, 5);
        assert_eq!(body.points().front(), Some(&Point::new(50, 0)));
        assert_eq!(body.head(), Some(Point::new(90, 0)));
        assert!((body.total_length() - 40.0).abs() < 1e-9);
        assert!((body.total_length() - recomputed_length(&body)).abs() < 1e-9);
    }

    #[test]
    fn trimming_can_drop_many_segments_at_once() {
        let mut body = Body::new();
        for x in 0..5 {
            body.push_head(Point::new(x, 0));
        }
        // one long jump leaves everything behind it over budget
        body.push_head(Point::new(500, 0));

        body.trim_to(100.0);
        assert_eq!(body.len(), 1);
        assert!(body.lengths().is_empty());
        assert!(body.total_length().abs() < f64::EPSILON);
        assert_eq!(body.head(), Some(Point::new(500, 0)));
    }

    #[test]
    fn trimming_under_budget_is_a_no_op() {
        let mut body = Body::new();
        body.push_head(Point::new(0, 0));
        body.push_head(Point::new(0, 10));
        assert_eq!(body.trim_to(10.0), 0);
        assert_eq!(body.len(), 2);
    }
}

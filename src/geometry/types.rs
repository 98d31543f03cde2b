use std::{fmt, ops::RangeInclusive};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn offset(&self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// An inclusive rectangle of screen coordinates.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
pub struct Bounds {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

impl Bounds {
    /// The x range in ascending order, whichever way round the bounds were
    /// given.
    #[must_use]
    pub fn x_range(&self) -> RangeInclusive<i64> {
        self.min_x.min(self.max_x)..=self.min_x.max(self.max_x)
    }

    #[must_use]
    pub fn y_range(&self) -> RangeInclusive<i64> {
        self.min_y.min(self.max_y)..=self.min_y.max(self.max_y)
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.x_range().contains(&point.x) && self.y_range().contains(&point.y)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[{}..={}] x [{}..={}]",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}

/// Pixel dimensions of a sprite.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
pub struct SpriteSize {
    pub width:  i64,
    pub height: i64,
}

impl SpriteSize {
    #[must_use]
    pub const fn half_width(&self) -> i64 {
        self.width / 2
    }

    #[must_use]
    pub const fn half_height(&self) -> i64 {
        self.height / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_accept_reversed_limits() {
        let bounds = Bounds {
            min_x: 10,
            max_x: 0,
            min_y: 5,
            max_y: 5,
        };
        assert_eq!(bounds.x_range(), 0..=10);
        assert_eq!(bounds.y_range(), 5..=5);
        assert!(bounds.contains(Point::new(0, 5)));
        assert!(bounds.contains(Point::new(10, 5)));
        assert!(!bounds.contains(Point::new(11, 5)));
        assert!(!bounds.contains(Point::new(3, 4)));
    }

    #[test]
    fn points_deserialize_from_objects() {
        let point: Point = serde_json::from_str(r#"{"x": 12, "y": -3}"#)
            .expect("valid point");
        assert_eq!(point, Point::new(12, -3));
        assert_eq!(point.to_string(), "(12, -3)");
    }

    #[test]
    fn sprite_halves_round_down() {
        let size = SpriteSize {
            width:  101,
            height: 64,
        };
        assert_eq!(size.half_width(), 50);
        assert_eq!(size.half_height(), 32);
    }
}

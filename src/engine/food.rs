use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::geometry::types::{Bounds, Point, SpriteSize};

/// Picks a uniformly random point inside `bounds`, edges included.
pub fn place_food<R: Rng + ?Sized>(rng: &mut R, bounds: &Bounds) -> Point {
    Point {
        x: rng.gen_range(bounds.x_range()),
        y: rng.gen_range(bounds.y_range()),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Food {
    pub position: Point,
    pub size:     SpriteSize,
}

impl Food {
    /// Whether `point` lies strictly inside the sprite centred on the food.
    #[must_use]
    pub const fn contains(&self, point: Point) -> bool {
        let half_w = self.size.half_width();
        let half_h = self.size.half_height();

        self.position.x - half_w < point.x
            && point.x < self.position.x + half_w
            && self.position.y - half_h < point.y
            && point.y < self.position.y + half_h
    }

    /// Top-left corner of the sprite.
    #[must_use]
    pub const fn anchor(&self) -> Point {
        self.position
            .offset(-self.size.half_width(), -self.size.half_height())
    }
}

#[derive(Clone, Debug)]
pub struct FoodPlacer {
    bounds: Bounds,
    rng:    StdRng,
}

impl FoodPlacer {
    #[must_use]
    pub fn new(bounds: Bounds, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self { bounds, rng }
    }

    pub fn place(&mut self) -> Point {
        place_food(&mut self.rng, &self.bounds)
    }
}

use std::collections::VecDeque;

use log::{debug, info, trace};

use super::{
    body::Body,
    food::{Food, FoodPlacer},
};
use crate::{
    config::EngineConfig,
    geometry::{
        polygon::signed_distance,
        types::{Point, SpriteSize},
    },
};

/// Everything a renderer needs to draw one frame of the game.
#[derive(Debug, Clone, Copy)]
pub struct SnakeView<'a> {
    pub points:      &'a VecDeque<Point>,
    pub food:        Point,
    pub food_anchor: Point,
    pub food_size:   SpriteSize,
    pub score:       u64,
    pub game_over:   bool,
    /// Signed distance from the head to the collision outline, as measured
    /// by the last armed collision check.
    pub clearance:   Option<f64>,
    outline_len:     usize,
}

impl<'a> SnakeView<'a> {
    #[must_use]
    pub fn head(&self) -> Option<Point> {
        self.points.back().copied()
    }

    /// The points the collision check tests the head against. Empty until
    /// the body is long enough for collisions to count.
    pub fn outline(&self) -> impl Iterator<Item = &'a Point> + 'a {
        let points: &'a VecDeque<Point> = self.points;
        points.iter().take(self.outline_len)
    }
}

#[derive(Clone, Debug)]
pub struct SnakeGame {
    config:         EngineConfig,
    body:           Body,
    allowed_length: f64,
    food:           Food,
    placer:         FoodPlacer,
    score:          u64,
    game_over:      bool,
    clearance:      Option<f64>,
}

impl SnakeGame {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let mut placer = FoodPlacer::new(config.food_bounds, config.seed);
        let food = Food {
            position: placer.place(),
            size:     config.food_size,
        };

        Self {
            allowed_length: config.initial_allowed_length,
            config,
            body: Body::new(),
            food,
            placer,
            score: 0,
            game_over: false,
            clearance: None,
        }
    }

    /// A brand new game with the same configuration. Nothing carries over.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self::new(self.config.clone())
    }

    /// Advances the game by one tracked head position.
    ///
    /// Once the game is over this changes nothing and just returns the final
    /// state.
    pub fn update(&mut self, head: Point) -> SnakeView<'_> {
        if self.game_over {
            return self.view();
        }

        self.body.push_head(head);
        let evicted = self.body.trim_to(self.allowed_length);

        trace!(
            "head at {head}, {} points, length {:.1}/{:.1}, evicted {evicted}",
            self.body.len(),
            self.body.total_length(),
            self.allowed_length,
        );

        if self.food.contains(head) {
            self.eat();
        }

        self.check_collision(head);

        self.view()
    }

    fn eat(&mut self) {
        self.food.position = self.placer.place();
        self.allowed_length += self.config.growth_per_food;
        self.score += 1;
        info!(
            "score: {} (food moved to {})",
            self.score, self.food.position
        );
    }

    fn outline_len(&self) -> usize {
        if self.body.len() > self.config.min_body_points {
            self.body.len().saturating_sub(self.config.tail_exclusion)
        } else {
            0
        }
    }

    fn check_collision(&mut self, head: Point) {
        let outline_len = self.outline_len();
        if outline_len == 0 {
            self.clearance = None;
            return;
        }

        self.clearance =
            signed_distance(self.body.points().iter().take(outline_len), head);

        if let Some(clearance) = self.clearance {
            debug!("clearance from body: {clearance:.2}");

            if clearance.abs() <= self.config.collision_threshold {
                info!(
                    "collision at {head} ({clearance:.2} from body), game \
                     over with a score of {}",
                    self.score
                );
                self.game_over = true;
            }
        }
    }

    #[must_use]
    pub fn view(&self) -> SnakeView<'_> {
        SnakeView {
            points:      self.body.points(),
            food:        self.food.position,
            food_anchor: self.food.anchor(),
            food_size:   self.food.size,
            score:       self.score,
            game_over:   self.game_over,
            clearance:   self.clearance,
            outline_len: self.outline_len(),
        }
    }

    /// Moves the food without eating it.
    pub fn set_food_position(&mut self, position: Point) {
        self.food.position = position;
    }

    #[must_use]
    pub const fn body(&self) -> &Body {
        &self.body
    }

    #[must_use]
    pub const fn food(&self) -> &Food {
        &self.food
    }

    #[must_use]
    pub const fn allowed_length(&self) -> f64 {
        self.allowed_length
    }

    #[must_use]
    pub const fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::types::Bounds;

    // food parked in the far corner so walks through the middle never eat it
    fn config() -> EngineConfig {
        EngineConfig {
            food_bounds: Bounds {
                min_x: 5000,
                max_x: 5000,
                min_y: 5000,
                max_y: 5000,
            },
            ..EngineConfig::default()
        }
    }

    #[test]
    fn new_game_is_empty() {
        let game = SnakeGame::new(EngineConfig::default());
        assert!(game.body().is_empty());
        assert_eq!(game.score(), 0);
        assert!(!game.is_game_over());
        assert!((game.allowed_length() - 150.0).abs() < 1e-9);
        assert!(game.config().food_bounds.contains(game.food().position));
    }

    #[test]
    fn view_reflects_the_latest_head() {
        let mut game = SnakeGame::new(config());
        game.update(Point::new(10, 10));
        let view = game.update(Point::new(20, 10));

        assert_eq!(view.points.len(), 2);
        assert_eq!(view.head(), Some(Point::new(20, 10)));
        assert_eq!(view.food, Point::new(5000, 5000));
        assert_eq!(view.food_anchor, Point::new(4950, 4950));
        assert!(!view.game_over);
        assert_eq!(view.outline().count(), 0);
        assert!(view.clearance.is_none());
    }

    #[test]
    fn outline_leaves_out_the_newest_points() {
        let mut game = SnakeGame::new(EngineConfig {
            initial_allowed_length: 10_000.0,
            ..config()
        });
        for x in 0..31 {
            game.update(Point::new(100 + x * 10, 300));
        }

        let view = game.view();
        assert_eq!(view.points.len(), 31);
        assert_eq!(view.outline().count(), 21);
        assert_eq!(view.outline().last(), Some(&Point::new(300, 300)));
        assert!(view.clearance.is_some());
        assert!(!view.game_over);
    }

    #[test]
    fn clearance_goes_away_with_the_outline() {
        let mut game = SnakeGame::new(EngineConfig {
            initial_allowed_length: 1000.0,
            min_body_points: 3,
            tail_exclusion: 1,
            ..config()
        });
        for x in [0, 20, 40, 60] {
            game.update(Point::new(x, 0));
        }
        let view = game.view();
        assert_eq!(view.outline().count(), 3);
        assert!(view.clearance.is_some_and(|c| (c + 20.0).abs() < 1e-9));

        // a long jump trims the body back down to its head
        let view = game.update(Point::new(4000, 0));
        assert_eq!(view.points.len(), 1);
        assert_eq!(view.outline().count(), 0);
        assert!(view.clearance.is_none());
        assert!(!view.game_over);
    }

    #[test]
    fn eating_grows_the_allowance() {
        let mut game = SnakeGame::new(config());
        game.set_food_position(Point::new(200, 200));

        let view = game.update(Point::new(210, 190));
        assert_eq!(view.score, 1);
        assert_eq!(view.food, Point::new(5000, 5000));
        assert!((game.allowed_length() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn reset_keeps_configuration() {
        let mut game = SnakeGame::new(EngineConfig {
            growth_per_food: 75.0,
            ..config()
        });
        game.set_food_position(Point::new(0, 0));
        game.update(Point::new(0, 0));
        assert_eq!(game.score(), 1);

        let fresh = game.reset();
        assert_eq!(fresh.score(), 0);
        assert!(fresh.body().is_empty());
        assert!((fresh.config().growth_per_food - 75.0).abs() < 1e-9);
        assert!((fresh.allowed_length() - 150.0).abs() < 1e-9);
    }
}

pub mod body;
pub mod food;
mod game;

pub use game::{SnakeGame, SnakeView};

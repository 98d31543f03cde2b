mod controller;
pub mod text;
pub mod trace;

use color_eyre::Result;
pub use controller::{FrameLoop, LoopExit, LoopSummary};
use serde::{Deserialize, Serialize};

use crate::{engine::SnakeView, geometry::types::Point};

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    Restart,
    Quit,
}

/// What one captured frame yields: maybe a fingertip, maybe a key press.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Frame {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingertip: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command:   Option<Command>,
}

pub trait InputSource {
    /// Returns `None` once the source has nothing more to give.
    ///
    /// # Errors
    ///
    /// Whatever the underlying capture device or file reports.
    fn next_frame(&mut self) -> Result<Option<Frame>>;
}

pub trait RenderAdapter {
    /// # Errors
    ///
    /// Whatever the underlying display reports.
    fn render(&mut self, view: &SnakeView<'_>) -> Result<()>;
}

use color_eyre::{eyre::WrapErr, Result};
use log::info;

use super::{Command, InputSource, RenderAdapter};
use crate::engine::SnakeGame;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoopExit {
    Quit,
    InputExhausted,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LoopSummary {
    pub exit:       LoopExit,
    pub frames:     u64,
    pub games:      u64,
    pub best_score: u64,
}

/// Owns the game and both collaborators, and drives one update per frame.
pub struct FrameLoop<I, R> {
    game:       SnakeGame,
    input:      I,
    renderer:   R,
    frames:     u64,
    games:      u64,
    best_score: u64,
}

impl<I: InputSource, R: RenderAdapter> FrameLoop<I, R> {
    pub const fn new(game: SnakeGame, input: I, renderer: R) -> Self {
        Self {
            game,
            input,
            renderer,
            frames: 0,
            games: 1,
            best_score: 0,
        }
    }

    /// Processes one frame. Returns `Some` when the loop should stop.
    ///
    /// # Errors
    ///
    /// Fails if the input source or the renderer does.
    pub fn step(&mut self) -> Result<Option<LoopExit>> {
        let Some(frame) = self
            .input
            .next_frame()
            .wrap_err_with(|| format!("failed to read frame {}", self.frames))?
        else {
            info!("input exhausted after {} frames", self.frames);
            return Ok(Some(LoopExit::InputExhausted));
        };

        self.frames += 1;

        let view = match frame.fingertip {
            Some(fingertip) => self.game.update(fingertip),
            None => self.game.view(),
        };
        self.best_score = self.best_score.max(view.score);

        self.renderer
            .render(&view)
            .wrap_err_with(|| format!("failed to render frame {}", self.frames))?;

        match frame.command {
            Some(Command::Restart) => {
                info!(
                    "restarting (previous game scored {})",
                    self.game.score()
                );
                self.game = self.game.reset();
                self.games += 1;
                Ok(None)
            }
            Some(Command::Quit) => {
                info!("quit requested after {} frames", self.frames);
                Ok(Some(LoopExit::Quit))
            }
            None => Ok(None),
        }
    }

    /// Runs until the user quits or the input runs dry.
    ///
    /// # Errors
    ///
    /// Fails if the input source or the renderer does.
    pub fn run(&mut self) -> Result<LoopSummary> {
        let exit = loop {
            if let Some(exit) = self.step()? {
                break exit;
            }
        };

        Ok(LoopSummary {
            exit,
            frames: self.frames,
            games: self.games,
            best_score: self.best_score,
        })
    }

    pub const fn game(&self) -> &SnakeGame {
        &self.game
    }

    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_parts(self) -> (SnakeGame, I, R) {
        (self.game, self.input, self.renderer)
    }
}

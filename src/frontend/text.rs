use std::{fmt, io::Write};

use color_eyre::Result;
use itertools::Itertools;

use super::RenderAdapter;
use crate::{config::DisplayConfig, engine::SnakeView, geometry::types::Point};

const BACKGROUND: char = '.';
const FOOD: char = 'o';
const BODY: char = '#';
const HEAD: char = '@';
const OUTLINE: char = '+';

/// A frame downscaled into character cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    cols:  usize,
    cells: Vec<Vec<char>>,
}

impl Canvas {
    #[must_use]
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            cells: vec![vec![BACKGROUND; cols]; rows],
        }
    }

    pub fn set(&mut self, col: usize, row: usize, glyph: char) {
        if let Some(cell) =
            self.cells.get_mut(row).and_then(|cells| cells.get_mut(col))
        {
            *cell = glyph;
        }
    }

    #[must_use]
    pub fn get(&self, col: usize, row: usize) -> Option<char> {
        self.cells.get(row).and_then(|cells| cells.get(col)).copied()
    }

    /// Writes `text` centred on `row`, cut off at the canvas edge.
    pub fn centre_text(&mut self, row: usize, text: &str) {
        let len = text.chars().count().min(self.cols);
        let start = (self.cols - len) / 2;
        for (i, glyph) in text.chars().take(len).enumerate() {
            self.set(start + i, row, glyph);
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.cells.len()
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for glyph in row {
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub struct TextRenderer<W> {
    writer:       W,
    display:      DisplayConfig,
    show_outline: bool,
}

impl<W: Write> TextRenderer<W> {
    pub const fn new(writer: W, display: DisplayConfig) -> Self {
        Self {
            writer,
            display,
            show_outline: false,
        }
    }

    /// Also mark the points the collision check is testing against.
    #[must_use]
    pub fn with_outline(mut self, show: bool) -> Self {
        self.show_outline = show;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    const fn cell_width(&self) -> i64 {
        if self.display.cell_width > 0 {
            self.display.cell_width
        } else {
            1
        }
    }

    const fn cell_height(&self) -> i64 {
        if self.display.cell_height > 0 {
            self.display.cell_height
        } else {
            1
        }
    }

    fn grid_size(&self) -> (usize, usize) {
        let cols = (self.display.frame_width + self.cell_width() - 1)
            / self.cell_width();
        let rows = (self.display.frame_height + self.cell_height() - 1)
            / self.cell_height();
        (
            usize::try_from(cols).unwrap_or(0),
            usize::try_from(rows).unwrap_or(0),
        )
    }

    fn cell(&self, point: Point) -> Option<(usize, usize)> {
        if point.x < 0
            || point.y < 0
            || point.x >= self.display.frame_width
            || point.y >= self.display.frame_height
        {
            return None;
        }

        let col = usize::try_from(point.x / self.cell_width()).ok()?;
        let row = usize::try_from(point.y / self.cell_height()).ok()?;
        Some((col, row))
    }

    fn plot(&self, canvas: &mut Canvas, point: Point, glyph: char) {
        if let Some((col, row)) = self.cell(point) {
            canvas.set(col, row, glyph);
        }
    }

    // liang-barsky against the frame, so a segment from far off screen
    // only walks its visible part
    fn clip(&self, a: Point, b: Point) -> Option<((f64, f64), (f64, f64))> {
        let (ax, ay) = (a.x as f64, a.y as f64);
        let (dx, dy) = (b.x as f64 - ax, b.y as f64 - ay);
        let max_x = (self.display.frame_width - 1) as f64;
        let max_y = (self.display.frame_height - 1) as f64;

        let mut t0: f64 = 0.0;
        let mut t1: f64 = 1.0;

        for (p, q) in [(-dx, ax), (dx, max_x - ax), (-dy, ay), (dy, max_y - ay)]
        {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }

            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
            if t0 > t1 {
                return None;
            }
        }

        Some((
            (t0.mul_add(dx, ax), t0.mul_add(dy, ay)),
            (t1.mul_add(dx, ax), t1.mul_add(dy, ay)),
        ))
    }

    // walks the segment in steps no longer than one cell
    fn line(&self, canvas: &mut Canvas, a: Point, b: Point, glyph: char) {
        let Some(((x0, y0), (x1, y1))) = self.clip(a, b) else {
            return;
        };
        let (dx, dy) = (x1 - x0, y1 - y0);

        let steps = (dx.abs() / self.cell_width() as f64)
            .max(dy.abs() / self.cell_height() as f64)
            .ceil()
            .max(1.0) as u64;

        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let point = Point {
                x: t.mul_add(dx, x0).round() as i64,
                y: t.mul_add(dy, y0).round() as i64,
            };
            self.plot(canvas, point, glyph);
        }
    }

    fn fill_food(&self, canvas: &mut Canvas, view: &SnakeView<'_>) {
        let anchor = view.food_anchor;
        let x0 = anchor.x.max(0);
        let y0 = anchor.y.max(0);
        let x1 = anchor
            .x
            .saturating_add(view.food_size.width - 1)
            .min(self.display.frame_width - 1);
        let y1 = anchor
            .y
            .saturating_add(view.food_size.height - 1)
            .min(self.display.frame_height - 1);

        if x0 > x1 || y0 > y1 {
            return;
        }

        let (Some((c0, r0)), Some((c1, r1))) =
            (self.cell(Point::new(x0, y0)), self.cell(Point::new(x1, y1)))
        else {
            return;
        };

        for row in r0..=r1 {
            for col in c0..=c1 {
                canvas.set(col, row, FOOD);
            }
        }
    }

    /// Draws `view` onto a fresh canvas.
    #[must_use]
    pub fn draw(&self, view: &SnakeView<'_>) -> Canvas {
        let (cols, rows) = self.grid_size();
        let mut canvas = Canvas::new(cols, rows);

        if view.game_over {
            let middle = rows / 2;
            canvas.centre_text(middle.saturating_sub(1), "GAME OVER");
            canvas.centre_text(middle, &format!("score: {}", view.score));
            return canvas;
        }

        self.fill_food(&mut canvas, view);

        for (a, b) in view.points.iter().tuple_windows() {
            self.line(&mut canvas, *a, *b, BODY);
        }

        if self.show_outline {
            for point in view.outline() {
                self.plot(&mut canvas, *point, OUTLINE);
            }
        }

        if let Some(head) = view.head() {
            self.plot(&mut canvas, head, HEAD);
        }

        canvas
    }
}

impl<W: Write> RenderAdapter for TextRenderer<W> {
    fn render(&mut self, view: &SnakeView<'_>) -> Result<()> {
        let canvas = self.draw(view);
        let status = if view.game_over { "game over" } else { "playing" };
        writeln!(self.writer, "score: {} ({status})", view.score)?;
        write!(self.writer, "{canvas}")?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

use std::fmt;
use std::io::Write;

use super::snapshot::{BoardSnapshot, SnakeSnapshot};
use super::types::{Cell, Direction};

const EMPTY: char = ' ';
const WALL: char = '▩';
const APPLE: char = '◈';
const SNAKE_ONE_BODY: char = '■';
const SNAKE_TWO_BODY: char = '□';

fn snake_one_head(direction: Direction) -> char {
    match direction {
        Direction::Up => '▲',
        Direction::Down => '▼',
        Direction::Left => '◀',
        Direction::Right => '▶',
    }
}

fn snake_two_head(direction: Direction) -> char {
    match direction {
        Direction::Up => '△',
        Direction::Down => '▽',
        Direction::Left => '◁',
        Direction::Right => '▷',
    }
}

/// Receives one frame per tick.
pub trait FrameSink {
    fn draw(&mut self, frame: &BoardSnapshot) -> Result<(), String>;
}

fn snake_glyph(snake: &SnakeSnapshot, cell: Cell, head_glyph: fn(Direction) -> char, body: char) -> Option<char> {
    if !snake.segments.contains(&cell) {
        return None;
    }
    match snake.head() {
        Some((head, facing)) if head == cell => Some(head_glyph(facing)),
        _ => Some(body),
    }
}

impl BoardSnapshot {
    fn glyph_at(&self, cell: Cell) -> char {
        snake_glyph(&self.snake_one, cell, snake_one_head, SNAKE_ONE_BODY)
            .or_else(|| snake_glyph(&self.snake_two, cell, snake_two_head, SNAKE_TWO_BODY))
            .unwrap_or(if self.apples.contains(&cell) { APPLE } else { EMPTY })
    }
}

/// Walled text board; snake one is drawn over snake two, snakes over apples.
impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.field_size.width;
        let height = self.field_size.height;

        for row in -1..=height {
            let mut line = String::with_capacity((width as usize + 2) * 3);
            for col in -1..=width {
                let on_wall = row == -1 || row == height || col == -1 || col == width;
                line.push(if on_wall { WALL } else { self.glyph_at(Cell::new(row, col)) });
            }
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Writes each frame as text to any `Write`r.
pub struct TextView<W: Write> {
    out: W,
}

impl<W: Write> TextView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for TextView<W> {
    fn draw(&mut self, frame: &BoardSnapshot) -> Result<(), String> {
        write!(self.out, "{}", frame)
            .and_then(|_| self.out.flush())
            .map_err(|e| format!("Failed to draw frame: {}", e))
    }
}

use ringbuffer::{AllocRingBuffer, RingBuffer};

use super::types::{Direction, PlayerSlot};

/// Turns buffered per player, including the direction currently in use.
pub const DIRECTION_CUE_CAPACITY: usize = 3;

/// Supplies both players' directions for the next tick.
pub trait InputSource {
    fn next_directions(&mut self) -> (Direction, Direction);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlEvent {
    Start,
    Turn { player: PlayerSlot, direction: Direction },
    Quit,
}

/// Short queue of pending turns so quick double presses are not lost
/// between ticks. The front entry is the direction in use; presses arriving
/// while the cue is full are dropped.
struct DirectionCue {
    initial: Direction,
    cue: AllocRingBuffer<Direction>,
}

impl DirectionCue {
    fn new(initial: Direction) -> Self {
        let mut cue = AllocRingBuffer::new(DIRECTION_CUE_CAPACITY);
        cue.enqueue(initial);
        Self { initial, cue }
    }

    fn reset(&mut self) {
        self.cue.clear();
        self.cue.enqueue(self.initial);
    }

    fn push(&mut self, direction: Direction) -> bool {
        if self.cue.is_full() {
            return false;
        }
        self.cue.enqueue(direction);
        true
    }

    fn drop_stale(&mut self) {
        if self.cue.len() > 1 {
            self.cue.dequeue();
        }
    }

    fn next(&mut self) -> Direction {
        self.drop_stale();
        let direction = self.cue.front().copied().unwrap_or(self.initial);
        self.drop_stale();
        direction
    }

    fn pending(&self) -> Vec<Direction> {
        self.cue.iter().copied().collect()
    }
}

pub struct QueuedController {
    snake_one: DirectionCue,
    snake_two: DirectionCue,
}

impl Default for QueuedController {
    fn default() -> Self {
        Self::new(Direction::Right, Direction::Left)
    }
}

impl QueuedController {
    pub fn new(snake_one_start: Direction, snake_two_start: Direction) -> Self {
        Self {
            snake_one: DirectionCue::new(snake_one_start),
            snake_two: DirectionCue::new(snake_two_start),
        }
    }

    pub fn reset(&mut self) {
        self.snake_one.reset();
        self.snake_two.reset();
    }

    /// Queues a turn; returns `false` when that player's cue is full.
    pub fn queue_turn(&mut self, player: PlayerSlot, direction: Direction) -> bool {
        self.cue_mut(player).push(direction)
    }

    pub fn pending(&self, player: PlayerSlot) -> Vec<Direction> {
        match player {
            PlayerSlot::One => self.snake_one.pending(),
            PlayerSlot::Two => self.snake_two.pending(),
        }
    }

    fn cue_mut(&mut self, player: PlayerSlot) -> &mut DirectionCue {
        match player {
            PlayerSlot::One => &mut self.snake_one,
            PlayerSlot::Two => &mut self.snake_two,
        }
    }
}

impl InputSource for QueuedController {
    fn next_directions(&mut self) -> (Direction, Direction) {
        (self.snake_one.next(), self.snake_two.next())
    }
}

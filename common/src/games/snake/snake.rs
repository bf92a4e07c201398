use std::collections::VecDeque;

use super::error::SnakeError;
use super::types::{Cell, Direction};

/// One player's body: segments head-first, with a parallel facing per segment.
///
/// Geometry is never validated. Disjoint or overlapping bodies are legal
/// states; collision detection lives in the game model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    segments: VecDeque<Cell>,
    facings: VecDeque<Direction>,
    apples_eaten: u32,
}

impl Snake {
    /// Straight snake of `length` segments trailing behind `head`.
    pub fn new(head: Cell, facing: Direction, length: usize) -> Result<Self, SnakeError> {
        if length < 1 {
            return Err(SnakeError::InvalidLength { length });
        }

        let backwards = facing.opposite();
        let mut segments = VecDeque::with_capacity(length + 1);
        let mut cell = head;
        segments.push_back(cell);
        for _ in 1..length {
            cell = cell.step(backwards);
            segments.push_back(cell);
        }

        Ok(Self {
            segments,
            facings: std::iter::repeat_n(facing, length).collect(),
            apples_eaten: 0,
        })
    }

    /// Installs `segments` and `facings` as given, head first.
    pub fn from_segments(
        segments: impl IntoIterator<Item = Cell>,
        facings: impl IntoIterator<Item = Direction>,
    ) -> Result<Self, SnakeError> {
        let segments: VecDeque<Cell> = segments.into_iter().collect();
        let facings: VecDeque<Direction> = facings.into_iter().collect();
        if segments.is_empty() || segments.len() != facings.len() {
            return Err(SnakeError::MismatchedSegments {
                segments: segments.len(),
                facings: facings.len(),
            });
        }

        Ok(Self {
            segments,
            facings,
            apples_eaten: 0,
        })
    }

    /// Advances one cell. A request to reverse onto the body keeps the
    /// current heading instead.
    pub fn move_towards(&mut self, direction: Direction) {
        let heading = self.heading();
        let direction = if direction.is_opposite(&heading) {
            heading
        } else {
            direction
        };

        let next_head = self.head().step(direction);
        self.segments.push_front(next_head);
        self.segments.pop_back();
        self.facings.push_front(direction);
        self.facings.pop_back();
    }

    /// Adds one segment straight behind the tail, facing the way the tail faces.
    ///
    /// The new cell may already be occupied; that surfaces on the next
    /// collision check rather than here.
    pub fn grow(&mut self) {
        let tail_facing = self.tail_facing();
        let new_tail = self.tail().step(tail_facing.opposite());
        self.segments.push_back(new_tail);
        self.facings.push_back(tail_facing);
        self.apples_eaten += 1;
    }

    pub fn segments(&self) -> &VecDeque<Cell> {
        &self.segments
    }

    pub fn facings(&self) -> &VecDeque<Direction> {
        &self.facings
    }

    pub fn apples_eaten(&self) -> u32 {
        self.apples_eaten
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn head(&self) -> Cell {
        self.segments[0]
    }

    pub fn heading(&self) -> Direction {
        self.facings[0]
    }

    pub fn tail(&self) -> Cell {
        self.segments[self.segments.len() - 1]
    }

    fn tail_facing(&self) -> Direction {
        self.facings[self.facings.len() - 1]
    }

    pub fn body(&self) -> impl Iterator<Item = &Cell> {
        self.segments.iter().skip(1)
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.segments.contains(&cell)
    }

    #[cfg(test)]
    pub(crate) fn set_apples_eaten(&mut self, apples_eaten: u32) {
        self.apples_eaten = apples_eaten;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::{Down, Left, Right, Up};

    fn cells(coords: &[(i32, i32)]) -> Vec<Cell> {
        coords.iter().copied().map(Cell::from).collect()
    }

    fn snake_at_5_5(facing: Direction) -> Snake {
        Snake::new(Cell::new(5, 5), facing, 3).unwrap()
    }

    #[test]
    fn test_new_trails_body_behind_head() {
        let cases = [
            (Right, vec![(5, 5), (5, 4), (5, 3)]),
            (Left, vec![(5, 5), (5, 6), (5, 7)]),
            (Up, vec![(5, 5), (6, 5), (7, 5)]),
            (Down, vec![(5, 5), (4, 5), (3, 5)]),
        ];
        for (facing, expected) in cases {
            let snake = snake_at_5_5(facing);
            assert_eq!(snake.segments(), &cells(&expected));
            assert_eq!(snake.facings(), &vec![facing; 3]);
        }
    }

    #[test]
    fn test_new_allows_off_board_coordinates() {
        let snake = Snake::new(Cell::new(-1, 0), Down, 3).unwrap();
        assert_eq!(snake.segments(), &cells(&[(-1, 0), (-2, 0), (-3, 0)]));
    }

    #[test]
    fn test_new_length_one() {
        let snake = Snake::new(Cell::new(3, 3), Right, 1).unwrap();
        assert_eq!(snake.segments(), &cells(&[(3, 3)]));
        assert_eq!(snake.facings(), &vec![Right]);
    }

    #[test]
    fn test_new_rejects_zero_length() {
        let result = Snake::new(Cell::new(3, 3), Right, 0);
        assert_eq!(result, Err(SnakeError::InvalidLength { length: 0 }));
    }

    #[test]
    fn test_from_segments_keeps_data_verbatim() {
        let segments = cells(&[(5, 5), (5, 4), (4, 4)]);
        let facings = vec![Down, Down, Right];
        let snake = Snake::from_segments(segments.clone(), facings.clone()).unwrap();
        assert_eq!(snake.segments(), &segments);
        assert_eq!(snake.facings(), &facings);
        assert_eq!(snake.apples_eaten(), 0);
    }

    #[test]
    fn test_from_segments_rejects_mismatched_lengths() {
        let result = Snake::from_segments(cells(&[(0, 0), (0, 1)]), vec![Left]);
        assert_eq!(
            result,
            Err(SnakeError::MismatchedSegments { segments: 2, facings: 1 })
        );
        assert!(Snake::from_segments(Vec::new(), Vec::new()).is_err());
    }

    #[test]
    fn test_move_straight_and_turns() {
        let cases = [
            (Right, vec![(5, 6), (5, 5), (5, 4)], vec![Right, Right, Right]),
            (Up, vec![(4, 5), (5, 5), (5, 4)], vec![Up, Right, Right]),
            (Down, vec![(6, 5), (5, 5), (5, 4)], vec![Down, Right, Right]),
        ];
        for (direction, expected_segments, expected_facings) in cases {
            let mut snake = snake_at_5_5(Right);
            snake.move_towards(direction);
            assert_eq!(snake.segments(), &cells(&expected_segments));
            assert_eq!(snake.facings(), &expected_facings);
        }
    }

    #[test]
    fn test_move_opposite_keeps_heading() {
        let mut snake = snake_at_5_5(Right);
        snake.move_towards(Left);
        assert_eq!(snake.segments(), &cells(&[(5, 6), (5, 5), (5, 4)]));
        assert_eq!(snake.facings(), &vec![Right, Right, Right]);
    }

    #[test]
    fn test_move_opposite_uses_head_facing_not_tail() {
        let mut snake =
            Snake::from_segments(cells(&[(4, 5), (5, 5), (5, 4)]), vec![Up, Right, Right]).unwrap();
        snake.move_towards(Left);
        assert_eq!(snake.segments(), &cells(&[(4, 4), (4, 5), (5, 5)]));
        assert_eq!(snake.facings(), &vec![Left, Up, Right]);

        snake.move_towards(Right);
        assert_eq!(snake.head(), Cell::new(4, 3));
    }

    #[test]
    fn test_moves_preserve_length() {
        let mut snake = snake_at_5_5(Right);
        for direction in [Up, Up, Left, Down, Right, Right, Left, Up] {
            snake.move_towards(direction);
            assert_eq!(snake.segments().len(), 3);
            assert_eq!(snake.facings().len(), 3);
        }
    }

    #[test]
    fn test_grow_extends_behind_tail_with_tail_facing() {
        let mut snake =
            Snake::from_segments(cells(&[(4, 5), (5, 5), (5, 4)]), vec![Up, Right, Right]).unwrap();
        snake.grow();
        assert_eq!(snake.segments(), &cells(&[(4, 5), (5, 5), (5, 4), (5, 3)]));
        assert_eq!(snake.facings(), &vec![Up, Right, Right, Right]);
        assert_eq!(snake.apples_eaten(), 1);

        let mut vertical = Snake::from_segments(cells(&[(2, 2)]), vec![Down]).unwrap();
        vertical.grow();
        vertical.grow();
        assert_eq!(vertical.segments(), &cells(&[(2, 2), (1, 2), (0, 2)]));
        assert_eq!(vertical.facings(), &vec![Down, Down, Down]);
        assert_eq!(vertical.apples_eaten(), 2);
    }

    #[test]
    fn test_grow_into_own_body_is_tolerated() {
        let mut snake = Snake::from_segments(
            cells(&[(5, 5), (5, 6), (5, 7)]),
            vec![Left, Left, Right],
        )
        .unwrap();
        snake.grow();
        assert_eq!(snake.tail(), Cell::new(5, 6));
        assert_eq!(snake.segments().iter().filter(|&&c| c == Cell::new(5, 6)).count(), 2);
        assert_eq!(snake.len(), 4);
    }
}

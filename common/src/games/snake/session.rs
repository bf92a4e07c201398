use crate::games::{RandomSource, SessionRng};
use crate::log;
use super::controller::{ControlEvent, InputSource, QueuedController};
use super::error::SnakeError;
use super::game_state::SnakeGameModel;
use super::text_view::FrameSink;
use super::types::{GamePhase, PlayerSlot, RoundWinners};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    Engine(SnakeError),
    Render(String),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::Engine(e) => write!(f, "Engine error: {}", e),
            SessionError::Render(e) => write!(f, "Render error: {}", e),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<SnakeError> for SessionError {
    fn from(e: SnakeError) -> Self {
        SessionError::Engine(e)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Continue,
    RoundOver(RoundWinners),
    Quit,
}

/// Drives one model from control events and ticks, drawing every change.
///
/// The session, not the model, moves the phase: NotStarted -> Running on
/// `Start`, Running -> Ended once `snake_won` names a winner, and
/// Ended -> Running (after a reset) on the next `Start`.
pub struct SnakeSession<F: FrameSink, R: RandomSource = SessionRng> {
    model: SnakeGameModel<R>,
    controller: QueuedController,
    sink: F,
}

impl<F: FrameSink, R: RandomSource> SnakeSession<F, R> {
    pub fn new(model: SnakeGameModel<R>, sink: F) -> Self {
        let controller = QueuedController::new(
            model.snake_one().heading(),
            model.snake_two().heading(),
        );
        Self {
            model,
            controller,
            sink,
        }
    }

    pub fn handle_event(&mut self, event: ControlEvent) -> Result<SessionStatus, SessionError> {
        match (self.model.phase(), event) {
            (_, ControlEvent::Quit) => {
                log!("Quit requested");
                return Ok(SessionStatus::Quit);
            }
            (GamePhase::NotStarted, ControlEvent::Start) => {
                self.start_round()?;
            }
            (GamePhase::Ended, ControlEvent::Start) => {
                self.model.reset()?;
                self.controller.reset();
                self.start_round()?;
            }
            (GamePhase::Running, ControlEvent::Turn { player, direction }) => {
                if !self.controller.queue_turn(player, direction) {
                    log!("Dropped {} turn for {}: cue full", direction, player);
                }
            }
            _ => {}
        }
        Ok(SessionStatus::Continue)
    }

    fn start_round(&mut self) -> Result<(), SessionError> {
        self.model.set_phase(GamePhase::Running);
        log!("Round started");
        self.draw()
    }

    /// Advances one tick while a round is running; otherwise does nothing.
    pub fn tick(&mut self) -> Result<SessionStatus, SessionError> {
        if self.model.phase() != GamePhase::Running {
            return Ok(SessionStatus::Continue);
        }

        let (snake_one_direction, snake_two_direction) = self.controller.next_directions();
        self.model
            .move_snakes(snake_one_direction, snake_two_direction)?;

        let winners = self.model.snake_won();
        let status = if winners.any() {
            self.finish_round(winners);
            SessionStatus::RoundOver(winners)
        } else {
            SessionStatus::Continue
        };

        self.draw()?;
        Ok(status)
    }

    fn finish_round(&mut self, winners: RoundWinners) {
        for slot in [PlayerSlot::One, PlayerSlot::Two] {
            if let Some(reason) = self.model.collision_reason(slot) {
                log!("{} {}", slot, reason);
            }
        }
        log!(
            "Round over: {} (apples {} - {})",
            winners,
            self.model.snake_one().apples_eaten(),
            self.model.snake_two().apples_eaten()
        );
        self.model.set_phase(GamePhase::Ended);
    }

    pub fn draw(&mut self) -> Result<(), SessionError> {
        self.sink
            .draw(&self.model.snapshot())
            .map_err(SessionError::Render)
    }

    pub fn model(&self) -> &SnakeGameModel<R> {
        &self.model
    }

    pub fn controller(&self) -> &QueuedController {
        &self.controller
    }

    pub fn sink(&self) -> &F {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::{BoardSnapshot, Cell, Direction, Snake, SnakeGameSettings};

    #[derive(Default)]
    struct RecordingSink {
        frames: Vec<BoardSnapshot>,
    }

    impl FrameSink for RecordingSink {
        fn draw(&mut self, frame: &BoardSnapshot) -> Result<(), String> {
            self.frames.push(frame.clone());
            Ok(())
        }
    }

    struct BrokenSink;

    impl FrameSink for BrokenSink {
        fn draw(&mut self, _frame: &BoardSnapshot) -> Result<(), String> {
            Err("display gone".to_string())
        }
    }

    fn session() -> SnakeSession<RecordingSink> {
        let model = SnakeGameModel::new(SnakeGameSettings::default(), SessionRng::new(42)).unwrap();
        SnakeSession::new(model, RecordingSink::default())
    }

    /// Snake one two steps from the bottom wall, heading down.
    fn doomed_session() -> SnakeSession<RecordingSink> {
        let one = Snake::from_segments(
            [Cell::new(17, 5), Cell::new(16, 5)],
            [Direction::Down, Direction::Down],
        )
        .unwrap();
        let model = SnakeGameModel::with_snakes(
            SnakeGameSettings::default(),
            SessionRng::new(42),
            Some(one),
            None,
        )
        .unwrap();
        SnakeSession::new(model, RecordingSink::default())
    }

    #[test]
    fn test_tick_before_start_is_ignored() {
        let mut session = session();
        assert_eq!(session.tick(), Ok(SessionStatus::Continue));
        assert_eq!(session.model().snake_one().head(), Cell::new(8, 4));
        assert!(session.sink().frames.is_empty());
    }

    #[test]
    fn test_start_runs_and_draws() {
        let mut session = session();
        session.handle_event(ControlEvent::Start).unwrap();
        assert_eq!(session.model().phase(), GamePhase::Running);
        assert_eq!(session.sink().frames.len(), 1);

        session.tick().unwrap();
        assert_eq!(session.model().snake_one().head(), Cell::new(8, 5));
        assert_eq!(session.model().snake_two().head(), Cell::new(10, 13));
        assert_eq!(session.sink().frames.len(), 2);
    }

    #[test]
    fn test_turns_before_start_are_ignored() {
        let mut session = session();
        session
            .handle_event(ControlEvent::Turn { player: PlayerSlot::One, direction: Direction::Up })
            .unwrap();
        assert_eq!(session.controller().pending(PlayerSlot::One), vec![Direction::Right]);
    }

    #[test]
    fn test_turn_is_applied_on_next_tick() {
        let mut session = session();
        session.handle_event(ControlEvent::Start).unwrap();
        session
            .handle_event(ControlEvent::Turn { player: PlayerSlot::One, direction: Direction::Up })
            .unwrap();
        session.tick().unwrap();
        assert_eq!(session.model().snake_one().head(), Cell::new(7, 4));
    }

    #[test]
    fn test_collision_ends_round() {
        let mut session = doomed_session();
        session.handle_event(ControlEvent::Start).unwrap();
        assert_eq!(session.tick(), Ok(SessionStatus::Continue));
        let status = session.tick().unwrap();
        assert_eq!(
            status,
            SessionStatus::RoundOver(RoundWinners { snake_one: false, snake_two: true })
        );
        assert_eq!(session.model().phase(), GamePhase::Ended);
        assert_eq!(session.sink().frames.last().map(|f| f.phase), Some(GamePhase::Ended));

        let head_after_end = session.model().snake_one().head();
        assert_eq!(session.tick(), Ok(SessionStatus::Continue));
        assert_eq!(session.model().snake_one().head(), head_after_end);
    }

    #[test]
    fn test_start_after_end_resets_to_default() {
        let mut session = doomed_session();
        session.handle_event(ControlEvent::Start).unwrap();
        session.tick().unwrap();
        session.tick().unwrap();

        session.handle_event(ControlEvent::Start).unwrap();

        assert_eq!(session.model().phase(), GamePhase::Running);
        assert_eq!(session.model().snake_one().head(), Cell::new(8, 4));
        assert_eq!(session.model().apples(), &[Cell::new(9, 9)]);
    }

    #[test]
    fn test_quit_in_any_phase() {
        let mut session = session();
        assert_eq!(session.handle_event(ControlEvent::Quit), Ok(SessionStatus::Quit));
        session.handle_event(ControlEvent::Start).unwrap();
        assert_eq!(session.handle_event(ControlEvent::Quit), Ok(SessionStatus::Quit));
    }

    #[test]
    fn test_render_failure_is_reported() {
        let model = SnakeGameModel::new(SnakeGameSettings::default(), SessionRng::new(1)).unwrap();
        let mut session = SnakeSession::new(model, BrokenSink);
        assert_eq!(
            session.handle_event(ControlEvent::Start),
            Err(SessionError::Render("display gone".to_string()))
        );
    }
}

use thiserror::Error;
use crate::core::{Board, GameResult, Player, GameEvent, GameEventHandler, EventLogger, CELL_COUNT};
use tracing::{debug, info};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    #[error("cell is already occupied")]
    AlreadyOccupied,

    #[error("game is already over")]
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was placed and the turn passed to the opponent.
    Continued,
    /// The move was placed and finished the game.
    Ended(GameResult),
    /// Nothing changed.
    Rejected(MoveRejection),
}

/// Read-only copy of the engine state for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub turn: Player,
    pub result: GameResult,
}

pub struct GameEngine {
    board: Board,
    turn: Player,
    result: GameResult,
    event_log: EventLogger,
    handlers: Vec<Box<dyn GameEventHandler>>,
}

impl GameEngine {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            result: GameResult::InProgress,
            event_log: EventLogger::new(),
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn GameEventHandler>) {
        self.handlers.push(handler);
    }

    /// Places the current player's mark on `index`.
    ///
    /// # Panics
    ///
    /// If `index` is not in `0..9`. Callers only ever offer the nine cells.
    pub fn attempt_move(&mut self, index: usize) -> MoveOutcome {
        assert!(index < CELL_COUNT, "cell index {} out of range", index);

        let mover = self.turn;

        if !self.board.get(index).is_empty() {
            return self.reject(mover, index, MoveRejection::AlreadyOccupied);
        }
        if self.result.is_over() {
            return self.reject(mover, index, MoveRejection::GameOver);
        }

        self.board.place(index, mover);
        self.emit_event(GameEvent::move_made(mover, index));
        debug!("{} took cell {}", mover, index);

        self.result = self.board.evaluate();
        match self.result {
            GameResult::InProgress => {
                self.turn = mover.opponent();
                MoveOutcome::Continued
            }
            GameResult::Win(winner) => {
                info!("{} wins", winner);
                self.emit_event(GameEvent::game_won(winner));
                MoveOutcome::Ended(self.result)
            }
            GameResult::Draw => {
                info!("Game drawn");
                self.emit_event(GameEvent::game_drawn());
                MoveOutcome::Ended(self.result)
            }
        }
    }

    pub fn reset(&mut self) {
        self.board.clear();
        self.turn = Player::X;
        self.result = GameResult::InProgress;

        self.emit_event(GameEvent::game_reset());
        info!("New game started");
    }

    pub fn current_state(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            turn: self.turn,
            result: self.result,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn is_over(&self) -> bool {
        self.result.is_over()
    }

    /// Event counters kept since the engine was created; `reset` does not
    /// clear them.
    pub fn event_log(&self) -> &EventLogger {
        &self.event_log
    }

    fn reject(&mut self, mover: Player, index: usize, reason: MoveRejection) -> MoveOutcome {
        debug!("Rejected move by {} on cell {}: {}", mover, index, reason);
        self.emit_event(GameEvent::move_rejected(mover, index, reason));
        MoveOutcome::Rejected(reason)
    }

    fn emit_event(&mut self, event: GameEvent) {
        self.event_log.handle_event(&event);
        for handler in &mut self.handlers {
            handler.handle_event(&event);
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, GameEventType};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder(Rc<RefCell<Vec<GameEventType>>>);

    impl GameEventHandler for Recorder {
        fn handle_event(&mut self, event: &GameEvent) {
            self.0.borrow_mut().push(event.event_type);
        }
    }

    fn play(engine: &mut GameEngine, moves: &[usize]) -> MoveOutcome {
        let mut last = MoveOutcome::Continued;
        for &index in moves {
            last = engine.attempt_move(index);
        }
        last
    }

    #[test]
    fn test_engine_creation() {
        let engine = GameEngine::new();
        let state = engine.current_state();

        assert_eq!(state.board, Board::new());
        assert_eq!(state.turn, Player::X);
        assert_eq!(state.result, GameResult::InProgress);
        assert!(!engine.is_over());
    }

    #[test]
    fn test_move_alternates_turn() {
        let mut engine = GameEngine::new();

        assert_eq!(engine.attempt_move(4), MoveOutcome::Continued);
        assert_eq!(engine.board().get(4), Cell::Taken(Player::X));
        assert_eq!(engine.turn(), Player::O);

        assert_eq!(engine.attempt_move(0), MoveOutcome::Continued);
        assert_eq!(engine.board().get(0), Cell::Taken(Player::O));
        assert_eq!(engine.turn(), Player::X);
    }

    #[test]
    fn test_x_wins_top_row() {
        let mut engine = GameEngine::new();

        assert_eq!(play(&mut engine, &[0, 3, 1, 4]), MoveOutcome::Continued);
        assert_eq!(engine.attempt_move(2), MoveOutcome::Ended(GameResult::Win(Player::X)));
        assert_eq!(engine.turn(), Player::X);
        assert_eq!(engine.result(), GameResult::Win(Player::X));
    }

    #[test]
    fn test_o_wins_column() {
        let mut engine = GameEngine::new();

        let outcome = play(&mut engine, &[0, 1, 3, 4, 8, 7]);
        assert_eq!(outcome, MoveOutcome::Ended(GameResult::Win(Player::O)));
        assert_eq!(engine.turn(), Player::O);
    }

    #[test]
    fn test_x_wins_on_fifth_move_for_every_line() {
        for line in crate::core::LINES {
            let others: Vec<usize> = (0..CELL_COUNT).filter(|i| !line.contains(i)).collect();
            // Pick two O cells that cannot complete a line of their own.
            let o_moves = [others[0], others[others.len() - 1]];

            let mut engine = GameEngine::new();
            engine.attempt_move(line[0]);
            engine.attempt_move(o_moves[0]);
            engine.attempt_move(line[1]);
            engine.attempt_move(o_moves[1]);

            assert_eq!(
                engine.attempt_move(line[2]),
                MoveOutcome::Ended(GameResult::Win(Player::X)),
                "line {:?}",
                line
            );
            assert_eq!(engine.turn(), Player::X);
        }
    }

    #[test]
    fn test_draw() {
        let mut engine = GameEngine::new();

        // X O X
        // X O O
        // O X X
        let outcome = play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(outcome, MoveOutcome::Ended(GameResult::Draw));
        assert_eq!(engine.result(), GameResult::Draw);
        assert_eq!(engine.turn(), Player::X);
        assert!(engine.board().is_full());
    }

    #[test]
    fn test_diagonal_completed_before_board_fills() {
        let mut engine = GameEngine::new();

        // X holds 2, 4 and 6 after the seventh move.
        let outcome = play(&mut engine, &[0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(outcome, MoveOutcome::Ended(GameResult::Win(Player::X)));
    }

    #[test]
    fn test_win_takes_precedence_over_draw_on_last_move() {
        let mut engine = GameEngine::new();

        // X O X
        // O X O
        // O X X  <- the ninth move fills the board and completes 0-4-8
        let outcome = play(&mut engine, &[0, 1, 2, 3, 7, 5, 4, 6, 8]);
        assert_eq!(outcome, MoveOutcome::Ended(GameResult::Win(Player::X)));
        assert!(engine.board().is_full());
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let mut engine = GameEngine::new();

        assert_eq!(engine.attempt_move(0), MoveOutcome::Continued);
        let before = engine.current_state();

        assert_eq!(engine.attempt_move(0), MoveOutcome::Rejected(MoveRejection::AlreadyOccupied));
        assert_eq!(engine.current_state(), before);
        assert_eq!(engine.turn(), Player::O);
    }

    #[test]
    fn test_rejection_never_changes_state() {
        let mut engine = GameEngine::new();
        let moves = [4, 0, 8, 2, 1, 7, 6, 3, 5];

        for (played, &index) in moves.iter().enumerate() {
            engine.attempt_move(index);
            for &taken in &moves[..=played] {
                let before = engine.current_state();
                let outcome = engine.attempt_move(taken);
                assert!(matches!(outcome, MoveOutcome::Rejected(_)));
                assert_eq!(engine.current_state(), before);
            }
        }
    }

    #[test]
    fn test_move_after_game_over_is_rejected() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[0, 3, 1, 4, 2]);
        let before = engine.current_state();

        assert_eq!(engine.attempt_move(8), MoveOutcome::Rejected(MoveRejection::GameOver));
        assert_eq!(engine.current_state(), before);
    }

    #[test]
    fn test_filled_cell_after_game_over_is_occupied() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[0, 3, 1, 4, 2]);
        let before = engine.current_state();

        assert_eq!(engine.attempt_move(0), MoveOutcome::Rejected(MoveRejection::AlreadyOccupied));
        assert_eq!(engine.attempt_move(3), MoveOutcome::Rejected(MoveRejection::AlreadyOccupied));
        assert_eq!(engine.current_state(), before);
    }

    #[test]
    fn test_event_log_counts_survive_reset() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[0, 0, 3, 1, 4, 2]);
        engine.reset();

        let log = engine.event_log();
        assert_eq!(log.get_event_count_by_type(GameEventType::MoveMade), 5);
        assert_eq!(log.get_event_count_by_type(GameEventType::MoveRejected), 1);
        assert_eq!(log.get_event_count_by_type(GameEventType::GameWon), 1);
        assert_eq!(log.get_event_count_by_type(GameEventType::GameReset), 1);
        assert_eq!(log.get_event_count(), 8);
    }

    #[test]
    fn test_reset() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[0, 3, 1, 4, 2]);
        assert!(engine.is_over());

        engine.reset();
        let state = engine.current_state();
        assert_eq!(state.board, Board::new());
        assert_eq!(state.turn, Player::X);
        assert_eq!(state.result, GameResult::InProgress);

        // Mid-game reset puts X back on turn as well.
        engine.attempt_move(4);
        engine.reset();
        assert_eq!(engine.turn(), Player::X);
        assert_eq!(engine.attempt_move(4), MoveOutcome::Continued);
    }

    #[test]
    fn test_current_state_does_not_mutate() {
        let mut engine = GameEngine::new();
        engine.attempt_move(4);

        let first = engine.current_state();
        let second = engine.current_state();
        assert_eq!(first, second);
        assert_eq!(engine.turn(), Player::O);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_index_panics() {
        let mut engine = GameEngine::new();
        engine.attempt_move(9);
    }

    #[test]
    fn test_handlers_receive_events() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut engine = GameEngine::new();
        engine.add_handler(Box::new(Recorder(seen.clone())));

        play(&mut engine, &[0, 0, 3, 1, 4, 2]);
        engine.reset();

        assert_eq!(
            *seen.borrow(),
            vec![
                GameEventType::MoveMade,
                GameEventType::MoveRejected,
                GameEventType::MoveMade,
                GameEventType::MoveMade,
                GameEventType::MoveMade,
                GameEventType::MoveMade,
                GameEventType::GameWon,
                GameEventType::GameReset,
            ]
        );
    }
}

pub mod board;
pub mod engine;
pub mod events;

pub use board::{Board, Cell, GameResult, Player, CELL_COUNT, LINES};
pub use engine::{GameEngine, GameSnapshot, MoveOutcome, MoveRejection};
pub use events::{EventLogger, GameEvent, GameEventHandler, GameEventType};
